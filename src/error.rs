//! Error types for physics operations.

use core::fmt;

/// Errors that can occur while creating, storing or updating solids.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// The solid's own state cannot be integrated (e.g. mass is zero).
    InvalidState(&'static str),
    /// A caller-supplied value is out of range (e.g. a negative time step).
    InvalidArgument(&'static str),
    /// Backing storage for a new solid could not be reserved.
    AllocationFailed,
    /// The handle refers to a solid that has been removed.
    StaleHandle { index: usize, generation: u32 },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidState(reason) => write!(f, "invalid solid state: {}", reason),
            PhysicsError::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
            PhysicsError::AllocationFailed => write!(f, "could not allocate storage for solid"),
            PhysicsError::StaleHandle { index, generation } => {
                write!(f, "solid handle {}v{} is no longer valid", index, generation)
            }
        }
    }
}

impl core::error::Error for PhysicsError {}
