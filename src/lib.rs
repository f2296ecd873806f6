//! Kinematic integration for 2D rigid bodies in games.
//!
//! `kinema` advances point masses under a constant applied force and a
//! kinematic heading rate, once per tick of a host game loop. The host owns
//! the loop and the force lifecycle; this crate owns the arithmetic.
//!
//! # Features
//!
//! - **Dual-form vectors**: `Vector2d` keeps cartesian and polar form in sync
//! - **Adaptive substeps**: Ticks are split into steps no longer than a
//!   configurable threshold, each solved in closed form
//! - **Pluggable integrators**: RK4 by default, semi-implicit Euler on request
//! - **Checked updates**: Bad mass or time steps are rejected before any state
//!   changes
//! - **Populations**: `SolidSet` with generational handles, optionally stepped
//!   in parallel (`parallel` feature)
//! - **Observable**: Monitor updates via the `UpdateObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use kinema::{Solid, Vector2d};
//!
//! let mut ship: Solid<f64> = Solid::new(2.0, None, None)?;
//! ship.apply_force(Vector2d::from_cartesian(4.0, 0.0));
//! ship.update(1.0)?;
//! assert!((ship.position.x() - 1.0).abs() < 1e-9);
//! assert!((ship.velocity.x() - 2.0).abs() < 1e-9);
//! # Ok::<(), kinema::PhysicsError>(())
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vector;
pub mod solid;
pub mod integrator;
pub mod world;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vector::Vector2d;
pub use solid::Solid;
pub use integrator::{Integrate, Integrator, Rk4Integrator, EulerIntegrator};
pub use world::{SolidSet, SolidHandle};
pub use config::IntegratorConfig;
pub use observer::{UpdateObserver, NoOpObserver};
pub use error::PhysicsError;
