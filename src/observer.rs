//! Update observer trait for monitoring integration progress.

/// Trait for observing solid updates.
///
/// Implement this trait to monitor integrator progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait UpdateObserver<F> {
    /// Called once the heading has been advanced and normalized.
    fn on_heading(&mut self, _heading: F) {}

    /// Called after each force-driven substep of length `h`.
    fn on_substep(&mut self, _index: usize, _h: F) {}

    /// Called when an update is fully committed. `substeps` is 0 when no
    /// force was applied and the position was advanced in one linear move.
    fn on_update_complete(&mut self, _substeps: usize) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpObserver;

impl<F> UpdateObserver<F> for NoOpObserver {}
