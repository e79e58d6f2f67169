//! Step observer trait for watching the rope solve a frame.

/// Hooks into one simulation frame.
///
/// Implement this to debug or profile the solver. All methods default to no-ops,
/// so observers only override what they care about.
pub trait StepObserver {
    /// Called after the free joints have been integrated (skipped while dragging).
    fn on_integrate(&mut self) {}

    /// Called after each relaxation pass over all segments.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called when a segment collapsed to zero length and its correction was skipped.
    fn on_degenerate_segment(&mut self, _index: usize) {}

    /// Called when the frame is fully solved.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
