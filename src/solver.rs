//! Fixed-count Gauss-Seidel relaxation of the rope's constraints.

use crate::chain::ChainState;
use crate::config::ChainConfig;
use crate::constraint::{AnchorConstraint, SegmentConstraint, SegmentSolve};
use crate::float::Float;
use crate::input::InteractionState;
use crate::observer::StepObserver;

/// Pull the rope back to its segment lengths and re-pin the anchor.
///
/// Runs exactly `config.constraint_iterations` passes, walking the segments in
/// order and applying each correction immediately. There is no convergence check:
/// the pass count bounds the cost of a frame, and the slight stretch left under
/// fast motion is part of the look.
pub fn satisfy_constraints<F: Float, O: StepObserver>(
    chain: &mut ChainState<F>,
    config: &ChainConfig<F>,
    interaction: &InteractionState<F>,
    observer: &mut O,
) {
    let points = chain.points_mut();
    if points.is_empty() {
        return;
    }
    AnchorConstraint::new(0, config.origin).solve(points);

    let rest_length = config.segment_length();
    let segments = points.len().saturating_sub(1);

    for iteration in 0..config.constraint_iterations {
        for index in 0..segments {
            let outcome = SegmentConstraint::new(index, rest_length)
                .solve(points, config.end_mass, interaction.kinematic);
            if outcome == SegmentSolve::Degenerate {
                observer.on_degenerate_segment(index);
            }
        }
        observer.on_constraint_iteration(iteration);
    }
}
