//! Read-only view of the rope handed to whatever draws it.

use crate::chain::ChainState;
use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// One frame's worth of drawing data.
#[derive(Clone, Debug, PartialEq)]
pub struct Projection<F: Float> {
    /// Joint positions, anchor first; draw as a polyline.
    pub points: AllocVec<Vec2<F>>,
    /// Where the card is centred.
    pub end: Vec2<F>,
    /// Card rotation in degrees; 0 when the last segment hangs straight down.
    pub angle_degrees: F,
}

/// Host-side consumer of projections (canvas, DOM transform, test recorder).
pub trait RenderSink<F: Float> {
    fn render(&mut self, frame: &Projection<F>);
}

/// Snapshot the rope for drawing.
pub fn project<F: Float>(chain: &ChainState<F>) -> Projection<F> {
    let (prev, end) = chain.end_segment();
    Projection {
        points: chain.positions(),
        end,
        angle_degrees: end_angle_degrees(prev, end),
    }
}

/// Rotation of the card hanging below `prev` at `end`.
pub fn end_angle_degrees<F: Float>(prev: Vec2<F>, end: Vec2<F>) -> F {
    (end - prev).angle().to_degrees() - F::from_f64(90.0)
}
