//! The two constraints holding the rope together: the anchor pin and the segment length.

use crate::float::Float;
use crate::point::Point;
use crate::vec::Vec2;

/// Distances below this are treated as a collapsed segment.
const DEGENERATE_EPSILON: f64 = 1e-10;

/// Pins one joint to a fixed position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorConstraint<F: Float> {
    pub joint: usize,
    pub position: Vec2<F>,
}

impl<F: Float> AnchorConstraint<F> {
    pub fn new(joint: usize, position: Vec2<F>) -> Self {
        AnchorConstraint { joint, position }
    }

    /// Only the position is moved; `previous` is left as is, matching a hard pin.
    pub fn solve(&self, points: &mut [Point<F>]) {
        points[self.joint].position = self.position;
    }
}

/// Keeps joints `index` and `index + 1` at `rest_length`.
///
/// Corrections are split evenly, except that the anchor joint never moves, the card
/// joint takes `1 / end_mass` of its share, and a kinematic card joint takes none.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentConstraint<F: Float> {
    pub index: usize,
    pub rest_length: F,
}

/// Outcome of solving one segment once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentSolve {
    Corrected,
    /// Both joints sat on top of each other; nothing was moved.
    Degenerate,
}

impl<F: Float> SegmentConstraint<F> {
    pub fn new(index: usize, rest_length: F) -> Self {
        SegmentConstraint { index, rest_length }
    }

    pub fn solve(&self, points: &mut [Point<F>], end_mass: F, kinematic_end: bool) -> SegmentSolve {
        let a = self.index;
        let b = a + 1;
        let last = points.len() - 1;

        let delta = points[b].position - points[a].position;
        let dist = delta.length();
        if !dist.is_finite() || dist.is_near_zero(F::from_f64(DEGENERATE_EPSILON)) {
            return SegmentSolve::Degenerate;
        }

        let diff = self.rest_length - dist;
        let correction = delta.scale(diff / dist / F::two());

        if a != 0 {
            points[a].position -= correction;
        }
        if b != last {
            points[b].position += correction;
        } else if !kinematic_end {
            points[b].position += correction.scale(F::one() / end_mass);
        }
        SegmentSolve::Corrected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn line(ys: &[f64]) -> alloc::vec::Vec<Point<f64>> {
        ys.iter().map(|&y| Point::at_rest(Vec2::new(0.0, y))).collect()
    }

    #[test]
    fn anchor_moves_only_position() {
        let mut points = vec![Point { position: Vec2::new(5.0f32, 5.0), previous: Vec2::new(4.0, 4.0) }];
        AnchorConstraint::new(0, Vec2::new(1.0, 2.0)).solve(&mut points);
        assert_eq!(points[0].position, Vec2::new(1.0, 2.0));
        assert_eq!(points[0].previous, Vec2::new(4.0, 4.0));
    }

    #[test]
    fn interior_pair_splits_correction() {
        let mut points = line(&[0.0, 10.0, 24.0, 30.0]);
        SegmentConstraint::new(1, 10.0).solve(&mut points, 4.0, false);
        // Stretched by 4: each side moves 2 towards the other.
        assert!((points[1].position.y - 12.0).abs() < 1e-12);
        assert!((points[2].position.y - 22.0).abs() < 1e-12);
    }

    #[test]
    fn anchor_side_never_moves() {
        let mut points = line(&[0.0, 14.0, 24.0]);
        SegmentConstraint::new(0, 10.0).solve(&mut points, 4.0, false);
        assert_eq!(points[0].position.y, 0.0);
        assert!((points[1].position.y - 12.0).abs() < 1e-12);
    }

    #[test]
    fn heavy_end_takes_reduced_share() {
        let mut points = line(&[0.0, 10.0, 28.0]);
        SegmentConstraint::new(1, 10.0).solve(&mut points, 4.0, false);
        // Half correction is 4; interior joint takes all of it, the card a quarter.
        assert!((points[1].position.y - 14.0).abs() < 1e-12);
        assert!((points[2].position.y - 27.0).abs() < 1e-12);
    }

    #[test]
    fn kinematic_end_is_authoritative() {
        let mut points = line(&[0.0, 10.0, 28.0]);
        SegmentConstraint::new(1, 10.0).solve(&mut points, 4.0, true);
        assert_eq!(points[2].position.y, 28.0);
        assert!((points[1].position.y - 14.0).abs() < 1e-12);
    }

    #[test]
    fn collapsed_segment_is_skipped() {
        let mut points = line(&[0.0, 5.0, 5.0]);
        let outcome = SegmentConstraint::new(1, 10.0).solve(&mut points, 4.0, false);
        assert_eq!(outcome, SegmentSolve::Degenerate);
        assert_eq!(points[1].position.y, 5.0);
        assert_eq!(points[2].position.y, 5.0);
    }
}
