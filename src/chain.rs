//! The rope itself: an ordered run of Verlet joints hanging from the anchor.

use crate::config::ChainConfig;
use crate::float::Float;
use crate::point::Point;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Joint positions of one rope, anchor first, card end last.
#[derive(Clone, Debug, PartialEq)]
pub struct ChainState<F: Float> {
    points: AllocVec<Point<F>>,
}

impl<F: Float> ChainState<F> {
    /// A rope hanging straight down from `config.origin`.
    ///
    /// `config` is expected to pass [`ChainConfig::validate`]; in particular a rope
    /// needs at least two joints for [`end`](Self::end) and the projection to mean
    /// anything. [`Simulation::new`](crate::Simulation::new) enforces this.
    pub fn new(config: &ChainConfig<F>) -> Self {
        let mut chain = ChainState { points: AllocVec::with_capacity(config.joint_count) };
        chain.reset(config);
        chain
    }

    /// Throw away all motion and hang the rope straight down from the anchor again.
    pub fn reset(&mut self, config: &ChainConfig<F>) {
        let segment_length = config.segment_length();
        self.points.clear();
        for i in 0..config.joint_count {
            let offset = segment_length * F::from_usize(i);
            let pos = Vec2::new(config.origin.x, config.origin.y + offset);
            self.points.push(Point::at_rest(pos));
        }
        log::debug!(
            "rope reset: {} joints at ({:?}, {:?})",
            self.points.len(),
            config.origin.x,
            config.origin.y,
        );
    }

    pub fn points(&self) -> &[Point<F>] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [Point<F>] {
        &mut self.points
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.points.iter().map(|p| p.position).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index of the joint carrying the card.
    pub fn last_index(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn point(&self, index: usize) -> &Point<F> {
        &self.points[index]
    }

    pub fn point_mut(&mut self, index: usize) -> &mut Point<F> {
        &mut self.points[index]
    }

    /// The card joint.
    pub fn end(&self) -> &Point<F> {
        &self.points[self.last_index()]
    }

    pub fn end_mut(&mut self) -> &mut Point<F> {
        let last = self.last_index();
        &mut self.points[last]
    }

    /// Positions of the last two joints, `(previous joint, card joint)`.
    pub fn end_segment(&self) -> (Vec2<F>, Vec2<F>) {
        let last = self.last_index();
        let prev = last.saturating_sub(1);
        (self.points[prev].position, self.points[last].position)
    }

    /// Current length of every segment, anchor side first.
    pub fn segment_lengths(&self) -> impl Iterator<Item = F> + '_ {
        self.points
            .windows(2)
            .map(|pair| pair[0].position.distance(pair[1].position))
    }

    /// Worst absolute deviation of any segment from `rest_length`.
    pub fn max_segment_error(&self, rest_length: F) -> F {
        self.segment_lengths()
            .map(|len| (len - rest_length).abs())
            .fold(F::zero(), F::max)
    }
}
