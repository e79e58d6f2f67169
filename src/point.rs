//! Verlet joints: position-based dynamics with implicit velocity.

use crate::float::Float;
use crate::vec::Vec2;

/// One joint of the rope.
///
/// There is no velocity field: the displacement since the previous step
/// (`position - previous`) is the velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<F: Float> {
    pub position: Vec2<F>,
    pub previous: Vec2<F>,
}

impl<F: Float> Point<F> {
    /// A joint at rest at `position`.
    pub fn at_rest(position: Vec2<F>) -> Self {
        Point { position, previous: position }
    }

    /// Displacement over the last step.
    pub fn velocity(&self) -> Vec2<F> {
        self.position - self.previous
    }

    /// Advance by `velocity`, remembering where the joint was.
    pub fn advance(&mut self, velocity: Vec2<F>) {
        self.previous = self.position;
        self.position += velocity;
    }

    /// Place the joint without giving it any velocity.
    pub fn place(&mut self, position: Vec2<F>) {
        self.position = position;
        self.previous = position;
    }

    /// Rewrite `previous` so the next step continues with `velocity`.
    pub fn set_velocity(&mut self, velocity: Vec2<F>) {
        self.previous = self.position - velocity;
    }
}
