//! Viewport breakpoint rule that decides where the rope hangs from.

use crate::float::Float;
use crate::vec::Vec2;
use serde::{Deserialize, Serialize};

/// Size of the host viewport in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport<F: Float> {
    pub width: F,
    pub height: F,
}

impl<F: Float> Viewport<F> {
    pub fn new(width: F, height: F) -> Self {
        Viewport { width, height }
    }
}

/// Two anchor placements split at a width breakpoint.
///
/// Narrow viewports centre the rope; wide ones push it to the left quarter so the
/// card sits beside the page content. Anchors sit above the top edge (negative y)
/// so the rope enters from off-screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorLayout<F: Float> {
    /// Widths up to and including this use the narrow placement. Default: 995.
    pub breakpoint: F,
    /// Horizontal anchor as a fraction of width, narrow layout. Default: 0.5.
    pub narrow_x_fraction: F,
    /// Anchor height, narrow layout. Default: -80.
    pub narrow_y: F,
    /// Horizontal anchor as a fraction of width, wide layout. Default: 0.25.
    pub wide_x_fraction: F,
    /// Anchor height, wide layout. Default: -104.
    pub wide_y: F,
}

impl<F: Float> AnchorLayout<F> {
    pub fn new() -> Self {
        AnchorLayout {
            breakpoint: F::from_f64(995.0),
            narrow_x_fraction: F::half(),
            narrow_y: F::from_f64(-80.0),
            wide_x_fraction: F::from_f64(0.25),
            wide_y: F::from_f64(-104.0),
        }
    }

    /// Set the breakpoint width.
    pub fn with_breakpoint(mut self, breakpoint: F) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    /// Set the narrow placement.
    pub fn with_narrow(mut self, x_fraction: F, y: F) -> Self {
        self.narrow_x_fraction = x_fraction;
        self.narrow_y = y;
        self
    }

    /// Set the wide placement.
    pub fn with_wide(mut self, x_fraction: F, y: F) -> Self {
        self.wide_x_fraction = x_fraction;
        self.wide_y = y;
        self
    }

    /// Anchor position for a viewport.
    pub fn origin_for(&self, viewport: Viewport<F>) -> Vec2<F> {
        if viewport.width <= self.breakpoint {
            Vec2::new(viewport.width * self.narrow_x_fraction, self.narrow_y)
        } else {
            Vec2::new(viewport.width * self.wide_x_fraction, self.wide_y)
        }
    }
}

impl<F: Float> Default for AnchorLayout<F> {
    fn default() -> Self {
        Self::new()
    }
}
