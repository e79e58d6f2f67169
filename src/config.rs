//! Tuning constants for the rope and the input that drives it.

use crate::error::ConfigError;
use crate::float::Float;
use crate::vec::Vec2;
use serde::{Deserialize, Serialize};

/// Configuration for one rope.
///
/// Units are screen pixels per frame; the constants are tuned for look, not physics.
/// `origin` is normally filled in from an [`AnchorLayout`](crate::layout::AnchorLayout)
/// whenever the viewport changes.
///
/// # Builder Pattern
/// ```
/// use lanyard::config::ChainConfig;
/// use lanyard::vec::Vec2;
///
/// let config: ChainConfig<f32> = ChainConfig::new()
///     .with_origin(Vec2::new(0.0, 80.0))
///     .with_joint_count(8)
///     .with_damping(0.99)
///     .with_constraint_iterations(64);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig<F: Float> {
    /// Anchor that joint 0 is pinned to.
    pub origin: Vec2<F>,
    /// Length of the whole rope; also the drag radius around `origin`. Default: 400.
    pub total_length: F,
    /// Number of joints including the anchored one. Default: 8.
    pub joint_count: usize,
    /// Downward pull added to each free joint per step. Default: 1.6.
    pub gravity: F,
    /// Fraction of velocity kept per step. Default: 0.995.
    pub damping: F,
    /// Weight of the card hanging from the last joint. Default: 4.2.
    pub end_mass: F,
    /// Relaxation passes per frame. Default: 64.
    pub constraint_iterations: usize,
    /// Tilt force as a fraction of the card's weight; 0 disables tilt. Default: 0.5.
    pub tilt_sensitivity: F,
    /// Share of the last pointer delta kept on release for touch input. Default: 0.9.
    pub touch_momentum: F,
    /// Share of the last pointer delta kept on release for mouse input. Default: 0.6.
    pub mouse_momentum: F,
}

impl<F: Float> ChainConfig<F> {
    /// Create a config with the default tuning.
    pub fn new() -> Self {
        ChainConfig {
            origin: Vec2::zero(),
            total_length: F::from_f64(400.0),
            joint_count: 8,
            gravity: F::from_f64(1.6),
            damping: F::from_f64(0.995),
            end_mass: F::from_f64(4.2),
            constraint_iterations: 64,
            tilt_sensitivity: F::from_f64(0.5),
            touch_momentum: F::from_f64(0.9),
            mouse_momentum: F::from_f64(0.6),
        }
    }

    /// The stiffer variant: more damping, one release multiplier for every
    /// input type and no tilt.
    pub fn steady() -> Self {
        Self::new()
            .with_damping(F::from_f64(0.99))
            .with_momentum(F::from_f64(0.8), F::from_f64(0.8))
            .with_tilt_sensitivity(F::zero())
    }

    /// Set the anchor position.
    pub fn with_origin(mut self, origin: Vec2<F>) -> Self {
        self.origin = origin;
        self
    }

    /// Set the total rope length.
    pub fn with_total_length(mut self, total_length: F) -> Self {
        self.total_length = total_length;
        self
    }

    /// Set the number of joints.
    pub fn with_joint_count(mut self, joint_count: usize) -> Self {
        self.joint_count = joint_count;
        self
    }

    /// Set gravity.
    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the end mass.
    pub fn with_end_mass(mut self, end_mass: F) -> Self {
        self.end_mass = end_mass;
        self
    }

    /// Set the number of relaxation passes.
    pub fn with_constraint_iterations(mut self, iterations: usize) -> Self {
        self.constraint_iterations = iterations;
        self
    }

    /// Set the tilt sensitivity.
    pub fn with_tilt_sensitivity(mut self, sensitivity: F) -> Self {
        self.tilt_sensitivity = sensitivity;
        self
    }

    /// Set the release multipliers for touch and mouse input.
    pub fn with_momentum(mut self, touch: F, mouse: F) -> Self {
        self.touch_momentum = touch;
        self.mouse_momentum = mouse;
        self
    }

    /// Rest distance between neighbouring joints.
    pub fn segment_length(&self) -> F {
        self.total_length / F::from_usize(self.joint_count.saturating_sub(1).max(1))
    }

    /// Largest tilt force along either axis.
    pub fn max_tilt_force(&self) -> F {
        self.gravity * self.end_mass * self.tilt_sensitivity
    }

    /// Check that the config describes a rope that can be simulated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.joint_count < 2 {
            return Err(ConfigError::TooFewJoints { count: self.joint_count });
        }
        if !self.total_length.is_finite() || self.total_length <= F::zero() {
            return Err(ConfigError::InvalidLength);
        }
        if !(self.damping >= F::zero() && self.damping <= F::one()) {
            return Err(ConfigError::InvalidDamping);
        }
        if !self.end_mass.is_finite() || self.end_mass <= F::zero() {
            return Err(ConfigError::InvalidEndMass);
        }
        if self.constraint_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        let finite = [
            ("origin", self.origin.is_finite()),
            ("gravity", self.gravity.is_finite()),
            ("tilt_sensitivity", self.tilt_sensitivity.is_finite()),
            ("touch_momentum", self.touch_momentum.is_finite()),
            ("mouse_momentum", self.mouse_momentum.is_finite()),
        ];
        for (field, ok) in finite {
            if !ok {
                return Err(ConfigError::NonFinite { field });
            }
        }
        Ok(())
    }
}

impl<F: Float> Default for ChainConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
