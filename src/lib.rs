//! A card on a rope: Verlet rope simulation with drag, fling and tilt input.
//!
//! `lanyard` hangs a card-like object from a fixed anchor on a short Verlet rope and
//! lets the user grab it, throw it and (on phones) tip it around by tilting the device.
//! It is the simulation core only: the host feeds it pointer, orientation and resize
//! events, calls [`Simulation::tick`] once per display refresh, and draws the
//! returned [`Projection`].
//!
//! # Features
//!
//! - **Verlet integration**: implicit velocity, damping and gravity on the position delta
//! - **Fixed-pass relaxation**: Gauss-Seidel segment constraints with a heavy card end
//! - **Kinematic drag**: the held card follows the pointer within the rope's reach
//! - **Fling**: release momentum handed to the next Verlet step
//! - **Tilt**: device orientation turned into an ambient push on touch devices
//! - **`no_std` compatible**: runs in WASM without a standard library
//!
//! ```
//! use lanyard::{InputModality, Simulation, Vec2, Viewport};
//!
//! let mut sim: Simulation<f32> =
//!     Simulation::with_defaults(Viewport::new(800.0, 600.0), InputModality::Mouse).unwrap();
//! let frame = sim.tick();
//! assert_eq!(frame.points[0], Vec2::new(400.0, -80.0));
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod point;
pub mod config;
pub mod layout;
pub mod chain;
pub mod input;
pub mod integrator;
pub mod constraint;
pub mod solver;
pub mod projector;
pub mod observer;
pub mod simulation;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use point::Point;
pub use config::ChainConfig;
pub use layout::{AnchorLayout, Viewport};
pub use chain::ChainState;
pub use input::{clamp_to_reach, DragPhase, InputController, InputModality, InteractionState, PointerCapture};
pub use integrator::integrate;
pub use constraint::{AnchorConstraint, SegmentConstraint, SegmentSolve};
pub use solver::satisfy_constraints;
pub use projector::{end_angle_degrees, project, Projection, RenderSink};
pub use observer::{NoOpStepObserver, StepObserver};
pub use simulation::Simulation;
pub use error::ConfigError;
