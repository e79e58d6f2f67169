//! Pointer and orientation handling: drag, fling on release, and tilt sway.
//!
//! The controller is a two-state machine (`Idle`, `Dragging`). While dragging, the
//! card joint is kinematic: the pointer dictates its position and the integrator
//! leaves it alone. On release, the last pointer delta is written into the joint's
//! `previous` position so the next Verlet step carries the throw.

use crate::chain::ChainState;
use crate::config::ChainConfig;
use crate::float::Float;
use crate::vec::Vec2;

/// What kind of input the runtime delivers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputModality {
    #[default]
    Mouse,
    /// Touch-capable runtime: stronger fling, orientation sensors honoured.
    Touch,
}

impl InputModality {
    pub fn is_touch(self) -> bool {
        matches!(self, InputModality::Touch)
    }
}

/// Drag state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    /// The card is held by the pointer with this identifier.
    Dragging { pointer_id: i32 },
}

/// Pointer-capture action the host should perform after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerCapture {
    /// Route all further events of this pointer to the card.
    Acquire,
    /// Keep the current capture.
    Hold,
    /// Release the capture.
    Release,
    /// Event did not belong to the active drag; nothing changed.
    Ignored,
}

/// Everything the input side of the simulation remembers between events.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionState<F: Float> {
    pub phase: DragPhase,
    /// Card joint is positioned by the pointer, not the integrator.
    pub kinematic: bool,
    /// Card joint minus pointer offset, captured at drag start.
    pub drag_offset: Vec2<F>,
    /// Pointer displacement over the latest move event.
    pub pointer_velocity: Vec2<F>,
    pub last_pointer: Vec2<F>,
    /// Ambient push from device orientation.
    pub tilt_force: Vec2<F>,
    pub modality: InputModality,
}

impl<F: Float> InteractionState<F> {
    pub fn new(modality: InputModality) -> Self {
        InteractionState {
            phase: DragPhase::Idle,
            kinematic: false,
            drag_offset: Vec2::zero(),
            pointer_velocity: Vec2::zero(),
            last_pointer: Vec2::zero(),
            tilt_force: Vec2::zero(),
            modality,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    fn holds(&self, pointer_id: i32) -> bool {
        self.phase == DragPhase::Dragging { pointer_id }
    }
}

impl<F: Float> Default for InteractionState<F> {
    fn default() -> Self {
        Self::new(InputModality::default())
    }
}

/// Turns host input events into changes of the rope and interaction state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputController<F: Float> {
    state: InteractionState<F>,
}

impl<F: Float> InputController<F> {
    pub fn new(modality: InputModality) -> Self {
        InputController { state: InteractionState::new(modality) }
    }

    pub fn state(&self) -> &InteractionState<F> {
        &self.state
    }

    /// Pointer pressed on the card.
    pub fn pointer_down(
        &mut self,
        chain: &ChainState<F>,
        pointer: Vec2<F>,
        pointer_id: i32,
    ) -> PointerCapture {
        if self.state.is_dragging() {
            log::trace!("pointer {} pressed during an active drag, ignored", pointer_id);
            return PointerCapture::Ignored;
        }
        let s = &mut self.state;
        s.phase = DragPhase::Dragging { pointer_id };
        s.kinematic = true;
        s.drag_offset = pointer - chain.end().position;
        s.pointer_velocity = Vec2::zero();
        s.last_pointer = pointer;
        s.tilt_force = Vec2::zero();
        log::trace!("drag start with pointer {}", pointer_id);
        PointerCapture::Acquire
    }

    /// Pointer moved; drags the card joint if this pointer holds it.
    ///
    /// A non-finite position is dropped and the card stays where it was.
    pub fn pointer_move(
        &mut self,
        chain: &mut ChainState<F>,
        config: &ChainConfig<F>,
        pointer: Vec2<F>,
        pointer_id: i32,
    ) -> PointerCapture {
        if !self.state.holds(pointer_id) || !self.state.kinematic {
            return PointerCapture::Ignored;
        }
        if !pointer.is_finite() {
            log::trace!("non-finite position from pointer {}, move dropped", pointer_id);
            return PointerCapture::Hold;
        }
        let target = clamp_to_reach(pointer - self.state.drag_offset, config.origin, config.total_length);
        chain.end_mut().place(target);

        let s = &mut self.state;
        s.pointer_velocity = pointer - s.last_pointer;
        s.last_pointer = pointer;
        PointerCapture::Hold
    }

    /// Pointer released; lets go of the card and hands it the pointer's momentum.
    pub fn pointer_up(
        &mut self,
        chain: &mut ChainState<F>,
        config: &ChainConfig<F>,
        pointer_id: i32,
    ) -> PointerCapture {
        if !self.state.holds(pointer_id) {
            return PointerCapture::Ignored;
        }
        let multiplier = match self.state.modality {
            InputModality::Touch => config.touch_momentum,
            InputModality::Mouse => config.mouse_momentum,
        };
        let s = &mut self.state;
        s.phase = DragPhase::Idle;
        s.kinematic = false;
        chain.end_mut().set_velocity(s.pointer_velocity.scale(multiplier));
        log::trace!(
            "drag released by pointer {}, fling ({:?}, {:?})",
            pointer_id,
            s.pointer_velocity.x,
            s.pointer_velocity.y,
        );
        PointerCapture::Release
    }

    /// The host aborted the pointer (gesture takeover, lost capture).
    /// The card is let go where it is, without a fling.
    pub fn pointer_cancel(&mut self, pointer_id: i32) -> PointerCapture {
        if !self.state.holds(pointer_id) {
            return PointerCapture::Ignored;
        }
        let s = &mut self.state;
        s.phase = DragPhase::Idle;
        s.kinematic = false;
        s.pointer_velocity = Vec2::zero();
        log::trace!("drag cancelled for pointer {}", pointer_id);
        PointerCapture::Release
    }

    /// Device orientation reading, `beta` front-to-back and `gamma` left-to-right,
    /// both in degrees.
    pub fn orientation(&mut self, config: &ChainConfig<F>, beta: F, gamma: F) {
        if !self.state.modality.is_touch() {
            return;
        }
        if self.state.is_dragging() {
            self.state.tilt_force = Vec2::zero();
            return;
        }
        let limit = F::from_f64(90.0);
        let max_force = config.max_tilt_force();
        let normalized = |angle: F| {
            let angle = if angle.is_finite() { angle } else { F::zero() };
            angle.clamp(-limit, limit) / limit
        };
        self.state.tilt_force = Vec2::new(normalized(gamma) * max_force, normalized(beta) * max_force);
    }
}

/// Pull `target` back onto the circle of radius `reach` around `origin` if it lies outside.
pub fn clamp_to_reach<F: Float>(target: Vec2<F>, origin: Vec2<F>, reach: F) -> Vec2<F> {
    let offset = target - origin;
    let dist = offset.length();
    if dist > reach {
        origin + offset.scale(reach / dist)
    } else {
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hanging() -> (ChainState<f64>, ChainConfig<f64>) {
        let config = ChainConfig::new().with_origin(Vec2::new(0.0, 0.0));
        (ChainState::new(&config), config)
    }

    #[test]
    fn clamp_keeps_targets_inside_reach() {
        let inside = Vec2::new(3.0f64, 4.0);
        assert_eq!(clamp_to_reach(inside, Vec2::zero(), 10.0), inside);
    }

    #[test]
    fn clamp_projects_onto_circle() {
        let clamped = clamp_to_reach(Vec2::new(30.0f64, 40.0), Vec2::new(0.0, 0.0), 10.0);
        assert!((clamped.x - 6.0).abs() < 1e-12);
        assert!((clamped.y - 8.0).abs() < 1e-12);
    }

    #[test]
    fn foreign_pointer_cannot_move_or_release() {
        let (mut chain, config) = hanging();
        let mut input = InputController::new(InputModality::Mouse);
        let grab = chain.end().position;

        assert_eq!(input.pointer_down(&chain, grab, 1), PointerCapture::Acquire);
        assert_eq!(input.pointer_down(&chain, grab, 2), PointerCapture::Ignored);
        assert_eq!(
            input.pointer_move(&mut chain, &config, Vec2::new(50.0, 50.0), 2),
            PointerCapture::Ignored
        );
        assert_eq!(input.pointer_up(&mut chain, &config, 2), PointerCapture::Ignored);
        assert!(input.state().is_dragging());
        assert_eq!(input.pointer_up(&mut chain, &config, 1), PointerCapture::Release);
        assert!(!input.state().is_dragging());
        assert!(!input.state().kinematic);
    }

    #[test]
    fn cancel_releases_without_fling() {
        let (mut chain, config) = hanging();
        let mut input = InputController::new(InputModality::Touch);
        let grab = chain.end().position;
        input.pointer_down(&chain, grab, 7);
        input.pointer_move(&mut chain, &config, grab + Vec2::new(10.0, 0.0), 7);

        assert_eq!(input.pointer_cancel(7), PointerCapture::Release);
        assert_eq!(chain.end().velocity(), Vec2::zero());
        assert_eq!(input.state().pointer_velocity, Vec2::zero());
    }

    #[test]
    fn orientation_ignored_without_touch() {
        let config: ChainConfig<f32> = ChainConfig::new();
        let mut input = InputController::new(InputModality::Mouse);
        input.orientation(&config, 45.0, 45.0);
        assert_eq!(input.state().tilt_force, Vec2::zero());
    }

    #[test]
    fn orientation_clamps_and_scales() {
        let config: ChainConfig<f64> = ChainConfig::new();
        let mut input = InputController::new(InputModality::Touch);
        let max = config.max_tilt_force();

        input.orientation(&config, 180.0, -45.0);
        let tilt = input.state().tilt_force;
        assert!((tilt.x + max / 2.0).abs() < 1e-12);
        assert!((tilt.y - max).abs() < 1e-12);

        input.orientation(&config, f64::NAN, 90.0);
        let tilt = input.state().tilt_force;
        assert!((tilt.x - max).abs() < 1e-12);
        assert_eq!(tilt.y, 0.0);
    }

    #[test]
    fn orientation_zeroed_while_dragging() {
        let (chain, config) = hanging();
        let mut input = InputController::new(InputModality::Touch);
        input.orientation(&config, 30.0, 30.0);
        assert_ne!(input.state().tilt_force, Vec2::zero());

        input.pointer_down(&chain, chain.end().position, 1);
        input.orientation(&config, 30.0, 30.0);
        assert_eq!(input.state().tilt_force, Vec2::zero());
    }
}
