//! The frame loop: one owned value holding config, rope and input state.

use crate::chain::ChainState;
use crate::config::ChainConfig;
use crate::error::ConfigError;
use crate::float::Float;
use crate::input::{InputController, InputModality, InteractionState, PointerCapture};
use crate::integrator::integrate;
use crate::layout::{AnchorLayout, Viewport};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::projector::{project, Projection, RenderSink};
use crate::solver::satisfy_constraints;
use crate::vec::Vec2;

/// A card hanging from a rope, plus everything needed to step and drive it.
///
/// The host calls [`tick`](Self::tick) once per display refresh and forwards
/// pointer, orientation and resize events in between. Nothing here schedules
/// itself or touches a UI toolkit.
#[derive(Clone, Debug)]
pub struct Simulation<F: Float> {
    config: ChainConfig<F>,
    layout: AnchorLayout<F>,
    viewport: Viewport<F>,
    chain: ChainState<F>,
    input: InputController<F>,
}

impl<F: Float> Simulation<F> {
    /// Validate `config`, place the anchor for `viewport` and hang the rope.
    ///
    /// `config.origin` is overwritten by the layout.
    pub fn new(
        config: ChainConfig<F>,
        layout: AnchorLayout<F>,
        viewport: Viewport<F>,
        modality: InputModality,
    ) -> Result<Self, ConfigError> {
        let config = config.with_origin(layout.origin_for(viewport));
        config.validate()?;
        log::debug!(
            "simulation created: {} joints, {:?} long, {:?} input",
            config.joint_count,
            config.total_length,
            modality,
        );
        let chain = ChainState::new(&config);
        Ok(Simulation {
            config,
            layout,
            viewport,
            chain,
            input: InputController::new(modality),
        })
    }

    /// Default tuning and layout.
    pub fn with_defaults(viewport: Viewport<F>, modality: InputModality) -> Result<Self, ConfigError> {
        Self::new(ChainConfig::default(), AnchorLayout::default(), viewport, modality)
    }

    /// Advance one frame and return what to draw.
    pub fn tick(&mut self) -> Projection<F> {
        self.tick_with(&mut NoOpStepObserver)
    }

    /// Advance one frame, reporting solver progress to `observer`.
    pub fn tick_with<O: StepObserver>(&mut self, observer: &mut O) -> Projection<F> {
        self.step(observer);
        self.projection()
    }

    /// Advance one frame and hand the result straight to `sink`.
    pub fn tick_into<S: RenderSink<F>>(&mut self, sink: &mut S) {
        let frame = self.tick();
        sink.render(&frame);
    }

    fn step<O: StepObserver>(&mut self, observer: &mut O) {
        let interaction = self.input.state();
        if !interaction.is_dragging() {
            integrate(&mut self.chain, &self.config, interaction);
            observer.on_integrate();
        }
        satisfy_constraints(&mut self.chain, &self.config, interaction, observer);
        observer.on_step_complete();
    }

    /// Re-anchor for a new viewport and restart the rope from a straight hang.
    ///
    /// Returns the fresh projection so the host can redraw before the next tick.
    pub fn resize(&mut self, viewport: Viewport<F>) -> Projection<F> {
        self.viewport = viewport;
        self.config.origin = self.layout.origin_for(viewport);
        self.chain.reset(&self.config);
        log::debug!(
            "viewport resized to {:?}x{:?}, anchor at ({:?}, {:?})",
            viewport.width,
            viewport.height,
            self.config.origin.x,
            self.config.origin.y,
        );
        self.projection()
    }

    pub fn on_pointer_down(&mut self, pointer: Vec2<F>, pointer_id: i32) -> PointerCapture {
        self.input.pointer_down(&self.chain, pointer, pointer_id)
    }

    pub fn on_pointer_move(&mut self, pointer: Vec2<F>, pointer_id: i32) -> PointerCapture {
        self.input.pointer_move(&mut self.chain, &self.config, pointer, pointer_id)
    }

    pub fn on_pointer_up(&mut self, pointer_id: i32) -> PointerCapture {
        self.input.pointer_up(&mut self.chain, &self.config, pointer_id)
    }

    pub fn on_pointer_cancel(&mut self, pointer_id: i32) -> PointerCapture {
        self.input.pointer_cancel(pointer_id)
    }

    pub fn on_orientation(&mut self, beta: F, gamma: F) {
        self.input.orientation(&self.config, beta, gamma);
    }

    /// Current drawing data without stepping.
    pub fn projection(&self) -> Projection<F> {
        project(&self.chain)
    }

    pub fn chain(&self) -> &ChainState<F> {
        &self.chain
    }

    pub fn config(&self) -> &ChainConfig<F> {
        &self.config
    }

    pub fn layout(&self) -> &AnchorLayout<F> {
        &self.layout
    }

    pub fn viewport(&self) -> Viewport<F> {
        self.viewport
    }

    pub fn interaction(&self) -> &InteractionState<F> {
        self.input.state()
    }

    pub fn origin(&self) -> Vec2<F> {
        self.config.origin
    }
}
