use lanyard::{
    AnchorLayout, ChainConfig, InputModality, PointerCapture, Simulation, Vec2, Viewport,
};
use wasm_bindgen::prelude::*;

// ---- Lanyard Demo ----
//
// The page owns the DOM: it looks up the card and canvas, listens for events,
// calls into this object and applies the returned data. Each pointer handler
// returns the capture action for the page to perform on the card element.

const CAPTURE_IGNORED: u8 = 0;
const CAPTURE_ACQUIRE: u8 = 1;
const CAPTURE_HOLD: u8 = 2;
const CAPTURE_RELEASE: u8 = 3;

fn capture_code(capture: PointerCapture) -> u8 {
    match capture {
        PointerCapture::Ignored => CAPTURE_IGNORED,
        PointerCapture::Acquire => CAPTURE_ACQUIRE,
        PointerCapture::Hold => CAPTURE_HOLD,
        PointerCapture::Release => CAPTURE_RELEASE,
    }
}

fn modality(touch: bool) -> InputModality {
    if touch {
        InputModality::Touch
    } else {
        InputModality::Mouse
    }
}

fn build(
    config: ChainConfig<f32>,
    layout: AnchorLayout<f32>,
    width: f32,
    height: f32,
    touch: bool,
) -> Result<LanyardDemo, JsValue> {
    let sim = Simulation::new(config, layout, Viewport::new(width, height), modality(touch))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(LanyardDemo { sim })
}

#[wasm_bindgen]
pub struct LanyardDemo {
    sim: Simulation<f32>,
}

#[wasm_bindgen]
impl LanyardDemo {
    /// `touch` is whether the page runs on a touch-capable device.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, touch: bool) -> Result<LanyardDemo, JsValue> {
        build(ChainConfig::default(), AnchorLayout::default(), width, height, touch)
    }

    /// Same as the constructor, with tuning read from a JSON `ChainConfig`.
    pub fn with_config(json: &str, width: f32, height: f32, touch: bool) -> Result<LanyardDemo, JsValue> {
        let config: ChainConfig<f32> =
            serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        build(config, AnchorLayout::default(), width, height, touch)
    }

    /// Call once per animation frame.
    pub fn update(&mut self) {
        self.sim.tick();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.sim.resize(Viewport::new(width, height));
    }

    pub fn pointer_down(&mut self, x: f32, y: f32, pointer_id: i32) -> u8 {
        capture_code(self.sim.on_pointer_down(Vec2::new(x, y), pointer_id))
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, pointer_id: i32) -> u8 {
        capture_code(self.sim.on_pointer_move(Vec2::new(x, y), pointer_id))
    }

    pub fn pointer_up(&mut self, pointer_id: i32) -> u8 {
        capture_code(self.sim.on_pointer_up(pointer_id))
    }

    pub fn pointer_cancel(&mut self, pointer_id: i32) -> u8 {
        capture_code(self.sim.on_pointer_cancel(pointer_id))
    }

    /// `deviceorientation` beta/gamma in degrees; pass NaN for missing readings.
    pub fn orientation(&mut self, beta: f32, gamma: f32) {
        self.sim.on_orientation(beta, gamma);
    }

    /// Returns flat [x0, y0, x1, y1, ...] positions
    pub fn positions(&self) -> Vec<f32> {
        let pos = self.sim.chain().positions();
        let mut out = Vec::with_capacity(pos.len() * 2);
        for p in &pos {
            out.push(p.x);
            out.push(p.y);
        }
        out
    }

    /// Returns [x, y, angle_degrees] for placing the card
    pub fn card(&self) -> Vec<f32> {
        let frame = self.sim.projection();
        vec![frame.end.x, frame.end.y, frame.angle_degrees]
    }

    pub fn is_dragging(&self) -> bool {
        self.sim.interaction().is_dragging()
    }

    pub fn joint_count(&self) -> usize {
        self.sim.chain().len()
    }
}
