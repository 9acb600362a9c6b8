#![cfg(target_arch = "wasm32")]
//! wasm-bindgen surface of the water drop avatar.
//!
//! The page owns the WebGL scene. Each frame it reads the displaced vertex
//! buffers, tint, scale and bob offset from a `WaterDrop` and applies them to
//! its mesh; the narrative layer calls `applyMood` when a cue fires.

use droplet_core::{Appearance, DeformerParams, Mood, NoiseField, SurfaceDeformer, Vertex};
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod frame;

use frame::FrameLoop;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::CONSOLE_LOG_LEVEL).ok();
    log::info!("droplet-web starting");
    Ok(())
}

/// Hide the page's loading indicator once the avatar is ready.
#[wasm_bindgen(js_name = markLoaded)]
pub fn mark_loaded(element_id: Option<String>) {
    let id = element_id.as_deref().unwrap_or(constants::LOADING_ELEMENT_ID);
    if let Some(document) = dom::window_document() {
        if !dom::hide_element(&document, id) {
            log::warn!("loading element #{id} not found");
        }
    }
}

#[inline]
fn vec3_to_vec(v: Vec3) -> Vec<f32> {
    v.to_array().to_vec()
}

#[wasm_bindgen]
pub struct WaterDrop {
    deformer: Rc<RefCell<SurfaceDeformer>>,
    epoch: Instant,
    frame_loop: Option<FrameLoop>,
    vertex_scratch: Vec<Vertex>,
}

#[wasm_bindgen]
impl WaterDrop {
    /// Build the avatar. Without a seed the noise table comes from the
    /// browser's random source, so every page load moves differently.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u32>) -> WaterDrop {
        let noise = match seed {
            Some(s) => NoiseField::from_seed(s as u64),
            None => NoiseField::from_entropy(),
        };
        let deformer = SurfaceDeformer::new(DeformerParams::default(), noise);
        log::info!(
            "water drop ready: vertices={} triangles={}",
            deformer.base_mesh().vertex_count(),
            deformer.base_mesh().triangle_count()
        );
        WaterDrop {
            deformer: Rc::new(RefCell::new(deformer)),
            epoch: Instant::now(),
            frame_loop: None,
            vertex_scratch: Vec::new(),
        }
    }

    /// Advance to the current page time.
    pub fn tick(&self) {
        self.deformer
            .borrow_mut()
            .advance(frame::elapsed_ms(self.epoch));
    }

    /// Advance to an explicit host time in milliseconds.
    #[wasm_bindgen(js_name = tickAt)]
    pub fn tick_at(&self, now_ms: f64) {
        self.deformer.borrow_mut().advance(now_ms);
    }

    /// Drive `tick` from `requestAnimationFrame`, calling `on_frame` after
    /// each update so the host can copy buffers and render.
    pub fn run(&mut self, on_frame: js_sys::Function) -> Result<(), JsValue> {
        if self.frame_loop.as_ref().is_some_and(FrameLoop::is_running) {
            return Err(JsValue::from_str("frame loop already running"));
        }
        let frame_loop = FrameLoop::start(self.deformer.clone(), self.epoch, on_frame)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.frame_loop = Some(frame_loop);
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(frame_loop) = self.frame_loop.take() {
            frame_loop.stop();
        }
    }

    /// Start a mood pulse: `"happy"`, `"sad"` or `"excited"`.
    #[wasm_bindgen(js_name = applyMood)]
    pub fn apply_mood(&self, kind: &str) -> Result<(), JsValue> {
        match self.deformer.borrow_mut().apply_mood_named(kind) {
            Ok(mood) => {
                log::info!("mood: {mood}");
                Ok(())
            }
            Err(e) => {
                log::warn!("{e}");
                Err(JsValue::from_str(&e.to_string()))
            }
        }
    }

    #[wasm_bindgen(getter, js_name = activeMood)]
    pub fn active_mood(&self) -> Option<String> {
        self.deformer
            .borrow()
            .active_mood()
            .map(|m: Mood| m.as_str().to_string())
    }

    #[wasm_bindgen(getter, js_name = isSettled)]
    pub fn is_settled(&self) -> bool {
        self.deformer.borrow().is_settled()
    }

    /// Flat xyz positions of the displaced mesh.
    pub fn positions(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.deformer.borrow().mesh().position_floats())
    }

    /// Flat xyz normals matching `positions`.
    pub fn normals(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.deformer.borrow().mesh().normal_floats())
    }

    /// Triangle indices; fixed for the lifetime of the avatar.
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(self.deformer.borrow().indices())
    }

    /// Interleaved position/normal bytes (24 per vertex) for direct upload.
    #[wasm_bindgen(js_name = vertexBytes)]
    pub fn vertex_bytes(&mut self) -> js_sys::Uint8Array {
        self.deformer
            .borrow()
            .write_vertices(&mut self.vertex_scratch);
        js_sys::Uint8Array::from(bytemuck::cast_slice::<Vertex, u8>(&self.vertex_scratch))
    }

    #[wasm_bindgen(getter, js_name = vertexCount)]
    pub fn vertex_count(&self) -> u32 {
        self.deformer.borrow().mesh().len() as u32
    }

    /// RGB material color in [0, 1].
    pub fn tint(&self) -> Vec<f32> {
        vec3_to_vec(self.deformer.borrow().tint())
    }

    /// Per-axis object scale.
    pub fn scale(&self) -> Vec<f32> {
        vec3_to_vec(self.deformer.borrow().scale())
    }

    /// Object position offset from the idle bob.
    pub fn offset(&self) -> Vec<f32> {
        vec3_to_vec(self.deformer.borrow().offset())
    }

    #[wasm_bindgen(getter, js_name = noiseScale)]
    pub fn noise_scale(&self) -> f64 {
        self.deformer.borrow().noise_scale()
    }

    #[wasm_bindgen(setter, js_name = noiseScale)]
    pub fn set_noise_scale(&self, value: f64) {
        self.deformer.borrow_mut().set_noise_scale(value);
    }

    #[wasm_bindgen(getter, js_name = noiseSpeed)]
    pub fn noise_speed(&self) -> f64 {
        self.deformer.borrow().noise_speed()
    }

    #[wasm_bindgen(setter, js_name = noiseSpeed)]
    pub fn set_noise_speed(&self, value: f64) {
        self.deformer.borrow_mut().set_noise_speed(value);
    }

    pub fn appearance(&self) -> HostAppearance {
        HostAppearance::from(Appearance::default())
    }
}

/// Material, light and camera settings for the host scene.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct HostAppearance {
    pub opacity: f32,
    pub metalness: f32,
    pub roughness: f32,
    pub transmission: f32,
    pub clearcoat: f32,
    #[wasm_bindgen(js_name = clearcoatRoughness)]
    pub clearcoat_roughness: f32,
    #[wasm_bindgen(js_name = ambientIntensity)]
    pub ambient_intensity: f32,
    #[wasm_bindgen(js_name = lightIntensity)]
    pub light_intensity: f32,
    #[wasm_bindgen(js_name = lightX)]
    pub light_x: f32,
    #[wasm_bindgen(js_name = lightY)]
    pub light_y: f32,
    #[wasm_bindgen(js_name = lightZ)]
    pub light_z: f32,
    #[wasm_bindgen(js_name = cameraZ)]
    pub camera_z: f32,
    #[wasm_bindgen(js_name = cameraFovDeg)]
    pub camera_fovy_deg: f32,
}

impl From<Appearance> for HostAppearance {
    fn from(a: Appearance) -> Self {
        Self {
            opacity: a.opacity,
            metalness: a.metalness,
            roughness: a.roughness,
            transmission: a.transmission,
            clearcoat: a.clearcoat,
            clearcoat_roughness: a.clearcoat_roughness,
            ambient_intensity: a.ambient_intensity,
            light_intensity: a.directional_intensity,
            light_x: a.directional_position.x,
            light_y: a.directional_position.y,
            light_z: a.directional_position.z,
            camera_z: a.camera_z,
            camera_fovy_deg: a.camera_fovy_deg,
        }
    }
}
