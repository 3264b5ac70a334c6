use wasm_bindgen::prelude::*;

use crate::core::{ConfigError, Vec2};
use crate::domain::{SimulationSettings, SpawnSettings};

use super::perf_stats::PerfStats;
use super::SimulationCore;

fn to_js(err: ConfigError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Render buffer layout snapshot. Pointers are byte offsets into wasm memory
/// and are only valid until the next call that can grow the particle store.
#[wasm_bindgen]
pub struct AbiLayout {
    positions_ptr: u32,
    positions_len_elements: u32,
    positions_len_bytes: u32,
    prev_positions_ptr: u32,
    prev_positions_len_elements: u32,
    prev_positions_len_bytes: u32,
    temperature_ptr: u32,
    temperature_len_elements: u32,
    temperature_len_bytes: u32,
    mass_ptr: u32,
    mass_len_elements: u32,
    mass_len_bytes: u32,
}

#[wasm_bindgen]
impl AbiLayout {
    #[wasm_bindgen(getter)]
    pub fn positions_ptr(&self) -> u32 { self.positions_ptr }
    #[wasm_bindgen(getter)]
    pub fn positions_len_elements(&self) -> u32 { self.positions_len_elements }
    #[wasm_bindgen(getter)]
    pub fn positions_len_bytes(&self) -> u32 { self.positions_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn prev_positions_ptr(&self) -> u32 { self.prev_positions_ptr }
    #[wasm_bindgen(getter)]
    pub fn prev_positions_len_elements(&self) -> u32 { self.prev_positions_len_elements }
    #[wasm_bindgen(getter)]
    pub fn prev_positions_len_bytes(&self) -> u32 { self.prev_positions_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn temperature_ptr(&self) -> u32 { self.temperature_ptr }
    #[wasm_bindgen(getter)]
    pub fn temperature_len_elements(&self) -> u32 { self.temperature_len_elements }
    #[wasm_bindgen(getter)]
    pub fn temperature_len_bytes(&self) -> u32 { self.temperature_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn mass_ptr(&self) -> u32 { self.mass_ptr }
    #[wasm_bindgen(getter)]
    pub fn mass_len_elements(&self) -> u32 { self.mass_len_elements }
    #[wasm_bindgen(getter)]
    pub fn mass_len_bytes(&self) -> u32 { self.mass_len_bytes }
}

#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Arena of `width` x `height` centred on the origin.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, particle_radius: f32, substeps: u32) -> Result<Simulation, JsValue> {
        let settings = SimulationSettings {
            width,
            height,
            particle_radius,
            substeps,
            ..SimulationSettings::default()
        };
        let core = SimulationCore::new(settings).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = fromSettingsJson)]
    pub fn from_settings_json(json: &str) -> Result<Simulation, JsValue> {
        let settings = SimulationSettings::from_json(json).map_err(to_js)?;
        let core = SimulationCore::new(settings).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn particle_radius(&self) -> f32 { self.core.particle_radius() }

    #[wasm_bindgen(getter)]
    pub fn substeps(&self) -> u32 { self.core.substeps() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn active_stream_count(&self) -> u32 { self.core.active_stream_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.bounds().width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.bounds().height() }

    // === Stepping ===

    pub fn update(&mut self, frame_dt: f32) {
        self.core.update(frame_dt);
    }

    // === Population ===

    pub fn add_particle(&mut self, x: f32, y: f32, vx: f32, vy: f32, mass: f32) {
        self.core.add_particle(Vec2::new(x, y), Vec2::new(vx, vy), Vec2::ZERO, mass);
    }

    pub fn add_bulk_particles(&mut self, count: u32, mass: f32) {
        self.core.add_bulk_particles(count, Vec2::ZERO, Vec2::ZERO, mass);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_particle_stream(
        &mut self,
        count: u32,
        spawn_rate: f32,
        vx: f32,
        vy: f32,
        mass: f32,
        offset_x: f32,
        offset_y: f32,
    ) {
        self.core.add_particle_stream(count, spawn_rate, Vec2::new(vx, vy), mass, Vec2::new(offset_x, offset_y));
    }

    pub fn clear_particles(&mut self) {
        self.core.clear_particles();
    }

    pub fn clear_streams(&mut self) {
        self.core.clear_streams();
    }

    pub fn reset(&mut self, particle_radius: f32) {
        self.core.reset(particle_radius);
    }

    /// Reset and repopulate from a spawn settings JSON object.
    #[wasm_bindgen(js_name = resetWithJson)]
    pub fn reset_with_json(&mut self, json: &str) -> Result<(), JsValue> {
        let spawn = SpawnSettings::from_json(json).map_err(to_js)?;
        self.core.reset_with(spawn);
        Ok(())
    }

    // === Configuration ===

    pub fn load_physics_constants(&mut self, json: &str) -> Result<(), JsValue> {
        self.core.load_physics_constants_json(json).map_err(to_js)
    }

    pub fn physics_constants_json(&self) -> String {
        self.core.physics_constants_json()
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) -> Result<(), JsValue> {
        self.core.set_gravity(Vec2::new(x, y)).map_err(to_js)
    }

    pub fn set_substeps(&mut self, substeps: u32) {
        self.core.set_substeps(substeps);
    }

    pub fn set_workers(&mut self, workers: u32) {
        self.core.set_workers(workers);
    }

    pub fn set_arena_size(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.core.set_arena_size(width, height).map_err(to_js)
    }

    pub fn set_uniform_mass(&mut self, mass: f32) -> Result<(), JsValue> {
        self.core.set_uniform_mass(mass).map_err(to_js)
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }

    // === Interaction / view ===

    pub fn set_pointer_position(&mut self, x: f32, y: f32) {
        self.core.set_pointer_position(Vec2::new(x, y));
    }

    pub fn set_primary_pressed(&mut self, pressed: bool) {
        self.core.set_primary_pressed(pressed);
    }

    pub fn set_secondary_pressed(&mut self, pressed: bool) {
        self.core.set_secondary_pressed(pressed);
    }

    pub fn set_center_pull(&mut self, active: bool) {
        self.core.set_center_pull(active);
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.core.toggle_pause()
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.core.set_paused(paused);
    }

    #[wasm_bindgen(getter)]
    pub fn paused(&self) -> bool { self.core.is_paused() }

    pub fn move_camera(&mut self, dx: f32, dy: f32) {
        self.core.move_camera(Vec2::new(dx, dy));
    }

    pub fn set_camera_position(&mut self, x: f32, y: f32) {
        self.core.set_camera_position(Vec2::new(x, y));
    }

    #[wasm_bindgen(getter)]
    pub fn camera_x(&self) -> f32 { self.core.camera_position().x }

    #[wasm_bindgen(getter)]
    pub fn camera_y(&self) -> f32 { self.core.camera_position().y }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.core.set_zoom(zoom);
    }

    pub fn zoom_by(&mut self, factor: f32) {
        self.core.zoom_by(factor);
    }

    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> f32 { self.core.zoom() }

    // === Render buffers ===

    /// Interleaved x,y f32 pairs
    pub fn positions_ptr(&self) -> *const f32 {
        self.core.positions_ptr()
    }

    pub fn prev_positions_ptr(&self) -> *const f32 {
        self.core.prev_positions_ptr()
    }

    pub fn temperature_ptr(&self) -> *const f32 {
        self.core.temperature_ptr()
    }

    pub fn mass_ptr(&self) -> *const f32 {
        self.core.mass_ptr()
    }

    pub fn positions_len(&self) -> usize {
        self.core.positions_len_elements()
    }

    pub fn positions_byte_len(&self) -> usize {
        self.core.positions_len_bytes()
    }

    pub fn temperature_len(&self) -> usize {
        self.core.particle_count()
    }

    pub fn temperature_byte_len(&self) -> usize {
        self.core.scalar_len_bytes()
    }

    pub fn abi_layout(&self) -> AbiLayout {
        let data = self.core.abi_layout_data();
        AbiLayout {
            positions_ptr: data.positions_ptr as u32,
            positions_len_elements: data.positions_len_elements as u32,
            positions_len_bytes: data.positions_len_bytes as u32,
            prev_positions_ptr: data.prev_positions_ptr as u32,
            prev_positions_len_elements: data.prev_positions_len_elements as u32,
            prev_positions_len_bytes: data.prev_positions_len_bytes as u32,
            temperature_ptr: data.temperature_ptr as u32,
            temperature_len_elements: data.temperature_len_elements as u32,
            temperature_len_bytes: data.temperature_len_bytes as u32,
            mass_ptr: data.mass_ptr as u32,
            mass_len_elements: data.mass_len_elements as u32,
            mass_len_bytes: data.mass_len_bytes as u32,
        }
    }
}

impl Simulation {
    /// Wrap an already-built core (native callers that handle `ConfigError` themselves).
    pub fn from_core(core: SimulationCore) -> Self {
        Self { core }
    }

    /// Borrow the Rust-side core (native callers and tests).
    pub fn core(&self) -> &SimulationCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut SimulationCore {
        &mut self.core
    }
}
