use wasm_bindgen::prelude::*;

/// Per-frame perf snapshot. Phase timings are summed over all sub-steps.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) frame_ms: f64,
    pub(super) spawn_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) boundary_ms: f64,
    pub(super) grid_ms: f64,
    pub(super) collisions_ms: f64,
    pub(super) candidate_pairs: u32,
    pub(super) resolved_pairs: u32,
    pub(super) grid_rebuilds: u32,
    pub(super) wall_contacts: u32,
    pub(super) spawned: u32,
    pub(super) particle_count: u32,
    pub(super) substeps: u32,
    pub(super) workers: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn frame_ms(&self) -> f64 { self.frame_ms }
    #[wasm_bindgen(getter)]
    pub fn spawn_ms(&self) -> f64 { self.spawn_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn boundary_ms(&self) -> f64 { self.boundary_ms }
    #[wasm_bindgen(getter)]
    pub fn grid_ms(&self) -> f64 { self.grid_ms }
    #[wasm_bindgen(getter)]
    pub fn collisions_ms(&self) -> f64 { self.collisions_ms }
    #[wasm_bindgen(getter)]
    pub fn candidate_pairs(&self) -> u32 { self.candidate_pairs }
    #[wasm_bindgen(getter)]
    pub fn resolved_pairs(&self) -> u32 { self.resolved_pairs }
    #[wasm_bindgen(getter)]
    pub fn grid_rebuilds(&self) -> u32 { self.grid_rebuilds }
    #[wasm_bindgen(getter)]
    pub fn wall_contacts(&self) -> u32 { self.wall_contacts }
    #[wasm_bindgen(getter)]
    pub fn spawned(&self) -> u32 { self.spawned }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn substeps(&self) -> u32 { self.substeps }
    #[wasm_bindgen(getter)]
    pub fn workers(&self) -> u32 { self.workers }
}
