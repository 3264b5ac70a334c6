use crate::core::Vec2;
use crate::systems::physics::POINTER_SENTINEL;

use super::SimulationCore;

/// Zoom is kept inside this range so the camera speed stays finite.
const MIN_ZOOM: f32 = 0.01;
const MAX_ZOOM: f32 = 100.0;

pub(super) fn set_pointer_position(sim: &mut SimulationCore, position: Vec2) {
    sim.interaction.pointer = if sim.bounds.contains(position) {
        position
    } else {
        POINTER_SENTINEL
    };
}

pub(super) fn set_primary_pressed(sim: &mut SimulationCore, pressed: bool) {
    sim.interaction.primary = pressed;
}

pub(super) fn set_secondary_pressed(sim: &mut SimulationCore, pressed: bool) {
    sim.interaction.secondary = pressed;
}

pub(super) fn set_center_pull(sim: &mut SimulationCore, active: bool) {
    sim.interaction.center_pull = active;
}

pub(super) fn toggle_pause(sim: &mut SimulationCore) -> bool {
    sim.paused = !sim.paused;
    crate::console_log!("pause toggled: {}", if sim.paused { "paused" } else { "running" });
    sim.paused
}

pub(super) fn move_camera(sim: &mut SimulationCore, delta: Vec2) {
    sim.camera += delta;
}

pub(super) fn set_zoom(sim: &mut SimulationCore, zoom: f32) {
    if zoom.is_finite() {
        sim.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }
}

pub(super) fn zoom_by(sim: &mut SimulationCore, factor: f32) {
    let zoom = sim.zoom * factor;
    set_zoom(sim, zoom);
}
