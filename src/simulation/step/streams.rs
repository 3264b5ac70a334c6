use super::SimulationCore;

/// Advance every stream by `dt` and append the particles that fell due.
/// Returns how many were spawned.
pub(super) fn update_streams(sim: &mut SimulationCore, dt: f32) -> u32 {
    let mut spawned = 0u32;
    for stream in sim.streams.iter_mut() {
        let due = stream.advance(dt);
        if due == 0 {
            continue;
        }
        for _ in 0..due {
            sim.store.add(stream.start_pos, stream.initial_velocity, stream.acceleration, stream.mass);
        }
        spawned += due as u32;
        if stream.is_exhausted() {
            crate::console_debug!("stream at ({}, {}) exhausted after {}", stream.start_pos.x, stream.start_pos.y, stream.spawned);
        }
    }
    spawned
}
