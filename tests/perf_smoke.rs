use verlet_engine::{Simulation, SimulationCore, SimulationSettings, SpawnMode, SpawnSettings};

fn simulation(width: f32, height: f32, particle_radius: f32, substeps: u32) -> Simulation {
    let settings = SimulationSettings { width, height, particle_radius, substeps, ..SimulationSettings::default() };
    Simulation::from_core(SimulationCore::new(settings).expect("valid settings"))
}

#[test]
fn perf_smoke_update() {
    let mut sim = simulation(1000.0, 1000.0, 3.5, 8);
    sim.enable_perf_metrics(true);
    sim.add_bulk_particles(5000, 1.0);
    sim.update(1.0 / 60.0);

    let stats = sim.get_perf_stats();
    assert!(stats.frame_ms() >= 0.0);
    assert!(stats.integrate_ms() >= 0.0);
    assert_eq!(stats.particle_count(), 5000);
    assert_eq!(stats.substeps(), 8);
    assert!(stats.candidate_pairs() >= stats.resolved_pairs());
    assert_eq!(stats.grid_rebuilds(), 1);
}

#[test]
fn abi_layout_matches_buffers() {
    let mut sim = simulation(500.0, 500.0, 2.0, 4);
    sim.add_bulk_particles(123, 1.0);

    let layout = sim.abi_layout();
    assert_eq!(layout.positions_len_elements(), 246);
    assert_eq!(layout.positions_len_bytes(), 246 * 4);
    assert_eq!(layout.temperature_len_elements(), 123);
    assert_eq!(layout.temperature_len_bytes(), 123 * 4);
    assert_eq!(sim.positions_len(), 246);
    assert_eq!(sim.temperature_byte_len(), 123 * 4);

    // Interleaved x,y pairs alias the Vec2 column.
    let core = sim.core();
    let raw = unsafe { std::slice::from_raw_parts(sim.positions_ptr(), sim.positions_len()) };
    assert_eq!(raw[0], core.positions()[0].x);
    assert_eq!(raw[1], core.positions()[0].y);
    assert_eq!(raw[244], core.positions()[122].x);
}

#[test]
fn default_stream_reset_runs_a_few_seconds() {
    let mut core = SimulationCore::with_defaults();
    core.reset_with(SpawnSettings { mode: SpawnMode::Stream, total: 3000, ..SpawnSettings::default() });
    assert_eq!(core.active_stream_count(), 2);

    for _ in 0..180 {
        core.update(1.0 / 60.0);
    }
    // 18 particles/s per stream for 3 s, give or take float accumulation.
    let count = core.particle_count();
    assert!((2 * 53..=2 * 54).contains(&count), "spawned {}", count);
    assert!(core.temperatures().iter().all(|t| (0.0..=400.0).contains(t)));
}
