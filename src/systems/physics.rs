//! Physics System - substepped Verlet particle dynamics
//!
//! Each sub-step runs these phases in order (driven by the simulation step):
//! 1. `integrate_all`       - forces, velocity cap, drag, Verlet step (parallel)
//! 2. `resolve_boundaries`  - wall push-back with restitution (single thread)
//! 3. spatial reindex       - see `crate::spatial::SpatialGrid::refresh`
//! 4. `resolve_collisions`  - pairwise separation + heat exchange (single thread)
//! 5. `cap_velocities`      - collisions can push particles over the cap
//!
//! Velocity is never stored: it is `(position - prev_position) / sub_dt`.

mod types;
mod velocity;
mod forces;
mod boundary;
mod collision;

pub use boundary::resolve_boundaries;
pub use collision::resolve_collisions;
pub use forces::{integrate_all, integrate_chunk};
pub use types::{Interaction, SolveStats, SubstepContext, NEAR_DISTANCE_SQ, POINTER_SENTINEL};
pub use velocity::{cap_velocities, cap_velocity};
