//! Temperature System - per-particle heat bookkeeping
//!
//! Temperature is a plain scalar per particle, bounded to
//! `[min_temperature, max_temperature]`. It changes through:
//! - kinetic heating from drag (forces phase)
//! - ambient loss every sub-step (`relax`)
//! - floor/ceiling contact (`wall_contact`)
//! - collisions, where heat flows from hot to cold (`exchange`)

mod exchange;

pub use exchange::{exchange, relax, wall_contact, WallContact, MIN_EXCHANGE_DELTA};
