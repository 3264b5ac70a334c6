use crate::core::Vec2;
use crate::domain::{Bounds, PhysicsConstants};

/// Pointer position meaning "no pointer inside the arena".
pub const POINTER_SENTINEL: Vec2 = Vec2::new(-1.0, -1.0);

/// Squared distance under which a directional force is skipped.
pub const NEAR_DISTANCE_SQ: f32 = 0.01;

/// Input-driven force state pushed in by the UI between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interaction {
    pub pointer: Vec2,
    /// Attract toward the pointer.
    pub primary: bool,
    /// Repel from the pointer; ignored while `primary` is held.
    pub secondary: bool,
    pub center_pull: bool,
}

impl Default for Interaction {
    fn default() -> Self {
        Self {
            pointer: POINTER_SENTINEL,
            primary: false,
            secondary: false,
            center_pull: false,
        }
    }
}

impl Interaction {
    /// +1 attract, -1 repel, None when no pointer force applies.
    #[inline]
    pub fn pointer_sign(&self) -> Option<f32> {
        if self.pointer == POINTER_SENTINEL {
            return None;
        }
        if self.primary {
            Some(1.0)
        } else if self.secondary {
            Some(-1.0)
        } else {
            None
        }
    }
}

/// Everything one sub-step reads besides particle state.
#[derive(Clone, Copy)]
pub struct SubstepContext<'a> {
    pub constants: &'a PhysicsConstants,
    pub interaction: Interaction,
    pub bounds: Bounds,
    pub center: Vec2,
    pub radius: f32,
    pub sub_dt: f32,
}

impl<'a> SubstepContext<'a> {
    pub fn new(
        constants: &'a PhysicsConstants,
        interaction: Interaction,
        bounds: Bounds,
        radius: f32,
        sub_dt: f32,
    ) -> Self {
        Self {
            constants,
            interaction,
            bounds,
            center: bounds.center(),
            radius,
            sub_dt,
        }
    }
}

/// Per-frame counters returned by the solver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveStats {
    pub candidate_pairs: u32,
    pub resolved_pairs: u32,
    pub grid_rebuilds: u32,
    pub wall_contacts: u32,
    pub spawned: u32,
}

impl SolveStats {
    pub fn accumulate(&mut self, other: &SolveStats) {
        self.candidate_pairs += other.candidate_pairs;
        self.resolved_pairs += other.resolved_pairs;
        self.grid_rebuilds += other.grid_rebuilds;
        self.wall_contacts += other.wall_contacts;
        self.spawned += other.spawned;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_wins_over_secondary() {
        let mut ia = Interaction { pointer: Vec2::new(3.0, 4.0), ..Interaction::default() };
        assert_eq!(ia.pointer_sign(), None);
        ia.secondary = true;
        assert_eq!(ia.pointer_sign(), Some(-1.0));
        ia.primary = true;
        assert_eq!(ia.pointer_sign(), Some(1.0));
    }

    #[test]
    fn sentinel_disables_pointer_forces() {
        let ia = Interaction { primary: true, secondary: true, ..Interaction::default() };
        assert_eq!(ia.pointer_sign(), None);
    }
}
