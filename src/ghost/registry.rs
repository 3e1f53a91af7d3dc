//! Single-slot registry naming the ghost that currently owns heartbeat duty.
//!
//! The registry is a best-effort nearest tracker. Each ghost offers itself
//! once per tick; the held ghost's distance is recomputed from the current
//! position snapshot rather than cached, so the final holder after a full pass
//! does not depend on update order.

use std::hash::BuildHasher;

use bevy::prelude::Resource;
use glam::Vec3;
use hashbrown::HashMap;
use log::debug;

use super::GhostId;

/// Source of the current position of any live ghost.
pub trait GhostPositions {
    /// Returns the position of `id`, or `None` if it is no longer live.
    fn position_of(&self, id: GhostId) -> Option<Vec3>;
}

impl<S: BuildHasher> GhostPositions for HashMap<GhostId, Vec3, S> {
    fn position_of(&self, id: GhostId) -> Option<Vec3> {
        self.get(&id).copied()
    }
}

/// Session-scoped holder of the nearest ghost.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct NearestGhostRegistry {
    held: Option<GhostId>,
}

impl NearestGhostRegistry {
    /// Ghost currently holding heartbeat duty.
    #[must_use]
    pub const fn held(&self) -> Option<GhostId> {
        self.held
    }

    /// Whether `id` holds heartbeat duty.
    #[must_use]
    pub fn is_held_by(&self, id: GhostId) -> bool {
        self.held == Some(id)
    }

    /// Offers `candidate`, standing `distance` from `player`, for the slot.
    ///
    /// The candidate claims the slot when it is empty, when the held ghost is
    /// no longer present in `positions`, or when the held ghost is strictly
    /// farther from `player`. Returns whether `candidate` holds the slot
    /// afterwards.
    pub fn arbitrate(
        &mut self,
        candidate: GhostId,
        distance: f32,
        player: Vec3,
        positions: &dyn GhostPositions,
    ) -> bool {
        let claim = match self.held {
            None => true,
            Some(held) if held == candidate => false,
            Some(held) => positions
                .position_of(held)
                .is_none_or(|position| position.distance(player) > distance),
        };
        if claim {
            debug!("ghost {candidate:?} now nearest at {distance:.2}");
            self.held = Some(candidate);
        }
        self.is_held_by(candidate)
    }

    /// Clears the slot if `id` holds it. Returns whether it was cleared.
    pub fn release(&mut self, id: GhostId) -> bool {
        if self.is_held_by(id) {
            self.held = None;
            true
        } else {
            false
        }
    }

    /// Empties the slot unconditionally.
    pub fn clear(&mut self) {
        self.held = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn positions() -> HashMap<GhostId, Vec3> {
        HashMap::from([
            (GhostId(1), Vec3::new(12.0, 0.0, 0.0)),
            (GhostId(2), Vec3::new(0.0, 0.0, 4.0)),
            (GhostId(3), Vec3::new(-7.0, 0.0, 0.0)),
        ])
    }

    fn full_pass(
        registry: &mut NearestGhostRegistry,
        order: &[u64],
        positions: &HashMap<GhostId, Vec3>,
    ) {
        for &raw in order {
            let id = GhostId(raw);
            let distance = positions
                .position_of(id)
                .map_or(f32::INFINITY, |p| p.distance(Vec3::ZERO));
            registry.arbitrate(id, distance, Vec3::ZERO, positions);
        }
    }

    #[rstest]
    #[case(&[1, 2, 3])]
    #[case(&[1, 3, 2])]
    #[case(&[2, 1, 3])]
    #[case(&[2, 3, 1])]
    #[case(&[3, 1, 2])]
    #[case(&[3, 2, 1])]
    fn one_pass_settles_on_minimum(positions: HashMap<GhostId, Vec3>, #[case] order: &[u64]) {
        let mut registry = NearestGhostRegistry::default();
        full_pass(&mut registry, order, &positions);
        assert_eq!(registry.held(), Some(GhostId(2)));
    }

    #[rstest]
    fn holder_keeps_slot_against_itself(positions: HashMap<GhostId, Vec3>) {
        let mut registry = NearestGhostRegistry::default();
        assert!(registry.arbitrate(GhostId(1), 12.0, Vec3::ZERO, &positions));
        assert!(registry.arbitrate(GhostId(1), 12.0, Vec3::ZERO, &positions));
        assert!(!registry.arbitrate(GhostId(3), 20.0, Vec3::ZERO, &positions));
        assert_eq!(registry.held(), Some(GhostId(1)));
    }

    #[rstest]
    fn vanished_holder_is_replaced(positions: HashMap<GhostId, Vec3>) {
        let mut registry = NearestGhostRegistry::default();
        registry.arbitrate(GhostId(99), 0.5, Vec3::ZERO, &positions);
        assert!(registry.arbitrate(GhostId(1), 12.0, Vec3::ZERO, &positions));
    }

    #[rstest]
    fn release_only_clears_for_holder(positions: HashMap<GhostId, Vec3>) {
        let mut registry = NearestGhostRegistry::default();
        full_pass(&mut registry, &[1, 2, 3], &positions);
        assert!(!registry.release(GhostId(3)));
        assert_eq!(registry.held(), Some(GhostId(2)));
        assert!(registry.release(GhostId(2)));
        assert_eq!(registry.held(), None);
    }

    #[rstest]
    fn repopulates_after_release(mut positions: HashMap<GhostId, Vec3>) {
        let mut registry = NearestGhostRegistry::default();
        full_pass(&mut registry, &[1, 2, 3], &positions);
        positions.remove(&GhostId(2));
        registry.release(GhostId(2));
        full_pass(&mut registry, &[3, 1], &positions);
        assert_eq!(registry.held(), Some(GhostId(3)));
    }
}
