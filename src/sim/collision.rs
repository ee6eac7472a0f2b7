//! Collision detection and resolution
//!
//! The scan reads an immutable view of the live sets and only reports what
//! should happen. The session applies removals and score afterwards, so no
//! pair is skipped because a set shrank mid-iteration.

use super::entity::{Body, Entity, EntityId};

/// What one collision pass decided
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionOutcome {
    /// Obstacle/projectile pairs destroyed together, in scan order
    pub destroyed_pairs: Vec<(EntityId, EntityId)>,
    /// Obstacles that hit the player
    pub player_hits: Vec<EntityId>,
}

impl CollisionOutcome {
    /// Points earned this pass (one per destroyed pair)
    pub fn scored(&self) -> u32 {
        self.destroyed_pairs.len() as u32
    }

    pub fn player_hit(&self) -> bool {
        !self.player_hits.is_empty()
    }

    /// Every entity to remove. An obstacle may appear twice if it was both
    /// shot and hit the player; removal is idempotent.
    pub fn removals(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.destroyed_pairs
            .iter()
            .flat_map(|&(obstacle, projectile)| [obstacle, projectile])
            .chain(self.player_hits.iter().copied())
    }
}

/// Scan obstacles against projectiles and the player
///
/// Obstacle-major, projectile-minor: the first overlapping projectile pairs
/// with an obstacle and both are consumed. The player test runs for every
/// obstacle regardless of whether it was consumed.
pub fn resolve(player: &Body, obstacles: &[Entity], projectiles: &[Entity]) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();
    let mut consumed = vec![false; projectiles.len()];

    for obstacle in obstacles {
        let hit = projectiles
            .iter()
            .enumerate()
            .find(|(idx, p)| !consumed[*idx] && obstacle.body.overlaps(&p.body));
        if let Some((idx, projectile)) = hit {
            consumed[idx] = true;
            outcome.destroyed_pairs.push((obstacle.id, projectile.id));
        }

        if obstacle.body.overlaps(player) {
            outcome.player_hits.push(obstacle.id);
        }
    }

    outcome
}
