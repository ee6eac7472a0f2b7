//! Fixed timestep simulation tick
//!
//! Order per tick: clamp player, count cooldown, spawn, move, collide, sweep.

use super::collision;
use super::entity::EntityId;
use super::session::GameSession;
use super::state::{GameEvent, RoundState};

/// What a single tick did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// False when the tick was skipped (GameOver)
    pub advanced: bool,
    pub spawned: Option<EntityId>,
    /// Obstacles destroyed by projectiles (one point each)
    pub scored: u32,
    pub player_hit: bool,
    /// Entities that silently left the playfield
    pub swept: usize,
}

impl GameSession {
    /// Advance the simulation by one tick. A no-op outside of Playing.
    pub fn tick(&mut self) -> TickReport {
        if self.state == RoundState::GameOver {
            return TickReport::default();
        }

        let mut report = TickReport {
            advanced: true,
            ..Default::default()
        };
        self.time_ticks += 1;

        self.player.body.pos = self
            .playfield
            .clamp(self.player.body.pos, self.tuning.player_half_extents);

        self.cooldown.tick(self.tuning.fire_cooldown_ticks);

        if let Some(obstacle) = self.spawner.maybe_spawn(&mut self.rng, &self.playfield) {
            let variant = obstacle.variant().unwrap_or_default();
            let y = obstacle.body.pos.y;
            let id = self.registry.add_obstacle(obstacle);
            self.events.push(GameEvent::ObstacleSpawned { id, variant, y });
            log::debug!(
                "Obstacle {:?} spawned at y={} (threshold now {})",
                id,
                y,
                self.spawner.threshold()
            );
            report.spawned = Some(id);
        }

        self.registry.advance_all();

        // Decide against the post-move snapshot, then mutate
        let outcome = collision::resolve(
            &self.player.body,
            self.registry.obstacles(),
            self.registry.projectiles(),
        );
        for id in outcome.removals() {
            self.registry.remove(id);
        }
        for &(obstacle, projectile) in &outcome.destroyed_pairs {
            log::debug!("Obstacle {:?} destroyed by projectile {:?}", obstacle, projectile);
            self.events.push(GameEvent::ObstacleDestroyed { obstacle, projectile });
        }
        report.scored = outcome.scored();
        self.player.score += u64::from(report.scored);

        if outcome.player_hit() {
            for &obstacle in &outcome.player_hits {
                self.events.push(GameEvent::PlayerHit { obstacle });
            }
            report.player_hit = true;
            self.end_round();
        }

        let swept = self
            .registry
            .sweep(&self.playfield, self.tuning.obstacle_exit_x);
        report.swept = swept.obstacles.len() + swept.projectiles.len();
        for id in swept.obstacles.into_iter().chain(swept.projectiles) {
            self.events.push(GameEvent::OutOfBounds { id });
        }

        report
    }
}
