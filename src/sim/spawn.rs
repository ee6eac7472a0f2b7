//! Obstacle spawning with a ramping difficulty curve
//!
//! Each tick a roll in `1..=roll_max` is compared against the threshold. A roll
//! above it spawns an asteroid and lowers the threshold by one, down to the
//! floor, so spawns get steadily more frequent over a session.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Body, Entity, EntityKind};
use super::playfield::Playfield;
use crate::tuning::Tuning;

/// Decides when and where a new obstacle enters play
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnController {
    threshold: u32,
    start: u32,
    floor: u32,
    roll_max: u32,
    bands: u32,
    variants: u8,
    spawn_x: f32,
    speed: f32,
    size: Vec2,
    /// Successful spawns over the controller's lifetime
    spawned: u64,
}

impl SpawnController {
    pub fn new(tuning: &Tuning, playfield: &Playfield) -> Self {
        Self {
            threshold: tuning.spawn_threshold_start,
            start: tuning.spawn_threshold_start,
            floor: tuning.spawn_threshold_floor,
            roll_max: tuning.spawn_roll_max,
            bands: tuning.spawn_bands,
            variants: tuning.obstacle_variants,
            spawn_x: playfield.width * tuning.spawn_x_fraction,
            speed: tuning.obstacle_speed,
            size: tuning.sprite_size(),
            spawned: 0,
        }
    }

    /// Current threshold; lower means more frequent spawns
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    /// Roll for a spawn; returns the new obstacle (not yet registered) on success
    pub fn maybe_spawn<R: Rng>(
        &mut self,
        rng: &mut R,
        playfield: &Playfield,
    ) -> Option<Entity> {
        let roll = rng.random_range(1..=self.roll_max);
        if roll <= self.threshold {
            return None;
        }

        let band = rng.random_range(1..=self.bands);
        let variant = rng.random_range(1..=self.variants);
        let body = Body::new(
            Vec2::new(self.spawn_x, playfield.band_y(band, self.bands)),
            self.size,
            Vec2::new(-self.speed, 0.0),
        );

        self.threshold = self.threshold.saturating_sub(1).max(self.floor);
        self.spawned += 1;

        Some(Entity::new(EntityKind::Obstacle { variant }, body))
    }

    /// Restore the starting threshold
    pub fn reset_threshold(&mut self) {
        self.threshold = self.start;
    }
}
