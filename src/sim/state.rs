//! Round state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Body, EntityId};

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Active gameplay; ticks advance the simulation
    Playing,
    /// Player was hit; only a restart is accepted
    GameOver,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub score: u64,
}

impl Player {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            body: Body::new(pos, size, Vec2::ZERO),
            score: 0,
        }
    }

    /// Place the ship so its center is at `center`
    pub fn center_on(&mut self, center: Vec2) {
        self.body.pos = center - self.body.size() * 0.5;
    }
}

/// Tracks the fixed delay between shots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireCooldown {
    fired: bool,
    ticks: u32,
}

impl FireCooldown {
    pub fn is_cooling(&self) -> bool {
        self.fired
    }

    /// Ticks elapsed since the last shot (0 when ready)
    pub fn elapsed(&self) -> u32 {
        self.ticks
    }

    pub fn trigger(&mut self) {
        self.fired = true;
        self.ticks = 0;
    }

    /// Count one tick; clears the cooldown once `duration` ticks have passed
    pub fn tick(&mut self, duration: u32) {
        if !self.fired {
            return;
        }
        self.ticks += 1;
        if self.ticks >= duration {
            self.reset();
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Things that happened during a tick or input, for audio/visual/logging layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ObstacleSpawned { id: EntityId, variant: u8, y: f32 },
    ProjectileFired { id: EntityId },
    ObstacleDestroyed { obstacle: EntityId, projectile: EntityId },
    PlayerHit { obstacle: EntityId },
    /// Left the playfield without a collision
    OutOfBounds { id: EntityId },
    RoundOver { round: u32, score: u64, rank: Option<usize> },
    RoundStarted { round: u32 },
}
