//! Render feed
//!
//! A plain, serializable picture of the session for whatever draws it. Nothing
//! here feeds back into the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityId, EntityKind};
use super::session::GameSession;
use super::state::RoundState;

/// What sprite to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteKind {
    Player,
    Obstacle { variant: u8 },
    Projectile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteView {
    /// None for the player
    pub id: Option<EntityId>,
    pub kind: SpriteKind,
    pub pos: Vec2,
    pub size: Vec2,
}

impl From<&Entity> for SpriteView {
    fn from(entity: &Entity) -> Self {
        let kind = match entity.kind {
            EntityKind::Obstacle { variant } => SpriteKind::Obstacle { variant },
            EntityKind::Projectile => SpriteKind::Projectile,
        };
        Self {
            id: Some(entity.id),
            kind,
            pos: entity.body.pos,
            size: entity.body.size(),
        }
    }
}

/// One frame's worth of drawable state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub state: RoundState,
    pub score: u64,
    pub best_score: Option<u64>,
    pub round: u32,
    /// Hidden once the round is lost
    pub player: Option<SpriteView>,
    pub obstacles: Vec<SpriteView>,
    pub projectiles: Vec<SpriteView>,
    pub show_game_over: bool,
    /// Horizontal texture offset for the tiled background
    pub background_offset: f32,
}

/// Texture-space scroll for a tiled background, in texture widths
pub fn background_offset(elapsed_secs: f32, rate: f32) -> f32 {
    -(elapsed_secs * rate)
}

impl GameSession {
    /// Build the render feed for the current state
    pub fn snapshot(&self) -> RenderFrame {
        let playing = self.state == RoundState::Playing;
        let player = playing.then(|| SpriteView {
            id: None,
            kind: SpriteKind::Player,
            pos: self.player.body.pos,
            size: self.player.body.size(),
        });

        RenderFrame {
            state: self.state,
            score: self.player.score,
            best_score: self.high_scores.top_score(),
            round: self.round,
            player,
            obstacles: self.registry.obstacles().iter().map(SpriteView::from).collect(),
            projectiles: self.registry.projectiles().iter().map(SpriteView::from).collect(),
            show_game_over: !playing,
            background_offset: background_offset(
                self.elapsed_secs(),
                self.tuning.background_scroll_rate,
            ),
        }
    }
}
