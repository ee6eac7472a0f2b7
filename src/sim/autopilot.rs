//! Idle/demo mode: a simple pilot that plays the game
//!
//! Reads the session and picks at most one input per frame. Dodging an
//! obstacle in the ship's lane beats shooting; shooting beats lining up.

use super::entity::{Body, Entity};
use super::input::InputEvent;
use super::session::GameSession;

/// Horizontal gap below which an obstacle in the lane is dodged rather than shot
const DODGE_DISTANCE: f32 = 120.0;
/// Extra vertical margin when deciding whether an obstacle shares the ship's lane
const LANE_MARGIN: f32 = 6.0;
/// Fraction of the playfield width the pilot tries to stay left of
const HOME_X_FRACTION: f32 = 0.2;

fn in_lane(player: &Body, obstacle: &Entity) -> bool {
    let p = player.rect();
    let o = obstacle.body.rect();
    o.min.y < p.max.y + LANE_MARGIN && p.min.y - LANE_MARGIN < o.max.y
}

/// Pick the input to apply this frame, if any
pub fn choose_input(session: &GameSession) -> Option<InputEvent> {
    if !session.is_playing() {
        return Some(InputEvent::Restart);
    }

    let player = &session.player().body;
    let player_right = player.rect().max.x;
    let ahead = session
        .registry()
        .obstacles()
        .iter()
        .filter(|o| o.body.rect().max.x > player.pos.x);

    // Closest obstacle sharing the lane
    let threat = ahead
        .clone()
        .filter(|o| in_lane(player, o))
        .min_by(|a, b| a.body.pos.x.total_cmp(&b.body.pos.x));

    if let Some(threat) = threat {
        if threat.body.pos.x - player_right < DODGE_DISTANCE {
            let field = session.playfield();
            let room_above = field.height - player.rect().max.y;
            let room_below = player.pos.y;
            let go_up = if player.center().y >= threat.body.center().y {
                room_above > player.size().y
            } else {
                room_below < player.size().y
            };
            return Some(if go_up { InputEvent::Up } else { InputEvent::Down });
        }

        let tuning = session.tuning();
        if !session.cooldown().is_cooling()
            && session.registry().projectile_count() < tuning.max_projectiles
        {
            return Some(InputEvent::Fire);
        }
        return None;
    }

    if player.pos.x > session.playfield().width * HOME_X_FRACTION {
        return Some(InputEvent::Left);
    }

    // Line up with the nearest obstacle to get a shot
    let step = session.tuning().player_step;
    let target = ahead.min_by(|a, b| a.body.pos.x.total_cmp(&b.body.pos.x))?;
    let dy = target.body.center().y - player.center().y;
    if dy > step {
        Some(InputEvent::Up)
    } else if dy < -step {
        Some(InputEvent::Down)
    } else {
        None
    }
}
