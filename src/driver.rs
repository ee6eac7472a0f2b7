//! Fixed timestep tick driver
//!
//! Turns variable frame deltas into whole simulation ticks. Scheduling stops
//! while the session is in GameOver and resumes only after a restart input.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};
use crate::sim::GameSession;

#[derive(Debug, Clone)]
pub struct FixedStepDriver {
    dt: f32,
    accumulator: f32,
    max_substeps: u32,
}

impl FixedStepDriver {
    /// Driver ticking at `tick_rate_hz`
    pub fn new(tick_rate_hz: f32) -> Self {
        Self {
            dt: 1.0 / tick_rate_hz,
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    pub fn for_session(session: &GameSession) -> Self {
        Self::new(session.tuning().tick_rate_hz)
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Feed one frame's elapsed time; returns the number of ticks run
    pub fn advance(&mut self, session: &mut GameSession, frame_dt: f32) -> u32 {
        if !session.is_playing() {
            // Time spent on the game-over screen is not owed to the next round
            self.accumulator = 0.0;
            return 0;
        }

        // A NaN or infinite reading from the host clock counts as no time
        let frame_dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += frame_dt;

        let mut substeps = 0;
        while self.accumulator >= self.dt && substeps < self.max_substeps {
            session.tick();
            self.accumulator -= self.dt;
            substeps += 1;

            if !session.is_playing() {
                log::debug!("Tick driver stopped after game over");
                self.accumulator = 0.0;
                break;
            }
        }

        // Drop backlog the substep cap could not absorb
        if substeps == self.max_substeps {
            self.accumulator = self.accumulator.min(self.dt);
        }

        substeps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::{Body, Entity, EntityKind, InputEvent, Playfield};
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn session() -> GameSession {
        let tuning = Tuning {
            spawn_roll_max: 1000,
            spawn_threshold_start: 1000,
            spawn_threshold_floor: 1000,
            ..Default::default()
        };
        GameSession::new(Playfield::new(800.0, 600.0), tuning, 9).unwrap()
    }

    #[test]
    fn test_ticks_follow_wall_clock() {
        let mut session = session();
        let mut driver = FixedStepDriver::for_session(&session);
        let mut total = 0;
        // Slightly longer frames than dt
        for _ in 0..120 {
            total += driver.advance(&mut session, 1.0 / 59.0);
        }
        assert!((120..=123).contains(&total), "ran {total} ticks");
        assert_eq!(session.time_ticks(), total as u64);
    }

    #[test]
    fn test_long_frames_are_clamped() {
        let mut session = session();
        let mut driver = FixedStepDriver::new(60.0);
        let ran = driver.advance(&mut session, 10.0);
        assert!((5..=6).contains(&ran), "ran {ran} ticks");
        assert!(driver.advance(&mut session, 0.1) <= MAX_SUBSTEPS);
    }

    #[test]
    fn test_non_finite_frame_is_ignored() {
        let mut session = session();
        let mut driver = FixedStepDriver::for_session(&session);
        for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert_eq!(driver.advance(&mut session, bad), 0);
        }

        let mut total = 0;
        for _ in 0..60 {
            total += driver.advance(&mut session, SIM_DT);
        }
        assert!((59..=60).contains(&total), "ran {total} ticks");
        assert_eq!(session.time_ticks(), total as u64);
    }

    #[test]
    fn test_stops_on_game_over_until_restart() {
        let mut session = session();
        let mut driver = FixedStepDriver::new(60.0);
        session.place_player(Vec2::new(100.0, 100.0));
        session.insert_obstacle(Entity::new(
            EntityKind::Obstacle { variant: 1 },
            Body::new(Vec2::new(142.0, 100.0), Vec2::new(40.0, 25.0), Vec2::new(-5.5, 0.0)),
        ));

        assert_eq!(driver.advance(&mut session, 0.1), 1);
        assert!(!session.is_playing());
        assert_eq!(driver.advance(&mut session, 0.1), 0);

        session.handle_input(InputEvent::Restart);
        assert!(driver.advance(&mut session, 0.1) > 0);
    }
}
