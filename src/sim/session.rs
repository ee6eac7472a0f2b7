//! Game session: the single owner of all gameplay state
//!
//! Inputs and ticks both mutate the session through `&mut self`, so they can
//! never interleave within one another. The round state gates every mutation:
//! during GameOver only a restart does anything.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{Body, Entity, EntityId, EntityKind};
use super::input::InputEvent;
use super::playfield::Playfield;
use super::registry::EntityRegistry;
use super::spawn::SpawnController;
use super::state::{FireCooldown, GameEvent, Player, RoundState};
use crate::highscores::HighScores;
use crate::tuning::{Tuning, TuningError};

#[derive(Debug, Clone)]
pub struct GameSession {
    pub(super) tuning: Tuning,
    pub(super) playfield: Playfield,
    seed: u64,
    pub(super) rng: Pcg32,
    pub(super) state: RoundState,
    pub(super) player: Player,
    pub(super) registry: EntityRegistry,
    pub(super) spawner: SpawnController,
    pub(super) cooldown: FireCooldown,
    /// Ticks simulated over the whole session (never reset)
    pub(super) time_ticks: u64,
    /// Current round (1-based)
    pub(super) round: u32,
    pub(super) high_scores: HighScores,
    pub(super) events: Vec<GameEvent>,
}

impl GameSession {
    /// Start a session with the player centered and the first round playing
    pub fn new(playfield: Playfield, tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;
        if !playfield.width.is_finite()
            || !playfield.height.is_finite()
            || !playfield.fits(tuning.player_half_extents)
        {
            return Err(TuningError::Invalid {
                field: "player_half_extents",
                reason: format!(
                    "player box {:?} does not fit a {}x{} playfield",
                    tuning.player_half_extents * 2.0,
                    playfield.width,
                    playfield.height
                ),
            });
        }

        let mut player = Player::new(Vec2::ZERO, tuning.sprite_size());
        player.center_on(playfield.center());

        log::info!(
            "Session starting: {}x{} playfield, seed {}",
            playfield.width,
            playfield.height,
            seed
        );

        Ok(Self {
            spawner: SpawnController::new(&tuning, &playfield),
            tuning,
            playfield,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            state: RoundState::Playing,
            player,
            registry: EntityRegistry::new(),
            cooldown: FireCooldown::default(),
            time_ticks: 0,
            round: 1,
            high_scores: HighScores::new(),
            events: vec![GameEvent::RoundStarted { round: 1 }],
        })
    }

    /// Apply one input event immediately. Returns whether it changed anything.
    pub fn handle_input(&mut self, input: InputEvent) -> bool {
        match (self.state, input) {
            (RoundState::GameOver, InputEvent::Restart) => {
                self.reset();
                true
            }
            (RoundState::GameOver, _) | (RoundState::Playing, InputEvent::Restart) => false,
            (RoundState::Playing, InputEvent::Up) => self.nudge(Vec2::Y),
            (RoundState::Playing, InputEvent::Down) => self.nudge(Vec2::NEG_Y),
            (RoundState::Playing, InputEvent::Left) => self.nudge(Vec2::NEG_X),
            (RoundState::Playing, InputEvent::Right) => self.nudge(Vec2::X),
            (RoundState::Playing, InputEvent::Fire) => self.fire(),
        }
    }

    /// Move the player one step; clamping happens on the next tick
    fn nudge(&mut self, dir: Vec2) -> bool {
        self.player.body.pos += dir * self.tuning.player_step;
        true
    }

    /// Spawn a projectile at the player unless capped or cooling down
    fn fire(&mut self) -> bool {
        if self.cooldown.is_cooling()
            || self.registry.projectile_count() >= self.tuning.max_projectiles
        {
            return false;
        }

        let body = Body::new(
            self.player.body.pos,
            self.tuning.sprite_size(),
            Vec2::new(self.tuning.projectile_speed, 0.0),
        );
        let id = self.registry.add_projectile(Entity::new(EntityKind::Projectile, body));
        self.cooldown.trigger();
        self.events.push(GameEvent::ProjectileFired { id });
        log::debug!("Projectile {:?} fired from {:?}", id, body.pos);
        true
    }

    /// GameOver -> Playing: clear the field and start a new round
    fn reset(&mut self) {
        self.player.body.pos = Vec2::new(self.tuning.restart_x, self.playfield.height / 2.0);
        self.player.score = 0;
        self.registry.clear();
        self.cooldown.reset();
        if self.tuning.reset_threshold_on_restart {
            self.spawner.reset_threshold();
        }
        self.round += 1;
        self.state = RoundState::Playing;
        self.events.push(GameEvent::RoundStarted { round: self.round });
        log::info!(
            "Round {} started (spawn threshold {})",
            self.round,
            self.spawner.threshold()
        );
    }

    /// Playing -> GameOver: park the player and record the score
    pub(super) fn end_round(&mut self) {
        self.state = RoundState::GameOver;
        self.player.body.pos = self.tuning.park_position;
        let score = self.player.score;
        let rank = self.high_scores.add_score(score, self.round, self.time_ticks);
        self.events.push(GameEvent::RoundOver {
            round: self.round,
            score,
            rank,
        });
        log::info!("Round {} over: score {} (rank {:?})", self.round, score, rank);
    }

    /// Take every event recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == RoundState::Playing
    }

    pub fn score(&self) -> u64 {
        self.player.score
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn spawner(&self) -> &SpawnController {
        &self.spawner
    }

    pub fn cooldown(&self) -> &FireCooldown {
        &self.cooldown
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    /// Seconds of simulated time over the whole session
    pub fn elapsed_secs(&self) -> f32 {
        self.time_ticks as f32 * self.tuning.dt()
    }

    /// Scripting hook: put the player at an exact position (Playing only)
    pub fn place_player(&mut self, pos: Vec2) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.player.body.pos = pos;
        true
    }

    /// Scripting hook: register an obstacle directly (Playing only)
    pub fn insert_obstacle(&mut self, obstacle: Entity) -> Option<EntityId> {
        if !self.is_playing() || !obstacle.is_obstacle() {
            return None;
        }
        Some(self.registry.add_obstacle(obstacle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::new(Playfield::new(800.0, 600.0), Tuning::default(), 1).unwrap()
    }

    #[test]
    fn test_new_session_is_playing_with_centered_player() {
        let mut session = session();
        assert_eq!(session.state(), RoundState::Playing);
        assert_eq!(session.player().body.center(), Vec2::new(400.0, 300.0));
        assert_eq!(session.score(), 0);
        assert_eq!(session.round(), 1);
        assert_eq!(session.drain_events(), vec![GameEvent::RoundStarted { round: 1 }]);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_rejects_tiny_playfield_and_bad_tuning() {
        assert!(GameSession::new(Playfield::new(40.0, 600.0), Tuning::default(), 1).is_err());
        let tuning = Tuning {
            spawn_bands: 0,
            ..Default::default()
        };
        assert!(GameSession::new(Playfield::new(800.0, 600.0), tuning, 1).is_err());
    }

    #[test]
    fn test_directional_inputs() {
        let mut session = session();
        let start = session.player().body.pos;
        assert!(session.handle_input(InputEvent::Up));
        assert!(session.handle_input(InputEvent::Right));
        assert_eq!(session.player().body.pos, start + Vec2::new(10.0, 10.0));
        session.handle_input(InputEvent::Down);
        session.handle_input(InputEvent::Down);
        session.handle_input(InputEvent::Left);
        assert_eq!(session.player().body.pos, start + Vec2::new(0.0, -10.0));
    }

    #[test]
    fn test_fire_spawns_projectile_at_player() {
        let mut session = session();
        assert!(session.handle_input(InputEvent::Fire));
        let projectile = &session.registry().projectiles()[0];
        assert_eq!(projectile.body.pos, session.player().body.pos);
        assert_eq!(projectile.body.vel, Vec2::new(5.5, 0.0));
        assert!(session.cooldown().is_cooling());

        // Second shot is blocked by the cooldown
        assert!(!session.handle_input(InputEvent::Fire));
        assert_eq!(session.registry().projectile_count(), 1);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut session = session();
        assert!(!session.handle_input(InputEvent::Restart));
        assert_eq!(session.round(), 1);
    }

    #[test]
    fn test_game_over_ignores_gameplay_inputs() {
        let mut session = session();
        session.end_round();
        let parked = session.player().body.pos;
        assert_eq!(parked, Vec2::new(-100.0, -100.0));

        for input in InputEvent::ALL.into_iter().filter(|&i| i != InputEvent::Restart) {
            assert!(!session.handle_input(input));
        }
        assert_eq!(session.player().body.pos, parked);
        assert_eq!(session.registry().projectile_count(), 0);
    }

    #[test]
    fn test_restart_resets_round() {
        let mut session = session();
        session.handle_input(InputEvent::Fire);
        session.player.score = 12;
        session.end_round();

        assert!(session.handle_input(InputEvent::Restart));
        assert_eq!(session.state(), RoundState::Playing);
        assert_eq!(session.score(), 0);
        assert!(session.registry().is_empty());
        assert!(!session.cooldown().is_cooling());
        assert_eq!(session.player().body.pos, Vec2::new(10.0, 300.0));
        assert_eq!(session.round(), 2);
        assert_eq!(session.high_scores().top_score(), Some(12));
    }
}
