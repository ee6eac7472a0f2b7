//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives in [`Tuning`]. Defaults
//! come from [`crate::consts`]; a JSON file may override any subset of fields.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading or validating a tuning table
#[derive(thiserror::Error, Debug)]
pub enum TuningError {
    /// Reading the tuning file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid tuning JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of its allowed range
    #[error("Invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl TuningError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        TuningError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Game balance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Ticks per second the driver aims for
    pub tick_rate_hz: f32,
    /// Uniform scale applied to the nominal sprite size
    pub sprite_scale: f32,
    /// Reference sprite size before scaling
    pub nominal_sprite: Vec2,
    /// Half-extents of the player clamp box
    pub player_half_extents: Vec2,
    /// Distance moved per directional input
    pub player_step: f32,
    /// X the player restarts at
    pub restart_x: f32,
    /// Where the player is parked on game over
    pub park_position: Vec2,

    pub max_projectiles: usize,
    pub fire_cooldown_ticks: u32,
    pub projectile_speed: f32,

    /// Spawn roll is uniform in `1..=spawn_roll_max`
    pub spawn_roll_max: u32,
    pub spawn_threshold_start: u32,
    pub spawn_threshold_floor: u32,
    /// Number of equally spaced vertical spawn lanes
    pub spawn_bands: u32,
    /// Spawn x as a fraction of the playfield width
    pub spawn_x_fraction: f32,
    pub obstacle_speed: f32,
    /// Variant ids are drawn from `1..=obstacle_variants`
    pub obstacle_variants: u8,
    pub obstacle_exit_x: f32,

    pub background_scroll_rate: f32,

    /// Restore the spawn threshold to its start value on restart
    pub reset_threshold_on_restart: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_rate_hz: TICK_RATE_HZ,
            sprite_scale: 1.0,
            nominal_sprite: Vec2::new(NOMINAL_SPRITE_W, NOMINAL_SPRITE_H),
            player_half_extents: Vec2::new(PLAYER_HALF_W, PLAYER_HALF_H),
            player_step: PLAYER_STEP,
            restart_x: PLAYER_RESTART_X,
            park_position: Vec2::new(PLAYER_PARK_X, PLAYER_PARK_Y),

            max_projectiles: MAX_PROJECTILES,
            fire_cooldown_ticks: FIRE_COOLDOWN_TICKS,
            projectile_speed: PROJECTILE_SPEED,

            spawn_roll_max: SPAWN_ROLL_MAX,
            spawn_threshold_start: SPAWN_THRESHOLD_START,
            spawn_threshold_floor: SPAWN_THRESHOLD_FLOOR,
            spawn_bands: SPAWN_BANDS,
            spawn_x_fraction: SPAWN_X_FRACTION,
            obstacle_speed: OBSTACLE_SPEED,
            obstacle_variants: OBSTACLE_VARIANTS,
            obstacle_exit_x: OBSTACLE_EXIT_X,

            background_scroll_rate: BACKGROUND_SCROLL_RATE,

            reset_threshold_on_restart: false,
        }
    }
}

impl Tuning {
    /// Parse a tuning table from JSON (missing fields take defaults) and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&contents)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Size of every sprite after scaling
    pub fn sprite_size(&self) -> Vec2 {
        self.nominal_sprite * self.sprite_scale
    }

    /// Fixed timestep implied by the tick rate
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate_hz
    }

    /// Check every field for a usable value
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("tick_rate_hz", self.tick_rate_hz)?;
        positive("sprite_scale", self.sprite_scale)?;
        positive("nominal_sprite.x", self.nominal_sprite.x)?;
        positive("nominal_sprite.y", self.nominal_sprite.y)?;
        non_negative("player_half_extents.x", self.player_half_extents.x)?;
        non_negative("player_half_extents.y", self.player_half_extents.y)?;
        finite("player_step", self.player_step)?;
        finite("restart_x", self.restart_x)?;
        finite("park_position.x", self.park_position.x)?;
        finite("park_position.y", self.park_position.y)?;
        finite("projectile_speed", self.projectile_speed)?;
        finite("obstacle_speed", self.obstacle_speed)?;
        finite("obstacle_exit_x", self.obstacle_exit_x)?;
        finite("background_scroll_rate", self.background_scroll_rate)?;

        if self.max_projectiles == 0 {
            return Err(TuningError::invalid("max_projectiles", "must be at least 1"));
        }
        if self.fire_cooldown_ticks == 0 {
            return Err(TuningError::invalid("fire_cooldown_ticks", "must be at least 1"));
        }
        if self.spawn_roll_max == 0 {
            return Err(TuningError::invalid("spawn_roll_max", "must be at least 1"));
        }
        if self.spawn_threshold_floor > self.spawn_threshold_start {
            return Err(TuningError::invalid(
                "spawn_threshold_floor",
                format!(
                    "floor {} is above start {}",
                    self.spawn_threshold_floor, self.spawn_threshold_start
                ),
            ));
        }
        if self.spawn_bands == 0 {
            return Err(TuningError::invalid("spawn_bands", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.spawn_x_fraction) {
            return Err(TuningError::invalid("spawn_x_fraction", "must be within [0, 1]"));
        }
        if self.obstacle_variants == 0 {
            return Err(TuningError::invalid("obstacle_variants", "must be at least 1"));
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TuningError::invalid(field, format!("{value} is not finite")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), TuningError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(TuningError::invalid(field, format!("{value} is negative")));
    }
    Ok(())
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(TuningError::invalid(field, format!("{value} must be positive")));
    }
    Ok(())
}
