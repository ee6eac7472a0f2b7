//! Astro Shmup - a side-scrolling asteroid shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, spawning, collisions, round state)
//! - `tuning`: Data-driven game balance
//! - `driver`: Fixed-timestep tick driver
//! - `highscores`: In-session leaderboard
//!
//! Rendering, sprites and keyboard plumbing live outside this crate. They talk
//! to the simulation through `sim::RenderFrame` and `sim::InputEvent`.

pub mod driver;
pub mod highscores;
pub mod sim;
pub mod tuning;

pub use driver::FixedStepDriver;
pub use highscores::HighScores;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICK_RATE_HZ: f32 = 60.0;
    /// Fixed simulation timestep (seconds)
    pub const SIM_DT: f32 = 1.0 / TICK_RATE_HZ;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the driver will accept (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Reference sprite size before scaling (all entities share it)
    pub const NOMINAL_SPRITE_W: f32 = 40.0;
    pub const NOMINAL_SPRITE_H: f32 = 25.0;

    /// Player clamp half-extents
    pub const PLAYER_HALF_W: f32 = 25.0;
    pub const PLAYER_HALF_H: f32 = 15.0;
    /// Distance moved per directional input
    pub const PLAYER_STEP: f32 = 10.0;
    /// X coordinate the player restarts at (y is mid-height)
    pub const PLAYER_RESTART_X: f32 = 10.0;
    /// Where the player is parked on game over
    pub const PLAYER_PARK_X: f32 = -100.0;
    pub const PLAYER_PARK_Y: f32 = -100.0;

    /// Projectiles
    pub const MAX_PROJECTILES: usize = 3;
    pub const FIRE_COOLDOWN_TICKS: u32 = 60;
    pub const PROJECTILE_SPEED: f32 = 5.5;

    /// Obstacle spawning
    pub const SPAWN_ROLL_MAX: u32 = 1800;
    pub const SPAWN_THRESHOLD_START: u32 = 1780;
    pub const SPAWN_THRESHOLD_FLOOR: u32 = 1000;
    pub const SPAWN_BANDS: u32 = 16;
    pub const SPAWN_X_FRACTION: f32 = 0.99;
    pub const OBSTACLE_SPEED: f32 = 5.5;
    pub const OBSTACLE_VARIANTS: u8 = 4;

    /// Obstacles left of this x are despawned
    pub const OBSTACLE_EXIT_X: f32 = -100.0;

    /// Background texture scroll per second
    pub const BACKGROUND_SCROLL_RATE: f32 = 0.05;
}
