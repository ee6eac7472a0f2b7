//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod entity;
pub mod input;
pub mod playfield;
pub mod registry;
pub mod session;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionOutcome, resolve};
pub use entity::{Body, Entity, EntityId, EntityKind, Rect};
pub use input::InputEvent;
pub use playfield::Playfield;
pub use registry::{EntityRegistry, Swept};
pub use session::GameSession;
pub use snapshot::{RenderFrame, SpriteKind, SpriteView, background_offset};
pub use spawn::SpawnController;
pub use state::{FireCooldown, GameEvent, Player, RoundState};
pub use tick::TickReport;
