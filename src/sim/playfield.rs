//! Playfield bounds
//!
//! Dimensions come from the rendering surface; the simulation only reads them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The bounded area entities live in (origin at lower-left, y up)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether a box with these half-extents fits inside the playfield
    pub fn fits(&self, half_extents: Vec2) -> bool {
        self.width >= half_extents.x * 2.0 && self.height >= half_extents.y * 2.0
    }

    /// Snap a position onto `[half, size - half]` on each axis
    ///
    /// Below the lower bound wins when the box does not fit.
    pub fn clamp(&self, pos: Vec2, half_extents: Vec2) -> Vec2 {
        Vec2::new(
            clamp_axis(pos.x, half_extents.x, self.width),
            clamp_axis(pos.y, half_extents.y, self.height),
        )
    }

    /// Y coordinate of spawn lane `band` (1-based) out of `bands`
    pub fn band_y(&self, band: u32, bands: u32) -> f32 {
        band as f32 * self.height / bands as f32
    }

    /// Projectiles despawn once past the right edge
    pub fn past_right_edge(&self, x: f32) -> bool {
        x > self.width
    }
}

fn clamp_axis(value: f32, half: f32, extent: f32) -> f32 {
    let upper = extent - half;
    if value < half {
        half
    } else if value > upper {
        upper
    } else {
        value
    }
}
