//! Moving, collidable bodies
//!
//! Obstacles and projectiles share one [`Entity`] type; they differ only in
//! [`EntityKind`], which decides who spawns them and what they collide with.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Stable identifier handed out by the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Placeholder for entities not yet inserted into a registry
    pub const UNASSIGNED: EntityId = EntityId(0);
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Inclusive overlap on both axes; rectangles sharing an edge or corner collide
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}

/// Position, size and constant velocity
///
/// `pos` is the lower-left corner. Size is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    size: Vec2,
    pub vel: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2, vel: Vec2) -> Self {
        Self { pos, size, vel }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Move by one tick of velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn overlaps(&self, other: &Body) -> bool {
        self.rect().overlaps(&other.rect())
    }
}

/// Collision role of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// Asteroid drifting left; `variant` picks the sprite
    Obstacle { variant: u8 },
    /// Player shot travelling right
    Projectile,
}

/// An obstacle or projectile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub body: Body,
}

impl Entity {
    /// Build an entity; the registry assigns its id on insertion
    pub fn new(kind: EntityKind, body: Body) -> Self {
        Self {
            id: EntityId::UNASSIGNED,
            kind,
            body,
        }
    }

    pub fn is_obstacle(&self) -> bool {
        matches!(self.kind, EntityKind::Obstacle { .. })
    }

    /// Sprite variant (obstacles only)
    pub fn variant(&self) -> Option<u8> {
        match self.kind {
            EntityKind::Obstacle { variant } => Some(variant),
            EntityKind::Projectile => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_adds_velocity_once() {
        let mut body = Body::new(
            Vec2::new(780.0, 100.0),
            Vec2::new(40.0, 25.0),
            Vec2::new(-5.5, 0.0),
        );
        body.advance();
        assert_eq!(body.pos, Vec2::new(774.5, 100.0));
        body.advance();
        assert_eq!(body.pos, Vec2::new(769.0, 100.0));
        assert_eq!(body.size(), Vec2::new(40.0, 25.0));
    }

    #[test]
    fn test_overlap_identical_position() {
        let a = Body::new(Vec2::new(10.0, 10.0), Vec2::new(40.0, 25.0), Vec2::ZERO);
        let b = Body::new(Vec2::new(10.0, 10.0), Vec2::new(40.0, 25.0), Vec2::ZERO);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_touching_edges_overlap() {
        let a = Rect::from_pos_size(Vec2::ZERO, Vec2::new(40.0, 25.0));
        let right = Rect::from_pos_size(Vec2::new(40.0, 0.0), Vec2::new(40.0, 25.0));
        let above = Rect::from_pos_size(Vec2::new(0.0, 25.0), Vec2::new(40.0, 25.0));
        let corner = Rect::from_pos_size(Vec2::new(40.0, 25.0), Vec2::new(40.0, 25.0));
        assert!(a.overlaps(&right));
        assert!(right.overlaps(&a));
        assert!(a.overlaps(&above));
        assert!(a.overlaps(&corner));

        let apart = Rect::from_pos_size(Vec2::new(40.5, 0.0), Vec2::new(40.0, 25.0));
        assert!(!a.overlaps(&apart));
    }

    #[test]
    fn test_separated_on_one_axis_do_not_overlap() {
        // Overlap in x, apart in y
        let a = Rect::from_pos_size(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Rect::from_pos_size(Vec2::new(5.0, 50.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_variant_only_for_obstacles() {
        let body = Body::new(Vec2::ZERO, Vec2::ONE, Vec2::ZERO);
        assert_eq!(Entity::new(EntityKind::Obstacle { variant: 3 }, body).variant(), Some(3));
        assert_eq!(Entity::new(EntityKind::Projectile, body).variant(), None);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn separated_rects_never_overlap(
                x in -1000.0f32..1000.0, y in -1000.0f32..1000.0,
                w in 0.1f32..100.0, h in 0.1f32..100.0,
                gap in 0.01f32..100.0, horizontal in any::<bool>(),
            ) {
                let a = Rect::from_pos_size(Vec2::new(x, y), Vec2::new(w, h));
                let offset = if horizontal {
                    Vec2::new(w + gap, 0.0)
                } else {
                    Vec2::new(0.0, h + gap)
                };
                let b = Rect::from_pos_size(Vec2::new(x, y) + offset, Vec2::new(w, h));
                prop_assert!(!a.overlaps(&b));
                prop_assert!(!b.overlaps(&a));
            }

            #[test]
            fn same_position_nonzero_size_always_overlaps(
                x in -1000.0f32..1000.0, y in -1000.0f32..1000.0,
                w in 0.1f32..100.0, h in 0.1f32..100.0,
            ) {
                let a = Rect::from_pos_size(Vec2::new(x, y), Vec2::new(w, h));
                prop_assert!(a.overlaps(&a));
            }
        }
    }
}
