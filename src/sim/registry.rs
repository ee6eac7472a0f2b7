//! Live obstacle and projectile sets
//!
//! Owned by a single `GameSession`. Entities are kept sorted by id (ids only
//! grow) so iteration order is stable for rendering and determinism.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityId};
use super::playfield::Playfield;

/// Entities removed by a bounds sweep
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Swept {
    pub obstacles: Vec<EntityId>,
    pub projectiles: Vec<EntityId>,
}

impl Swept {
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty() && self.projectiles.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityRegistry {
    obstacles: Vec<Entity>,
    projectiles: Vec<Entity>,
    next_id: u32,
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
            projectiles: Vec::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Insert an obstacle, assigning it a fresh id
    pub fn add_obstacle(&mut self, mut obstacle: Entity) -> EntityId {
        debug_assert!(obstacle.is_obstacle());
        obstacle.id = self.allocate_id();
        let id = obstacle.id;
        self.obstacles.push(obstacle);
        id
    }

    /// Insert a projectile, assigning it a fresh id
    ///
    /// The caller enforces the live-projectile cap.
    pub fn add_projectile(&mut self, mut projectile: Entity) -> EntityId {
        debug_assert!(!projectile.is_obstacle());
        projectile.id = self.allocate_id();
        let id = projectile.id;
        self.projectiles.push(projectile);
        id
    }

    /// Remove an entity from whichever set holds it. Absent ids are a no-op.
    pub fn remove(&mut self, id: EntityId) -> bool {
        if let Ok(idx) = self.obstacles.binary_search_by_key(&id, |e| e.id) {
            self.obstacles.remove(idx);
            return true;
        }
        if let Ok(idx) = self.projectiles.binary_search_by_key(&id, |e| e.id) {
            self.projectiles.remove(idx);
            return true;
        }
        false
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.obstacles
            .binary_search_by_key(&id, |e| e.id)
            .ok()
            .map(|idx| &self.obstacles[idx])
            .or_else(|| {
                self.projectiles
                    .binary_search_by_key(&id, |e| e.id)
                    .ok()
                    .map(|idx| &self.projectiles[idx])
            })
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Apply one tick of motion to every live entity
    pub fn advance_all(&mut self) {
        for entity in self.obstacles.iter_mut().chain(self.projectiles.iter_mut()) {
            entity.body.advance();
        }
    }

    /// Drop obstacles left of `exit_x` and projectiles past the right edge
    pub fn sweep(&mut self, playfield: &Playfield, exit_x: f32) -> Swept {
        let mut swept = Swept::default();

        self.obstacles.retain(|o| {
            let keep = o.body.pos.x >= exit_x;
            if !keep {
                swept.obstacles.push(o.id);
            }
            keep
        });
        self.projectiles.retain(|p| {
            let keep = !playfield.past_right_edge(p.body.pos.x);
            if !keep {
                swept.projectiles.push(p.id);
            }
            keep
        });

        swept
    }

    /// Remove every live entity (ids keep counting up)
    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.projectiles.clear();
    }

    pub fn obstacles(&self) -> &[Entity] {
        &self.obstacles
    }

    pub fn projectiles(&self) -> &[Entity] {
        &self.projectiles
    }

    pub fn projectile_count(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty() && self.projectiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{Body, EntityKind};
    use glam::Vec2;

    fn obstacle(x: f32) -> Entity {
        Entity::new(
            EntityKind::Obstacle { variant: 1 },
            Body::new(Vec2::new(x, 100.0), Vec2::new(40.0, 25.0), Vec2::new(-5.5, 0.0)),
        )
    }

    fn projectile(x: f32) -> Entity {
        Entity::new(
            EntityKind::Projectile,
            Body::new(Vec2::new(x, 100.0), Vec2::new(40.0, 25.0), Vec2::new(5.5, 0.0)),
        )
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut registry = EntityRegistry::new();
        let a = registry.add_obstacle(obstacle(500.0));
        let b = registry.add_projectile(projectile(50.0));
        let c = registry.add_obstacle(obstacle(600.0));
        assert!(a < b && b < c);
        assert_ne!(a, EntityId::UNASSIGNED);
        assert_eq!(registry.get(b).map(|e| e.kind), Some(EntityKind::Projectile));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut registry = EntityRegistry::new();
        let a = registry.add_obstacle(obstacle(500.0));
        let b = registry.add_projectile(projectile(50.0));

        assert!(registry.remove(a));
        assert!(!registry.remove(a));
        assert!(!registry.remove(EntityId(999)));
        assert!(registry.contains(b));
        assert_eq!(registry.obstacles().len(), 0);
        assert_eq!(registry.projectile_count(), 1);
    }

    #[test]
    fn test_advance_all_moves_both_sets() {
        let mut registry = EntityRegistry::new();
        let o = registry.add_obstacle(obstacle(500.0));
        let p = registry.add_projectile(projectile(50.0));
        registry.advance_all();
        assert_eq!(registry.get(o).unwrap().body.pos.x, 494.5);
        assert_eq!(registry.get(p).unwrap().body.pos.x, 55.5);
    }

    #[test]
    fn test_sweep_removes_exited_entities_only() {
        let field = Playfield::new(800.0, 600.0);
        let mut registry = EntityRegistry::new();
        let gone_left = registry.add_obstacle(obstacle(-100.5));
        let on_line = registry.add_obstacle(obstacle(-100.0));
        let gone_right = registry.add_projectile(projectile(800.5));
        let at_edge = registry.add_projectile(projectile(800.0));

        let swept = registry.sweep(&field, -100.0);
        assert_eq!(swept.obstacles, vec![gone_left]);
        assert_eq!(swept.projectiles, vec![gone_right]);
        assert!(registry.contains(on_line));
        assert!(registry.contains(at_edge));
    }

    #[test]
    fn test_obstacle_off_right_edge_is_kept() {
        // Obstacles only exit to the left
        let field = Playfield::new(800.0, 600.0);
        let mut registry = EntityRegistry::new();
        registry.add_obstacle(obstacle(900.0));
        assert!(registry.sweep(&field, -100.0).is_empty());
        assert_eq!(registry.obstacles().len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut registry = EntityRegistry::new();
        registry.add_obstacle(obstacle(500.0));
        registry.add_projectile(projectile(50.0));
        registry.clear();
        assert!(registry.is_empty());
        let next = registry.add_obstacle(obstacle(500.0));
        assert_eq!(next, EntityId(3));
    }
}
