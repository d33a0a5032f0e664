//! World: entity liveness and attribute storage.
//!
//! Attributes live in parallel maps keyed by generational entity ids, so "has
//! attribute" is a membership test and a despawned entity's id can never
//! alias a later entity. Lookups are O(1).

use slotmap::{SecondaryMap, SlotMap};

use super::components::{Bullet, Faction, Health, Hitbox, Position, ScoreValue};

slotmap::new_key_type! {
    /// Opaque entity identifier with generation tracking.
    pub struct Entity;
}

/// Entity liveness plus one attribute map per component type.
#[derive(Default)]
pub struct World {
    entities: SlotMap<Entity, ()>,
    positions: SecondaryMap<Entity, Position>,
    hitboxes: SecondaryMap<Entity, Hitbox>,
    factions: SecondaryMap<Entity, Faction>,
    healths: SecondaryMap<Entity, Health>,
    score_values: SecondaryMap<Entity, ScoreValue>,
    bullets: SecondaryMap<Entity, Bullet>,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new entity with no attributes.
    pub fn spawn(&mut self) -> Entity {
        self.entities.insert(())
    }

    /// Destroy an entity and all its attributes.
    ///
    /// Despawning an already-dead entity is a no-op.
    pub fn despawn(&mut self, entity: Entity) {
        if self.entities.remove(entity).is_none() {
            return;
        }
        // Secondary maps do not observe slotmap removals on their own.
        self.positions.remove(entity);
        self.hitboxes.remove(entity);
        self.factions.remove(entity);
        self.healths.remove(entity);
        self.score_values.remove(entity);
        self.bullets.remove(entity);
    }

    /// Check whether an entity is alive.
    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains_key(entity)
    }

    /// Number of live entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Attach a [`Position`] to a live entity.
    pub fn attach_position(&mut self, entity: Entity, position: Position) {
        self.assert_alive(entity);
        self.positions.insert(entity, position);
    }

    /// Attach a [`Hitbox`] to a live entity.
    pub fn attach_hitbox(&mut self, entity: Entity, hitbox: Hitbox) {
        self.assert_alive(entity);
        self.hitboxes.insert(entity, hitbox);
    }

    /// Attach a [`Faction`] to a live entity.
    pub fn attach_faction(&mut self, entity: Entity, faction: Faction) {
        self.assert_alive(entity);
        self.factions.insert(entity, faction);
    }

    /// Attach [`Health`] to a live entity.
    pub fn attach_health(&mut self, entity: Entity, health: Health) {
        self.assert_alive(entity);
        self.healths.insert(entity, health);
    }

    /// Attach a [`ScoreValue`] to a live entity, marking it as a ship.
    pub fn attach_score_value(&mut self, entity: Entity, score: ScoreValue) {
        self.assert_alive(entity);
        self.score_values.insert(entity, score);
    }

    /// Attach the [`Bullet`] marker to a live entity.
    pub fn attach_bullet(&mut self, entity: Entity, bullet: Bullet) {
        self.assert_alive(entity);
        self.bullets.insert(entity, bullet);
    }

    /// Get an entity's position, if attached.
    pub fn position(&self, entity: Entity) -> Option<&Position> {
        self.positions.get(entity)
    }

    /// Get an entity's hitbox, if attached.
    pub fn hitbox(&self, entity: Entity) -> Option<&Hitbox> {
        self.hitboxes.get(entity)
    }

    /// Get an entity's faction, if attached.
    pub fn faction(&self, entity: Entity) -> Option<Faction> {
        self.factions.get(entity).copied()
    }

    /// Get an entity's health, if attached.
    pub fn health(&self, entity: Entity) -> Option<&Health> {
        self.healths.get(entity)
    }

    /// Get mutable access to an entity's health, if attached.
    pub fn health_mut(&mut self, entity: Entity) -> Option<&mut Health> {
        self.healths.get_mut(entity)
    }

    /// Get an entity's score value, if attached.
    pub fn score_value(&self, entity: Entity) -> Option<ScoreValue> {
        self.score_values.get(entity).copied()
    }

    /// Check whether an entity carries a [`ScoreValue`] (i.e. is a ship).
    pub fn has_score_value(&self, entity: Entity) -> bool {
        self.score_values.contains_key(entity)
    }

    /// Check whether an entity carries the [`Bullet`] marker.
    pub fn has_bullet(&self, entity: Entity) -> bool {
        self.bullets.contains_key(entity)
    }

    fn assert_alive(&self, entity: Entity) {
        assert!(
            self.entities.contains_key(entity),
            "attribute attached to dead entity {entity:?}"
        );
    }
}
