//! The collision resolver: throttled pairwise scan plus the faction rule
//! table.
//!
//! The resolver keeps its own ordered list of tracked entities, fed by the
//! host's created/removed notifications. Each executed pass walks every
//! unordered pair once, classifies it by which entities carry a
//! [`ScoreValue`] (ships) and which do not (bullets), runs the matching
//! overlap test, and applies damage, despawns, scoring, and audio cues.
//!
//! O(n²) per pass is deliberate: entity counts are small and the throttle
//! bounds pass frequency independent of frame rate.

use std::time::Instant;

use log::{debug, info};

use crate::audio::{AudioCue, CueSink};
use crate::config::CombatConfig;
use crate::ecs::components::{Faction, Health, Hitbox, Position, ScoreValue};
use crate::ecs::world::{Entity, World};
use crate::foundation::time::Throttle;
use crate::score::Scoreboard;

use super::collision::{boxes_intersect, point_in_box};

/// Result of one resolver tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    /// The throttle interval had not elapsed; nothing ran.
    Skipped,

    /// A full pairwise pass ran to completion.
    Completed,

    /// The player ship was destroyed; the pass halted early. Game over.
    PlayerDestroyed,
}

/// Whether the pass continues after a resolved pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    Continue,
    Halt,
}

/// Pairwise collision detection and combat resolution over tracked entities.
///
/// Tracked entities must carry [`Position`], [`Hitbox`], and [`Faction`];
/// ships additionally carry [`Health`] and [`ScoreValue`]. A tracked entity
/// missing a required attribute is a host bug and panics.
pub struct CollisionResolver {
    tracked: Vec<Entity>,
    throttle: Throttle,
    config: CombatConfig,
    audio: Box<dyn CueSink>,
}

impl CollisionResolver {
    /// Create a resolver with the given tuning and cue sink.
    pub fn new(config: CombatConfig, audio: Box<dyn CueSink>) -> Self {
        Self {
            tracked: Vec::new(),
            throttle: Throttle::new(config.pass_interval()),
            config,
            audio,
        }
    }

    /// Start tracking an entity.
    ///
    /// The host calls this when an entity gains the qualifying attribute set
    /// (Position, Hitbox, Faction). Order of notification is the order pairs
    /// are scanned in.
    pub fn on_entity_created(&mut self, entity: Entity) {
        self.tracked.push(entity);
    }

    /// Stop tracking an entity.
    ///
    /// Idempotent: removing an entity that is not tracked is a no-op.
    pub fn on_entity_removed(&mut self, entity: Entity) {
        if let Some(index) = self.tracked.iter().position(|&e| e == entity) {
            self.tracked.remove(index);
        }
    }

    /// Number of entities currently tracked.
    pub fn tracked_count(&self) -> usize {
        self.tracked.len()
    }

    /// Run one tick.
    ///
    /// No-op unless the configured interval has elapsed since the last
    /// executed pass (the first tick always runs). A lethal hit on the player
    /// ship halts the pass immediately and reports
    /// [`PassOutcome::PlayerDestroyed`]; the resolver owns no game-over UI.
    pub fn update(
        &mut self,
        world: &mut World,
        scoreboard: &mut Scoreboard,
        now: Instant,
    ) -> PassOutcome {
        if !self.throttle.ready(now) {
            return PassOutcome::Skipped;
        }
        let outcome = self.run_pass(world, scoreboard);
        // Entities despawned mid-pass were already skipped by the liveness
        // checks; drop them from the list now that the pass is over.
        self.tracked.retain(|&e| world.contains(e));
        outcome
    }

    /// One full pairwise scan over a stable snapshot of the tracked list.
    ///
    /// Despawns take effect in the world immediately; the liveness checks
    /// ensure a pair never involves an entity deleted earlier in the same
    /// pass, matching a forward scan over a list that shrinks in place.
    fn run_pass(&self, world: &mut World, scoreboard: &mut Scoreboard) -> PassOutcome {
        debug!("resolution pass over {} tracked entities", self.tracked.len());

        for i in 0..self.tracked.len() {
            let first = self.tracked[i];
            for j in (i + 1)..self.tracked.len() {
                if !world.contains(first) {
                    break;
                }
                let second = self.tracked[j];
                if !world.contains(second) {
                    continue;
                }
                if self.resolve_pair(world, scoreboard, first, second) == Control::Halt {
                    return PassOutcome::PlayerDestroyed;
                }
            }
        }
        PassOutcome::Completed
    }

    /// Classify one pair and apply the matching rule.
    fn resolve_pair(
        &self,
        world: &mut World,
        scoreboard: &mut Scoreboard,
        first: Entity,
        second: Entity,
    ) -> Control {
        match (world.has_score_value(first), world.has_score_value(second)) {
            // Two bullets pass through each other; no test is even run.
            (false, false) => Control::Continue,
            (true, false) => self.resolve_ship_bullet(world, scoreboard, first, second),
            (false, true) => self.resolve_ship_bullet(world, scoreboard, second, first),
            (true, true) => self.resolve_ship_ship(world, scoreboard, first, second),
        }
    }

    /// Ship vs bullet: the bullet is a point tested against the ship's box.
    fn resolve_ship_bullet(
        &self,
        world: &mut World,
        scoreboard: &mut Scoreboard,
        ship: Entity,
        bullet: Entity,
    ) -> Control {
        let bullet_pos = self.position_of(world, bullet);
        let ship_pos = self.position_of(world, ship);
        let ship_box = self.hitbox_of(world, ship);
        if !point_in_box(&bullet_pos, &ship_pos, &ship_box) {
            return Control::Continue;
        }

        match (self.faction_of(world, ship), self.faction_of(world, bullet)) {
            (Faction::Enemy, Faction::Player) => {
                let health = self.health_of_mut(world, ship);
                health.damage(self.config.player_bullet_damage);
                if health.is_dead() {
                    let points = self.score_value_of(world, ship).0;
                    scoreboard.add(points);
                    world.despawn(ship);
                    self.audio.play(AudioCue::Explosion);
                    info!("enemy ship destroyed, +{points} points");
                }
                // The bullet is spent whether or not the hit was lethal.
                world.despawn(bullet);
                Control::Continue
            }
            (Faction::Player, Faction::Enemy) => {
                let health = self.health_of_mut(world, ship);
                health.damage(self.config.enemy_bullet_damage);
                if health.is_dead() {
                    world.despawn(ship);
                    self.audio.play(AudioCue::Explosion);
                    info!("player ship destroyed by enemy fire");
                    return Control::Halt;
                }
                world.despawn(bullet);
                Control::Continue
            }
            // Friendly fire is disabled; same-faction hits do nothing.
            _ => Control::Continue,
        }
    }

    /// Ship vs ship: box–box test, then ram damage to both sides.
    ///
    /// The player takes its damage first; a lethal ram halts the pass before
    /// the enemy's counter-damage is applied.
    fn resolve_ship_ship(
        &self,
        world: &mut World,
        scoreboard: &mut Scoreboard,
        first: Entity,
        second: Entity,
    ) -> Control {
        let first_faction = self.faction_of(world, first);
        let second_faction = self.faction_of(world, second);
        if first_faction == second_faction {
            return Control::Continue;
        }

        let first_pos = self.position_of(world, first);
        let first_box = self.hitbox_of(world, first);
        let second_pos = self.position_of(world, second);
        let second_box = self.hitbox_of(world, second);
        if !boxes_intersect(&first_pos, &first_box, &second_pos, &second_box) {
            return Control::Continue;
        }

        let (player, enemy) = if first_faction == Faction::Player {
            (first, second)
        } else {
            (second, first)
        };

        let player_health = self.health_of_mut(world, player);
        player_health.damage(self.config.ram_damage);
        if player_health.is_dead() {
            world.despawn(player);
            self.audio.play(AudioCue::Death);
            info!("player ship destroyed in collision");
            return Control::Halt;
        }

        let enemy_health = self.health_of_mut(world, enemy);
        enemy_health.damage(self.config.ram_damage);
        if enemy_health.is_dead() {
            let points = self.score_value_of(world, enemy).0;
            scoreboard.add(points);
            world.despawn(enemy);
            self.audio.play(AudioCue::Explosion);
            info!("enemy ship destroyed in collision, +{points} points");
        }
        Control::Continue
    }

    // Attribute accessors for tracked entities. Absence means the host let
    // the tracked list drift out of sync with the world, which is a bug we
    // surface immediately rather than resolve around.

    fn position_of(&self, world: &World, entity: Entity) -> Position {
        *world
            .position(entity)
            .unwrap_or_else(|| panic!("tracked entity {entity:?} has no Position"))
    }

    fn hitbox_of(&self, world: &World, entity: Entity) -> Hitbox {
        *world
            .hitbox(entity)
            .unwrap_or_else(|| panic!("tracked entity {entity:?} has no Hitbox"))
    }

    fn faction_of(&self, world: &World, entity: Entity) -> Faction {
        world
            .faction(entity)
            .unwrap_or_else(|| panic!("tracked entity {entity:?} has no Faction"))
    }

    fn health_of_mut<'w>(&self, world: &'w mut World, entity: Entity) -> &'w mut Health {
        world
            .health_mut(entity)
            .unwrap_or_else(|| panic!("tracked ship {entity:?} has no Health"))
    }

    fn score_value_of(&self, world: &World, entity: Entity) -> ScoreValue {
        world
            .score_value(entity)
            .unwrap_or_else(|| panic!("tracked ship {entity:?} has no ScoreValue"))
    }
}
