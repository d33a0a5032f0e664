//! # Bullethell Core
//!
//! Collision and combat resolution core for a 2D bullet-hell shooter.
//!
//! The crate owns the only algorithmic part of the game: detecting spatial
//! overlaps between tracked entities (ships and bullets) on a throttled
//! cadence and applying the combat consequences — health loss, despawning,
//! scoring, audio cues, and game-over signaling. Rendering, input, and asset
//! loading live in the host engine, which drives this crate once per frame.
//!
//! ## Quick Start
//!
//! ```rust
//! use bullethell_core::prelude::*;
//! use std::time::Instant;
//!
//! let mut world = World::new();
//! let mut resolver = CollisionResolver::new(CombatConfig::default(), Box::new(LogCueSink));
//! let mut scoreboard = Scoreboard::new();
//!
//! let ship = world.spawn();
//! world.attach_position(ship, Position::new(0.0, 0.0));
//! world.attach_hitbox(ship, Hitbox::new(32, 32));
//! world.attach_faction(ship, Faction::Player);
//! world.attach_health(ship, Health::new(10));
//! world.attach_score_value(ship, ScoreValue(0));
//! resolver.on_entity_created(ship);
//!
//! match resolver.update(&mut world, &mut scoreboard, Instant::now()) {
//!     PassOutcome::PlayerDestroyed => { /* game over */ }
//!     _ => {}
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod audio;
pub mod combat;
pub mod config;
pub mod ecs;
pub mod foundation;
pub mod score;

/// Commonly used types, importable with a single `use`.
pub mod prelude {
    pub use crate::audio::{AudioCue, CueSink, LogCueSink};
    pub use crate::combat::resolver::{CollisionResolver, PassOutcome};
    pub use crate::config::{CombatConfig, Config, ConfigError};
    pub use crate::ecs::components::{Bullet, Faction, Health, Hitbox, Position, ScoreValue};
    pub use crate::ecs::world::{Entity, World};
    pub use crate::foundation::math::Vec2;
    pub use crate::score::Scoreboard;
}
