//! Entities and their attached attributes.
//!
//! Entities are opaque generational keys; "having" an attribute means the
//! corresponding attribute map contains the key. Which rules apply to a pair
//! of entities is decided entirely by which attributes each one carries.

pub mod components;
pub mod world;

pub use components::{Bullet, Faction, Health, Hitbox, Position, ScoreValue};
pub use world::{Entity, World};
