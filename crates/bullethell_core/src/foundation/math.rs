//! Math utilities and types
//!
//! Provides the fundamental math types for 2D game logic.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;
