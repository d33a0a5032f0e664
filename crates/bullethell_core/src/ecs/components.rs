//! Entity attributes
//!
//! Plain data attached to entities through the [`World`](crate::ecs::World).
//! Ships carry [`Health`] and [`ScoreValue`]; bullets carry neither. The
//! combat rules key off attribute presence, not entity kind tags.

use crate::foundation::math::Vec2;

/// Authoritative 2D location of an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// World-space coordinates
    pub coords: Vec2,
}

impl Position {
    /// Create a position from x/y coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            coords: Vec2::new(x, y),
        }
    }
}

/// Axis-aligned collision box, centered on the entity's [`Position`].
///
/// Dimensions are whole pixels; half extents use integer division, so odd
/// sizes lose the remainder on both sides. That matches how the collision
/// tests are tuned and is relied on by the boundary semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hitbox {
    /// Full width in pixels
    pub width: i32,

    /// Full height in pixels
    pub height: i32,
}

impl Hitbox {
    /// Create a hitbox with the given full dimensions.
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Half the width, truncated toward zero.
    pub fn half_width(&self) -> i32 {
        self.width / 2
    }

    /// Half the height, truncated toward zero.
    pub fn half_height(&self) -> i32 {
        self.height / 2
    }
}

/// Which side an entity fights for.
///
/// Exactly two factions exist, and the damage rules are asymmetric between
/// them. Same-faction entities never interact (friendly fire is disabled).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Faction {
    /// Enemy ships and enemy bullets
    Enemy,

    /// The player ship and player bullets
    Player,
}

/// Hit points. Reaching zero or below is lethal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    /// Current hit points
    pub current: i32,
}

impl Health {
    /// Create a health attribute with the given starting hit points.
    pub fn new(current: i32) -> Self {
        Self { current }
    }

    /// Subtract damage. Health may go negative; any value ≤ 0 is dead.
    pub fn damage(&mut self, amount: i32) {
        self.current -= amount;
    }

    /// Check whether this entity is dead.
    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }
}

/// Points awarded to the player when this entity is destroyed.
///
/// Presence of this attribute is what makes an entity a ship as far as the
/// collision rules are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreValue(pub u32);

/// Marker for projectile entities.
///
/// Present in the data model but unused by the current resolution rules,
/// which identify bullets by the *absence* of [`ScoreValue`]. Kept so hosts
/// can tag projectiles without changing the rule table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bullet;
