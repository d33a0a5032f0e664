//! Combat resolution: overlap tests and the throttled pairwise resolver.

pub mod collision;
pub mod resolver;

pub use collision::{boxes_intersect, point_in_box};
pub use resolver::{CollisionResolver, PassOutcome};
