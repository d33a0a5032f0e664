//! Pure overlap tests over Position + Hitbox pairs.
//!
//! Two deliberately different boundary rules live here. Box–box overlap is
//! strict: boxes that only share an edge do not intersect. Point-in-box is
//! boundary-inclusive: a point exactly on the edge counts as inside. The
//! asymmetry is part of the game's tuned feel and must not be "fixed" to make
//! the two tests consistent.

use crate::ecs::components::{Hitbox, Position};

/// Test whether two axis-aligned hitboxes overlap.
///
/// Overlap requires both axes' ranges to intersect with strict inequalities;
/// touching edges are not a hit. Half extents come from integer division, so
/// odd dimensions shrink rather than round up.
pub fn boxes_intersect(
    pos_a: &Position,
    box_a: &Hitbox,
    pos_b: &Position,
    box_b: &Hitbox,
) -> bool {
    let half_w_a = box_a.half_width() as f32;
    let half_h_a = box_a.half_height() as f32;
    let half_w_b = box_b.half_width() as f32;
    let half_h_b = box_b.half_height() as f32;

    let a = pos_a.coords;
    let b = pos_b.coords;

    a.x - half_w_a < b.x + half_w_b
        && a.x + half_w_a > b.x - half_w_b
        && a.y - half_h_a < b.y + half_h_b
        && a.y + half_h_a > b.y - half_h_b
}

/// Test whether a point lies within an axis-aligned hitbox.
///
/// The point is outside only when strictly beyond an edge, so a point exactly
/// on the boundary counts as inside.
pub fn point_in_box(point: &Position, center: &Position, hitbox: &Hitbox) -> bool {
    let half_w = hitbox.half_width() as f32;
    let half_h = hitbox.half_height() as f32;

    let p = point.coords;
    let c = center.coords;

    !(p.y > c.y + half_h || p.y < c.y - half_h || p.x > c.x + half_w || p.x < c.x - half_w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_overlapping_boxes_intersect() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(6.0, 3.0);
        let size = Hitbox::new(10, 10);
        assert!(boxes_intersect(&a, &size, &b, &size));
        assert!(boxes_intersect(&b, &size, &a, &size));
    }

    #[test]
    fn test_edge_touching_boxes_do_not_intersect() {
        // Half extents 5 + 5 exactly span the 10-unit gap.
        let a = Position::new(0.0, 0.0);
        let b = Position::new(10.0, 0.0);
        let size = Hitbox::new(10, 10);
        assert!(!boxes_intersect(&a, &size, &b, &size));
    }

    #[test]
    fn test_separated_on_one_axis_only() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(0.0, 30.0);
        let size = Hitbox::new(10, 10);
        assert!(!boxes_intersect(&a, &size, &b, &size));
    }

    #[test]
    fn test_contained_box_intersects() {
        let outer_pos = Position::new(0.0, 0.0);
        let outer = Hitbox::new(100, 100);
        let inner_pos = Position::new(5.0, -5.0);
        let inner = Hitbox::new(4, 4);
        assert!(boxes_intersect(&outer_pos, &outer, &inner_pos, &inner));
    }

    #[test]
    fn test_disjoint_by_construction_never_intersect() {
        let mut rng = rand::thread_rng();
        let size = Hitbox::new(10, 10);
        for _ in 0..200 {
            let ax: f32 = rng.gen_range(-100.0..100.0);
            let ay: f32 = rng.gen_range(-100.0..100.0);
            let gap: f32 = rng.gen_range(0.001..50.0);
            // Separate along x past the summed half extents.
            let bx = ax + 10.0 + gap;
            let by: f32 = rng.gen_range(-100.0..100.0);
            let a = Position::new(ax, ay);
            let b = Position::new(bx, by);
            assert!(!boxes_intersect(&a, &size, &b, &size));
        }
    }

    #[test]
    fn test_point_inside_box() {
        let center = Position::new(0.0, 0.0);
        let hitbox = Hitbox::new(10, 10);
        assert!(point_in_box(&Position::new(0.0, 0.0), &center, &hitbox));
        assert!(point_in_box(&Position::new(3.0, -4.0), &center, &hitbox));
    }

    #[test]
    fn test_point_on_boundary_is_inside() {
        let center = Position::new(0.0, 0.0);
        let hitbox = Hitbox::new(10, 10);
        assert!(point_in_box(&Position::new(5.0, 0.0), &center, &hitbox));
        assert!(point_in_box(&Position::new(-5.0, 5.0), &center, &hitbox));
        assert!(point_in_box(&Position::new(5.0, 5.0), &center, &hitbox));
    }

    #[test]
    fn test_point_beyond_edge_is_outside() {
        let center = Position::new(0.0, 0.0);
        let hitbox = Hitbox::new(10, 10);
        assert!(!point_in_box(&Position::new(5.1, 0.0), &center, &hitbox));
        assert!(!point_in_box(&Position::new(0.0, -5.1), &center, &hitbox));
    }

    #[test]
    fn test_odd_dimensions_truncate() {
        // Width 11 gives half extent 5, not 5.5.
        let center = Position::new(0.0, 0.0);
        let hitbox = Hitbox::new(11, 11);
        assert!(point_in_box(&Position::new(5.0, 0.0), &center, &hitbox));
        assert!(!point_in_box(&Position::new(5.4, 0.0), &center, &hitbox));
    }
}
