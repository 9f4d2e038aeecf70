//! Containment tests between a shape and its hole
//!
//! Each kind has its own predicate. They are deliberately cheap: the circle
//! and square tests are exact, the triangle test is a loose box-style check
//! that defines how forgiving the triangle round is.

use glam::Vec2;

use super::state::{Hole, Shape, ShapeKind};
use crate::Point;

/// Axis-aligned box given by its corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Box of side `size` centered on `center`
    pub fn centered(center: Point, size: f32) -> Self {
        let half = Vec2::splat(size / 2.0);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// True if `other` lies entirely inside this box (edges may touch)
    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        other.min.x >= self.min.x
            && other.max.x <= self.max.x
            && other.min.y >= self.min.y
            && other.max.y <= self.max.y
    }
}

/// Circle fully inside circle: center distance within the radius difference.
///
/// A shape larger than the hole gives a negative threshold and never fits.
pub fn circle_inside(shape_center: Point, shape_size: f32, hole_center: Point, hole_size: f32) -> bool {
    let d = shape_center.distance(hole_center);
    d <= hole_size / 2.0 - shape_size / 2.0
}

/// Square box nested in the hole's box
pub fn square_inside(shape_center: Point, shape_size: f32, hole_center: Point, hole_size: f32) -> bool {
    Bounds::centered(hole_center, hole_size).contains_bounds(&Bounds::centered(shape_center, shape_size))
}

/// Loose triangle check.
///
/// Compares the shape's apex y against the hole's *base* y and the shape's
/// base x-span against the hole's base x-span. The slanted sides and the
/// shape's base y are never checked.
pub fn triangle_inside(shape_center: Point, shape_size: f32, hole_center: Point, hole_size: f32) -> bool {
    let hole_top_y = hole_center.y + hole_size / 2.0;
    let hole_left_x = hole_center.x - hole_size / 2.0;
    let hole_right_x = hole_center.x + hole_size / 2.0;

    let shape_top_y = shape_center.y - shape_size / 2.0;
    let shape_left_x = shape_center.x - shape_size / 2.0;
    let shape_right_x = shape_center.x + shape_size / 2.0;

    shape_top_y < hole_top_y && shape_left_x >= hole_left_x && shape_right_x <= hole_right_x
}

/// Kind-dispatched containment test.
///
/// # Panics
/// If shape and hole kinds differ. A round always builds them together, so a
/// mismatch means the round state was corrupted.
pub fn shape_inside_hole(shape: &Shape, hole: &Hole) -> bool {
    assert_eq!(shape.kind, hole.kind, "shape and hole kinds must match");

    let test: fn(Point, f32, Point, f32) -> bool = match shape.kind {
        ShapeKind::Circle => circle_inside,
        ShapeKind::Square => square_inside,
        ShapeKind::Triangle => triangle_inside,
    };
    test(shape.center, shape.size, hole.center, hole.size)
}
