//! Outline generation for the round's figures

use glam::Vec2;

use crate::Point;
use crate::sim::ShapeKind;

/// Geometry to fill/stroke, in frame space
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    Circle { center: Point, radius: f32 },
    /// Closed polygon, vertices in drawing order
    Polygon(Vec<Point>),
}

/// Square corners, clockwise from top-left
pub fn square(center: Point, size: f32) -> Vec<Point> {
    let h = size / 2.0;
    vec![
        center + Vec2::new(-h, -h),
        center + Vec2::new(h, -h),
        center + Vec2::new(h, h),
        center + Vec2::new(-h, h),
    ]
}

/// Upward triangle: apex at the top edge, base along the bottom edge
pub fn triangle(center: Point, size: f32) -> Vec<Point> {
    let h = size / 2.0;
    vec![
        center + Vec2::new(0.0, -h),
        center + Vec2::new(-h, h),
        center + Vec2::new(h, h),
    ]
}

/// Outline for a figure of `kind` with the given center and size
pub fn outline(kind: ShapeKind, center: Point, size: f32) -> Outline {
    match kind {
        ShapeKind::Circle => Outline::Circle {
            center,
            radius: size / 2.0,
        },
        ShapeKind::Square => Outline::Polygon(square(center, size)),
        ShapeKind::Triangle => Outline::Polygon(triangle(center, size)),
    }
}
