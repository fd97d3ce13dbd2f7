// src/math/types/mod.rs
pub mod bounds;

pub use bounds::*;

// Re-export häufig verwendete externe Typen
pub use glam::DVec2;
pub use spade::Point2;

// Einheitliche Typen für das gesamte Modul
pub type Point2D = DVec2;
pub type SpadePoint = Point2<f64>;

/// Wandelt einen Punkt in die Darstellung von Spade um.
pub fn to_spade_point(point: Point2D) -> SpadePoint {
    SpadePoint::new(point.x, point.y)
}

/// Wandelt einen Spade-Punkt zurück.
pub fn from_spade_point(point: SpadePoint) -> Point2D {
    Point2D::new(point.x, point.y)
}
