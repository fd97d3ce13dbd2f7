// src/data/mod.rs
pub mod loader;

pub use self::loader::{PointSetLoader, VISITED_MARKER};

use crate::math::types::Point2D;

/// Ein beschrifteter Punkt aus der Eingabetabelle.
///
/// Die Identität eines Datensatzes ist seine Position in der geladenen Sequenz;
/// nach dem Laden ändern sich höchstens `x`/`y` (Fisheye).
#[derive(Debug, Clone, PartialEq)]
pub struct PointRecord {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub visited: bool,
}

impl PointRecord {
    pub fn new(label: impl Into<String>, x: f64, y: f64, visited: bool) -> Self {
        Self {
            label: label.into(),
            x,
            y,
            visited,
        }
    }

    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    pub fn set_position(&mut self, position: Point2D) {
        self.x = position.x;
        self.y = position.y;
    }
}
