// src/math/types/bounds.rs

use crate::error::{MapperError, MapperResult};
use crate::math::types::Point2D;
use std::fmt;

/// 2D Bounding Box (Axis-Aligned Bounding Box)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2D {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds2D {
    /// Erstellt eine neue Bounding Box
    pub fn new(min: Point2D, max: Point2D) -> MapperResult<Self> {
        if min.x > max.x || min.y > max.y {
            return Err(MapperError::InvalidConfiguration {
                message: format!("Invalid bounds: min {:?} > max {:?}", min, max),
            });
        }

        Ok(Self { min, max })
    }

    /// Erstellt eine Bounding Box die alle Punkte umschließt
    pub fn from_points_iter<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut points_iter = points.into_iter();
        let first_point = points_iter.next()?;

        let mut min = first_point;
        let mut max = first_point;

        for point in points_iter {
            min = min.min(point);
            max = max.max(point);
        }

        Some(Self { min, max })
    }

    /// Prüft ob die Bounding Box gültig ist
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.is_finite() && self.max.is_finite()
    }

    /// Breite der Bounding Box
    pub fn width(&self) -> f64 {
        (self.max.x - self.min.x).max(0.0)
    }

    /// Höhe der Bounding Box
    pub fn height(&self) -> f64 {
        (self.max.y - self.min.y).max(0.0)
    }

    /// Größter Betrag einer Koordinate innerhalb der Box.
    pub fn max_abs_coordinate(&self) -> f64 {
        self.min.abs().max_element().max(self.max.abs().max_element())
    }

    /// Prüft ob ein Punkt in der Bounding Box liegt
    pub fn contains_point(&self, point: Point2D) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Erweitert die Bounding Box um einen Margin
    pub fn expand(&self, margin: f64) -> Self {
        Self {
            min: Point2D::new(self.min.x - margin, self.min.y - margin),
            max: Point2D::new(self.max.x + margin, self.max.y + margin),
        }
    }

    /// Erzeugt die vier Eckpunkte der Bounding Box (CCW)
    pub fn corners(&self) -> [Point2D; 4] {
        [
            self.min,                             // unten links
            Point2D::new(self.max.x, self.min.y), // unten rechts
            self.max,                             // oben rechts
            Point2D::new(self.min.x, self.max.y), // oben links
        ]
    }
}

impl fmt::Display for Bounds2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bounds2D(({}, {}) to ({}, {}))",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}
