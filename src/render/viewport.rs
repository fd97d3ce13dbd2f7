// src/render/viewport.rs

use crate::error::{MapperError, MapperResult};
use crate::math::types::{Bounds2D, Point2D};

/// Achsengrenzen: Bounding Box der realen Punkte, um `margin` erweitert.
///
/// Sentinel-Punkte werden hier nie übergeben.
pub fn axis_limits<I>(real_points: I, margin: f64) -> MapperResult<Bounds2D>
where
    I: IntoIterator<Item = Point2D>,
{
    let data_bounds = Bounds2D::from_points_iter(real_points).ok_or(
        MapperError::InsufficientPoints {
            expected: 1,
            actual: 0,
        },
    )?;
    Ok(data_bounds.expand(margin))
}

/// Abbildung von Datenkoordinaten auf Pixel (y nach unten).
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    limits: Bounds2D,
    width: f64,
    height: f64,
}

impl Viewport {
    pub fn new(limits: Bounds2D, width: u32, height: u32) -> MapperResult<Self> {
        if !limits.is_valid() || limits.width() <= 0.0 || limits.height() <= 0.0 {
            return Err(MapperError::InvalidConfiguration {
                message: format!("Axis limits {} have no area", limits),
            });
        }
        Ok(Self {
            limits,
            width: f64::from(width),
            height: f64::from(height),
        })
    }

    pub fn limits(&self) -> &Bounds2D {
        &self.limits
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn to_pixel(&self, point: Point2D) -> Point2D {
        let relative = (point - self.limits.min) / (self.limits.max - self.limits.min);
        Point2D::new(relative.x * self.width, (1.0 - relative.y) * self.height)
    }

    pub fn polygon_to_pixels(&self, polygon: &[Point2D]) -> Vec<Point2D> {
        polygon.iter().map(|p| self.to_pixel(*p)).collect()
    }
}
