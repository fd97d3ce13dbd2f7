// src/math/algorithms/padding.rs

use crate::error::{MapperError, MapperResult};
use crate::math::{
    types::{Bounds2D, Point2D},
    utils::constants::MIN_PADDING_EXTENT,
};
use tracing::debug;

/// Anzahl der Sentinel-Punkte, die angehängt werden.
pub const SENTINEL_COUNT: usize = 4;

/// Reale Koordinaten, gefolgt von genau vier Sentinel-Punkten.
///
/// Die ersten `real_count()` Einträge sind indexgleich mit den Datensätzen.
#[derive(Debug, Clone)]
pub struct PaddedPoints {
    points: Vec<Point2D>,
    real_count: usize,
    padding_distance: f64,
}

impl PaddedPoints {
    pub fn as_slice(&self) -> &[Point2D] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn real_count(&self) -> usize {
        self.real_count
    }

    pub fn real_points(&self) -> &[Point2D] {
        &self.points[..self.real_count]
    }

    pub fn sentinels(&self) -> &[Point2D] {
        &self.points[self.real_count..]
    }

    pub fn is_sentinel(&self, index: usize) -> bool {
        index >= self.real_count
    }

    /// Der Abstand K, bei dem die Sentinels liegen.
    pub fn padding_distance(&self) -> f64 {
        self.padding_distance
    }
}

/// Hängt vier Punkte bei (±K, ±K) an, damit jede reale Zelle geschlossen ist.
///
/// K skaliert mit dem größten Koordinatenbetrag der realen Punkte:
/// `K = factor * (max(|x|, |y|) + MIN_PADDING_EXTENT)`.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryPadder {
    factor: f64,
}

impl BoundaryPadder {
    pub fn new(factor: f64) -> MapperResult<Self> {
        if !factor.is_finite() || factor <= 1.0 {
            return Err(MapperError::InvalidConfiguration {
                message: format!("Padding factor must be greater than 1.0, got {}", factor),
            });
        }
        Ok(Self { factor })
    }

    pub fn padding_distance(&self, real: &[Point2D]) -> MapperResult<f64> {
        let bounds = Bounds2D::from_points_iter(real.iter().copied()).ok_or(
            MapperError::InsufficientPoints {
                expected: 1,
                actual: 0,
            },
        )?;
        Ok(self.factor * (bounds.max_abs_coordinate() + MIN_PADDING_EXTENT))
    }

    pub fn pad(&self, real: &[Point2D]) -> MapperResult<PaddedPoints> {
        let distance = self.padding_distance(real)?;
        if !distance.is_finite() {
            return Err(MapperError::DegenerateInput {
                real_points: real.len(),
                reason: "coordinate range too large to place sentinel points".to_string(),
            });
        }

        let mut points = Vec::with_capacity(real.len() + SENTINEL_COUNT);
        points.extend_from_slice(real);
        points.extend_from_slice(&[
            Point2D::new(distance, distance),
            Point2D::new(-distance, distance),
            Point2D::new(distance, -distance),
            Point2D::new(-distance, -distance),
        ]);

        debug!(
            "Padded {} real points with {} sentinels at distance {}",
            real.len(),
            SENTINEL_COUNT,
            distance
        );

        Ok(PaddedPoints {
            points,
            real_count: real.len(),
            padding_distance: distance,
        })
    }
}
