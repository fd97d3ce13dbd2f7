// src/math/algorithms/fisheye.rs

//! Radiale Fisheye-Projektion um einen Fokuspunkt.
//!
//! Jeder Punkt wird komponentenweise durch sein quadriertes Abstandsmaß zum
//! Fokuspunkt geteilt: nahe Punkte werden vergrößert, ferne gestaucht.
//! Punkte mit Abstand null (der Fokuspunkt selbst) bleiben unverändert.

use crate::data::PointRecord;
use crate::error::{MapperError, MapperResult};
use crate::math::types::Point2D;
use tracing::{debug, info};

/// Fisheye-Transformation, die um einen über seinen Namen gewählten Punkt zentriert ist.
#[derive(Debug, Clone)]
pub struct FisheyeTransform {
    focal_label: String,
}

impl FisheyeTransform {
    pub fn new(focal_label: impl Into<String>) -> Self {
        Self {
            focal_label: focal_label.into(),
        }
    }

    /// Liefert `None`, wenn kein (oder ein leerer) Fokusname gegeben ist.
    pub fn from_optional_label(label: Option<&str>) -> Option<Self> {
        label.filter(|l| !l.is_empty()).map(Self::new)
    }

    pub fn focal_label(&self) -> &str {
        &self.focal_label
    }

    /// Sucht den Fokuspunkt. Bei doppelten Namen gewinnt der erste Treffer.
    pub fn locate_focus(&self, records: &[PointRecord]) -> MapperResult<Point2D> {
        records
            .iter()
            .find(|record| record.label == self.focal_label)
            .map(PointRecord::position)
            .ok_or_else(|| MapperError::FocalPointNotFound {
                label: self.focal_label.clone(),
                available: records.len(),
            })
    }

    /// Transformiert alle Datensätze an Ort und Stelle.
    pub fn apply(&self, records: &mut [PointRecord]) -> MapperResult<()> {
        let focus = self.locate_focus(records)?;
        let mut unchanged = 0usize;

        for record in records.iter_mut() {
            let original = record.position();
            let transformed = Self::project(original, focus);
            if transformed == original {
                unchanged += 1;
            }
            record.set_position(transformed);
        }

        info!(
            "Fisheye applied around '{}' at ({}, {})",
            self.focal_label, focus.x, focus.y
        );
        debug!("{} point(s) kept their coordinates", unchanged);
        Ok(())
    }

    /// Projektion eines einzelnen Punktes.
    ///
    /// `d² == 0` ist nicht definiert; solche Punkte werden nicht verändert.
    pub fn project(point: Point2D, focus: Point2D) -> Point2D {
        let distance_sq = point.distance_squared(focus);
        if distance_sq == 0.0 {
            point
        } else {
            point / distance_sq
        }
    }
}

/// Wendet die optionale Fisheye-Transformation an; ohne Fokus bleibt alles unverändert.
pub fn apply_optional_fisheye(
    records: &mut [PointRecord],
    focal_label: Option<&str>,
) -> MapperResult<()> {
    match FisheyeTransform::from_optional_label(focal_label) {
        Some(transform) => transform.apply(records),
        None => Ok(()),
    }
}
