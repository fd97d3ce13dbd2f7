// src/math/voronoi/classifier.rs

use super::backend::Tessellation;
use crate::data::PointRecord;
use crate::math::types::Point2D;
use rand::Rng;
use std::fmt;
use tracing::{debug, warn};

/// Eine RGB-Füllfarbe, dargestellt als `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(pub [u8; 3]);

impl HexColor {
    /// Drei unabhängige, gleichverteilte Kanäle in [0, 255].
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self([
            rng.random_range(0..=255),
            rng.random_range(0..=255),
            rng.random_range(0..=255),
        ])
    }

    pub fn rgb(&self) -> [u8; 3] {
        self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}

/// Füllung einer realen Zelle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFill {
    /// Beschränkte Zelle eines besuchten Punktes.
    Color(HexColor),
    /// Beschränkte Zelle eines nicht besuchten Punktes: es wird nichts gefüllt.
    NoFill,
    /// Unbeschränkte Zelle: wird übersprungen.
    Unfillable,
}

impl CellFill {
    pub fn is_fillable(&self) -> bool {
        !matches!(self, CellFill::Unfillable)
    }

    pub fn color(&self) -> Option<HexColor> {
        match self {
            CellFill::Color(color) => Some(*color),
            _ => None,
        }
    }
}

/// Render-Anweisung für einen realen Punkt.
#[derive(Debug, Clone)]
pub struct RenderSpec {
    pub index: usize,
    pub label: String,
    pub position: Point2D,
    pub fill: CellFill,
    /// Geschlossenes Zellpolygon; `None` für unbeschränkte Zellen.
    pub polygon: Option<Vec<Point2D>>,
}

impl RenderSpec {
    /// Unbeschränkte Zellen haben keinen Umriss.
    pub fn is_borderless(&self) -> bool {
        self.polygon.is_none()
    }
}

/// Bestimmt für jeden realen Punkt, ob seine Zelle gefüllt wird und womit.
///
/// Nur die ersten `records.len()` Indizes werden betrachtet, Sentinels
/// bekommen nie eine Anweisung. Die Farbe wird einmal pro Punkt gezogen.
pub struct CellClassifier<'a> {
    tessellation: &'a Tessellation,
}

impl<'a> CellClassifier<'a> {
    pub fn new(tessellation: &'a Tessellation) -> Self {
        Self { tessellation }
    }

    pub fn classify<R: Rng + ?Sized>(&self, records: &[PointRecord], rng: &mut R) -> Vec<RenderSpec> {
        let mut specs = Vec::with_capacity(records.len());
        let mut skipped = 0usize;

        for (index, record) in records.iter().enumerate() {
            let polygon = self.tessellation.bounded_polygon(index);
            let fill = match (&polygon, record.visited) {
                (None, _) => {
                    skipped += 1;
                    CellFill::Unfillable
                }
                (Some(_), true) => CellFill::Color(HexColor::random(rng)),
                (Some(_), false) => CellFill::NoFill,
            };

            specs.push(RenderSpec {
                index,
                label: record.label.clone(),
                position: record.position(),
                fill,
                polygon,
            });
        }

        if skipped > 0 {
            warn!("{} real cell(s) are unbounded and will not be filled", skipped);
        }
        debug!(
            "Classified {} cells: {} colored",
            specs.len(),
            specs.iter().filter(|s| s.fill.color().is_some()).count()
        );
        specs
    }
}
