// src/config.rs

use crate::error::{MapperError, MapperResult};
use glam::DVec2;
use std::path::PathBuf;

/// Konfiguration für einen einzelnen Render-Lauf.
#[derive(Debug, Clone)]
pub struct MapperConfig {
    /// Rand (in Datenkoordinaten), um den die Bounding Box der realen Punkte
    /// für die Achsengrenzen erweitert wird.
    pub axis_margin: f64,
    /// Sicherheitsfaktor für die Sentinel-Punkte. Muss größer als 1 sein,
    /// damit die Sentinels die realen Daten strikt umschließen.
    pub padding_factor: f64,
    /// Versatz der Beschriftung relativ zum Marker (Datenkoordinaten).
    pub label_offset: DVec2,
    /// Breite der Ausgabe in Pixeln.
    pub canvas_width: u32,
    /// Höhe der Ausgabe in Pixeln.
    pub canvas_height: u32,
    pub marker_radius: f64,
    pub stroke_width: f64,
    pub font_size: f64,
    /// Optionaler Seed für die Farbwahl.
    pub seed: Option<u64>,
    /// TrueType-Schrift für Raster-Beschriftungen.
    pub font_path: Option<PathBuf>,
    /// Trennzeichen der Eingabetabelle.
    pub delimiter: u8,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            axis_margin: 0.6,
            padding_factor: 10.0,
            label_offset: DVec2::new(-0.1, 0.1),
            // 20 x 16 Zoll bei 100 dpi
            canvas_width: 2000,
            canvas_height: 1600,
            marker_radius: 5.0,
            stroke_width: 1.5,
            font_size: 16.0,
            seed: None,
            font_path: None,
            delimiter: b',',
        }
    }
}

impl MapperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.axis_margin = margin;
        self
    }

    pub fn with_padding_factor(mut self, factor: f64) -> Self {
        self.padding_factor = factor;
        self
    }

    pub fn with_label_offset(mut self, offset: DVec2) -> Self {
        self.label_offset = offset;
        self
    }

    pub fn with_canvas_size(mut self, width: u32, height: u32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_font(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(path.into());
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn validate(&self) -> MapperResult<()> {
        if !self.axis_margin.is_finite() || self.axis_margin <= 0.0 {
            return Err(MapperError::InvalidConfiguration {
                message: format!("Axis margin must be positive, got {}", self.axis_margin),
            });
        }
        if !self.padding_factor.is_finite() || self.padding_factor <= 1.0 {
            return Err(MapperError::InvalidConfiguration {
                message: format!(
                    "Padding factor must be greater than 1.0, got {}",
                    self.padding_factor
                ),
            });
        }
        if !self.label_offset.is_finite() {
            return Err(MapperError::InvalidConfiguration {
                message: "Label offset must be finite".to_string(),
            });
        }
        if self.canvas_width < 16 || self.canvas_height < 16 {
            return Err(MapperError::InvalidConfiguration {
                message: format!(
                    "Canvas must be at least 16x16 pixels, got {}x{}",
                    self.canvas_width, self.canvas_height
                ),
            });
        }
        if self.marker_radius <= 0.0 || self.stroke_width <= 0.0 || self.font_size <= 0.0 {
            return Err(MapperError::InvalidConfiguration {
                message: "Marker radius, stroke width and font size must be positive".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(MapperConfig::default().validate().is_ok());
    }

    #[test]
    fn test_padding_factor_must_exceed_one() {
        let config = MapperConfig::new().with_padding_factor(1.0);
        assert!(matches!(
            config.validate(),
            Err(MapperError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_margin_must_be_positive() {
        let config = MapperConfig::new().with_margin(0.0);
        assert!(config.validate().is_err());
        let config = MapperConfig::new().with_margin(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tiny_canvas_rejected() {
        let config = MapperConfig::new().with_canvas_size(8, 800);
        assert!(config.validate().is_err());
    }
}
