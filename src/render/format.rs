// src/render/format.rs

use crate::error::{MapperError, MapperResult};
use image::ImageFormat;
use std::path::PathBuf;

/// Vom Aufrufer gewähltes Ausgabeformat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Pdf,
    Raster(ImageFormat),
}

impl OutputFormat {
    /// Wertet den Formatnamen aus (Groß-/Kleinschreibung egal).
    pub fn parse(name: &str) -> MapperResult<Self> {
        let lower = name.trim().to_ascii_lowercase();
        let format = match lower.as_str() {
            "svg" => OutputFormat::Svg,
            "pdf" => OutputFormat::Pdf,
            "png" => OutputFormat::Raster(ImageFormat::Png),
            "jpg" | "jpeg" => OutputFormat::Raster(ImageFormat::Jpeg),
            "bmp" => OutputFormat::Raster(ImageFormat::Bmp),
            "tif" | "tiff" => OutputFormat::Raster(ImageFormat::Tiff),
            "webp" => OutputFormat::Raster(ImageFormat::WebP),
            _ => {
                return Err(MapperError::UnsupportedFormat {
                    format: name.to_string(),
                });
            }
        };
        Ok(format)
    }

    pub fn is_vector(&self) -> bool {
        matches!(self, OutputFormat::Svg | OutputFormat::Pdf)
    }
}

/// Zieldatei: `stem + "." + format`.
#[derive(Debug, Clone)]
pub struct OutputTarget {
    pub format: OutputFormat,
    pub path: PathBuf,
}

impl OutputTarget {
    pub fn new(stem: &str, format_name: &str) -> MapperResult<Self> {
        let format = OutputFormat::parse(format_name)?;
        Ok(Self {
            format,
            path: PathBuf::from(format!("{}.{}", stem, format_name)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_formats() {
        assert_eq!(OutputFormat::parse("svg").unwrap(), OutputFormat::Svg);
        assert_eq!(
            OutputFormat::parse("PNG").unwrap(),
            OutputFormat::Raster(ImageFormat::Png)
        );
        assert_eq!(
            OutputFormat::parse("jpg").unwrap(),
            OutputFormat::Raster(ImageFormat::Jpeg)
        );
        assert_eq!(OutputFormat::parse("Pdf").unwrap(), OutputFormat::Pdf);
        assert!(OutputFormat::Svg.is_vector());
        assert!(OutputFormat::Pdf.is_vector());
        assert!(!OutputFormat::Raster(ImageFormat::Png).is_vector());
    }

    #[test]
    fn test_unknown_format_rejected() {
        for name in ["xyz", "eps", ""] {
            assert!(matches!(
                OutputFormat::parse(name),
                Err(MapperError::UnsupportedFormat { .. })
            ));
        }
    }

    #[test]
    fn test_target_path_appends_format() {
        let target = OutputTarget::new("out/map", "png").unwrap();
        assert_eq!(target.path, PathBuf::from("out/map.png"));
    }
}
