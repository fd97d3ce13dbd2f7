// src/render/font.rs

use crate::config::MapperConfig;
use crate::error::{MapperError, MapperResult};
use ab_glyph::FontVec;
use std::path::Path;
use tracing::debug;

/// Mitgelieferte Schrift, wenn weder `--font` noch eine Systemschrift greift.
const FALLBACK_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/// Übliche Orte für eine serifenlose Schrift.
pub const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Woher die Beschriftungsschrift stammt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    Configured(String),
    System(String),
    Bundled,
}

/// Rohdaten der Beschriftungsschrift.
#[derive(Debug, Clone)]
pub struct LabelFont {
    pub source: FontSource,
    pub data: Vec<u8>,
}

impl LabelFont {
    /// Ein explizit konfigurierter Pfad muss lesbar sein. Sonst gewinnt der
    /// erste brauchbare Kandidat, zuletzt die mitgelieferte Schrift.
    pub fn resolve(explicit: Option<&Path>, candidates: &[&str]) -> MapperResult<Self> {
        if let Some(path) = explicit {
            let data = read_font_bytes(path)?;
            return Ok(Self {
                source: FontSource::Configured(path.display().to_string()),
                data,
            });
        }

        for candidate in candidates {
            let path = Path::new(candidate);
            if !path.is_file() {
                continue;
            }
            match read_font_bytes(path) {
                Ok(data) => {
                    return Ok(Self {
                        source: FontSource::System((*candidate).to_string()),
                        data,
                    });
                }
                Err(e) => debug!("Skipping font '{}': {}", candidate, e),
            }
        }

        Ok(Self::bundled())
    }

    pub fn for_config(config: &MapperConfig) -> MapperResult<Self> {
        let font = Self::resolve(config.font_path.as_deref(), SYSTEM_FONT_CANDIDATES)?;
        debug!("Using label font {:?}", font.source);
        Ok(font)
    }

    pub fn bundled() -> Self {
        Self {
            source: FontSource::Bundled,
            data: FALLBACK_FONT.to_vec(),
        }
    }

    pub fn to_font_vec(&self) -> MapperResult<FontVec> {
        FontVec::try_from_vec(self.data.clone()).map_err(|e| MapperError::InvalidConfiguration {
            message: format!("{:?} is not a usable font: {}", self.source, e),
        })
    }
}

fn read_font_bytes(path: &Path) -> MapperResult<Vec<u8>> {
    let data = std::fs::read(path)?;
    // Parsen, damit ein kaputter Pfad hier auffällt und nicht erst beim Zeichnen
    FontVec::try_from_vec(data.clone()).map_err(|e| MapperError::InvalidConfiguration {
        message: format!("'{}' is not a usable font: {}", path.display(), e),
    })?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_candidates_falls_back_to_bundled() {
        let font = LabelFont::resolve(None, &[]).unwrap();
        assert_eq!(font.source, FontSource::Bundled);
        assert!(font.to_font_vec().is_ok());
    }

    #[test]
    fn test_missing_candidates_are_skipped() {
        let font = LabelFont::resolve(None, &["/nonexistent/font.ttf"]).unwrap();
        assert_eq!(font.source, FontSource::Bundled);
    }

    #[test]
    fn test_configured_path_must_exist() {
        let result = LabelFont::resolve(Some(Path::new("/nonexistent/font.ttf")), &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_configured_path_must_be_a_font() {
        let path = std::env::temp_dir().join(format!("voronoi_mapper_not_a_font_{}.ttf", std::process::id()));
        std::fs::write(&path, b"plain text").unwrap();
        let result = LabelFont::resolve(Some(&path), &[]);
        assert!(matches!(result, Err(MapperError::InvalidConfiguration { .. })));
        std::fs::remove_file(path).unwrap();
    }
}
