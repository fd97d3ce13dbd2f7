// src/render/pdf.rs

use super::{canvas::Canvas, font::LabelFont, vector::SvgCanvas};
use crate::config::MapperConfig;
use crate::error::{MapperError, MapperResult};
use crate::math::{types::Point2D, voronoi::HexColor};
use std::sync::Arc;
use svg2pdf::usvg::{self, fontdb};
use svg2pdf::{ConversionOptions, PageOptions};

/// Zeichnet in ein SVG-Dokument und wandelt es beim Kodieren in PDF um.
///
/// Beschriftungen werden mit der Beschriftungsschrift in Pfade umgesetzt, die
/// PDF hängt damit nicht von installierten Schriften ab.
pub struct PdfCanvas {
    document: SvgCanvas,
    fonts: fontdb::Database,
}

impl PdfCanvas {
    pub fn new(config: &MapperConfig, font: &LabelFont) -> Self {
        let mut fonts = fontdb::Database::new();
        fonts.load_font_data(font.data.clone());
        // Das Stylesheet verlangt `sans-serif`; die geladene Schrift übernimmt.
        let family = fonts
            .faces()
            .next()
            .and_then(|face| face.families.first())
            .map(|(name, _)| name.clone());
        if let Some(family) = family {
            fonts.set_sans_serif_family(family);
        }

        Self {
            document: SvgCanvas::new(config),
            fonts,
        }
    }
}

impl Canvas for PdfCanvas {
    fn fill_polygon(&mut self, vertices: &[Point2D], color: HexColor) {
        self.document.fill_polygon(vertices, color);
    }

    fn stroke_polygon(&mut self, vertices: &[Point2D]) {
        self.document.stroke_polygon(vertices);
    }

    fn draw_marker(&mut self, center: Point2D) {
        self.document.draw_marker(center);
    }

    fn draw_label(&mut self, anchor: Point2D, text: &str) {
        self.document.draw_label(anchor, text);
    }

    fn encode(self) -> MapperResult<Vec<u8>> {
        let svg_bytes = self.document.encode()?;
        let svg_text = String::from_utf8(svg_bytes).map_err(|e| MapperError::Encoding {
            message: format!("SVG document is not UTF-8: {}", e),
        })?;

        let options = usvg::Options {
            fontdb: Arc::new(self.fonts),
            ..usvg::Options::default()
        };
        let tree = usvg::Tree::from_str(&svg_text, &options).map_err(|e| MapperError::Encoding {
            message: format!("cannot parse SVG for PDF conversion: {}", e),
        })?;

        svg2pdf::to_pdf(&tree, ConversionOptions::default(), PageOptions::default()).map_err(|e| {
            MapperError::Encoding {
                message: format!("PDF conversion failed: {:?}", e),
            }
        })
    }
}
