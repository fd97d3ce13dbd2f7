// src/render/canvas.rs

use crate::error::MapperResult;
use crate::math::{types::Point2D, voronoi::HexColor};

/// Zeichenfläche in Pixelkoordinaten (Ursprung oben links).
///
/// Der Figure-Renderer entscheidet was gezeichnet wird, die Canvas nur wie.
pub trait Canvas {
    /// Füllt ein geschlossenes Polygon ohne Umriss.
    fn fill_polygon(&mut self, vertices: &[Point2D], color: HexColor);

    /// Zeichnet den Umriss eines geschlossenen Polygons.
    fn stroke_polygon(&mut self, vertices: &[Point2D]);

    fn draw_marker(&mut self, center: Point2D);

    /// `anchor` ist der linke Punkt der Grundlinie.
    fn draw_label(&mut self, anchor: Point2D, text: &str);

    /// Kodiert die fertige Zeichnung in Dateiinhalt.
    fn encode(self) -> MapperResult<Vec<u8>>;
}
