// src/render/vector.rs
use super::canvas::Canvas;
use crate::config::MapperConfig;
use crate::error::MapperResult;
use crate::math::{types::Point2D, voronoi::HexColor};
use svg::{Document, Node};
use svg::node::element::{Circle, Polygon, Rectangle, Style, Text};

/// Ein Helfer zum Erstellen einer SVG-Datei.
pub struct SvgCanvas {
    document: Document,
    marker_radius: f64,
}

impl SvgCanvas {
    /// Erstellt ein neues SVG-Grundgerüst mit Stil und weißem Hintergrund.
    pub fn new(config: &MapperConfig) -> Self {
        let width = config.canvas_width;
        let height = config.canvas_height;
        let stroke_w = config.stroke_width;
        let marker_stroke_w = stroke_w * 0.5;
        let font_size = config.font_size;

        let style = Style::new(format!(
            r#"
    .background {{ fill: #ffffff; }}
    .cell-fill {{ stroke: none; }}
    .cell-edge {{ fill: none; stroke: #000000; stroke-width: {stroke_w}; stroke-linejoin: round; }}
    .marker {{ fill: #000000; stroke: #000000; stroke-width: {marker_stroke_w}; }}
    .label {{ font-family: sans-serif; font-size: {font_size}px; fill: #000000; }}
"#
        ));

        let document = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0, 0, width, height))
            .add(style)
            .add(
                Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", width)
                    .set("height", height)
                    .set("class", "background"),
            );

        Self {
            document,
            marker_radius: config.marker_radius,
        }
    }

    fn points_attribute(vertices: &[Point2D]) -> String {
        vertices
            .iter()
            .map(|p| format!("{:.3},{:.3}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Canvas for SvgCanvas {
    fn fill_polygon(&mut self, vertices: &[Point2D], color: HexColor) {
        if vertices.len() < 3 {
            return;
        }
        let polygon = Polygon::new()
            .set("points", Self::points_attribute(vertices))
            .set("fill", color.to_string())
            .set("class", "cell-fill");
        self.document.append(polygon);
    }

    fn stroke_polygon(&mut self, vertices: &[Point2D]) {
        if vertices.len() < 2 {
            return;
        }
        let polygon = Polygon::new()
            .set("points", Self::points_attribute(vertices))
            .set("class", "cell-edge");
        self.document.append(polygon);
    }

    fn draw_marker(&mut self, center: Point2D) {
        let circle = Circle::new()
            .set("cx", format!("{:.3}", center.x))
            .set("cy", format!("{:.3}", center.y))
            .set("r", self.marker_radius)
            .set("class", "marker");
        self.document.append(circle);
    }

    fn draw_label(&mut self, anchor: Point2D, text: &str) {
        let label = Text::new(text)
            .set("x", format!("{:.3}", anchor.x))
            .set("y", format!("{:.3}", anchor.y))
            .set("class", "label");
        self.document.append(label);
    }

    fn encode(self) -> MapperResult<Vec<u8>> {
        Ok(self.document.to_string().into_bytes())
    }
}
