// src/render/figure.rs

use super::{
    canvas::Canvas,
    viewport::{Viewport, axis_limits},
};
use crate::config::MapperConfig;
use crate::error::MapperResult;
use crate::math::{algorithms::PolygonClipper, voronoi::RenderSpec};
use tracing::debug;

/// Zählt, was tatsächlich gezeichnet wurde.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FigureStats {
    pub filled_cells: usize,
    pub outlined_cells: usize,
    pub markers: usize,
    pub labels: usize,
}

/// Setzt Zellen, Marker und Beschriftungen zu einer Abbildung zusammen.
///
/// Reihenfolge: Füllungen, Zellumrisse, Marker, Beschriftungen. Zellen werden
/// vorher auf die Achsengrenzen geschnitten.
pub struct FigureRenderer<'a> {
    config: &'a MapperConfig,
    viewport: Viewport,
    clipper: PolygonClipper,
}

impl<'a> FigureRenderer<'a> {
    /// Die Achsengrenzen ergeben sich nur aus den realen Punkten der Specs.
    pub fn new(config: &'a MapperConfig, specs: &[RenderSpec]) -> MapperResult<Self> {
        let limits = axis_limits(specs.iter().map(|s| s.position), config.axis_margin)?;
        let viewport = Viewport::new(limits, config.canvas_width, config.canvas_height)?;
        debug!("Axis limits {}", limits);
        Ok(Self {
            config,
            viewport,
            clipper: PolygonClipper::default(),
        })
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn draw<C: Canvas>(&self, specs: &[RenderSpec], canvas: &mut C) -> MapperResult<FigureStats> {
        let mut stats = FigureStats::default();

        let mut visible_cells = Vec::with_capacity(specs.len());
        for spec in specs {
            let Some(polygon) = &spec.polygon else {
                continue;
            };
            if let Some(clipped) = self
                .clipper
                .clip_polygon_against_rectangle(polygon, self.viewport.limits())?
            {
                visible_cells.push((spec, self.viewport.polygon_to_pixels(&clipped)));
            }
        }

        // Alle Teilflächen einer Zelle nutzen dieselbe, einmal gezogene Farbe.
        for (spec, pixels) in &visible_cells {
            if let Some(color) = spec.fill.color() {
                canvas.fill_polygon(pixels, color);
                stats.filled_cells += 1;
            }
        }

        for (_, pixels) in &visible_cells {
            canvas.stroke_polygon(pixels);
            stats.outlined_cells += 1;
        }

        for spec in specs {
            canvas.draw_marker(self.viewport.to_pixel(spec.position));
            stats.markers += 1;
        }

        for spec in specs {
            let anchor = self.viewport.to_pixel(spec.position + self.config.label_offset);
            canvas.draw_label(anchor, &spec.label);
            stats.labels += 1;
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::math::{
        types::Point2D,
        voronoi::{CellFill, HexColor},
    };

    #[derive(Default)]
    struct RecordingCanvas {
        fills: Vec<(Vec<Point2D>, HexColor)>,
        strokes: usize,
        markers: Vec<Point2D>,
        labels: Vec<(Point2D, String)>,
    }

    impl Canvas for RecordingCanvas {
        fn fill_polygon(&mut self, vertices: &[Point2D], color: HexColor) {
            self.fills.push((vertices.to_vec(), color));
        }
        fn stroke_polygon(&mut self, _vertices: &[Point2D]) {
            self.strokes += 1;
        }
        fn draw_marker(&mut self, center: Point2D) {
            self.markers.push(center);
        }
        fn draw_label(&mut self, anchor: Point2D, text: &str) {
            self.labels.push((anchor, text.to_string()));
        }
        fn encode(self) -> MapperResult<Vec<u8>> {
            Ok(Vec::new())
        }
    }

    fn square(center: Point2D, half: f64) -> Vec<Point2D> {
        vec![
            center + Point2D::new(-half, -half),
            center + Point2D::new(half, -half),
            center + Point2D::new(half, half),
            center + Point2D::new(-half, half),
        ]
    }

    fn specs() -> Vec<RenderSpec> {
        vec![
            RenderSpec {
                index: 0,
                label: "A".to_string(),
                position: Point2D::new(0.0, 0.0),
                fill: CellFill::Color(HexColor([1, 2, 3])),
                // reicht weit über die Achsengrenzen hinaus
                polygon: Some(square(Point2D::new(0.0, 0.0), 500.0)),
            },
            RenderSpec {
                index: 1,
                label: "B".to_string(),
                position: Point2D::new(2.0, 1.0),
                fill: CellFill::NoFill,
                polygon: Some(square(Point2D::new(2.0, 1.0), 0.5)),
            },
            RenderSpec {
                index: 2,
                label: "C".to_string(),
                position: Point2D::new(1.0, 2.0),
                fill: CellFill::Unfillable,
                polygon: None,
            },
        ]
    }

    #[test]
    fn test_draw_counts() {
        let config = MapperConfig::new().with_canvas_size(200, 100);
        let specs = specs();
        let renderer = FigureRenderer::new(&config, &specs).unwrap();
        let mut canvas = RecordingCanvas::default();
        let stats = renderer.draw(&specs, &mut canvas).unwrap();

        assert_eq!(
            stats,
            FigureStats {
                filled_cells: 1,
                outlined_cells: 2,
                markers: 3,
                labels: 3,
            }
        );
        assert_eq!(canvas.fills.len(), 1);
        assert_eq!(canvas.strokes, 2);
        assert_eq!(canvas.labels[2].1, "C");
    }

    #[test]
    fn test_fills_stay_inside_canvas() {
        let config = MapperConfig::new().with_canvas_size(200, 100);
        let specs = specs();
        let renderer = FigureRenderer::new(&config, &specs).unwrap();
        let mut canvas = RecordingCanvas::default();
        renderer.draw(&specs, &mut canvas).unwrap();

        for (pixels, _) in &canvas.fills {
            for p in pixels {
                assert!(p.x >= -1e-6 && p.x <= 200.0 + 1e-6);
                assert!(p.y >= -1e-6 && p.y <= 100.0 + 1e-6);
            }
        }
    }

    #[test]
    fn test_limits_ignore_cell_geometry() {
        let config = MapperConfig::new();
        let specs = specs();
        let renderer = FigureRenderer::new(&config, &specs).unwrap();
        let limits = renderer.viewport().limits();
        assert_relative_eq!(limits.min.x, -0.6);
        assert_relative_eq!(limits.min.y, -0.6);
        assert_relative_eq!(limits.max.x, 2.6);
        assert_relative_eq!(limits.max.y, 2.6);
    }

    #[test]
    fn test_label_offset_up_and_left() {
        let config = MapperConfig::new();
        let specs = specs();
        let renderer = FigureRenderer::new(&config, &specs).unwrap();
        let mut canvas = RecordingCanvas::default();
        renderer.draw(&specs, &mut canvas).unwrap();
        let (anchor, _) = &canvas.labels[0];
        let marker = canvas.markers[0];
        assert!(anchor.x < marker.x);
        assert!(anchor.y < marker.y);
    }
}
