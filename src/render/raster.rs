// src/render/raster.rs

use super::canvas::Canvas;
use crate::config::MapperConfig;
use crate::error::{MapperError, MapperResult};
use crate::math::{types::Point2D, voronoi::HexColor};
use ab_glyph::{FontVec, PxScale};
use image::{DynamicImage, ImageError, ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_line_segment_mut, draw_polygon_mut, draw_text_mut,
};
use imageproc::point::Point;
use std::io::Cursor;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Rasterbild auf Basis von `image`/`imageproc`.
pub struct RasterCanvas {
    image: RgbImage,
    format: ImageFormat,
    font: FontVec,
    marker_radius: i32,
    stroke_width: f64,
    font_scale: PxScale,
}

impl RasterCanvas {
    pub fn new(config: &MapperConfig, format: ImageFormat, font: FontVec) -> Self {
        Self {
            image: RgbImage::from_pixel(config.canvas_width, config.canvas_height, WHITE),
            format,
            font,
            marker_radius: config.marker_radius.round().max(1.0) as i32,
            stroke_width: config.stroke_width,
            font_scale: PxScale::from(config.font_size as f32),
        }
    }

    /// Ganzzahlige Eckpunkte ohne aufeinanderfolgende Duplikate; erster und
    /// letzter Punkt dürfen nicht gleich sein.
    fn integer_polygon(vertices: &[Point2D]) -> Vec<Point<i32>> {
        let mut points: Vec<Point<i32>> = Vec::with_capacity(vertices.len());
        for v in vertices {
            let p = Point::new(v.x.round() as i32, v.y.round() as i32);
            if points.last() != Some(&p) {
                points.push(p);
            }
        }
        while points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        points
    }
}

impl Canvas for RasterCanvas {
    fn fill_polygon(&mut self, vertices: &[Point2D], color: HexColor) {
        let polygon = Self::integer_polygon(vertices);
        if polygon.len() < 3 {
            return;
        }
        draw_polygon_mut(&mut self.image, &polygon, Rgb(color.rgb()));
    }

    fn stroke_polygon(&mut self, vertices: &[Point2D]) {
        if vertices.len() < 2 {
            return;
        }
        // Breitere Linien als parallele Versätze
        let passes = self.stroke_width.round().max(1.0) as i32;
        let n = vertices.len();
        for i in 0..n {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            let normal = (b - a).perp().normalize_or_zero();
            for pass in 0..passes {
                let shift = normal * (f64::from(pass) - f64::from(passes - 1) * 0.5);
                let start = a + shift;
                let end = b + shift;
                draw_line_segment_mut(
                    &mut self.image,
                    (start.x as f32, start.y as f32),
                    (end.x as f32, end.y as f32),
                    BLACK,
                );
            }
        }
    }

    fn draw_marker(&mut self, center: Point2D) {
        draw_filled_circle_mut(
            &mut self.image,
            (center.x.round() as i32, center.y.round() as i32),
            self.marker_radius,
            BLACK,
        );
    }

    fn draw_label(&mut self, anchor: Point2D, text: &str) {
        // imageproc erwartet die obere Kante, nicht die Grundlinie
        let top = anchor.y - f64::from(self.font_scale.y);
        draw_text_mut(
            &mut self.image,
            BLACK,
            anchor.x.round() as i32,
            top.round() as i32,
            self.font_scale,
            &self.font,
            text,
        );
    }

    fn encode(self) -> MapperResult<Vec<u8>> {
        let format = self.format;
        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(self.image)
            .write_to(&mut buffer, format)
            .map_err(|e| match e {
                ImageError::Unsupported(_) => MapperError::UnsupportedFormat {
                    format: format!("{:?}", format),
                },
                other => MapperError::Encoding {
                    message: other.to_string(),
                },
            })?;
        Ok(buffer.into_inner())
    }
}
