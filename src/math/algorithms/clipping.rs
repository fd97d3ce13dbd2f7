// src/math/algorithms/clipping.rs

//! # Polygon Clipping Module
//!
//! Clips cell polygons against the axis limits of the figure before they are
//! handed to a drawing backend. Cells of points near the data border can reach
//! out to the sentinel scale, which raster backends cannot represent in pixel
//! space.
//!
//! The supported algorithm is Sutherland-Hodgman, which is suitable for convex
//! clipper polygons (an axis-aligned rectangle is always convex).

use crate::error::{MapperError, MapperResult};
use crate::math::{
    types::{Bounds2D, Point2D},
    utils::constants,
};

/// Specifies the algorithm to be used for polygon clipping operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClippingAlgorithm {
    /// The Sutherland-Hodgman algorithm.
    /// Processes the subject polygon against each edge of the clipper polygon sequentially.
    #[default]
    SutherlandHodgman,
}

/// Performs polygon clipping operations using a specified algorithm.
pub struct PolygonClipper {
    algorithm: ClippingAlgorithm,
    tolerance: f64, // Tolerance for floating-point comparisons
}

impl Default for PolygonClipper {
    /// Creates a default `PolygonClipper` instance.
    ///
    /// Default values:
    /// - `algorithm`: `ClippingAlgorithm::SutherlandHodgman`
    /// - `tolerance`: `constants::EPSILON`
    fn default() -> Self {
        Self {
            algorithm: ClippingAlgorithm::default(),
            tolerance: constants::EPSILON,
        }
    }
}

impl PolygonClipper {
    pub fn new(algorithm: ClippingAlgorithm) -> Self {
        Self {
            algorithm,
            ..Default::default()
        }
    }

    /// Clips a subject polygon (represented by its vertices) against an axis-aligned rectangle.
    ///
    /// # Returns
    /// The clipped vertex list, or `None` if nothing of the polygon lies inside
    /// `clip_bounds`. Returns an error if the subject polygon has fewer than 3
    /// points or if `clip_bounds` is invalid.
    pub fn clip_polygon_against_rectangle(
        &self,
        subject_polygon_points: &[Point2D],
        clip_bounds: &Bounds2D,
    ) -> MapperResult<Option<Vec<Point2D>>> {
        if subject_polygon_points.len() < 3 {
            return Err(MapperError::InsufficientPoints {
                expected: 3,
                actual: subject_polygon_points.len(),
            });
        }
        if !clip_bounds.is_valid() {
            return Err(MapperError::InvalidConfiguration {
                message: format!("Clip bounds {} are invalid.", clip_bounds),
            });
        }

        // corners() liefert die Ecken bereits CCW
        let clipper_rect_points = clip_bounds.corners();

        match self.algorithm {
            ClippingAlgorithm::SutherlandHodgman => {
                let result_points =
                    self.sutherland_hodgman_clip(subject_polygon_points, &clipper_rect_points);
                Ok((result_points.len() >= 3).then_some(result_points))
            }
        }
    }

    /// Clips `subject_points` against each edge of the convex, CCW `clipper_points`.
    /// The result is empty if the subject is entirely outside the clipper.
    fn sutherland_hodgman_clip(
        &self,
        subject_points: &[Point2D],
        clipper_points: &[Point2D],
    ) -> Vec<Point2D> {
        let mut current_clipped_points = subject_points.to_vec();

        for i in 0..clipper_points.len() {
            if current_clipped_points.len() < 3 {
                current_clipped_points.clear();
                break;
            }

            let clip_edge_p1 = clipper_points[i];
            let clip_edge_p2 = clipper_points[(i + 1) % clipper_points.len()];

            let input_for_this_edge = std::mem::take(&mut current_clipped_points);

            // `s` is the start point of the current subject edge being tested
            let mut s = input_for_this_edge[input_for_this_edge.len() - 1];

            for &e in &input_for_this_edge {
                let s_is_inside = self.is_point_inside_clip_edge(s, clip_edge_p1, clip_edge_p2);
                let e_is_inside = self.is_point_inside_clip_edge(e, clip_edge_p1, clip_edge_p2);

                if e_is_inside {
                    if !s_is_inside {
                        // Edge (s,e) enters the clipping region
                        if let Some(intersection) =
                            Self::line_intersection(s, e, clip_edge_p1, clip_edge_p2)
                        {
                            current_clipped_points.push(intersection);
                        }
                    }
                    current_clipped_points.push(e);
                } else if s_is_inside {
                    // Edge (s,e) exits the clipping region
                    if let Some(intersection) =
                        Self::line_intersection(s, e, clip_edge_p1, clip_edge_p2)
                    {
                        current_clipped_points.push(intersection);
                    }
                }
                s = e;
            }
        }
        current_clipped_points
    }

    /// Checks if `p_test` is on the "inside" (left) of the directed clipping edge.
    #[inline]
    fn is_point_inside_clip_edge(&self, p_test: Point2D, clip_p1: Point2D, clip_p2: Point2D) -> bool {
        let cross_product = (clip_p2 - clip_p1).perp_dot(p_test - clip_p1);
        cross_product >= -self.tolerance
    }

    /// Intersection of the segment (p1-p2) with the infinite line through (p3-p4).
    ///
    /// Each clipping pass only needs the crossing with the supporting line of the
    /// clip edge; the remaining edges trim the result further.
    fn line_intersection(p1: Point2D, p2: Point2D, p3: Point2D, p4: Point2D) -> Option<Point2D> {
        let d1 = p2 - p1;
        let d2 = p4 - p3;

        let denominator = d1.perp_dot(d2);
        if denominator == 0.0 {
            return None;
        }

        let t = (p3 - p1).perp_dot(d2) / denominator;
        Some(p1 + d1 * t.clamp(0.0, 1.0))
    }
}
