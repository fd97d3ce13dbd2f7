// src/math/voronoi/spade_backend.rs

use super::backend::{Tessellation, VertexRef, VoronoiBackend};
use crate::error::{MapperError, MapperResult};
use crate::math::{
    algorithms::padding::PaddedPoints,
    types::{Point2D, SpadePoint, from_spade_point, to_spade_point},
};
use spade::{DelaunayTriangulation, Triangulation};
use tracing::debug;

/// Voronoi-Berechnung über die Delaunay-Triangulation von Spade.
///
/// Die Eckpunkte einer Zelle sind die Umkreismittelpunkte der Dreiecke um
/// ihren Generator; grenzt der Generator an die äußere Fläche, bekommt die
/// Zelle einen `VertexRef::Infinite`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpadeBackend;

impl SpadeBackend {
    pub fn new() -> Self {
        Self
    }
}

impl VoronoiBackend for SpadeBackend {
    fn compute_voronoi(&self, points: &PaddedPoints) -> MapperResult<Tessellation> {
        let real_points = points.real_count();
        if points.is_empty() {
            return Err(MapperError::InsufficientPoints {
                expected: 1,
                actual: 0,
            });
        }
        let mut triangulation: DelaunayTriangulation<SpadePoint> = DelaunayTriangulation::new();

        // Identische Punkte liefern denselben Vertex und teilen sich die Zelle.
        let mut cell_of_point = Vec::with_capacity(points.len());
        for point in points.as_slice() {
            let handle = triangulation.insert(to_spade_point(*point)).map_err(|e| {
                MapperError::DegenerateInput {
                    real_points,
                    reason: format!("cannot insert ({}, {}): {:?}", point.x, point.y, e),
                }
            })?;
            cell_of_point.push(handle.index());
        }

        if triangulation.num_inner_faces() == 0 {
            return Err(MapperError::DegenerateInput {
                real_points,
                reason: format!(
                    "{} distinct points are collinear or coincident, no tessellation exists",
                    triangulation.num_vertices()
                ),
            });
        }

        // Ein Voronoi-Eckpunkt pro inneres Dreieck
        let mut vertex_of_face = vec![None; triangulation.num_all_faces()];
        let mut vertices = Vec::with_capacity(triangulation.num_inner_faces());
        for face in triangulation.inner_faces() {
            vertex_of_face[face.fix().index()] = Some(vertices.len());
            vertices.push(from_spade_point(face.circumcenter()));
        }

        let mut cell_vertex_indices = vec![Vec::new(); triangulation.num_vertices()];
        for vertex in triangulation.vertices() {
            // out_edges() läuft gegen den Uhrzeigersinn, die linke Fläche jeder
            // Kante liegt zwischen ihr und der nächsten.
            let mut refs: Vec<VertexRef> = vertex
                .out_edges()
                .map(|edge| match edge.face().as_inner() {
                    Some(inner) => vertex_of_face[inner.fix().index()]
                        .map_or(VertexRef::Infinite, VertexRef::Finite),
                    None => VertexRef::Infinite,
                })
                .collect();
            if signed_area(&refs, &vertices) < 0.0 {
                refs.reverse();
            }
            cell_vertex_indices[vertex.fix().index()] = refs;
        }

        debug!(
            "Spade tessellation: {} sites, {} cells, {} voronoi vertices",
            points.len(),
            cell_vertex_indices.len(),
            vertices.len()
        );

        Ok(Tessellation {
            vertices,
            cell_of_point,
            cell_vertex_indices,
        })
    }
}

/// Doppelte Fläche eines geschlossenen Rings; unbeschränkte Zellen zählen als 0.
fn signed_area(refs: &[VertexRef], vertices: &[Point2D]) -> f64 {
    let mut ring = Vec::with_capacity(refs.len());
    for vertex in refs {
        match vertex {
            VertexRef::Finite(index) => ring.push(vertices[*index]),
            VertexRef::Infinite => return 0.0,
        }
    }
    let n = ring.len();
    (0..n).map(|k| ring[k].perp_dot(ring[(k + 1) % n])).sum()
}
