// src/math/voronoi/backend.rs

use crate::error::MapperResult;
use crate::math::{algorithms::padding::PaddedPoints, types::Point2D};

/// Referenz auf einen Eckpunkt einer Zelle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexRef {
    /// Index in `Tessellation::vertices`.
    Finite(usize),
    /// Punkt im Unendlichen: die Zelle ist unbeschränkt.
    Infinite,
}

/// Roh-Ergebnis einer Voronoi-Berechnung.
///
/// `cell_of_point[i]` ist die Zelle des i-ten Eingabepunktes,
/// `cell_vertex_indices[cell]` deren Eckpunkte in Umlaufreihenfolge.
#[derive(Debug, Clone, Default)]
pub struct Tessellation {
    pub vertices: Vec<Point2D>,
    pub cell_of_point: Vec<usize>,
    pub cell_vertex_indices: Vec<Vec<VertexRef>>,
}

impl Tessellation {
    /// Eckpunktreferenzen der Zelle, zu der der Punkt `point_index` gehört.
    pub fn cell_refs(&self, point_index: usize) -> Option<&[VertexRef]> {
        let cell = *self.cell_of_point.get(point_index)?;
        self.cell_vertex_indices.get(cell).map(Vec::as_slice)
    }

    /// Polygon der Zelle, oder `None`, wenn sie unbeschränkt ist oder keine Fläche hat.
    pub fn bounded_polygon(&self, point_index: usize) -> Option<Vec<Point2D>> {
        let refs = self.cell_refs(point_index)?;
        if refs.len() < 3 {
            return None;
        }
        refs.iter()
            .map(|vertex| match vertex {
                VertexRef::Finite(index) => self.vertices.get(*index).copied(),
                VertexRef::Infinite => None,
            })
            .collect()
    }
}

/// Schnittstelle zur Geometrie-Bibliothek. Implementierungen reichen das
/// Ergebnis unverändert durch.
pub trait VoronoiBackend {
    fn compute_voronoi(&self, points: &PaddedPoints) -> MapperResult<Tessellation>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_tessellation() -> Tessellation {
        Tessellation {
            vertices: vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(1.0, 0.0),
                Point2D::new(1.0, 1.0),
                Point2D::new(0.0, 1.0),
            ],
            cell_of_point: vec![0, 1, 0],
            cell_vertex_indices: vec![
                vec![
                    VertexRef::Finite(0),
                    VertexRef::Finite(1),
                    VertexRef::Finite(2),
                    VertexRef::Finite(3),
                ],
                vec![VertexRef::Finite(1), VertexRef::Infinite, VertexRef::Finite(2)],
            ],
        }
    }

    #[test]
    fn test_bounded_polygon_resolves_vertices() {
        let tess = square_tessellation();
        let polygon = tess.bounded_polygon(0).unwrap();
        assert_eq!(polygon.len(), 4);
        assert_eq!(polygon[2], Point2D::new(1.0, 1.0));
        // Duplikate teilen sich die Zelle
        assert_eq!(tess.bounded_polygon(2), Some(polygon));
    }

    #[test]
    fn test_unbounded_cell_has_no_polygon() {
        let tess = square_tessellation();
        assert!(tess.bounded_polygon(1).is_none());
        assert!(tess.bounded_polygon(7).is_none());
    }
}
