// src/math/voronoi/mod.rs

pub mod backend;
pub mod classifier;
pub mod spade_backend;

pub use self::backend::{Tessellation, VertexRef, VoronoiBackend};
pub use self::classifier::{CellClassifier, CellFill, HexColor, RenderSpec};
pub use self::spade_backend::SpadeBackend;
