pub mod algorithms;
pub mod types;
pub mod utils;
pub mod voronoi;

pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        algorithms::*,
        types::{Bounds2D, Point2D},
        voronoi::*,
    };
}
