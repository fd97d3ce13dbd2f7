// src/math/algorithms/mod.rs

pub mod clipping;
pub mod fisheye;
pub mod padding;

pub use self::clipping::{ClippingAlgorithm, PolygonClipper};
pub use self::fisheye::{FisheyeTransform, apply_optional_fisheye};
pub use self::padding::{BoundaryPadder, PaddedPoints, SENTINEL_COUNT};
