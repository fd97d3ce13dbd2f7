// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f64 = 1e-10;
    /// Mindestausdehnung, mit der der Padding-Abstand skaliert wird.
    pub const MIN_PADDING_EXTENT: f64 = 1.0;
}
