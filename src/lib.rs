// src/lib.rs

pub mod config;
pub mod data;
pub mod error;
pub mod math;
pub mod pipeline;
pub mod render;

pub use config::MapperConfig;
pub use error::{MapperError, MapperResult, Stage, StageError};
pub use pipeline::{RenderOutcome, RenderRequest, VoronoiMapper, render, render_with_config};
