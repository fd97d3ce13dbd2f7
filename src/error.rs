// src/error.rs
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapperError {
    #[error("Schema error: {message}")]
    Schema { message: String },

    #[error("Focal point '{label}' not found among {available} point labels")]
    FocalPointNotFound { label: String, available: usize },

    #[error("Degenerate input ({real_points} real points): {reason}")]
    DegenerateInput { real_points: usize, reason: String },

    #[error("Unsupported output format: '{format}'")]
    UnsupportedFormat { format: String },

    #[error("Insufficient points for operation: expected at least {expected}, got {actual}")]
    InsufficientPoints { expected: usize, actual: usize },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Encoding failed: {message}")]
    Encoding { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MapperResult<T> = Result<T, MapperError>;

/// Die Pipeline-Stufe, in der ein Fehler aufgetreten ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Transform,
    Tessellate,
    Render,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Load => "load",
            Stage::Transform => "transform",
            Stage::Tessellate => "tessellate",
            Stage::Render => "render",
        };
        f.write_str(name)
    }
}

/// Ein Fehler samt der Stufe, die ihn ausgelöst hat.
#[derive(Error, Debug)]
#[error("stage '{stage}' failed: {source}")]
pub struct StageError {
    pub stage: Stage,
    #[source]
    pub source: MapperError,
}

impl StageError {
    pub fn new(stage: Stage, source: MapperError) -> Self {
        Self { stage, source }
    }
}

/// Hängt die Stufe an ein `MapperResult`.
pub trait AtStage<T> {
    fn at_stage(self, stage: Stage) -> Result<T, StageError>;
}

impl<T> AtStage<T> for MapperResult<T> {
    fn at_stage(self, stage: Stage) -> Result<T, StageError> {
        self.map_err(|source| StageError::new(stage, source))
    }
}
