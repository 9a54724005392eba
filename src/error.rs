use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArrayError {
    #[error("Cannot allocate a buffer of length zero")]
    ZeroLength,

    #[error("Shape {rows}x{cols} has a zero dimension")]
    ZeroDimension { rows: usize, cols: usize },

    #[error("Index {index} is out of bounds for a buffer of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Cell [{row}, {col}] is out of bounds for shape {rows}x{cols}")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Shape {rows}x{cols} does not match a buffer of length {len}")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },

    #[error("Shape {rows}x{cols} overflows the address space")]
    CapacityOverflow { rows: usize, cols: usize },

    #[error("Allocation of {bytes} bytes failed")]
    AllocFailed { bytes: usize },
}

impl ArrayError {
    pub fn cell_out_of_bounds(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        Self::CellOutOfBounds {
            row,
            col,
            rows,
            cols,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for field '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum LessonError {
    #[error(transparent)]
    Array(#[from] ArrayError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to write transcript: {0}")]
    Io(#[from] std::io::Error),
}
