//! Error types for terrakrige

use thiserror::Error;

/// Main error type for terrakrige operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Index out of bounds: ({row}, {col}) in grid of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Algorithm error: {0}")]
    Algorithm(String),
}

/// Result type alias for terrakrige operations
pub type Result<T> = std::result::Result<T, Error>;
