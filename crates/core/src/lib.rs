//! # Terrakrige Core
//!
//! Core types and errors for the terrakrige spatial-interpolation engine.
//!
//! This crate provides:
//! - `Grid<T>`: rectangular field of cell values, the shared surface type
//! - `GridElement`: trait bounding usable cell types
//! - Engine-wide `Error`/`Result` taxonomy

pub mod error;
pub mod grid;

pub use error::{Error, Result};
pub use grid::{Grid, GridElement, GridStatistics};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::grid::{Grid, GridElement, GridStatistics};
}
