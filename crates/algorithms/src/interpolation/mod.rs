//! Spatial interpolation from scattered samples
//!
//! Reconstruct a surface from a handful of located observations:
//! - Variogram: spherical semivariance model, empirical semivariogram
//!   estimation, heuristic starting parameters
//! - Ordinary Kriging: BLUE point prediction and full-surface
//!   reconstruction, with an inverse-distance fallback for singular systems

pub mod kriging;
pub mod variogram;

pub use kriging::{
    Prediction, PredictionMethod, predict, predict_detailed, predict_surface,
};
pub use variogram::{
    EmpiricalPoint, VariogramParams, empirical_semivariogram, initial_params,
};

use serde::{Deserialize, Serialize};

/// A located sample observation: grid coordinates and the value measured there.
///
/// Samples are immutable once recorded; sessions keep them in insertion
/// order for display, but no operation here depends on that order. Callers
/// normally keep locations distinct — coincident locations degrade the
/// kriging system, which the solver recovers from rather than rejecting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Squared Euclidean distance to a query location
    #[inline]
    pub fn dist_sq(&self, other_x: f64, other_y: f64) -> f64 {
        let dx = self.x - other_x;
        let dy = self.y - other_y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to a query location
    #[inline]
    pub fn dist(&self, other_x: f64, other_y: f64) -> f64 {
        self.dist_sq(other_x, other_y).sqrt()
    }
}
