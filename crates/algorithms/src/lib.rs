//! # TerraKrige Algorithms
//!
//! Geostatistical interpolation on top of [`terrakrige_core`] grids:
//!
//! - [`interpolation`] — ordinary kriging point and surface prediction,
//!   spherical variogram modelling and empirical semivariogram estimation
//! - [`statistics`] — accuracy metrics for scoring predicted surfaces
//!   against reference fields
//!
//! Surface prediction parallelizes across grid rows through rayon; disable
//! the default `parallel` feature for single-threaded targets such as wasm
//! hosts.

pub mod interpolation;
pub mod statistics;

mod maybe_rayon;

pub mod prelude {
    //! Convenience re-exports for typical interpolation workflows.
    pub use crate::interpolation::{
        EmpiricalPoint, Prediction, PredictionMethod, Sample, VariogramParams,
        empirical_semivariogram, initial_params, predict, predict_detailed, predict_surface,
    };
    pub use crate::statistics::{rmse, std_dev};
    pub use terrakrige_core::prelude::*;
}
