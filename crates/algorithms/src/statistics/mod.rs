//! Statistical summaries of prediction surfaces
//!
//! Currently limited to accuracy metrics: RMSE between a prediction and a
//! reference grid, and the standard deviation of a single grid for scaling
//! errors against the field's own spread.

pub mod accuracy;

pub use accuracy::{rmse, std_dev};
