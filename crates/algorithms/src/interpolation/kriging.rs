//! Ordinary kriging interpolation
//!
//! Predicts the value of a spatial field at unsampled locations as the best
//! linear unbiased combination of scattered samples. Each query solves the
//! ordinary kriging system, the sample semivariance matrix augmented with a
//! Lagrange row enforcing unit weight sum:
//!
//! ```text
//! │ γ(d₁₁) ⋯ γ(d₁ₙ)  1 │ │ w₁ │   │ γ(d₁q) │
//! │   ⋮    ⋱    ⋮     ⋮ │ │ ⋮  │ = │   ⋮    │
//! │ γ(dₙ₁) ⋯ γ(dₙₙ)  1 │ │ wₙ │   │ γ(dₙq) │
//! │   1    ⋯    1     0 │ │ μ  │   │   1    │
//! ```
//!
//! γ is the spherical model from [`VariogramParams`]; the prediction is
//! `Σ wᵢ·zᵢ`. Duplicate sample locations make the system singular, in which
//! case the query degrades to inverse-distance weighting instead of failing.
//! Distinct queries never observe each other, so surface prediction
//! parallelizes by grid row.
//!
//! Reference:
//! Matheron, G. (1963). Principles of geostatistics. Economic Geology.
//! Cressie, N. (1993). Statistics for Spatial Data. Wiley.

use ndarray::Array2;
use terrakrige_core::{Error, Grid, Result};

use super::Sample;
use super::variogram::VariogramParams;
use crate::maybe_rayon::*;

/// Pivot magnitudes below this mark the kriging system as singular.
const PIVOT_TOLERANCE: f64 = 1e-10;

/// Queries closer than this to a sample snap to its value during
/// inverse-distance fallback, keeping the weights bounded.
const FALLBACK_SNAP_DISTANCE: f64 = 1e-3;

/// How a predicted value was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionMethod {
    /// The query coincided with a sample location; its value was returned
    /// directly
    ExactSample,
    /// The ordinary kriging system was solved
    Kriging,
    /// The system was singular (or no samples exist); inverse-distance
    /// weighting was used instead
    InverseDistance,
}

/// A predicted value together with the path that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub value: f64,
    pub method: PredictionMethod,
}

/// Predict the field value at a single location.
///
/// Queries at an exact sample location return that sample's value; empty
/// sample sets yield `0.0`. See [`predict_detailed`] to learn which path
/// produced the value.
///
/// # Errors
/// [`Error::InvalidParameter`] if `params` fail validation.
pub fn predict(x: f64, y: f64, samples: &[Sample], params: &VariogramParams) -> Result<f64> {
    params.validate()?;
    Ok(predict_unchecked(x, y, samples, params).value)
}

/// Predict at a single location, reporting the method used.
///
/// Same semantics as [`predict`]; the returned [`Prediction`] additionally
/// says whether the value came from the kriging solve, an exact sample hit,
/// or the inverse-distance fallback.
///
/// # Errors
/// [`Error::InvalidParameter`] if `params` fail validation.
pub fn predict_detailed(
    x: f64,
    y: f64,
    samples: &[Sample],
    params: &VariogramParams,
) -> Result<Prediction> {
    params.validate()?;
    Ok(predict_unchecked(x, y, samples, params))
}

/// Core prediction without parameter validation; callers validate once at
/// their boundary.
fn predict_unchecked(x: f64, y: f64, samples: &[Sample], params: &VariogramParams) -> Prediction {
    if samples.is_empty() {
        return Prediction {
            value: 0.0,
            method: PredictionMethod::InverseDistance,
        };
    }

    if let Some(sample) = samples.iter().find(|s| s.x == x && s.y == y) {
        return Prediction {
            value: sample.z,
            method: PredictionMethod::ExactSample,
        };
    }

    let n = samples.len();
    let dim = n + 1;
    let mut matrix = vec![0.0_f64; dim * dim];
    let mut rhs = vec![0.0_f64; dim];

    // Symmetric semivariance block with a zero diagonal, bordered by the
    // unit-sum constraint row and column; the corner stays zero.
    for i in 0..n {
        for j in (i + 1)..n {
            let gamma = params.semivariance(samples[i].dist(samples[j].x, samples[j].y));
            matrix[i * dim + j] = gamma;
            matrix[j * dim + i] = gamma;
        }
        matrix[i * dim + n] = 1.0;
        matrix[n * dim + i] = 1.0;
        rhs[i] = params.semivariance(samples[i].dist(x, y));
    }
    rhs[n] = 1.0;

    match solve_dense(dim, &mut matrix, &mut rhs) {
        Some(weights) => {
            let value = samples
                .iter()
                .zip(&weights)
                .map(|(sample, w)| w * sample.z)
                .sum();
            Prediction {
                value,
                method: PredictionMethod::Kriging,
            }
        }
        None => Prediction {
            value: inverse_distance(x, y, samples),
            method: PredictionMethod::InverseDistance,
        },
    }
}

/// Solve a dense row-major `dim × dim` system in place by Gaussian
/// elimination with partial pivoting.
///
/// Returns `None` when the best available pivot falls below
/// [`PIVOT_TOLERANCE`], i.e. the system is singular to working precision.
/// Both `matrix` and `rhs` are consumed as scratch space.
fn solve_dense(dim: usize, matrix: &mut [f64], rhs: &mut [f64]) -> Option<Vec<f64>> {
    for col in 0..dim {
        let mut pivot_row = col;
        let mut pivot_val = matrix[col * dim + col].abs();
        for row in (col + 1)..dim {
            let candidate = matrix[row * dim + col].abs();
            if candidate > pivot_val {
                pivot_val = candidate;
                pivot_row = row;
            }
        }

        if pivot_val < PIVOT_TOLERANCE {
            return None;
        }

        if pivot_row != col {
            for k in col..dim {
                matrix.swap(col * dim + k, pivot_row * dim + k);
            }
            rhs.swap(col, pivot_row);
        }

        let pivot = matrix[col * dim + col];
        for row in (col + 1)..dim {
            let factor = matrix[row * dim + col] / pivot;
            if factor == 0.0 {
                continue;
            }
            for k in col..dim {
                matrix[row * dim + k] -= factor * matrix[col * dim + k];
            }
            rhs[row] -= factor * rhs[col];
        }
    }

    let mut solution = vec![0.0_f64; dim];
    for row in (0..dim).rev() {
        let mut sum = rhs[row];
        for k in (row + 1)..dim {
            sum -= matrix[row * dim + k] * solution[k];
        }
        solution[row] = sum / matrix[row * dim + row];
    }
    Some(solution)
}

/// Inverse-distance-squared fallback for singular kriging systems.
///
/// Weights are `1/d²`; a query within [`FALLBACK_SNAP_DISTANCE`] of a
/// sample returns that sample's value outright. An empty sample set yields
/// `0.0`.
fn inverse_distance(x: f64, y: f64, samples: &[Sample]) -> f64 {
    let snap_sq = FALLBACK_SNAP_DISTANCE * FALLBACK_SNAP_DISTANCE;
    let mut weight_sum = 0.0;
    let mut value_sum = 0.0;
    for sample in samples {
        let d_sq = sample.dist_sq(x, y);
        if d_sq < snap_sq {
            return sample.z;
        }
        let weight = 1.0 / d_sq;
        weight_sum += weight;
        value_sum += weight * sample.z;
    }
    if weight_sum > 0.0 {
        value_sum / weight_sum
    } else {
        0.0
    }
}

/// Predict a full `height × width` surface grid.
///
/// Cell `(row, col)` corresponds to the query location `x = col`,
/// `y = row`. With `stride > 1` only every stride-th cell in each direction
/// is solved for; each solved anchor's value fills the up-to
/// `stride × stride` block below and to the right of it, so the output grid
/// always has the full requested shape. Anchor rows are computed in
/// parallel when the `parallel` feature is enabled.
///
/// Zero `width` or `height` produce an empty grid of that shape.
///
/// # Errors
/// [`Error::InvalidParameter`] if `params` fail validation or `stride` is
/// zero.
pub fn predict_surface(
    width: usize,
    height: usize,
    samples: &[Sample],
    params: &VariogramParams,
    stride: usize,
) -> Result<Grid<f64>> {
    params.validate()?;
    if stride == 0 {
        return Err(Error::InvalidParameter {
            name: "stride",
            value: stride.to_string(),
            reason: "surface stride must be at least 1".into(),
        });
    }
    if width == 0 || height == 0 {
        return Ok(Grid::new(height, width));
    }

    let anchor_rows: Vec<(usize, Vec<f64>)> = (0..height)
        .into_par_iter()
        .step_by(stride)
        .map(|row| {
            let mut values = vec![0.0_f64; width];
            let mut col = 0;
            while col < width {
                let prediction = predict_unchecked(col as f64, row as f64, samples, params);
                let end = (col + stride).min(width);
                for cell in &mut values[col..end] {
                    *cell = prediction.value;
                }
                col = end;
            }
            (row, values)
        })
        .collect();

    let mut data = vec![0.0_f64; width * height];
    for (row, values) in anchor_rows {
        let end = (row + stride).min(height);
        for r in row..end {
            data[r * width..(r + 1) * width].copy_from_slice(&values);
        }
    }

    let array = Array2::from_shape_vec((height, width), data)
        .map_err(|err| Error::Algorithm(err.to_string()))?;
    Ok(Grid::from_array(array))
}
