//! Variogram model and empirical semivariogram estimation
//!
//! The semivariance γ(h) measures spatial dissimilarity as a function of
//! separation distance h:
//! ```text
//! γ(h) = (1/2N(h)) Σ [z(xᵢ) - z(xⱼ)]²   over all pairs at separation ≈ h
//! ```
//! The empirical semivariogram aggregates pairwise sample contributions into
//! fixed-width lag bins; the spherical model is the parametric curve a caller
//! tunes against those bins before kriging. Only a coarse heuristic seeds the
//! model parameters here — refinement is interactive and stays with the
//! caller.
//!
//! Reference:
//! Matheron, G. (1963). Principles of geostatistics. Economic Geology.
//! Cressie, N. (1993). Statistics for Spatial Data. Wiley.

use serde::{Deserialize, Serialize};
use terrakrige_core::{Error, Result};

use super::Sample;

/// Spherical variogram parameters.
///
/// Fully determines the model curve. The expected shape is
/// `0 <= nugget <= sill` with `range > 0`; only `range` is load-bearing for
/// evaluation (see [`VariogramParams::validate`]), the softer bounds produce
/// a dented curve rather than a computational hazard and remain the caller's
/// responsibility. The engine never mutates a params value — each call
/// consumes a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariogramParams {
    /// Nugget (c₀): semivariance as h → 0⁺ (measurement noise + micro-scale
    /// variation)
    pub nugget: f64,
    /// Sill: the plateau semivariance reached at the range
    pub sill: f64,
    /// Range (a): separation distance beyond which samples are uncorrelated
    pub range: f64,
}

impl Default for VariogramParams {
    /// Neutral starting curve used when no empirical data is available yet.
    fn default() -> Self {
        Self {
            nugget: 0.0,
            sill: 1.0,
            range: 10.0,
        }
    }
}

impl VariogramParams {
    pub fn new(nugget: f64, sill: f64, range: f64) -> Self {
        Self {
            nugget,
            sill,
            range,
        }
    }

    /// Check that the curve can be evaluated at all.
    ///
    /// A non-positive or non-finite `range` makes the model degenerate and
    /// is reported as [`Error::InvalidParameter`]; likewise non-finite
    /// `nugget`/`sill`. Every operation consuming params validates them
    /// once at its boundary.
    pub fn validate(&self) -> Result<()> {
        if !self.range.is_finite() || self.range <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "range",
                value: self.range.to_string(),
                reason: "variogram range must be a positive finite number".into(),
            });
        }
        if !self.nugget.is_finite() || !self.sill.is_finite() {
            return Err(Error::InvalidParameter {
                name: "nugget/sill",
                value: format!("{}/{}", self.nugget, self.sill),
                reason: "variogram parameters must be finite".into(),
            });
        }
        Ok(())
    }

    /// Evaluate the spherical model at separation distance `h`.
    ///
    /// - `h == 0` → `0` exactly. The nugget applies only to strictly
    ///   positive separations, which keeps kriging exact at sample
    ///   locations.
    /// - `0 < h < range` →
    ///   `nugget + (sill − nugget) · (1.5·(h/a) − 0.5·(h/a)³)`.
    /// - `h >= range` → `sill` exactly (flat plateau).
    ///
    /// Pure and deterministic. Requires `range > 0`; operations taking
    /// params enforce this up front via [`VariogramParams::validate`].
    pub fn semivariance(&self, h: f64) -> f64 {
        debug_assert!(self.range > 0.0, "variogram range must be positive");

        if h <= 0.0 {
            return 0.0;
        }
        if h >= self.range {
            return self.sill;
        }

        let hr = h / self.range;
        self.nugget + (self.sill - self.nugget) * (1.5 * hr - 0.5 * hr * hr * hr)
    }
}

/// Upper bound on the number of lag bins one estimate may allocate.
///
/// Caps the table sized from `max_distance / bin_width`: a bin width small
/// enough to need more bins than this is rejected as invalid, which also
/// keeps the quotient safely inside `usize`.
pub const MAX_LAG_BINS: usize = 65_536;

/// One populated lag bin of the empirical semivariogram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmpiricalPoint {
    /// Lag distance (bin midpoint)
    pub distance: f64,
    /// Mean semivariance of the pairs in this bin
    pub semivariance: f64,
    /// Number of sample pairs aggregated into this bin
    pub pairs: usize,
}

/// Estimate the empirical semivariogram with fixed-width lag bins.
///
/// Every unordered sample pair contributes `0.5·(zᵢ − zⱼ)²` to the bin
/// `floor(h / bin_width)` covering its separation distance `h`; a bin's
/// semivariance is the arithmetic mean of its contributions and its label
/// is the bin midpoint `(k + 0.5)·bin_width`. Bins no pair falls into are
/// omitted, so the output ascends in distance with every entry backed by at
/// least one pair.
///
/// Fewer than two samples cannot form a pair: the result is an empty
/// vector, which callers render as "not enough data yet" rather than an
/// error. Coincident sample locations are not suppressed — their pairs land
/// in bin 0, contributing zero semivariance when the values agree.
///
/// # Errors
/// [`Error::InvalidParameter`] if `bin_width` is not a positive finite
/// number, or is so small relative to the sample spread that the lag table
/// would exceed [`MAX_LAG_BINS`] bins.
pub fn empirical_semivariogram(
    samples: &[Sample],
    bin_width: f64,
) -> Result<Vec<EmpiricalPoint>> {
    if !bin_width.is_finite() || bin_width <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "bin_width",
            value: bin_width.to_string(),
            reason: "lag bin width must be a positive finite number".into(),
        });
    }

    let n = samples.len();
    if n < 2 {
        return Ok(Vec::new());
    }

    // Size the bin table from the largest pairwise separation
    let mut max_dist = 0.0_f64;
    for i in 0..n {
        for j in (i + 1)..n {
            let d = samples[i].dist(samples[j].x, samples[j].y);
            if d > max_dist {
                max_dist = d;
            }
        }
    }

    let spread = max_dist / bin_width;
    if !spread.is_finite() || spread >= MAX_LAG_BINS as f64 {
        return Err(Error::InvalidParameter {
            name: "bin_width",
            value: bin_width.to_string(),
            reason: format!("lag bin width needs more than {MAX_LAG_BINS} bins to span the samples"),
        });
    }

    let n_bins = spread.floor() as usize + 1;
    let mut sums = vec![0.0_f64; n_bins];
    let mut counts = vec![0_usize; n_bins];

    for i in 0..n {
        for j in (i + 1)..n {
            let d = samples[i].dist(samples[j].x, samples[j].y);
            let dz = samples[i].z - samples[j].z;
            let bin = (d / bin_width).floor() as usize;
            sums[bin] += 0.5 * dz * dz;
            counts[bin] += 1;
        }
    }

    let points = sums
        .iter()
        .zip(counts.iter())
        .enumerate()
        .filter(|&(_, (_, &count))| count > 0)
        .map(|(k, (&sum, &count))| EmpiricalPoint {
            distance: (k as f64 + 0.5) * bin_width,
            semivariance: sum / count as f64,
            pairs: count,
        })
        .collect();

    Ok(points)
}

/// Derive coarse starting parameters from an empirical semivariogram.
///
/// A seeding heuristic, not a fitter: nugget from a tenth of the smallest
/// bin semivariance, sill from 110% of the largest, range from half the
/// furthest populated lag. With no empirical points to read,
/// [`VariogramParams::default`] is returned.
pub fn initial_params(empirical: &[EmpiricalPoint]) -> VariogramParams {
    if empirical.is_empty() {
        return VariogramParams::default();
    }

    let mut min_sv = f64::INFINITY;
    let mut max_sv = f64::NEG_INFINITY;
    let mut max_dist = f64::NEG_INFINITY;
    for point in empirical {
        min_sv = min_sv.min(point.semivariance);
        max_sv = max_sv.max(point.semivariance);
        max_dist = max_dist.max(point.distance);
    }

    VariogramParams {
        nugget: 0.1 * min_sv,
        sill: 1.1 * max_sv,
        range: 0.5 * max_dist,
    }
}
