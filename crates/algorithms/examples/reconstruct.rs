//! Kriging demo: reconstruct a synthetic field from sparse probes
//!
//! Generates a smooth 64x64 truth surface, samples it at 48 scattered
//! locations, then runs the full interpolation workflow:
//!   1. empirical semivariogram of the probes
//!   2. heuristic starting parameters for the spherical model
//!   3. kriged surface prediction (stride 2)
//!   4. accuracy metrics against the truth field
//!
//! Run:
//!   cargo run -p terrakrige-algorithms --example reconstruct

use terrakrige_algorithms::interpolation::{
    Sample, empirical_semivariogram, initial_params, predict_surface,
};
use terrakrige_algorithms::statistics::{rmse, std_dev};
use terrakrige_core::Grid;

const SIZE: usize = 64;
const PROBES: usize = 48;

fn field(x: f64, y: f64) -> f64 {
    120.0 + 0.4 * x - 0.25 * y + 15.0 * ((x / 14.0).sin() + (y / 11.0).cos())
}

fn lcg_next(seed: &mut u64) -> f64 {
    *seed = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    (*seed >> 33) as f64 / (1u64 << 31) as f64
}

fn main() {
    // --- 1. Truth field and probes ---
    let mut truth = Grid::new(SIZE, SIZE);
    for row in 0..SIZE {
        for col in 0..SIZE {
            truth
                .set(row, col, field(col as f64, row as f64))
                .expect("in-bounds write");
        }
    }

    // Distinct probe locations keep the kriging system non-singular.
    let mut seed = 0x5DEE_CE66_D1CE_4A53_u64;
    let mut samples: Vec<Sample> = Vec::with_capacity(PROBES);
    while samples.len() < PROBES {
        let x = (lcg_next(&mut seed) * (SIZE - 1) as f64).round();
        let y = (lcg_next(&mut seed) * (SIZE - 1) as f64).round();
        if samples.iter().any(|s| s.x == x && s.y == y) {
            continue;
        }
        samples.push(Sample::new(x, y, field(x, y)));
    }
    println!("Truth field: {SIZE}x{SIZE}, probes: {}", samples.len());

    // --- 2. Empirical semivariogram ---
    let empirical = empirical_semivariogram(&samples, 6.0).expect("valid bin width");
    println!("\nEmpirical semivariogram ({} bins):", empirical.len());
    println!("  {:>8}  {:>12}  {:>6}", "lag", "semivariance", "pairs");
    for point in &empirical {
        println!(
            "  {:>8.1}  {:>12.2}  {:>6}",
            point.distance, point.semivariance, point.pairs
        );
    }

    // --- 3. Heuristic model parameters ---
    let params = initial_params(&empirical);
    println!(
        "\nSpherical model: nugget={:.2} sill={:.2} range={:.1}",
        params.nugget, params.sill, params.range
    );

    // --- 4. Surface prediction ---
    let surface = predict_surface(SIZE, SIZE, &samples, &params, 2).expect("valid parameters");
    let stats = surface.statistics();
    println!(
        "\nKriged surface: min={:.1} max={:.1} mean={:.1}",
        stats.min.unwrap_or(f64::NAN),
        stats.max.unwrap_or(f64::NAN),
        stats.mean.unwrap_or(f64::NAN)
    );

    // --- 5. Accuracy ---
    let error = rmse(&surface, &truth);
    let spread = std_dev(&truth);
    println!("\nRMSE vs truth:    {error:.3}");
    println!("Truth std dev:    {spread:.3}");
    println!("Relative error:   {:.1}%", 100.0 * error / spread);
}
