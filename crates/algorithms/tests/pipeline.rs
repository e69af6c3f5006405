//! End-to-end interpolation pipeline on a synthetic field.
//!
//! A smooth 32×32 truth surface (linear trend plus low-frequency waves) is
//! probed at 36 irregular locations; the probes drive the full workflow:
//! empirical semivariogram → heuristic parameters → kriged surface →
//! accuracy metrics. The reconstruction must beat predicting a constant,
//! i.e. its RMSE must stay below the field's own standard deviation.

use terrakrige_algorithms::interpolation::{
    Sample, empirical_semivariogram, initial_params, predict, predict_surface,
};
use terrakrige_algorithms::statistics::{rmse, std_dev};
use terrakrige_core::Grid;

const SIZE: usize = 32;

fn truth_value(x: f64, y: f64) -> f64 {
    0.3 * x + 0.2 * y + 6.0 * ((x / 9.0).sin() + (y / 7.0).cos())
}

fn truth_grid() -> Grid<f64> {
    let mut grid = Grid::new(SIZE, SIZE);
    for row in 0..SIZE {
        for col in 0..SIZE {
            grid.set(row, col, truth_value(col as f64, row as f64)).unwrap();
        }
    }
    grid
}

fn lcg_next(seed: &mut u64) -> u64 {
    *seed = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *seed >> 33
}

/// 36 probes on a jittered 6×6 lattice of integer cell locations.
///
/// Lattice cells never overlap, so probe locations are guaranteed distinct
/// and the kriging system stays non-singular.
fn probe_samples() -> Vec<Sample> {
    let mut seed = 0x9E37_79B9_7F4A_7C15_u64;
    let cell = SIZE / 6;
    let mut samples = Vec::with_capacity(36);
    for gy in 0..6 {
        for gx in 0..6 {
            let x = (gx * cell + lcg_next(&mut seed) as usize % cell).min(SIZE - 1);
            let y = (gy * cell + lcg_next(&mut seed) as usize % cell).min(SIZE - 1);
            samples.push(Sample::new(
                x as f64,
                y as f64,
                truth_value(x as f64, y as f64),
            ));
        }
    }
    samples
}

// ---------------------------------------------------------------------------
// Full pipeline
// ---------------------------------------------------------------------------

#[test]
fn reconstruction_beats_constant_baseline() {
    let truth = truth_grid();
    let samples = probe_samples();

    let empirical = empirical_semivariogram(&samples, 4.0).unwrap();
    assert!(!empirical.is_empty(), "36 probes must populate lag bins");

    let params = initial_params(&empirical);
    params.validate().unwrap();

    let surface = predict_surface(SIZE, SIZE, &samples, &params, 2).unwrap();
    let error = rmse(&surface, &truth);
    let spread = std_dev(&truth);

    assert!(
        error < spread,
        "kriged surface (rmse={error:.3}) should beat a constant predictor (field sd={spread:.3})"
    );
}

#[test]
fn empirical_bins_ascend_and_seed_valid_params() {
    let empirical = empirical_semivariogram(&probe_samples(), 4.0).unwrap();

    for window in empirical.windows(2) {
        assert!(
            window[0].distance < window[1].distance,
            "lag bins out of order"
        );
    }
    for point in &empirical {
        assert!(point.pairs > 0, "empty bin survived at lag {}", point.distance);
        assert!(point.semivariance >= 0.0);
    }

    let params = initial_params(&empirical);
    params.validate().unwrap();
    assert!(params.range > 0.0);
    assert!(params.sill > params.nugget);
}

// ---------------------------------------------------------------------------
// Surface consistency
// ---------------------------------------------------------------------------

#[test]
fn surface_matches_point_predictions() {
    let samples = probe_samples();
    let params = initial_params(&empirical_semivariogram(&samples, 4.0).unwrap());
    let surface = predict_surface(SIZE, SIZE, &samples, &params, 1).unwrap();

    for row in (0..SIZE).step_by(7) {
        for col in (0..SIZE).step_by(5) {
            let expected = predict(col as f64, row as f64, &samples, &params).unwrap();
            assert_eq!(
                surface.get(row, col).unwrap(),
                expected,
                "surface and point prediction disagree at ({row}, {col})"
            );
        }
    }
}

#[test]
fn surface_is_finite_everywhere() {
    let samples = probe_samples();
    let params = initial_params(&empirical_semivariogram(&samples, 4.0).unwrap());
    let surface = predict_surface(SIZE, SIZE, &samples, &params, 2).unwrap();

    assert_eq!(surface.shape(), (SIZE, SIZE));
    assert!(surface.data().iter().all(|v| v.is_finite()));
}

#[test]
fn surface_reproduces_probed_cells() {
    let samples = probe_samples();
    let params = initial_params(&empirical_semivariogram(&samples, 4.0).unwrap());
    let surface = predict_surface(SIZE, SIZE, &samples, &params, 1).unwrap();

    for sample in &samples {
        let (row, col) = (sample.y as usize, sample.x as usize);
        assert_eq!(
            surface.get(row, col).unwrap(),
            sample.z,
            "probed cell ({row}, {col}) not reproduced exactly"
        );
    }
}
