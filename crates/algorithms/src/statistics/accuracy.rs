//! Surface accuracy metrics
//!
//! Compares a predicted surface against a reference grid (typically a
//! held-out truth field) and summarizes the spread of a single grid. Both
//! metrics are total: shape mismatches narrow to the overlapping region and
//! empty input yields `0.0` rather than an error, so they can sit at the end
//! of any prediction pipeline without ceremony.

use terrakrige_core::Grid;

/// Root mean square error between two grids.
///
/// Cells are compared over the overlapping `min(rows) × min(cols)`
/// rectangle anchored at `(0, 0)`; cells outside it are ignored. An empty
/// overlap yields `0.0`.
pub fn rmse(a: &Grid<f64>, b: &Grid<f64>) -> f64 {
    let rows = a.rows().min(b.rows());
    let cols = a.cols().min(b.cols());
    if rows == 0 || cols == 0 {
        return 0.0;
    }

    let mut sum_sq = 0.0;
    for row in 0..rows {
        for col in 0..cols {
            // In range for both grids: row < rows <= a.rows(), b.rows()
            // and likewise for columns.
            let diff = unsafe { a.get_unchecked(row, col) - b.get_unchecked(row, col) };
            sum_sq += diff * diff;
        }
    }

    (sum_sq / (rows * cols) as f64).sqrt()
}

/// Population standard deviation of a grid's values.
///
/// Single-pass `sqrt(E[x²] − E[x]²)`, clamped at zero so floating-point
/// cancellation on near-constant grids cannot produce a NaN. An empty grid
/// yields `0.0`.
pub fn std_dev(grid: &Grid<f64>) -> f64 {
    if grid.is_empty() {
        return 0.0;
    }

    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    for &value in grid.data().iter() {
        sum += value;
        sum_sq += value * value;
    }

    let n = grid.len() as f64;
    let mean = sum / n;
    (sum_sq / n - mean * mean).max(0.0).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rmse_of_identical_grids_is_zero() {
        let grid = Grid::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        assert_eq!(rmse(&grid, &grid), 0.0);
    }

    #[test]
    fn rmse_known_values() {
        let a = Grid::<f64>::new(2, 2);
        let b = Grid::filled(2, 2, 1.0);
        assert_relative_eq!(rmse(&a, &b), 1.0, epsilon = 1e-12);

        let a = Grid::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        let b = Grid::from_vec(vec![1.0, 2.0, 3.0, 8.0], 2, 2).unwrap();
        assert_relative_eq!(rmse(&a, &b), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn rmse_narrows_to_overlap() {
        let a = Grid::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        let b = Grid::from_vec(vec![1.0, 2.0, 4.0, 4.0, 9.0, 9.0], 3, 2).unwrap();
        // Overlap is 2×2; only cell (1, 1) differs, by 1.
        assert_relative_eq!(rmse(&a, &b), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn rmse_of_empty_overlap_is_zero() {
        let a = Grid::<f64>::new(0, 3);
        let b = Grid::filled(2, 2, 7.0);
        assert_eq!(rmse(&a, &b), 0.0);
        assert_eq!(rmse(&b, &a), 0.0);
    }

    #[test]
    fn std_dev_of_constant_grid_is_zero() {
        let grid = Grid::filled(2, 2, 5.0);
        assert_eq!(std_dev(&grid), 0.0);
    }

    #[test]
    fn std_dev_known_population() {
        let grid = Grid::from_vec(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], 2, 4).unwrap();
        assert_relative_eq!(std_dev(&grid), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn std_dev_of_empty_grid_is_zero() {
        assert_eq!(std_dev(&Grid::<f64>::new(0, 0)), 0.0);
    }

    #[test]
    fn std_dev_survives_cancellation() {
        let offset = 1e8;
        let grid = Grid::from_vec(vec![offset, offset + 1.0, offset + 2.0], 1, 3).unwrap();
        let sd = std_dev(&grid);
        assert!(sd.is_finite());
        assert!(sd >= 0.0);
    }
}
