//! Rectangular grid storage for sampled and reconstructed surfaces

mod element;

pub use element::GridElement;

use crate::error::{Error, Result};
use ndarray::{Array2, ArrayView2};

/// A rectangular grid of cell values.
///
/// `Grid<T>` stores values of type `T` in row-major order. Cell `(row, col)`
/// corresponds to the session location `x = col`, `y = row`; a truth field
/// and every surface predicted from it share this coordinate system, so
/// grids of equal shape compare cell by cell.
///
/// Grids are independent values: operations that produce a surface build a
/// fresh grid rather than patching an existing one.
///
/// # Example
///
/// ```
/// use terrakrige_core::Grid;
///
/// let mut grid: Grid<f64> = Grid::new(16, 16);
/// grid.set(3, 5, 42.0).unwrap();
/// assert_eq!(grid.get(3, 5).unwrap(), 42.0);
/// ```
#[derive(Debug, Clone)]
pub struct Grid<T: GridElement> {
    /// Cell data stored in row-major order (row, col)
    data: Array2<T>,
}

impl<T: GridElement> Grid<T> {
    /// Create a new grid filled with zeros
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// Create a new grid filled with a specific value
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: Array2::from_elem((rows, cols), value),
        }
    }

    /// Create a grid from row-major data
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::InvalidDimensions {
                width: cols,
                height: rows,
            });
        }

        let array = Array2::from_shape_vec((rows, cols), data)
            .map_err(|e| Error::Algorithm(e.to_string()))?;

        Ok(Self { data: array })
    }

    /// Create a grid from an ndarray
    pub fn from_array(data: Array2<T>) -> Self {
        Self { data }
    }

    // Dimensions

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // Data access

    /// Get value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.data
            .get((row, col))
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Get value at (row, col) without bounds checking
    ///
    /// # Safety
    /// Caller must ensure row < self.rows() and col < self.cols()
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> T {
        unsafe { *self.data.uget((row, col)) }
    }

    /// Set value at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        self.data[(row, col)] = value;
        Ok(())
    }

    /// Get a view of the underlying data
    pub fn view(&self) -> ArrayView2<'_, T> {
        self.data.view()
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &Array2<T> {
        &self.data
    }

    /// Consume the grid and return the underlying array
    pub fn into_array(self) -> Array2<T> {
        self.data
    }

    // Statistics

    /// Summary statistics over the finite cells (min, max, mean, count)
    pub fn statistics(&self) -> GridStatistics<T> {
        let mut min = None;
        let mut max = None;
        let mut sum: f64 = 0.0;
        let mut count: usize = 0;

        for &value in self.data.iter() {
            if !value.is_finite_value() {
                continue;
            }

            if min.is_none_or(|m| value < m) {
                min = Some(value);
            }
            if max.is_none_or(|m| value > m) {
                max = Some(value);
            }

            if let Some(v) = value.to_f64() {
                sum += v;
                count += 1;
            }
        }

        let mean = if count > 0 {
            Some(sum / count as f64)
        } else {
            None
        };

        GridStatistics {
            min,
            max,
            mean,
            valid_count: count,
        }
    }
}

/// Summary statistics for a grid
#[derive(Debug, Clone)]
pub struct GridStatistics<T> {
    pub min: Option<T>,
    pub max: Option<T>,
    pub mean: Option<f64>,
    pub valid_count: usize,
}
