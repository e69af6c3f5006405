//! Grid element trait for generic cell values

use num_traits::{NumCast, Zero};
use std::fmt::Debug;

/// Trait for types that can be stored in a grid cell.
///
/// Surfaces in this engine hold real-valued fields, so the implementations
/// cover the floating-point widths a session might pick (`f64` for the
/// engine's own output, `f32` where a host trades precision for memory).
pub trait GridElement:
    Copy + Clone + Debug + PartialOrd + PartialEq + NumCast + Zero + Send + Sync + 'static
{
    /// Whether this value is finite (neither NaN nor infinite)
    fn is_finite_value(&self) -> bool;

    /// Convert self to f64
    fn to_f64(self) -> Option<f64> {
        NumCast::from(self)
    }
}

macro_rules! impl_grid_element_float {
    ($t:ty) => {
        impl GridElement for $t {
            fn is_finite_value(&self) -> bool {
                self.is_finite()
            }
        }
    };
}

impl_grid_element_float!(f32);
impl_grid_element_float!(f64);
