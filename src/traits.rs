use core::fmt::Debug;
use num_traits::{Float, NumCast};

/// Trait for real floating-point scalars accepted by the special functions
/// and distributions.
///
/// Blanket-implemented for every `Float + Debug` type, in practice `f32` and
/// `f64`. Coefficient tables are stored as `f64` and narrowed through [`cst`].
///
/// [`cst`]: FloatScalar::cst
pub trait FloatScalar: Float + Debug {
    /// Convert an `f64` constant into `Self`, rounding to the nearest
    /// representable value. NaN if the value cannot be represented at all.
    #[inline]
    fn cst(v: f64) -> Self {
        <Self as NumCast>::from(v).unwrap_or_else(Self::nan)
    }

    /// Convert a term index or loop count into `Self`.
    #[inline]
    fn from_index(n: usize) -> Self {
        Self::cst(n as f64)
    }

    /// Widen to `f64`. Used for the diagnostics carried by error values.
    #[inline]
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl<T: Float + Debug> FloatScalar for T {}
