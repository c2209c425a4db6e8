//! Generic continued-fraction evaluation by the modified Lentz algorithm.
//!
//! A continued fraction is written
//!
//! ```text
//! a₀(x) + b₁(x) / (a₁(x) + b₂(x) / (a₂(x) + b₃(x) / (a₃(x) + …)))
//! ```
//!
//! Implement [`ContinuedFraction`] for a type that produces the partial
//! denominators `aₙ` and partial numerators `bₙ`, or wrap two closures with
//! [`from_fn`]. Evaluation tracks the ratios Cₙ = Aₙ/Aₙ₋₁ and
//! Dₙ = Bₙ₋₁/Bₙ of successive numerators and denominators instead of the
//! raw values, so intermediate quantities stay bounded.

use crate::FloatScalar;
use super::SpecialError;

/// Default iteration budget: large enough that the tolerance, not the
/// budget, ends every well-posed evaluation.
pub const DEFAULT_MAX_ITER: usize = i32::MAX as usize;

/// Settings for continued-fraction evaluation.
#[derive(Debug, Clone, Copy)]
pub struct FractionSettings<T> {
    /// Convergence tolerance on |Δₙ − 1|, where Δₙ = hₙ / hₙ₋₁ is the
    /// ratio of successive convergents. Must be positive.
    pub epsilon: T,
    /// Maximum number of terms (n ≥ 1) to evaluate.
    pub max_iter: usize,
}

impl Default for FractionSettings<f64> {
    fn default() -> Self {
        Self {
            epsilon: 1e-9,
            max_iter: DEFAULT_MAX_ITER,
        }
    }
}

impl Default for FractionSettings<f32> {
    fn default() -> Self {
        Self {
            epsilon: 1e-6,
            max_iter: DEFAULT_MAX_ITER,
        }
    }
}

/// A continued fraction whose coefficients depend on a term index `n` and
/// an evaluation point `x`.
///
/// # Example
///
/// ```
/// use betacf::special::{ContinuedFraction, FractionSettings};
///
/// /// √2 = 1 + 1/(2 + 1/(2 + …))
/// struct Sqrt2;
///
/// impl ContinuedFraction<f64> for Sqrt2 {
///     fn a(&self, n: usize, _x: f64) -> f64 {
///         if n == 0 { 1.0 } else { 2.0 }
///     }
///     fn b(&self, _n: usize, _x: f64) -> f64 {
///         1.0
///     }
/// }
///
/// let v = Sqrt2.evaluate(0.0, &FractionSettings::default()).unwrap();
/// assert!((v - core::f64::consts::SQRT_2).abs() < 1e-8);
/// ```
pub trait ContinuedFraction<T: FloatScalar> {
    /// Partial denominator aₙ(x). `a(0, x)` is the leading term and must be
    /// finite on the fraction's domain.
    fn a(&self, n: usize, x: T) -> T;

    /// Partial numerator bₙ(x). Only called for n ≥ 1.
    fn b(&self, n: usize, x: T) -> T;

    /// Evaluate the fraction at `x`.
    ///
    /// Stops once the ratio of successive convergents is within
    /// `settings.epsilon` of one.
    ///
    /// Near-zero Cₙ or Dₙ are not replaced by a tiny value: a denominator
    /// that vanishes exactly propagates ∞/NaN into the convergent and is
    /// reported as [`SpecialError::Divergence`].
    ///
    /// # Errors
    ///
    /// Returns [`SpecialError::Divergence`] as soon as a convergent is
    /// infinite or NaN, and [`SpecialError::ConvergenceFailure`] if
    /// `settings.max_iter` terms do not reach the tolerance.
    fn evaluate(&self, x: T, settings: &FractionSettings<T>) -> Result<T, SpecialError> {
        let one = T::one();

        let mut h_prev = self.a(0, x);
        let mut c_prev = h_prev;
        let mut d_prev = T::zero();

        for n in 1..=settings.max_iter {
            let a = self.a(n, x);
            let b = self.b(n, x);

            let d = (a + b * d_prev).recip();
            let c = a + b / c_prev;
            let delta = c * d;
            let h = h_prev * delta;

            if h.is_infinite() || h.is_nan() {
                return Err(SpecialError::Divergence {
                    x: x.as_f64(),
                    value: h.as_f64(),
                });
            }

            if (delta - one).abs() < settings.epsilon {
                return Ok(h);
            }

            d_prev = d;
            c_prev = c;
            h_prev = h;
        }

        Err(SpecialError::ConvergenceFailure {
            max_iter: settings.max_iter,
            x: x.as_f64(),
        })
    }
}

/// Continued fraction backed by two coefficient closures. Built by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnFraction<A, B> {
    a: A,
    b: B,
}

/// Build a [`ContinuedFraction`] from closures `a(n, x)` and `b(n, x)`.
///
/// # Example
///
/// ```
/// use betacf::special::{from_fn, ContinuedFraction, FractionSettings};
///
/// // Golden ratio: 1 + 1/(1 + 1/(1 + …))
/// let phi = from_fn(|_n: usize, _x: f64| 1.0, |_n: usize, _x: f64| 1.0);
/// let v = phi.evaluate(0.0, &FractionSettings::default()).unwrap();
/// assert!((v - (1.0 + 5.0_f64.sqrt()) / 2.0).abs() < 1e-8);
/// ```
pub fn from_fn<T, A, B>(a: A, b: B) -> FnFraction<A, B>
where
    T: FloatScalar,
    A: Fn(usize, T) -> T,
    B: Fn(usize, T) -> T,
{
    FnFraction { a, b }
}

impl<T, A, B> ContinuedFraction<T> for FnFraction<A, B>
where
    T: FloatScalar,
    A: Fn(usize, T) -> T,
    B: Fn(usize, T) -> T,
{
    #[inline]
    fn a(&self, n: usize, x: T) -> T {
        (self.a)(n, x)
    }

    #[inline]
    fn b(&self, n: usize, x: T) -> T {
        (self.b)(n, x)
    }
}
