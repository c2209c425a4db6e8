use crate::FloatScalar;
use crate::special::{log_beta, regularized_beta};
use super::{ContinuousDistribution, StatsError, invert_cdf};

/// Beta distribution with shape parameters α and β on [0, 1].
///
/// f(x) = x^{α−1} (1−x)^{β−1} / B(α, β) for 0 ≤ x ≤ 1.
///
/// # Example
///
/// ```
/// use betacf::stats::{Beta, ContinuousDistribution};
///
/// let b = Beta::new(2.0_f64, 5.0).unwrap();
/// assert!((b.mean() - 2.0/7.0).abs() < 1e-14);
///
/// // Beta(1, 1) is uniform
/// let u = Beta::new(1.0_f64, 1.0).unwrap();
/// assert!((u.cdf(0.3) - 0.3).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Beta<T> {
    alpha: T,
    beta: T,
}

impl<T: FloatScalar> Beta<T> {
    /// Create a Beta distribution with shape parameters `alpha` and `beta`.
    /// Requires both > 0.
    pub fn new(alpha: T, beta: T) -> Result<Self, StatsError> {
        if alpha.is_nan() || beta.is_nan() || alpha <= T::zero() || beta <= T::zero() {
            return Err(StatsError::InvalidParameter);
        }
        Ok(Self { alpha, beta })
    }

    /// Shape parameter α.
    pub fn alpha(&self) -> T {
        self.alpha
    }

    /// Shape parameter β.
    pub fn beta(&self) -> T {
        self.beta
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for Beta<T> {
    fn pdf(&self, x: T) -> T {
        if x < T::zero() || x > T::one() {
            return T::zero();
        }
        self.ln_pdf(x).exp()
    }

    fn ln_pdf(&self, x: T) -> T {
        if x < T::zero() || x > T::one() {
            return T::neg_infinity();
        }
        let one = T::one();
        // A unit exponent contributes nothing, even where the log is −∞.
        let lx = if self.alpha == one {
            T::zero()
        } else {
            (self.alpha - one) * x.ln()
        };
        let l1mx = if self.beta == one {
            T::zero()
        } else {
            (self.beta - one) * (-x).ln_1p()
        };
        lx + l1mx - log_beta(self.alpha, self.beta)
    }

    fn cdf(&self, x: T) -> T {
        if x.is_nan() {
            return x;
        }
        if x <= T::zero() {
            return T::zero();
        }
        if x >= T::one() {
            return T::one();
        }
        regularized_beta(x, self.alpha, self.beta).unwrap_or(T::nan())
    }

    fn quantile(&self, p: T) -> T {
        let eps = T::epsilon();
        invert_cdf(self, p, self.mean(), eps, T::one() - eps)
    }

    fn mean(&self) -> T {
        self.alpha / (self.alpha + self.beta)
    }

    fn variance(&self) -> T {
        // αβ / ((α+β)²(α+β+1))
        let total = self.alpha + self.beta;
        self.mean() * (self.beta / total) / (total + T::one())
    }
}
