//! Standard normal distribution functions.
//!
//! Provides `norm_cdf` (Φ) and `norm_pdf` (φ), generic over `T: Float`.
//! The CDF is built on the Abramowitz & Stegun erfc approximation
//! (formula 7.1.26), which has a maximum absolute error of 1.5e-7.

use num_traits::Float;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2π)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function, Abramowitz & Stegun 7.1.26.
///
/// erfc(x) = 1 - erf(x). The polynomial is evaluated in Horner form; the
/// negative half-line uses erfc(-x) = 2 - erfc(x).
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let two = T::from(2.0).unwrap();

    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let abs_x = x.abs();
    let t = one / (one + p * abs_x);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    if x < T::zero() {
        two - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function Φ.
///
/// Computes P(X ≤ x) for X ~ N(0, 1) via Φ(x) = erfc(-x/√2) / 2.
///
/// # Accuracy
/// At least 1e-7 absolute for all finite x.
///
/// # Examples
/// ```
/// use volgrid_models::analytical::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();

    half * erfc_approx(-x / sqrt_2)
}

/// Standard normal probability density function φ.
///
/// φ(x) = exp(-x²/2) / √(2π), always non-negative.
///
/// # Examples
/// ```
/// use volgrid_models::analytical::norm_pdf;
///
/// let peak = norm_pdf(0.0_f64);
/// assert!((peak - 0.3989423).abs() < 1e-6);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let coeff = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();

    coeff * (-half * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cdf_at_zero() {
        assert_relative_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1e-7);
    }

    #[test]
    fn test_cdf_known_values() {
        // Table values of Φ
        assert_relative_eq!(norm_cdf(1.0_f64), 0.8413447, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.1586553, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(1.96_f64), 0.9750021, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(2.0_f64), 0.9772499, epsilon = 1e-6);
    }

    #[test]
    fn test_cdf_symmetry() {
        for x in [0.1_f64, 0.5, 1.0, 2.5] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-7);
        }
    }

    #[test]
    fn test_cdf_monotonic() {
        let mut prev = norm_cdf(-5.0_f64);
        let mut x = -4.5_f64;
        while x <= 5.0 {
            let current = norm_cdf(x);
            assert!(current >= prev);
            prev = current;
            x += 0.5;
        }
    }

    #[test]
    fn test_cdf_tails() {
        assert!(norm_cdf(-8.0_f64) < 1e-14);
        assert!(norm_cdf(8.0_f64) > 1.0 - 1e-14);
    }

    #[test]
    fn test_pdf_peak() {
        assert_relative_eq!(norm_pdf(0.0_f64), 0.39894228, epsilon = 1e-7);
    }

    #[test]
    fn test_pdf_known_values() {
        assert_relative_eq!(norm_pdf(1.0_f64), 0.24197072, epsilon = 1e-7);
        assert_relative_eq!(norm_pdf(2.0_f64), 0.05399097, epsilon = 1e-7);
    }

    #[test]
    fn test_pdf_symmetry() {
        for x in [0.25_f64, 1.0, 1.75, 3.0] {
            assert_relative_eq!(norm_pdf(x), norm_pdf(-x), epsilon = 1e-15);
        }
    }

    #[test]
    fn test_pdf_non_negative() {
        for x in [-10.0_f64, -1.0, 0.0, 1.0, 10.0] {
            assert!(norm_pdf(x) >= 0.0);
        }
    }

    #[test]
    fn test_f32_compatibility() {
        let cdf = norm_cdf(0.0_f32);
        assert!((cdf - 0.5_f32).abs() < 1e-6);
    }
}
