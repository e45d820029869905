//! Second-derivative knot fitting for natural cubic splines.
//!
//! On a regular grid with spacing `h`, continuity of the first derivative
//! across each interior knot gives the tridiagonal system
//!
//! ```text
//! 0.5 y2[i-1] + 2 y2[i] + 0.5 y2[i+1] = 3 (y[i+1] - 2 y[i] + y[i-1]) / h^2
//! ```
//!
//! for `i` in `1..n-1`, closed by the natural boundary condition
//! `y2[0] = y2[n-1] = 0`. This is solved in O(n) with a single forward
//! elimination and back substitution.
//!
//! References
//! * Press et al., Numerical Recipes, 3rd ed., sec. 3.3
use alloc::vec;
use alloc::vec::Vec;

use num_traits::{Float, NumCast};

use crate::{CubicKnots, Error, RegularGrid};

/// Fit a natural cubic spline to `samples` located at `start + i * step`,
/// taking ownership of the sample buffer.
///
/// `fill` is the value the fitted curve takes outside of the grid.
///
/// # Errors
/// * If there are fewer than 2 samples
/// * If the step size is zero
pub fn fit<T: Float>(
    samples: Vec<T>,
    step: T,
    start: T,
    fill: T,
) -> Result<CubicKnots<T>, Error> {
    let grid = RegularGrid::new(start, step, samples.len())?;
    let n = grid.len();

    let mut y2 = vec![T::zero(); n];
    let mut scratch = vec![T::zero(); n];
    tie_knots(&samples, step, &mut y2, &mut scratch)?;

    log::debug!(
        "fit natural cubic spline: n={n}, step={}, start={}",
        <f64 as NumCast>::from(step).unwrap_or(f64::NAN),
        <f64 as NumCast>::from(start).unwrap_or(f64::NAN)
    );

    Ok(CubicKnots {
        grid,
        y: samples,
        y2,
        fill,
    })
}

/// Solve for the second derivative at each of the regularly-spaced samples `y`,
/// writing the result into `y2`, with no allocation.
///
/// `scratch` holds the forward-elimination terms and is overwritten.
///
/// # Errors
/// * If there are fewer than 2 samples
/// * If the step size is zero
/// * If `y2` or `scratch` is not the same length as `y`
pub fn tie_knots<T: Float>(
    y: &[T],
    step: T,
    y2: &mut [T],
    scratch: &mut [T],
) -> Result<(), Error> {
    let n = y.len();
    if n < 2 {
        return Err(Error::TooFewSamples(n));
    }
    if step == T::zero() {
        return Err(Error::ZeroStep);
    }
    for len in [y2.len(), scratch.len()] {
        if len != n {
            return Err(Error::LengthMismatch {
                expected: n,
                actual: len,
            });
        }
    }

    // Construct some constants using generic methods
    let one = T::one();
    let two = one + one;
    let six = two * (two + one);
    let sig = one / two; // off-diagonal over diagonal weight for even spacing

    let u = scratch;
    y2[0] = T::zero();
    u[0] = T::zero();

    // Forward elimination, interior knots only
    for i in 1..n - 1 {
        let p = sig * y2[i - 1] + two;
        y2[i] = (sig - one) / p;

        let d2 = (y[i + 1] - y[i]) / step - (y[i] - y[i - 1]) / step;
        u[i] = (six * d2 / (two * step) - sig * u[i - 1]) / p;
    }

    // Back substitution, stopping above index 0 where y2[0] = u[0] = 0
    y2[n - 1] = T::zero();
    for i in (1..n - 1).rev() {
        y2[i] = y2[i] * y2[i + 1] + u[i];
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::*;

    #[test]
    fn test_reject_degenerate() {
        assert_eq!(fit(vec![1.0_f64], 1.0, 0.0, 0.0), Err(Error::TooFewSamples(1)));
        assert_eq!(fit(Vec::<f64>::new(), 1.0, 0.0, 0.0), Err(Error::TooFewSamples(0)));
        assert_eq!(fit(vec![1.0_f64, 2.0], 0.0, 0.0, 0.0), Err(Error::ZeroStep));

        let err = fit(vec![1.0_f32], 1.0, 0.0, 0.0).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_tie_knots_length_mismatch() {
        let y = [0.0_f64, 1.0, 0.0];
        let mut y2 = [0.0; 3];
        let mut short = [0.0; 2];
        assert_eq!(
            tie_knots(&y, 1.0, &mut y2, &mut short),
            Err(Error::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            tie_knots(&y, 1.0, &mut short, &mut y2),
            Err(Error::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    /// Three knots have a single interior equation, 2 y2[1] = 3 (0 - 2 + 0)
    #[test]
    fn test_three_knots_by_hand() {
        let knots = fit(vec![0.0_f64, 1.0, 0.0], 1.0, 0.0, 0.0).unwrap();
        assert_eq!(knots.second_derivatives(), &[0.0, -3.0, 0.0]);

        // Halving the step quadruples the curvature
        let knots = fit(vec![0.0_f64, 1.0, 0.0], 0.5, 0.0, 0.0).unwrap();
        assert!((knots.second_derivatives()[1] + 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_two_knots_are_linear() {
        let knots = fit(vec![0.0_f64, 1.0], 1.0, 0.0, 0.0).unwrap();
        assert_eq!(knots.second_derivatives(), &[0.0, 0.0]);
    }

    #[test]
    fn test_linear_data_has_no_curvature() {
        let y: Vec<f64> = (0..20).map(|i| 3.0 - 0.25 * (i as f64)).collect();
        let knots = fit(y, 0.5, -1.0, 0.0).unwrap();
        assert!(knots.second_derivatives().iter().all(|&v| v.abs() < 1e-12));
    }

    /// The solution must satisfy every row of the tridiagonal system
    #[test]
    fn test_tridiagonal_residual() {
        let mut rng = rng_fixed_seed();
        for n in [3, 4, 17, 100] {
            let y = randn::<f64>(&mut rng, n);
            let step = 0.3;
            let knots = fit(y.clone(), step, 5.0, 0.0).unwrap();
            let y2 = knots.second_derivatives();

            assert_eq!(y2.len(), n);
            assert_eq!(y2[0], 0.0);
            assert_eq!(y2[n - 1], 0.0);

            for i in 1..n - 1 {
                let lhs = 0.5 * y2[i - 1] + 2.0 * y2[i] + 0.5 * y2[i + 1];
                let rhs = 3.0 * (y[i + 1] - 2.0 * y[i] + y[i - 1]) / (step * step);
                assert!((lhs - rhs).abs() < 1e-9, "row {i}: {lhs} != {rhs}");
            }
        }
    }

    #[test]
    fn test_samples_are_moved_not_modified() {
        let mut rng = rng_fixed_seed();
        let y = randn::<f32>(&mut rng, 32);
        let expected = y.clone();
        let knots = fit(y, 1.0, 0.0, 0.0).unwrap();
        assert_eq!(knots.samples(), &expected[..]);
        assert_eq!(knots.into_samples(), expected);
    }

    /// Non-finite samples propagate through the interior,
    /// but the boundary condition holds regardless.
    #[test]
    fn test_non_finite_keeps_natural_ends() {
        let knots = fit(vec![0.0_f64, f64::NAN, 1.0, 2.0, 0.0], 1.0, 0.0, 0.0).unwrap();
        let y2 = knots.second_derivatives();
        assert_eq!(y2[0], 0.0);
        assert_eq!(y2[4], 0.0);
        assert!(y2[1..4].iter().all(|v| v.is_nan()));
    }
}
