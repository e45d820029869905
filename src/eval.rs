//! Evaluation of fitted natural cubic splines.
//!
//! Inside cell `j`, with normalized weights `a = (x[j+1] - x) / h` and
//! `b = (x - x[j]) / h`,
//!
//! ```text
//! f(x) = a y[j] + b y[j+1] + (a^3 - a) h^2 / 6 y2[j] + (b^3 - b) h^2 / 6 y2[j+1]
//! ```
//!
//! Observation points outside the grid, including the last knot itself,
//! take the fill value.
use alloc::vec;
use alloc::vec::Vec;

use num_traits::Float;

use crate::{CubicKnots, Error, RegularGrid};

/// A one-dimensional interpolator.
pub trait Interp1D<T: Float> {
    /// Evaluate the interpolant at an observation point.
    ///
    /// It is highly recommended to inline implementations of this function.
    fn eval_one(&self, loc: T) -> T;

    /// Evaluate the interpolant at a set of observation points.
    ///
    /// # Errors
    /// * If `locs` and `out` are not the same length
    #[inline]
    fn eval(&self, locs: &[T], out: &mut [T]) -> Result<(), Error> {
        if locs.len() != out.len() {
            return Err(Error::LengthMismatch {
                expected: locs.len(),
                actual: out.len(),
            });
        }

        for i in 0..locs.len() {
            out[i] = self.eval_one(locs[i]);
        }

        Ok(())
    }

    /// Evaluate the interpolant at a set of observation points, allocating
    /// for the output values for convenience.
    #[inline]
    fn eval_alloc(&self, locs: &[T]) -> Vec<T> {
        let mut out = vec![T::zero(); locs.len()];
        for i in 0..locs.len() {
            out[i] = self.eval_one(locs[i]);
        }
        out
    }
}

impl<T: Float> Interp1D<T> for CubicKnots<T> {
    #[inline]
    fn eval_one(&self, loc: T) -> T {
        natural_cubic(&self.grid, &self.y, &self.y2, self.fill, loc)
    }

    fn eval(&self, locs: &[T], out: &mut [T]) -> Result<(), Error> {
        if locs.len() != out.len() {
            return Err(Error::LengthMismatch {
                expected: locs.len(),
                actual: out.len(),
            });
        }

        let mut nfill = 0_usize;
        for i in 0..locs.len() {
            match self.grid.cell(locs[i]) {
                Some(j) => out[i] = cell_cubic(&self.grid, &self.y, &self.y2, j, locs[i]),
                None => {
                    out[i] = self.fill;
                    nfill += 1;
                }
            }
        }
        log::trace!("evaluated {} points, {nfill} outside grid", locs.len());

        Ok(())
    }
}

impl<T: Float> CubicKnots<T> {
    /// Check whether any observation points are outside the grid by at least `atol`.
    ///
    /// NaN observation points can not be on the grid and are flagged as outside.
    /// This is a diagnostic; evaluation resolves these points to the fill value.
    /// The last knot counts as in bounds here, but evaluates to the fill value too,
    /// since there is no cell above it.
    pub fn check_bounds(&self, locs: &[T], atol: T) -> bool {
        let first = self.grid.start();
        let last = self.grid.stop();
        let lo = first.min(last);
        let hi = first.max(last);

        locs.iter().any(|&x| x.is_nan() || (x - lo) <= -atol || (x - hi) >= atol)
    }
}

/// Evaluate a fitted curve at each of `locs`, allocating for the output.
///
/// This is a convenience function equivalent to [`Interp1D::eval_alloc`].
#[inline]
pub fn evaluate<T: Float>(locs: &[T], knots: &CubicKnots<T>) -> Vec<T> {
    knots.eval_alloc(locs)
}

/// Evaluate the natural cubic at `loc`, or `fill` outside the grid.
#[inline]
pub(crate) fn natural_cubic<T: Float>(
    grid: &RegularGrid<T>,
    y: &[T],
    y2: &[T],
    fill: T,
    loc: T,
) -> T {
    match grid.cell(loc) {
        Some(j) => cell_cubic(grid, y, y2, j, loc),
        None => fill,
    }
}

/// Evaluate the cubic on cell `j`, which must be inside the grid.
#[inline(always)]
fn cell_cubic<T: Float>(grid: &RegularGrid<T>, y: &[T], y2: &[T], j: usize, loc: T) -> T {
    // Construct some constants using generic methods
    let one = T::one();
    let two = one + one;
    let six = two * (two + one);

    let h = grid.step();
    let xlag = grid.loc(j);
    let xlead = grid.loc(j + 1);

    // Linear weights, a + b = 1 inside the cell
    let a = (xlead - loc) / h;
    let b = (loc - xlag) / h;

    // Curvature corrections, both scaled by h^2
    let h2 = h * h;
    let c = (a.powi(3) - a) * h2 / six;
    let d = (b.powi(3) - b) * h2 / six;

    a * y[j] + b * y[j + 1] + c * y2[j] + d * y2[j + 1]
}
