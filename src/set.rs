//! A batch of natural cubic splines sharing one regular grid.
//!
//! Sample values are stored row-major, one row per signal
//! (y(r0, x0), y(r0, x1), ..., y(r0, xn), y(r1, x0), ...), and each row is
//! evaluated at its own set of observation points, laid out the same way.
//!
//! ```rust
//! use cubic1d::KnotSet;
//!
//! // Two signals with three samples each
//! let y = vec![0.0_f64, 1.0, 0.0, 1.0, 1.0, 1.0];
//! let set = KnotSet::fit(y, 2, 1.0, 0.0, f64::NAN).unwrap();
//!
//! // Two observation points for each signal
//! let obs = [0.0, 1.0, 0.5, 1.5];
//! let out = set.eval_alloc(&obs).unwrap();
//! assert_eq!(out[..2], [0.0, 1.0]);
//! assert_eq!(out[2..], [1.0, 1.0]);
//! ```
use alloc::vec;
use alloc::vec::Vec;

use itertools::izip;
use num_traits::Float;

use crate::eval::natural_cubic;
use crate::fit::tie_knots;
use crate::{Error, Interp1D, RegularGrid};

/// Natural cubic splines for many signals of the same length on one regular grid.
///
/// Row `r` holds samples `r * n..(r + 1) * n`, and is read-only except through
/// [`KnotSet::refit`], which replaces every row at once.
#[derive(Clone, Debug, PartialEq)]
pub struct KnotSet<T: Float> {
    /// Grid shared by every row
    grid: RegularGrid<T>,

    /// Number of rows
    nrows: usize,

    /// Sample values, size nrows * grid.len()
    y: Vec<T>,

    /// Second derivatives, size nrows * grid.len()
    y2: Vec<T>,

    /// Value returned for observation points outside the grid
    fill: T,
}

/// One row of a [`KnotSet`].
#[derive(Clone, Copy)]
pub struct KnotRow<'a, T: Float> {
    grid: &'a RegularGrid<T>,
    y: &'a [T],
    y2: &'a [T],
    fill: T,
}

impl<'a, T: Float> KnotRow<'a, T> {
    pub fn samples(&self) -> &'a [T] {
        self.y
    }

    pub fn second_derivatives(&self) -> &'a [T] {
        self.y2
    }
}

impl<'a, T: Float> Interp1D<T> for KnotRow<'a, T> {
    #[inline]
    fn eval_one(&self, loc: T) -> T {
        natural_cubic(self.grid, self.y, self.y2, self.fill, loc)
    }
}

impl<T: Float> KnotSet<T> {
    /// Fit `nrows` natural cubic splines to row-major `samples`,
    /// each row located at `start + i * step`.
    ///
    /// # Errors
    /// * If `nrows` is zero or does not evenly divide the number of samples
    /// * If there are fewer than 2 samples per row
    /// * If the step size is zero
    pub fn fit(
        samples: Vec<T>,
        nrows: usize,
        step: T,
        start: T,
        fill: T,
    ) -> Result<Self, Error> {
        let n = row_len(samples.len(), nrows)?;
        let grid = RegularGrid::new(start, step, n)?;

        let mut y2 = vec![T::zero(); samples.len()];
        solve_rows(&grid, &samples, &mut y2)?;

        log::debug!("fit {nrows} natural cubic splines with n={n}");

        Ok(Self {
            grid,
            nrows,
            y: samples,
            y2,
            fill,
        })
    }

    /// Replace the samples of every row and solve again,
    /// keeping the grid, row count, and fill value.
    ///
    /// # Errors
    /// * If `samples` is not the same size as the existing data
    pub fn refit(&mut self, samples: &[T]) -> Result<(), Error> {
        if samples.len() != self.y.len() {
            return Err(Error::LengthMismatch {
                expected: self.y.len(),
                actual: samples.len(),
            });
        }

        self.y.copy_from_slice(samples);
        solve_rows(&self.grid, &self.y, &mut self.y2)
    }

    #[inline]
    pub fn grid(&self) -> &RegularGrid<T> {
        &self.grid
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn fill(&self) -> T {
        self.fill
    }

    /// Borrow one row as an interpolator, or `None` if `i` is out of range.
    pub fn row(&self, i: usize) -> Option<KnotRow<'_, T>> {
        if i >= self.nrows {
            return None;
        }

        let n = self.grid.len();
        let span = i * n..(i + 1) * n;
        Some(KnotRow {
            grid: &self.grid,
            y: &self.y[span.clone()],
            y2: &self.y2[span],
            fill: self.fill,
        })
    }

    /// Evaluate each row at its own observation points.
    ///
    /// `locs` and `out` are row-major with the same number of points per row.
    ///
    /// # Errors
    /// * If `locs` and `out` are not the same length
    /// * If the number of points does not divide evenly into rows
    pub fn eval(&self, locs: &[T], out: &mut [T]) -> Result<(), Error> {
        if locs.len() != out.len() {
            return Err(Error::LengthMismatch {
                expected: locs.len(),
                actual: out.len(),
            });
        }
        let m = obs_row_len(locs.len(), self.nrows)?;
        if m == 0 {
            return Ok(());
        }

        let n = self.grid.len();
        for (x, v, y, y2) in izip!(
            locs.chunks_exact(m),
            out.chunks_exact_mut(m),
            self.y.chunks_exact(n),
            self.y2.chunks_exact(n)
        ) {
            for i in 0..m {
                v[i] = natural_cubic(&self.grid, y, y2, self.fill, x[i]);
            }
        }
        log::trace!("evaluated {m} points on each of {} rows", self.nrows);

        Ok(())
    }

    /// Evaluate each row at its own observation points, allocating
    /// for the output values for convenience.
    ///
    /// # Errors
    /// * If the number of points does not divide evenly into rows
    pub fn eval_alloc(&self, locs: &[T]) -> Result<Vec<T>, Error> {
        let mut out = vec![T::zero(); locs.len()];
        self.eval(locs, &mut out)?;
        Ok(out)
    }
}

/// Samples per row; rows must be nonempty.
fn row_len(len: usize, nrows: usize) -> Result<usize, Error> {
    if nrows == 0 || len % nrows != 0 {
        return Err(Error::RowMismatch { len, nrows });
    }
    Ok(len / nrows)
}

/// Observation points per row, which may be zero.
fn obs_row_len(len: usize, nrows: usize) -> Result<usize, Error> {
    if len % nrows != 0 {
        return Err(Error::RowMismatch { len, nrows });
    }
    Ok(len / nrows)
}

/// Solve every row, sharing one scratch buffer.
fn solve_rows<T: Float>(grid: &RegularGrid<T>, y: &[T], y2: &mut [T]) -> Result<(), Error> {
    let n = grid.len();
    let mut scratch = vec![T::zero(); n];
    for (yr, y2r) in y.chunks_exact(n).zip(y2.chunks_exact_mut(n)) {
        tie_knots(yr, grid.step(), y2r, &mut scratch)?;
    }
    log::trace!("solved {} rows", y.len() / n);

    Ok(())
}
