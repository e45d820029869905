//! A regular 1D grid, which has the same spacing between each point.
use num_traits::{Float, NumCast};

use crate::Error;

/// Knot locations `start + i * step` for `i` in `0..n`.
///
/// The step may be negative, in which case the grid descends from `start`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegularGrid<T: Float> {
    start: T,
    step: T,
    n: usize,
}

impl<T: Float> RegularGrid<T> {
    /// # Errors
    /// * If there are fewer than 2 knots
    /// * If the step size is zero
    pub fn new(start: T, step: T, n: usize) -> Result<Self, Error> {
        if n < 2 {
            return Err(Error::TooFewSamples(n));
        }
        if step == T::zero() {
            return Err(Error::ZeroStep);
        }

        Ok(Self { start, step, n })
    }

    /// Number of knots
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false; a grid has at least two knots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// Location of the last knot
    #[inline]
    pub fn stop(&self) -> T {
        self.loc(self.n - 1)
    }

    /// Location of knot `i`.
    ///
    /// Indices beyond the grid extend it at the same spacing.
    #[inline]
    pub fn loc(&self, i: usize) -> T {
        // usize -> f32/f64 rounds but does not fail
        let fi = <T as NumCast>::from(i).unwrap_or_else(T::infinity);
        self.start + self.step * fi
    }

    /// Get the index of the lower knot of the cell containing `loc`.
    ///
    /// The index is taken relative to the start of the grid. Returns `None` below
    /// the first knot, at or above the last knot, and for locations with no
    /// representable index (NaN or infinite).
    #[inline]
    pub fn cell(&self, loc: T) -> Option<usize> {
        // The last knot has no cell above it. Compare against its location
        // directly, since the index below can round down onto the last cell.
        let stop = self.stop();
        let beyond = if self.step > T::zero() {
            loc >= stop
        } else {
            loc <= stop
        };
        if beyond {
            return None;
        }

        // Nominal location may be outside the grid
        let floc = ((loc - self.start) / self.step).floor();
        let iloc = <isize as NumCast>::from(floc)?;
        if iloc < 0 {
            return None;
        }

        // Points just short of the last knot can round up onto it
        Some((iloc as usize).min(self.n - 2))
    }
}
