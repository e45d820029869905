//! Fitted natural cubic spline on a regular grid.
use alloc::vec::Vec;

use num_traits::Float;

use crate::RegularGrid;

/// Knot data for a natural cubic spline: the original samples along with
/// the second derivative of the interpolant at each sample.
///
/// Built by [`fit`](crate::fit::fit) and read-only afterward. The samples are
/// moved in rather than copied; dropping the descriptor releases both buffers.
#[derive(Clone, Debug, PartialEq)]
pub struct CubicKnots<T: Float> {
    /// Grid location of each sample
    pub(crate) grid: RegularGrid<T>,

    /// Sample values, size grid.len()
    pub(crate) y: Vec<T>,

    /// Second derivative at each sample, size grid.len(), zero at both ends
    pub(crate) y2: Vec<T>,

    /// Value returned for observation points outside the grid
    pub(crate) fill: T,
}

impl<T: Float> CubicKnots<T> {
    #[inline]
    pub fn grid(&self) -> &RegularGrid<T> {
        &self.grid
    }

    /// Number of knots
    #[inline]
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    /// Always false; a fitted curve has at least two knots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn step(&self) -> T {
        self.grid.step()
    }

    #[inline]
    pub fn start(&self) -> T {
        self.grid.start()
    }

    #[inline]
    pub fn fill(&self) -> T {
        self.fill
    }

    /// The original sample values
    #[inline]
    pub fn samples(&self) -> &[T] {
        &self.y
    }

    /// Second derivative of the interpolant at each knot
    #[inline]
    pub fn second_derivatives(&self) -> &[T] {
        &self.y2
    }

    /// Release the fitted coefficients and hand the sample buffer back.
    pub fn into_samples(self) -> Vec<T> {
        self.y
    }
}
