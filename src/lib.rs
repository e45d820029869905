//! Natural cubic spline interpolation on uniformly-spaced 1D grids,
//! no-std compatible (with `alloc`), for resampling signals sampled at a fixed rate.
//!
//! Fitting solves for the second derivative at each sample with natural
//! boundary conditions (zero second derivative at both ends), and evaluation
//! uses those coefficients to produce a piecewise-cubic interpolant with
//! continuous value, slope, and curvature across every knot.
//!
//! Observation points outside the grid take a fixed fill value instead of
//! being extrapolated. The last knot itself is outside, since there is no
//! cell above it.
//!
//! # Performance Scalings
//!
//! | Method             | RAM       | Cost                   |
//! |--------------------|-----------|------------------------|
//! | fit                | O(n)      | O(n)                   |
//! | tie_knots          | none      | O(n)                   |
//! | eval / eval_one    | none      | O(1) per point         |
//! | KnotSet::fit       | O(rows*n) | O(rows*n)              |
//! | KnotSet::eval      | none      | O(1) per point         |
//!
//! # Example
//! ```rust
//! use cubic1d::{fit, evaluate, Interp1D};
//!
//! // Samples at x = 0.0, 0.5, ..., 3.5
//! let y: Vec<f64> = (0..8).map(|i| (0.5 * i as f64).sin()).collect();
//!
//! // The sample buffer is moved into the fitted curve
//! let knots = fit(y, 0.5, 0.0, f64::NAN).unwrap();
//! assert_eq!(knots.second_derivatives()[0], 0.0);
//!
//! // Observation points to interpolate, and some outside the grid
//! let xobs = [0.25_f64, 1.0, 3.3, -1.0, 3.5];
//! let out = evaluate(&xobs, &knots);
//! assert!((out[0] - 0.25_f64.sin()).abs() < 1e-2);
//! assert!((out[1] - 1.0_f64.sin()).abs() < 1e-12);
//! assert!(out[3].is_nan() && out[4].is_nan());
//!
//! // Or evaluate into existing storage
//! let mut buf = [0.0; 5];
//! knots.eval(&xobs, &mut buf).unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

extern crate alloc;

mod error;
pub use error::Error;

pub mod grid;
pub use grid::RegularGrid;

pub mod knots;
pub use knots::CubicKnots;

pub mod fit;
pub use fit::{fit, tie_knots};

pub mod eval;
pub use eval::{evaluate, Interp1D};

pub mod set;
pub use set::{KnotRow, KnotSet};

#[cfg(feature = "std")]
pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;
