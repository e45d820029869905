//! Convenience methods for constructing grids and observation points in a way
//! that echoes, but does not exactly match, methods common in scripting languages.
use num_traits::Float;

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
///
/// A single value is just `start`, and zero values is empty.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    if n < 2 {
        return vec![start; n];
    }

    let dx: T = (stop - start) / T::from(n - 1).unwrap_or_else(T::nan);
    (0..n)
        .map(|i| start + T::from(i).unwrap_or_else(T::nan) * dx)
        .collect()
}

/// Sample `f` at each of `n` knots starting from `start` with spacing `step`,
/// producing a buffer ready to hand to [`fit`](crate::fit()).
pub fn sample<T, F>(f: F, start: T, step: T, n: usize) -> Vec<T>
where
    T: Float,
    F: Fn(T) -> T,
{
    (0..n)
        .map(|i| f(start + step * T::from(i).unwrap_or_else(T::nan)))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0_f64, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(2.0_f64, 3.0, 1), vec![2.0]);
        assert!(linspace(2.0_f64, 3.0, 0).is_empty());
    }

    #[test]
    fn test_sample() {
        let y = sample(|x: f64| 2.0 * x, 1.0, 0.5, 4);
        assert_eq!(y, vec![2.0, 3.0, 4.0, 5.0]);
    }
}
