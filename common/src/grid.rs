//! 1-D sampling grids
//!
//! Every chapter samples a closed-form expression over an evenly spaced
//! interval; `linspace` is the shared primitive for building those grids.

/// Evenly spaced samples over `[start, stop]`, both endpoints included.
///
/// Mirrors the inclusive-endpoint convention the evaluators assume: `n`
/// samples, spacing `(stop - start) / (n - 1)`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    assert!(n >= 2, "a sample grid needs at least two points");
    let step = (stop - start) / (n - 1) as f64;
    (0..n).map(|i| start + i as f64 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::linspace;

    #[test]
    fn includes_both_endpoints() {
        let g = linspace(0.0, 10.0, 200);
        assert_eq!(g.len(), 200);
        assert_eq!(g[0], 0.0);
        assert!((g[199] - 10.0).abs() < 1e-12);
    }

    #[test]
    fn spacing_is_uniform() {
        let g = linspace(-0.05, 0.05, 1000);
        let step = g[1] - g[0];
        for w in g.windows(2) {
            assert!((w[1] - w[0] - step).abs() < 1e-15);
        }
    }

    #[test]
    fn two_points_are_the_endpoints() {
        assert_eq!(linspace(1.0, 4.0, 2), vec![1.0, 4.0]);
    }

    #[test]
    #[should_panic]
    fn rejects_single_point_grid() {
        linspace(0.0, 1.0, 1);
    }
}
