//! Small numeric helpers shared by the distribution modules.

/// `n` evenly spaced values over the closed interval `[start, stop]`.
///
/// Both endpoints are included. `n == 1` yields `[start]`, `n == 0` yields an
/// empty vector. When `start == stop` every value equals `start`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            // Pin the last sample so rounding never overshoots `stop`.
            out[n - 1] = stop;
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let xs = linspace(-4.0, 4.0, 1000);
        assert_eq!(xs.len(), 1000);
        assert_eq!(xs[0], -4.0);
        assert_eq!(xs[999], 4.0);
        for w in xs.windows(2) {
            assert!(w[1] > w[0]);
        }
    }

    #[test]
    fn test_linspace_degenerate() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
        assert!(linspace(1.5, 1.5, 10).iter().all(|&x| x == 1.5));
    }
}
