/// `n` evenly spaced values over `[start, end]`, both ends included.
///
/// The last value is exactly `end`. `n == 1` yields `[start]`.
#[must_use]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            values[n - 1] = end;
            values
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let grid = linspace(-3.2, 3.7, 100);
        assert_eq!(grid.len(), 100);
        assert_eq!(grid[0], -3.2);
        assert_eq!(grid[99], 3.7);
        assert!(grid.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_linspace_small() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_linspace_degenerate_range() {
        let grid = linspace(1.5, 1.5, 4);
        assert!(grid.iter().all(|&x| x == 1.5));
    }
}
