//! Five-number summary with Tukey whiskers

/// Whisker reach as a multiple of the inter-quartile range
pub const WHISKER_IQR_FACTOR: f64 = 1.5;

/// Quantile of already-sorted data using linear interpolation between closest ranks.
///
/// `p` is clamped to `[0, 1]`. Returns `None` for empty input.
#[must_use]
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let pos = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;

    Some(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
}

/// Summary statistics needed to draw one boxplot
#[derive(Debug, Clone, PartialEq)]
pub struct BoxplotStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest observation within `q1 - 1.5 * IQR`
    pub whisker_low: f64,
    /// Largest observation within `q3 + 1.5 * IQR`
    pub whisker_high: f64,
    /// Observations beyond the whiskers, ascending
    pub outliers: Vec<f64>,
}

impl BoxplotStats {
    /// Compute boxplot statistics. Returns `None` for empty data or if any value is NaN.
    #[must_use]
    pub fn from_samples(data: &[f64]) -> Option<Self> {
        if data.is_empty() || data.iter().any(|x| x.is_nan()) {
            return None;
        }

        let mut sorted = data.to_vec();
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile_sorted(&sorted, 0.25)?;
        let median = quantile_sorted(&sorted, 0.50)?;
        let q3 = quantile_sorted(&sorted, 0.75)?;

        let iqr = q3 - q1;
        let low_fence = q1 - WHISKER_IQR_FACTOR * iqr;
        let high_fence = q3 + WHISKER_IQR_FACTOR * iqr;

        // Q1 and Q3 lie inside the fences, so both searches always find a value
        let whisker_low = sorted.iter().copied().find(|&x| x >= low_fence)?;
        let whisker_high = sorted.iter().rev().copied().find(|&x| x <= high_fence)?;

        let outliers = sorted
            .iter()
            .copied()
            .filter(|&x| x < whisker_low || x > whisker_high)
            .collect();

        Some(Self {
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
            outliers,
        })
    }

    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// `(min, max)` across whiskers and outliers
    #[must_use]
    pub fn extent(&self) -> (f64, f64) {
        let min = self
            .outliers
            .first()
            .map_or(self.whisker_low, |&x| x.min(self.whisker_low));
        let max = self
            .outliers
            .last()
            .map_or(self.whisker_high, |&x| x.max(self.whisker_high));
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantile_linear_interpolation() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile_sorted(&sorted, 0.0), Some(1.0));
        assert_eq!(quantile_sorted(&sorted, 0.25), Some(1.75));
        assert_eq!(quantile_sorted(&sorted, 0.5), Some(2.5));
        assert_eq!(quantile_sorted(&sorted, 0.75), Some(3.25));
        assert_eq!(quantile_sorted(&sorted, 1.0), Some(4.0));
        assert_eq!(quantile_sorted(&[], 0.5), None);
    }

    #[test]
    fn test_boxplot_no_outliers() {
        let data = [5.0, 1.0, 3.0, 2.0, 4.0];
        let stats = BoxplotStats::from_samples(&data).unwrap();

        assert_eq!(stats.q1, 2.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.q3, 4.0);
        assert_eq!(stats.iqr(), 2.0);
        assert_eq!(stats.whisker_low, 1.0);
        assert_eq!(stats.whisker_high, 5.0);
        assert!(stats.outliers.is_empty());
        assert_eq!(stats.extent(), (1.0, 5.0));
    }

    #[test]
    fn test_boxplot_with_outliers() {
        // q1 = 2, q3 = 4.5, fences at -1.75 and 8.25
        let data = [-10.0, 1.0, 2.0, 2.0, 3.0, 3.0, 4.0, 4.0, 5.0, 6.0, 50.0];
        let stats = BoxplotStats::from_samples(&data).unwrap();

        assert_eq!(stats.q1, 2.0);
        assert_eq!(stats.q3, 4.5);
        let high_fence = stats.q3 + WHISKER_IQR_FACTOR * stats.iqr();
        let low_fence = stats.q1 - WHISKER_IQR_FACTOR * stats.iqr();

        assert!(stats.whisker_high <= high_fence);
        assert!(stats.whisker_low >= low_fence);
        assert_eq!(stats.whisker_low, 1.0);
        assert_eq!(stats.whisker_high, 6.0);
        assert_eq!(stats.outliers, vec![-10.0, 50.0]);
        assert_eq!(stats.extent(), (-10.0, 50.0));
    }

    #[test]
    fn test_boxplot_single_value() {
        let stats = BoxplotStats::from_samples(&[7.0]).unwrap();
        assert_eq!(stats.median, 7.0);
        assert_eq!(stats.whisker_low, 7.0);
        assert_eq!(stats.whisker_high, 7.0);
        assert!(stats.outliers.is_empty());
    }

    #[test]
    fn test_boxplot_rejects_bad_input() {
        assert!(BoxplotStats::from_samples(&[]).is_none());
        assert!(BoxplotStats::from_samples(&[1.0, f64::NAN]).is_none());
    }
}
