//! Equal-width, density-normalised histograms

/// Histogram over `[min, max]` of a sample
///
/// Every bin is half-open `[left, right)` except the last, which also
/// includes the sample maximum.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `bins + 1` ascending edges
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
    /// Total number of observations
    pub total: usize,
}

impl Histogram {
    /// Bin `data` into `bins` equal-width bins spanning its range.
    ///
    /// A constant sample is binned over `[x - 0.5, x + 0.5]`. Returns `None`
    /// for empty data, zero bins, or non-finite values.
    #[must_use]
    pub fn from_samples(data: &[f64], bins: usize) -> Option<Self> {
        if data.is_empty() || bins == 0 || data.iter().any(|x| !x.is_finite()) {
            return None;
        }

        let mut min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let mut max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if min == max {
            min -= 0.5;
            max += 0.5;
        }

        let edges = super::linspace(min, max, bins + 1);
        let width = (max - min) / bins as f64;

        let mut counts = vec![0usize; bins];
        for &x in data {
            let idx = (((x - min) / width).floor() as usize).min(bins - 1);
            // Rounding can put a value one bin off its edge
            let idx = if x < edges[idx] {
                idx.saturating_sub(1)
            } else if idx + 1 < bins && x >= edges[idx + 1] {
                idx + 1
            } else {
                idx
            };
            counts[idx] += 1;
        }

        Some(Self {
            edges,
            counts,
            total: data.len(),
        })
    }

    #[must_use]
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Density of bin `i`: `count / (total * width)`
    #[must_use]
    pub fn density(&self, i: usize) -> f64 {
        let width = self.edges[i + 1] - self.edges[i];
        self.counts[i] as f64 / (self.total as f64 * width)
    }

    /// `(left, right, density)` for each bin
    pub fn bars(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        (0..self.bins()).map(|i| (self.edges[i], self.edges[i + 1], self.density(i)))
    }

    #[must_use]
    pub fn max_density(&self) -> f64 {
        self.bars().map(|(_, _, d)| d).fold(0.0, f64::max)
    }

    /// Sum of bar areas; 1.0 up to rounding
    #[must_use]
    pub fn total_area(&self) -> f64 {
        self.bars().map(|(l, r, d)| (r - l) * d).sum()
    }
}
