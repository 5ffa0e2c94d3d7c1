use crate::model::DistributionKind;

/// A named sample drawn from a distribution, paired with that distribution's density.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionSample {
    pub kind: DistributionKind,
    pub data: Vec<f64>,
}

impl DistributionSample {
    #[must_use]
    pub fn new(kind: DistributionKind, data: Vec<f64>) -> Self {
        Self { kind, data }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Theoretical density at `x`
    #[must_use]
    pub fn density(&self, x: f64) -> f64 {
        self.kind.pdf(x)
    }

    /// `(min, max)` of the sample, or `None` when empty
    #[must_use]
    pub fn range(&self) -> Option<(f64, f64)> {
        if self.data.is_empty() {
            return None;
        }
        let min = self.data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }

    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        if self.data.is_empty() {
            return None;
        }
        Some(self.data.iter().sum::<f64>() / self.data.len() as f64)
    }

    /// Population standard deviation (divides by `n`)
    #[must_use]
    pub fn std_dev(&self) -> Option<f64> {
        let mean = self.mean()?;
        let variance =
            self.data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / self.data.len() as f64;
        Some(variance.sqrt())
    }

    /// Density curve over `points` evenly spaced values spanning the sample range.
    #[must_use]
    pub fn density_curve(&self, points: usize) -> Vec<(f64, f64)> {
        let Some((min, max)) = self.range() else {
            return Vec::new();
        };
        crate::stats::linspace(min, max, points)
            .into_iter()
            .map(|x| (x, self.density(x)))
            .collect()
    }
}
