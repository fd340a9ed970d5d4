use serde::{Deserialize, Serialize};

use crate::data::{GroupTag, Record};
use crate::error::{ChartError, ChartResult};

/// Z value for a ~95% interval under normality.
pub const BAND_Z: f64 = 1.96;

/// Arithmetic mean, `None` for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divide by n, not n - 1), `None` for an
/// empty slice. A single-element slice yields 0.
#[must_use]
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / values.len() as f64;
    Some(variance.sqrt())
}

/// Confidence band computed once from the baseline group's metric-1 values.
///
/// Symmetric around the baseline mean by `BAND_Z` population standard
/// deviations, so `lower <= mean <= upper` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBand {
    pub mean: f64,
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceBand {
    /// Builds the band from the metric-1 values of all baseline records.
    pub fn from_baseline(records: &[Record]) -> ChartResult<Self> {
        let values: Vec<f64> = records
            .iter()
            .filter(|record| record.group.is_baseline())
            .map(|record| record.metric1)
            .collect();
        Self::from_values(&values)
    }

    /// Builds the band from a raw value set.
    pub fn from_values(values: &[f64]) -> ChartResult<Self> {
        let (Some(mean), Some(std_dev)) = (mean(values), population_std_dev(values)) else {
            return Err(ChartError::EmptyGroup {
                label: GroupTag::BASELINE_LABEL.to_owned(),
            });
        };

        if !mean.is_finite() || !std_dev.is_finite() {
            return Err(ChartError::InvalidData(
                "confidence band requires finite metric values".to_owned(),
            ));
        }

        Ok(Self {
            mean,
            lower: mean - BAND_Z * std_dev,
            upper: mean + BAND_Z * std_dev,
        })
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.upper - self.lower
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{ConfidenceBand, mean, population_std_dev};

    #[test]
    fn mean_and_std_dev_of_empty_slice_are_none() {
        assert!(mean(&[]).is_none());
        assert!(population_std_dev(&[]).is_none());
    }

    #[test]
    fn std_dev_uses_population_form() {
        // Sample (n - 1) form would give sqrt(2) here.
        let std_dev = population_std_dev(&[100.0, 102.0]).expect("std dev");
        assert_relative_eq!(std_dev, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn single_value_band_collapses_to_the_mean() {
        let band = ConfidenceBand::from_values(&[101.5]).expect("band");
        assert_eq!(band.mean, 101.5);
        assert_eq!(band.lower, 101.5);
        assert_eq!(band.upper, 101.5);
        assert_eq!(band.width(), 0.0);
    }
}
