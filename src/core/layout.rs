use serde::{Deserialize, Serialize};

use crate::core::stats::ConfidenceBand;
use crate::core::{CategoryScale, ValueScale};
use crate::data::Record;
use crate::error::{ChartError, ChartResult};

/// Share of the combined value range added as padding above and below the
/// value domain.
pub const RANGE_PADDING_RATIO: f64 = 0.15;

/// Axis domains and shading boundary derived from one dataset.
///
/// Everything here is recomputed from scratch for every incoming message;
/// the layout never carries state across passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    x_domain: Vec<String>,
    y_min: f64,
    y_max: f64,
    range_padding: f64,
    test_start: Option<usize>,
}

impl ChartLayout {
    /// Derives domains from the records and, when available, the band bounds.
    ///
    /// The value domain reduces each record to its own min/max (folding in
    /// the band bounds) before taking the global extremes. The padded result
    /// is identical to a flat reduction, but the per-record order is kept so
    /// the output matches the host chart this engine replaces.
    pub fn compute(records: &[Record], band: Option<&ConfidenceBand>) -> ChartResult<Self> {
        if records.is_empty() {
            return Err(ChartError::InvalidData(
                "layout requires at least one record".to_owned(),
            ));
        }

        let mut combined_min = f64::INFINITY;
        let mut combined_max = f64::NEG_INFINITY;
        for record in records {
            combined_min = combined_min.min(record.metric1).min(record.metric2);
            combined_max = combined_max.max(record.metric1).max(record.metric2);
        }
        if let Some(band) = band {
            combined_min = combined_min.min(band.lower);
            combined_max = combined_max.max(band.upper);
        }
        if !combined_min.is_finite() || !combined_max.is_finite() {
            return Err(ChartError::InvalidData(
                "layout requires finite metric values".to_owned(),
            ));
        }
        let range_padding = (combined_max - combined_min) * RANGE_PADDING_RATIO;

        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for record in records {
            let mut low = record.metric1.min(record.metric2);
            let mut high = record.metric1.max(record.metric2);
            if let Some(band) = band {
                low = low.min(band.lower);
                high = high.max(band.upper);
            }
            y_min = y_min.min(low);
            y_max = y_max.max(high);
        }

        let x_domain = records
            .iter()
            .map(|record| record.category.clone())
            .collect();
        let test_start = records.iter().position(|record| record.group.is_test());

        Ok(Self {
            x_domain,
            y_min: y_min - range_padding,
            y_max: y_max + range_padding,
            range_padding,
            test_start,
        })
    }

    /// Raw ordered category list, one entry per record.
    #[must_use]
    pub fn x_domain(&self) -> &[String] {
        &self.x_domain
    }

    #[must_use]
    pub fn y_domain(&self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }

    #[must_use]
    pub fn range_padding(&self) -> f64 {
        self.range_padding
    }

    /// Index of the first test-group record, if any.
    #[must_use]
    pub fn test_start_index(&self) -> Option<usize> {
        self.test_start
    }

    #[must_use]
    pub fn has_test_region(&self) -> bool {
        self.test_start.is_some()
    }

    /// Index of the first test-group record, or `NoTestRegion`.
    pub fn test_start(&self) -> ChartResult<usize> {
        self.test_start.ok_or(ChartError::NoTestRegion)
    }

    pub fn category_scale(&self) -> ChartResult<CategoryScale> {
        CategoryScale::new(self.x_domain.clone())
    }

    pub fn value_scale(&self) -> ChartResult<ValueScale> {
        ValueScale::new(self.y_min, self.y_max)
    }
}
