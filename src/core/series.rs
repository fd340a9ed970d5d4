use serde::{Deserialize, Serialize};

use crate::core::{CategoryScale, ValueScale};
use crate::data::Record;
use crate::error::ChartResult;

/// Which of the two continuous columns a polyline plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesMetric {
    Metric1,
    Metric2,
}

impl SeriesMetric {
    #[must_use]
    pub fn value(self, record: &Record) -> f64 {
        match self {
            Self::Metric1 => record.metric1,
            Self::Metric2 => record.metric2,
        }
    }
}

/// Projected polyline segment in plot-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Projects one metric into adjacent point-to-point segments in record order.
///
/// Deterministic and side-effect free so rendering and tests consume the
/// exact same geometry. Fewer than two records produce no segments.
pub fn project_metric_segments(
    records: &[Record],
    metric: SeriesMetric,
    x_scale: &CategoryScale,
    y_scale: ValueScale,
    plot_width_px: f64,
    plot_height_px: f64,
) -> ChartResult<Vec<LineSegment>> {
    if records.len() < 2 {
        return Ok(Vec::new());
    }

    let mut mapped = Vec::with_capacity(records.len());
    for record in records {
        let x = x_scale.position_of(&record.category, plot_width_px)?;
        let y = y_scale.value_to_pixel(metric.value(record), plot_height_px)?;
        mapped.push((x, y));
    }

    let mut segments = Vec::with_capacity(mapped.len() - 1);
    for pair in mapped.windows(2) {
        segments.push(LineSegment {
            x1: pair[0].0,
            y1: pair[0].1,
            x2: pair[1].0,
            y2: pair[1].1,
        });
    }

    Ok(segments)
}
