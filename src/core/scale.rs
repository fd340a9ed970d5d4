use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Linear value axis mapped to an inverted Y pixel axis.
///
/// Unlike a generic linear scale, a degenerate zero-span domain is accepted:
/// a dataset whose values are all equal produces a zero-width padded domain,
/// and every value then maps to the vertical midpoint of the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    domain_min: f64,
    domain_max: f64,
}

impl ValueScale {
    pub fn new(domain_min: f64, domain_max: f64) -> ChartResult<Self> {
        if !domain_min.is_finite() || !domain_max.is_finite() || domain_min > domain_max {
            return Err(ChartError::InvalidData(
                "value scale domain must be finite and ordered".to_owned(),
            ));
        }

        Ok(Self {
            domain_min,
            domain_max,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    /// Maps a domain value to pixel Y inside a plot of `height_px`.
    ///
    /// The axis is inverted: the domain maximum lands at pixel 0 and the
    /// domain minimum at `height_px`.
    pub fn value_to_pixel(self, value: f64, height_px: f64) -> ChartResult<f64> {
        if !height_px.is_finite() || height_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "plot height must be finite and > 0".to_owned(),
            ));
        }
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_max - self.domain_min;
        if span == 0.0 {
            return Ok(height_px / 2.0);
        }

        Ok((self.domain_max - value) / span * height_px)
    }

    /// Returns `tick_count` evenly spaced domain values, endpoints included.
    /// A single requested tick sits at the domain midpoint.
    #[must_use]
    pub fn ticks(self, tick_count: usize) -> Vec<f64> {
        if tick_count == 0 {
            return Vec::new();
        }
        if tick_count == 1 {
            return vec![(self.domain_min + self.domain_max) / 2.0];
        }

        let span = self.domain_max - self.domain_min;
        let denominator = (tick_count - 1) as f64;
        (0..tick_count)
            .map(|index| self.domain_min + span * (index as f64) / denominator)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::ValueScale;

    #[test]
    fn inverted_axis_maps_max_to_top() {
        let scale = ValueScale::new(0.0, 100.0).expect("valid scale");
        assert_eq!(scale.value_to_pixel(100.0, 500.0).expect("top"), 0.0);
        assert_eq!(scale.value_to_pixel(0.0, 500.0).expect("bottom"), 500.0);
        assert_eq!(scale.value_to_pixel(50.0, 500.0).expect("mid"), 250.0);
    }

    #[test]
    fn zero_span_domain_maps_to_mid_height() {
        let scale = ValueScale::new(42.0, 42.0).expect("degenerate scale");
        assert_eq!(scale.value_to_pixel(42.0, 400.0).expect("mid"), 200.0);
        assert_eq!(scale.value_to_pixel(7.0, 400.0).expect("mid"), 200.0);
    }

    #[test]
    fn ticks_cover_domain_endpoints() {
        let scale = ValueScale::new(10.0, 20.0).expect("valid scale");
        let ticks = scale.ticks(11);
        assert_eq!(ticks.len(), 11);
        assert!((ticks[0] - 10.0).abs() <= 1e-12);
        assert!((ticks[10] - 20.0).abs() <= 1e-12);
        assert!((ticks[5] - 15.0).abs() <= 1e-12);
    }

    #[test]
    fn single_tick_sits_at_the_domain_midpoint() {
        let scale = ValueScale::new(10.0, 20.0).expect("valid scale");
        assert_eq!(scale.ticks(1), vec![15.0]);
    }

    #[test]
    fn reversed_domain_is_rejected() {
        assert!(ValueScale::new(5.0, 1.0).is_err());
        assert!(ValueScale::new(f64::NAN, 1.0).is_err());
    }
}
