use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Ordinal point scale for the category (x) axis.
///
/// Categories keep input order and are spaced evenly across the plot width
/// with symmetric outer padding expressed in step units. The domain is the
/// raw ordered category list, one entry per record; duplicate labels are kept
/// as-is and a lookup by label resolves to the first occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScale {
    categories: Vec<String>,
    padding: f64,
}

impl CategoryScale {
    pub const DEFAULT_PADDING: f64 = 0.4;

    pub fn new(categories: Vec<String>) -> ChartResult<Self> {
        if categories.is_empty() {
            return Err(ChartError::InvalidData(
                "category scale requires at least one category".to_owned(),
            ));
        }

        Ok(Self {
            categories,
            padding: Self::DEFAULT_PADDING,
        })
    }

    pub fn with_padding(mut self, padding: f64) -> ChartResult<Self> {
        if !padding.is_finite() || padding < 0.0 {
            return Err(ChartError::InvalidData(
                "category padding must be finite and >= 0".to_owned(),
            ));
        }
        self.padding = padding;
        Ok(self)
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Pixel distance between adjacent category positions.
    pub fn step(&self, width_px: f64) -> ChartResult<f64> {
        validate_width(width_px)?;
        let count = self.categories.len() as f64;
        Ok(width_px / f64::max(1.0, count - 1.0 + 2.0 * self.padding))
    }

    /// Pixel position of the category at `index`.
    pub fn position(&self, index: usize, width_px: f64) -> ChartResult<f64> {
        if index >= self.categories.len() {
            return Err(ChartError::InvalidData(format!(
                "category index {index} out of range for {} categories",
                self.categories.len()
            )));
        }

        let step = self.step(width_px)?;
        let count = self.categories.len() as f64;
        // Leftover width is centered, which also places a single category
        // at the middle of the plot.
        let start = (width_px - step * (count - 1.0)) * 0.5;
        Ok(start + step * index as f64)
    }

    /// Pixel position of the first category matching `label`.
    pub fn position_of(&self, label: &str, width_px: f64) -> ChartResult<f64> {
        let index = self
            .categories
            .iter()
            .position(|category| category == label)
            .ok_or_else(|| {
                ChartError::InvalidData(format!("unknown category label `{label}`"))
            })?;
        self.position(index, width_px)
    }
}

fn validate_width(width_px: f64) -> ChartResult<()> {
    if !width_px.is_finite() || width_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "plot width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::CategoryScale;

    fn labels(count: usize) -> Vec<String> {
        (0..count).map(|index| format!("c{index}")).collect()
    }

    #[test]
    fn ten_categories_use_even_steps_with_outer_padding() {
        let scale = CategoryScale::new(labels(10)).expect("scale");
        // width / (9 + 2 * 0.4) keeps 0.4 step of padding on both sides.
        let step = scale.step(980.0).expect("step");
        assert!((step - 100.0).abs() <= 1e-9);
        assert!((scale.position(0, 980.0).expect("first") - 40.0).abs() <= 1e-9);
        assert!((scale.position(9, 980.0).expect("last") - 940.0).abs() <= 1e-9);
    }

    #[test]
    fn single_category_is_centered() {
        let scale = CategoryScale::new(labels(1)).expect("scale");
        let position = scale.position(0, 800.0).expect("position");
        assert!((position - 400.0).abs() <= 1e-9);
    }

    #[test]
    fn duplicate_label_resolves_to_first_occurrence() {
        let scale = CategoryScale::new(vec![
            "a".to_owned(),
            "b".to_owned(),
            "a".to_owned(),
            "c".to_owned(),
        ])
        .expect("scale");

        let by_label = scale.position_of("a", 760.0).expect("lookup");
        let by_index = scale.position(0, 760.0).expect("index");
        assert!((by_label - by_index).abs() <= 1e-12);
    }

    #[test]
    fn unknown_label_is_rejected() {
        let scale = CategoryScale::new(labels(3)).expect("scale");
        assert!(scale.position_of("missing", 500.0).is_err());
    }
}
