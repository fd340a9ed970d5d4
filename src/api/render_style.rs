use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Visual tuning for one chart pass.
///
/// Serializable so host applications can persist chart setup without
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    /// Total margin around the plot area, split evenly on all sides.
    pub chart_margin_px: f64,
    pub axis_color: Color,
    pub axis_stroke_width: f64,
    pub tick_length_px: f64,
    /// Tick count requested on the value axis.
    pub value_tick_count: usize,
    pub metric1_color: Color,
    pub metric2_color: Color,
    pub series_stroke_width: f64,
    pub limit_line_color: Color,
    pub limit_line_stroke_width: f64,
    pub baseline_shading: Color,
    pub test_shading: Color,
    pub label_color: Color,
    pub label_font_size_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            chart_margin_px: 100.0,
            axis_color: Color::rgb(0.20, 0.20, 0.20),
            axis_stroke_width: 1.0,
            tick_length_px: 6.0,
            value_tick_count: 10,
            metric1_color: Color::rgb(0.27, 0.51, 0.71),
            metric2_color: Color::rgb(0.85, 0.55, 0.13),
            series_stroke_width: 1.5,
            limit_line_color: Color::rgb(0.55, 0.55, 0.55),
            limit_line_stroke_width: 1.0,
            baseline_shading: Color::rgba(0.56, 0.93, 0.56, 0.15),
            test_shading: Color::rgba(0.94, 0.50, 0.50, 0.15),
            label_color: Color::rgb(0.10, 0.10, 0.10),
            label_font_size_px: 11.0,
        }
    }
}

pub(crate) fn validate_render_style(style: RenderStyle) -> ChartResult<()> {
    if !style.chart_margin_px.is_finite() || style.chart_margin_px < 0.0 {
        return Err(ChartError::InvalidData(
            "chart margin must be finite and >= 0".to_owned(),
        ));
    }
    for (name, value) in [
        ("axis stroke width", style.axis_stroke_width),
        ("tick length", style.tick_length_px),
        ("series stroke width", style.series_stroke_width),
        ("limit line stroke width", style.limit_line_stroke_width),
        ("label font size", style.label_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "{name} must be finite and > 0"
            )));
        }
    }
    if style.value_tick_count == 0 {
        return Err(ChartError::InvalidData(
            "value tick count must be > 0".to_owned(),
        ));
    }

    style.axis_color.validate()?;
    style.metric1_color.validate()?;
    style.metric2_color.validate()?;
    style.limit_line_color.validate()?;
    style.baseline_shading.validate()?;
    style.test_shading.validate()?;
    style.label_color.validate()
}
