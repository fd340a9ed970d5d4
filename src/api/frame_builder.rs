use tracing::debug;

use crate::api::render_style::{RenderStyle, validate_render_style};
use crate::core::stats::ConfidenceBand;
use crate::core::{
    CategoryScale, ChartLayout, SeriesMetric, ValueScale, Viewport, project_metric_segments,
};
use crate::data::Record;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

// Legend geometry, anchored to the top-right corner of the plot area.
const LEGEND_SWATCH_LEFT_INSET: f64 = 120.0;
const LEGEND_SWATCH_RIGHT_INSET: f64 = 80.0;
const LEGEND_TEXT_INSET: f64 = 70.0;
const LEGEND_ROW_1_Y: f64 = 15.0;
const LEGEND_ROW_2_Y: f64 = 35.0;
const LEGEND_TEXT_DROP: f64 = 5.0;

/// Everything one draw pass needs besides viewport and style.
#[derive(Debug, Clone, Copy)]
pub struct FrameInputs<'a> {
    pub records: &'a [Record],
    pub layout: &'a ChartLayout,
    pub band: Option<ConfidenceBand>,
    pub metric1_label: &'a str,
    pub metric2_label: &'a str,
}

/// Assembles the full scene for one dataset.
///
/// Emission order keeps metric-1 segments after metric-2 segments so the
/// primary series draws on top, and backends draw rects beneath lines, so
/// shading never obscures either polyline. Band visuals (limit lines and
/// shading rects) degrade to nothing when no band is available; axes and
/// series are always drawn.
pub fn build_frame(
    viewport: Viewport,
    style: RenderStyle,
    inputs: FrameInputs<'_>,
) -> ChartResult<RenderFrame> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    validate_render_style(style)?;

    let plot_width = f64::from(viewport.width) - style.chart_margin_px;
    let plot_height = f64::from(viewport.height) - style.chart_margin_px;
    if plot_width <= 0.0 || plot_height <= 0.0 {
        return Err(ChartError::InvalidData(
            "viewport is smaller than the chart margin".to_owned(),
        ));
    }
    let offset = style.chart_margin_px / 2.0;

    let x_scale = inputs.layout.category_scale()?;
    let y_scale = inputs.layout.value_scale()?;

    let mut frame = RenderFrame::new(viewport);

    append_category_axis(&mut frame, style, &x_scale, offset, plot_width, plot_height)?;
    append_value_axis(&mut frame, style, y_scale, offset, plot_height)?;
    if let Some(band) = inputs.band {
        append_band_visuals(
            &mut frame,
            style,
            inputs.layout,
            &x_scale,
            y_scale,
            band,
            offset,
            plot_width,
            plot_height,
        )?;
    }

    // Metric-2 first so metric-1 lands on top of it.
    for (metric, color) in [
        (SeriesMetric::Metric2, style.metric2_color),
        (SeriesMetric::Metric1, style.metric1_color),
    ] {
        let segments = project_metric_segments(
            inputs.records,
            metric,
            &x_scale,
            y_scale,
            plot_width,
            plot_height,
        )?;
        for segment in segments {
            frame.push_line(LinePrimitive::new(
                offset + segment.x1,
                offset + segment.y1,
                offset + segment.x2,
                offset + segment.y2,
                style.series_stroke_width,
                color,
            ));
        }
    }

    append_legend(
        &mut frame,
        style,
        inputs.metric1_label,
        inputs.metric2_label,
        offset,
        plot_width,
    );

    debug!(
        lines = frame.lines.len(),
        rects = frame.rects.len(),
        texts = frame.texts.len(),
        "assembled render frame"
    );
    Ok(frame)
}

fn append_category_axis(
    frame: &mut RenderFrame,
    style: RenderStyle,
    x_scale: &CategoryScale,
    offset: f64,
    plot_width: f64,
    plot_height: f64,
) -> ChartResult<()> {
    let axis_y = offset + plot_height;
    frame.push_line(LinePrimitive::new(
        offset,
        axis_y,
        offset + plot_width,
        axis_y,
        style.axis_stroke_width,
        style.axis_color,
    ));

    for (index, category) in x_scale.categories().iter().enumerate() {
        let x = offset + x_scale.position(index, plot_width)?;
        frame.push_line(LinePrimitive::new(
            x,
            axis_y,
            x,
            axis_y + style.tick_length_px,
            style.axis_stroke_width,
            style.axis_color,
        ));
        // An empty category still gets its tick mark but no label primitive.
        if !category.is_empty() {
            frame.push_text(TextPrimitive::new(
                category.clone(),
                x,
                axis_y + style.tick_length_px + style.label_font_size_px,
                style.label_font_size_px,
                style.label_color,
                TextHAlign::Center,
            ));
        }
    }

    Ok(())
}

fn append_value_axis(
    frame: &mut RenderFrame,
    style: RenderStyle,
    y_scale: ValueScale,
    offset: f64,
    plot_height: f64,
) -> ChartResult<()> {
    frame.push_line(LinePrimitive::new(
        offset,
        offset,
        offset,
        offset + plot_height,
        style.axis_stroke_width,
        style.axis_color,
    ));

    for tick in y_scale.ticks(style.value_tick_count) {
        let y = offset + y_scale.value_to_pixel(tick, plot_height)?;
        frame.push_line(LinePrimitive::new(
            offset - style.tick_length_px,
            y,
            offset,
            y,
            style.axis_stroke_width,
            style.axis_color,
        ));
        frame.push_text(TextPrimitive::new(
            format_tick(tick),
            offset - style.tick_length_px - 4.0,
            y + style.label_font_size_px / 3.0,
            style.label_font_size_px,
            style.label_color,
            TextHAlign::Right,
        ));
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn append_band_visuals(
    frame: &mut RenderFrame,
    style: RenderStyle,
    layout: &ChartLayout,
    x_scale: &CategoryScale,
    y_scale: ValueScale,
    band: ConfidenceBand,
    offset: f64,
    plot_width: f64,
    plot_height: f64,
) -> ChartResult<()> {
    let y_lower = offset + y_scale.value_to_pixel(band.lower, plot_height)?;
    let y_upper = offset + y_scale.value_to_pixel(band.upper, plot_height)?;
    let x_first = offset + x_scale.position(0, plot_width)?;
    let x_last = offset + x_scale.position(x_scale.len() - 1, plot_width)?;

    for y in [y_lower, y_upper] {
        frame.push_line(LinePrimitive::new(
            x_first,
            y,
            x_last,
            y,
            style.limit_line_stroke_width,
            style.limit_line_color,
        ));
    }

    // Upper bound maps to the smaller pixel Y, so the rects hang from it.
    let shading_height = y_lower - y_upper;
    match layout.test_start() {
        Ok(test_index) => {
            let x_test = offset + x_scale.position(test_index, plot_width)?;
            frame.push_rect(RectPrimitive::new(
                x_first,
                y_upper,
                x_test - x_first,
                shading_height,
                style.baseline_shading,
            ));
            frame.push_rect(RectPrimitive::new(
                x_test,
                y_upper,
                x_last - x_test,
                shading_height,
                style.test_shading,
            ));
        }
        Err(ChartError::NoTestRegion) => {
            debug!("no test rows; baseline shading spans the full x range");
            frame.push_rect(RectPrimitive::new(
                x_first,
                y_upper,
                x_last - x_first,
                shading_height,
                style.baseline_shading,
            ));
        }
        Err(other) => return Err(other),
    }

    Ok(())
}

fn append_legend(
    frame: &mut RenderFrame,
    style: RenderStyle,
    metric1_label: &str,
    metric2_label: &str,
    offset: f64,
    plot_width: f64,
) {
    for (row_y, color, label) in [
        (LEGEND_ROW_1_Y, style.metric1_color, metric1_label),
        (LEGEND_ROW_2_Y, style.metric2_color, metric2_label),
    ] {
        frame.push_line(LinePrimitive::new(
            offset + plot_width - LEGEND_SWATCH_LEFT_INSET,
            offset + row_y,
            offset + plot_width - LEGEND_SWATCH_RIGHT_INSET,
            offset + row_y,
            style.series_stroke_width,
            color,
        ));
        frame.push_text(TextPrimitive::new(
            label,
            offset + plot_width - LEGEND_TEXT_INSET,
            offset + row_y + LEGEND_TEXT_DROP,
            style.label_font_size_px,
            style.label_color,
            TextHAlign::Left,
        ));
    }
}

fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() <= 1e-9 && value.abs() < 1e12 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::format_tick;

    #[test]
    fn tick_labels_drop_fraction_for_whole_values() {
        assert_eq!(format_tick(100.0), "100");
        assert_eq!(format_tick(-3.0), "-3");
    }

    #[test]
    fn tick_labels_keep_two_decimals_otherwise() {
        assert_eq!(format_tick(99.04), "99.04");
        assert_eq!(format_tick(101.5), "101.50");
    }
}
