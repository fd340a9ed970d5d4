use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::frame_builder::{FrameInputs, build_frame};
use crate::api::render_style::{RenderStyle, validate_render_style};
use crate::core::stats::ConfidenceBand;
use crate::core::{ChartLayout, Viewport};
use crate::data::{DataMessage, build_records, sample_columns, sample_rows};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

/// Public engine bootstrap configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub style: RenderStyle,
    /// Seed for the built-in sample dataset; `None` seeds from entropy.
    #[serde(default)]
    pub sample_seed: Option<u64>,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            style: RenderStyle::default(),
            sample_seed: None,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_sample_seed(mut self, seed: u64) -> Self {
        self.sample_seed = Some(seed);
        self
    }
}

/// Whether the engine has drawn at least once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Rendering,
}

/// Outcome of one message pass, returned to the host adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSummary {
    pub result_name: String,
    pub record_count: usize,
    pub band: Option<ConfidenceBand>,
    pub test_start: Option<usize>,
}

/// Orchestration facade consumed by host applications.
///
/// Each incoming message runs the full pipeline synchronously: adapt rows,
/// compute the confidence band, derive the layout, rebuild the frame, and
/// hand it to the renderer. Nothing is kept between messages except
/// configuration, the renderer, and the sample RNG.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartEngineConfig,
    state: EngineState,
    sample_rng: StdRng,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        if !config.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }
        validate_render_style(config.style)?;

        let sample_rng = match config.sample_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            renderer,
            config,
            state: EngineState::Idle,
            sample_rng,
        })
    }

    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> ChartEngineConfig {
        self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Processes one inbound payload and redraws the whole surface.
    ///
    /// A payload carrying the no-data sentinel is replaced by the built-in
    /// sample dataset. An empty baseline group downgrades the pass to a
    /// band-less chart instead of failing; schema violations abort the pass
    /// without touching the previous drawing.
    pub fn handle_message(&mut self, message: DataMessage) -> ChartResult<RenderSummary> {
        let use_sample = !message.has_real_data();
        let DataMessage {
            result_name,
            available_row_count,
            columns,
            data,
        } = message;

        let (columns, rows) = if !use_sample {
            debug!(
                result_name = %result_name,
                row_count = data.len(),
                "processing host dataset"
            );
            (columns, data)
        } else {
            debug!(
                result_name = %result_name,
                sentinel = available_row_count,
                "message carries no data; substituting built-in sample"
            );
            (sample_columns(), sample_rows(&mut self.sample_rng))
        };

        let records = build_records(&columns, &rows)?;

        let band = match ConfidenceBand::from_baseline(&records) {
            Ok(band) => Some(band),
            Err(ChartError::EmptyGroup { label }) => {
                warn!(group = %label, "baseline group is empty; rendering without a band");
                None
            }
            Err(other) => return Err(other),
        };

        let layout = ChartLayout::compute(&records, band.as_ref())?;
        let frame = build_frame(
            self.config.viewport,
            self.config.style,
            FrameInputs {
                records: &records,
                layout: &layout,
                band,
                metric1_label: &columns[2].label,
                metric2_label: &columns[3].label,
            },
        )?;

        self.renderer.render(&frame)?;
        self.state = EngineState::Rendering;

        Ok(RenderSummary {
            result_name,
            record_count: records.len(),
            band,
            test_start: layout.test_start_index(),
        })
    }
}
