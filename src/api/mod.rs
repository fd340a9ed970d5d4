mod engine;
mod frame_builder;
mod render_style;

pub use engine::{ChartEngine, ChartEngineConfig, EngineState, RenderSummary};
pub use frame_builder::{FrameInputs, build_frame};
pub use render_style::RenderStyle;
