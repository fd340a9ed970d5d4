//! bandchart-rs: baseline/test band chart engine.
//!
//! This crate turns a row-oriented table pushed by a host application into a
//! two-series line chart with a 95% confidence band over the baseline group
//! and baseline/test shading regions. Drawing is abstracted behind a
//! [`render::Renderer`] consuming backend-agnostic frames, so the compute
//! pipeline stays pure and testable.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, RenderSummary};
pub use error::{ChartError, ChartResult};
