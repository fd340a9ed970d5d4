pub mod category;
pub mod layout;
pub mod scale;
pub mod series;
pub mod stats;
pub mod types;

pub use category::CategoryScale;
pub use layout::ChartLayout;
pub use scale::ValueScale;
pub use series::{LineSegment, SeriesMetric, project_metric_segments};
pub use stats::{ConfidenceBand, mean, population_std_dev};
pub use types::Viewport;
