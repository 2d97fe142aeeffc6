pub mod record;
pub mod scaling;

pub use record::{Efficiencies, RawMetrics, ReportRecord, ScalingMetrics};
pub use scaling::ScalingMode;
