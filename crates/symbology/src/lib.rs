pub mod metrics;
pub mod scale;
pub mod schemes;

pub use metrics::{MetricConfig, MetricKey, config};
pub use scale::{Domain, SequentialScale};
pub use schemes::{NEUTRAL_FILL, Rgba, SchemeId, darken, sample};
