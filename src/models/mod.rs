//! Run configuration and classification results

pub mod config;
pub mod result;

pub use config::Config;
pub use result::{ClassificationResult, MetricsApplied};
