//! Pipeline configuration

mod thresholds;

pub use thresholds::{ConfigBuilder, ForensicsConfig};
