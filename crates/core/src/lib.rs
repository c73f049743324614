pub mod config;
pub mod error;
pub mod types;

pub use config::SegmentationConfig;
pub use error::{ReactivationError, ReactivationResult};
