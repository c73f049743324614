//! Client segmentation pipeline: recency scoring, lifecycle classification,
//! phone normalization, and launch-candidate selection.

pub mod builder;
pub mod classify;
pub mod phone;
pub mod pipeline;
pub mod recency;

pub use builder::PipelineBuilder;
pub use pipeline::{select_launch_candidates, SegmentationPipeline};
