//! Fluent construction of a segmentation pipeline.

use chrono::NaiveDate;
use reactivation_core::config::SegmentationConfig;

use crate::pipeline::SegmentationPipeline;

pub struct PipelineBuilder {
    reference_date: NaiveDate,
    drifter_after_days: i64,
    graveyard_after_days: i64,
}

impl PipelineBuilder {
    pub fn new(reference_date: NaiveDate) -> Self {
        let defaults = SegmentationConfig::new(reference_date);
        Self {
            reference_date,
            drifter_after_days: defaults.drifter_after_days,
            graveyard_after_days: defaults.graveyard_after_days,
        }
    }

    /// Inactivity threshold (in days) at which a client leaves CORE.
    pub fn drifter_after(mut self, days: i64) -> Self {
        self.drifter_after_days = days;
        self
    }

    /// Last day of inactivity still classified as DRIFTER.
    pub fn graveyard_after(mut self, days: i64) -> Self {
        self.graveyard_after_days = days;
        self
    }

    pub fn build(self) -> SegmentationPipeline {
        SegmentationPipeline::new(SegmentationConfig {
            reference_date: self.reference_date,
            drifter_after_days: self.drifter_after_days,
            graveyard_after_days: self.graveyard_after_days,
        })
    }
}
