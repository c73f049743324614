//! Batch transform of raw client rows into classified, launch-ready rows.

use reactivation_core::config::SegmentationConfig;
use reactivation_core::error::{ReactivationError, ReactivationResult};
use reactivation_core::types::{ClassifiedRecord, ClientRecord, Segment};
use tracing::info;

use crate::builder::PipelineBuilder;
use crate::classify::classify;
use crate::phone::normalize_phone;
use crate::recency::days_inactive;

/// Deterministic batch classifier. Holds the reference date and segment
/// thresholds; every per-record operation is a pure function, so records may
/// be processed in any order (output keeps input order).
pub struct SegmentationPipeline {
    config: SegmentationConfig,
}

impl SegmentationPipeline {
    pub fn new(config: SegmentationConfig) -> Self {
        Self { config }
    }

    /// Fluent construction starting from a reference date.
    pub fn builder(reference_date: chrono::NaiveDate) -> PipelineBuilder {
        PipelineBuilder::new(reference_date)
    }

    pub fn config(&self) -> &SegmentationConfig {
        &self.config
    }

    /// Classify a single record. Data-quality problems (missing date,
    /// unusable phone) are encoded in the output, never raised.
    pub fn classify_record(&self, record: &ClientRecord) -> ClassifiedRecord {
        let days = days_inactive(record.last_activity.as_deref(), self.config.reference_date);
        ClassifiedRecord {
            client_id: record.client_id.clone(),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            last_activity: record.last_activity.clone(),
            days_inactive: days,
            segment: classify(days, &self.config),
            normalized_phone: normalize_phone(record.phone.as_deref()),
        }
    }

    /// Run the batch transform over all records, preserving input order.
    ///
    /// An empty input collection is a structural failure surfaced to the
    /// caller; per-record data-quality issues never are.
    pub fn run(&self, records: &[ClientRecord]) -> ReactivationResult<Vec<ClassifiedRecord>> {
        if records.is_empty() {
            return Err(ReactivationError::EmptyInput(
                "segmentation pipeline received no records".to_string(),
            ));
        }

        let classified: Vec<ClassifiedRecord> =
            records.iter().map(|r| self.classify_record(r)).collect();

        let graveyard = classified
            .iter()
            .filter(|r| r.segment == Segment::Graveyard)
            .count();
        info!(
            total = classified.len(),
            graveyard,
            reference_date = %self.config.reference_date,
            "segmentation pipeline run complete"
        );
        Ok(classified)
    }
}

/// Stable filter for records eligible for outbound contact:
/// GRAVEYARD segment and a dialable normalized phone. Input order is
/// preserved and no deduplication is performed; duplicate phones pass
/// through as-is.
pub fn select_launch_candidates(records: &[ClassifiedRecord]) -> Vec<ClassifiedRecord> {
    records
        .iter()
        .filter(|r| r.segment == Segment::Graveyard && r.is_dialable())
        .cloned()
        .collect()
}
