use chrono::NaiveDate;
use serde::Deserialize;

/// Segmentation pipeline configuration.
///
/// The reference date is the fixed "today" that recency is measured against.
/// It is always supplied by the caller so runs stay deterministic and
/// reproducible; the pure logic never reads the system clock.
#[derive(Debug, Clone, Deserialize)]
pub struct SegmentationConfig {
    pub reference_date: NaiveDate,
    /// Days of inactivity at which a client stops being CORE (inclusive).
    #[serde(default = "default_drifter_after_days")]
    pub drifter_after_days: i64,
    /// Last day of inactivity that still counts as DRIFTER (inclusive).
    #[serde(default = "default_graveyard_after_days")]
    pub graveyard_after_days: i64,
}

impl SegmentationConfig {
    /// Config with the standard 180/365-day thresholds.
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            drifter_after_days: default_drifter_after_days(),
            graveyard_after_days: default_graveyard_after_days(),
        }
    }
}

// Default functions
fn default_drifter_after_days() -> i64 {
    180
}
fn default_graveyard_after_days() -> i64 {
    365
}
