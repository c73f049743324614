//! Lifecycle segment classification.

use reactivation_core::config::SegmentationConfig;
use reactivation_core::types::Segment;

/// Map a days-inactive value to its segment. Total over the domain: every
/// integer and the absent case land in exactly one segment, ranges are
/// contiguous and non-overlapping.
///
/// With the default thresholds (180/365):
/// absent -> NO_ACTIVITY, d < 180 -> CORE, 180..=365 -> DRIFTER,
/// d > 365 -> GRAVEYARD.
pub fn classify(days_inactive: Option<i64>, config: &SegmentationConfig) -> Segment {
    match days_inactive {
        None => Segment::NoActivity,
        Some(d) if d < config.drifter_after_days => Segment::Core,
        Some(d) if d <= config.graveyard_after_days => Segment::Drifter,
        Some(_) => Segment::Graveyard,
    }
}
