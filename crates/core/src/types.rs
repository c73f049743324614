use serde::{Deserialize, Serialize};

/// Sentinel written in place of a phone number that could not be normalized.
/// Terminal for the record: launch selection excludes it, the full segmented
/// table retains it for manual review.
pub const INVALID_PHONE: &str = "INVALID";

/// Raw client row as provided by the caller. Immutable for the duration of a
/// pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRecord {
    /// Opaque key; uniqueness is not enforced by the pipeline.
    pub client_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// Free-form, unvalidated text.
    pub phone: Option<String>,
    /// ISO-8601-like date string. Absence means "never engaged" and is a
    /// meaningful state, not an error.
    pub last_activity: Option<String>,
}

/// Recency-of-engagement label for a client.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Segment {
    Core,
    Drifter,
    Graveyard,
    NoActivity,
}

impl Segment {
    /// Canonical label used in exported tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Core => "CORE",
            Segment::Drifter => "DRIFTER",
            Segment::Graveyard => "GRAVEYARD",
            Segment::NoActivity => "NO_ACTIVITY",
        }
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified row, derived from a [`ClientRecord`] and a reference date.
/// Created once per run and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    pub client_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub last_activity: Option<String>,
    /// Whole days between reference date and last activity. `None` when the
    /// last-activity date is missing or unparsable.
    pub days_inactive: Option<i64>,
    pub segment: Segment,
    /// Canonical `+<countrycode><digits>` form, or [`INVALID_PHONE`].
    pub normalized_phone: String,
}

impl ClassifiedRecord {
    /// Whether the normalized phone is usable for outbound contact.
    pub fn is_dialable(&self) -> bool {
        self.normalized_phone != INVALID_PHONE
    }
}
