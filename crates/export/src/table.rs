//! Flat-table rendering. Column names and order are a compatibility contract
//! with the marketing tooling that consumes these exports; do not reorder.

use reactivation_core::error::ReactivationResult;
use reactivation_core::types::ClassifiedRecord;
use serde_json::Value;
use std::collections::HashMap;

/// Columns of the full segmented table: every input field plus the derived
/// classification fields.
pub const SEGMENTED_COLUMNS: [&str; 9] = [
    "client_id",
    "first_name",
    "last_name",
    "email",
    "phone",
    "last_activity",
    "days_inactive",
    "segment",
    "normalized_phone",
];

/// Fixed column subset of the launch-candidate table.
pub const LAUNCH_COLUMNS: [&str; 5] = [
    "first_name",
    "last_name",
    "normalized_phone",
    "days_inactive",
    "segment",
];

/// An ordered flat table ready for CSV or JSON rendering.
#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Render as CSV: header row first, string cells quoted with doubled
    /// quotes, null cells empty, `\n` line endings.
    pub fn to_csv(&self) -> String {
        let mut csv = self.columns.join(",");
        csv.push('\n');
        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .map(|v| match v {
                    Value::String(s) => format!("\"{}\"", s.replace('"', "\"\"")),
                    Value::Null => String::new(),
                    other => other.to_string(),
                })
                .collect();
            csv.push_str(&cells.join(","));
            csv.push('\n');
        }
        csv
    }

    /// Render as a pretty-printed JSON array of column-keyed objects.
    pub fn to_json(&self) -> ReactivationResult<String> {
        let mut records: Vec<HashMap<String, Value>> = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let mut record = HashMap::new();
            for (i, col) in self.columns.iter().enumerate() {
                if let Some(val) = row.get(i) {
                    record.insert(col.clone(), val.clone());
                }
            }
            records.push(record);
        }
        Ok(serde_json::to_string_pretty(&records)?)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Full segmented table over every classified record, including rows whose
/// phone is INVALID (kept for manual review).
pub fn segmented_table(records: &[ClassifiedRecord]) -> Table {
    Table {
        columns: SEGMENTED_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: records
            .iter()
            .map(|r| {
                vec![
                    Value::String(r.client_id.clone()),
                    opt_str(&r.first_name),
                    opt_str(&r.last_name),
                    opt_str(&r.email),
                    opt_str(&r.phone),
                    opt_str(&r.last_activity),
                    opt_days(r.days_inactive),
                    Value::String(r.segment.to_string()),
                    Value::String(r.normalized_phone.clone()),
                ]
            })
            .collect(),
    }
}

/// Launch-candidate table over an already-filtered candidate set. Rows are
/// emitted in the order given; this function does no filtering of its own.
pub fn launch_table(candidates: &[ClassifiedRecord]) -> Table {
    Table {
        columns: LAUNCH_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: candidates
            .iter()
            .map(|r| {
                vec![
                    opt_str(&r.first_name),
                    opt_str(&r.last_name),
                    Value::String(r.normalized_phone.clone()),
                    opt_days(r.days_inactive),
                    Value::String(r.segment.to_string()),
                ]
            })
            .collect(),
    }
}

fn opt_str(value: &Option<String>) -> Value {
    match value {
        Some(s) => Value::String(s.clone()),
        None => Value::Null,
    }
}

fn opt_days(days: Option<i64>) -> Value {
    match days {
        Some(d) => Value::from(d),
        None => Value::Null,
    }
}
