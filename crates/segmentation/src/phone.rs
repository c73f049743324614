//! Phone normalization to a canonical dialable form.
//!
//! Simplified to the North American numbering plan: 10 digits get a `+1`
//! prefix, 11 digits starting with `1` get a `+`. Everything else is flagged
//! [`INVALID_PHONE`] for manual review. No checking beyond digit count; area
//! codes are not verified and duplicates are not detected.

use reactivation_core::types::INVALID_PHONE;

/// Normalize a raw phone string to `+1XXXXXXXXXX`, or [`INVALID_PHONE`] when
/// the digit count does not fit the NANP cases. A missing input is also
/// `INVALID`.
pub fn normalize_phone(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return INVALID_PHONE.to_string();
    };
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        10 => format!("+1{digits}"),
        11 if digits.starts_with('1') => format!("+{digits}"),
        _ => INVALID_PHONE.to_string(),
    }
}
