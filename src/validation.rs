use crate::error::{HuddleError, HuddleResult};
use crate::model::slot::SLOTS_PER_DAY;

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> HuddleResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(HuddleError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Validates a meeting duration in slots: at least 1, and no longer than a
/// single day's grid (windows never cross midnight).
pub fn duration_in_range(value: u32) -> HuddleResult<u32> {
    if value == 0 || value > u32::from(SLOTS_PER_DAY) {
        Err(HuddleError::InvalidDuration {
            got: value,
            max: u32::from(SLOTS_PER_DAY),
        })
    } else {
        Ok(value)
    }
}

/// Trims an optional string, returning None if blank.
pub fn trim_optional(value: Option<&str>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
