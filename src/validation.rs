use crate::error::{TravelError, TravelResult};

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> TravelResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(TravelError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Validates that a phone number consists of ASCII digits only.
pub fn digits_only(value: &str) -> TravelResult<()> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(TravelError::InvalidPhone)
    }
}

/// Parses a 1-based display position as typed in the shell into a
/// 0-based index.
pub fn display_position(value: &str) -> TravelResult<usize> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TravelError::InvalidSelection);
    }
    match trimmed.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(TravelError::InvalidArgument(format!(
            "'{}' is not a valid item number",
            trimmed
        ))),
    }
}
