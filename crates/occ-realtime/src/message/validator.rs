//! Message validation rules.

use occ_core::error::AppError;

/// Validates the raw size and content of an inbound message.
pub fn validate_inbound(raw: &str, max_bytes: usize) -> Result<(), AppError> {
    if raw.len() > max_bytes {
        return Err(AppError::validation(format!(
            "Message exceeds maximum size of {max_bytes} bytes"
        )));
    }

    if raw.trim().is_empty() {
        return Err(AppError::validation("Empty message"));
    }

    Ok(())
}

/// Validates a display name supplied at connect time.
pub fn validate_display_name(name: &str, max_length: usize) -> Result<(), AppError> {
    if name.is_empty() || name.chars().count() > max_length {
        return Err(AppError::validation("Invalid display name length"));
    }

    if name.chars().any(char::is_control) {
        return Err(AppError::validation(
            "Display name contains control characters",
        ));
    }

    Ok(())
}
