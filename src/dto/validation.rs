//! Validation helpers for DTOs.

use validator::ValidationError;

/// Validates that a night date is shaped like `YYYY-MM-DD`.
///
/// Only the shape is checked; the board treats the date as an opaque grouping
/// key, so `2026-02-31` is accepted the same way the original sign-up sheet
/// accepted it.
pub fn validate_night_date(value: &str) -> Result<(), ValidationError> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != 4 && *index != 7)
            .all(|(_, byte)| byte.is_ascii_digit());

    if !well_formed {
        let mut err = ValidationError::new("night_date_format");
        err.message = Some("night date must use the YYYY-MM-DD format".into());
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_night_date_valid() {
        assert!(validate_night_date("2026-08-23").is_ok());
        assert!(validate_night_date("1999-01-01").is_ok());
        assert!(validate_night_date("0000-00-00").is_ok());
    }

    #[test]
    fn test_validate_night_date_invalid_shape() {
        assert!(validate_night_date("").is_err());
        assert!(validate_night_date("2026-8-23").is_err()); // missing zero padding
        assert!(validate_night_date("2026/08/23").is_err()); // wrong separator
        assert!(validate_night_date("23-08-2026").is_err()); // reversed
        assert!(validate_night_date("2026-08-23 ").is_err()); // trailing space
        assert!(validate_night_date("2026-08-230").is_err()); // too long
    }

    #[test]
    fn test_validate_night_date_rejects_non_digits() {
        assert!(validate_night_date("20a6-08-23").is_err());
        assert!(validate_night_date("2026-o8-23").is_err());
    }
}
