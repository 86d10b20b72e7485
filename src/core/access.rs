//! Optional shared-PIN gate in front of the commands that touch the sheet.
//!
//! This is a single shared secret, not an identity system: there are no
//! users, sessions or retry limits.

use crate::errors::{AppError, AppResult};

/// Compare the supplied PIN with the configured one.
///
/// - no PIN configured → always open
/// - PIN configured, nothing supplied or a different value → `AccessDenied`
pub fn check_pin(expected: Option<&str>, supplied: Option<&str>) -> AppResult<()> {
    match expected {
        None => Ok(()),
        Some(pin) if supplied.map(str::trim) == Some(pin) => Ok(()),
        Some(_) => Err(AppError::AccessDenied),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_when_no_pin_is_configured() {
        assert!(check_pin(None, None).is_ok());
        assert!(check_pin(None, Some("1234")).is_ok());
    }

    #[test]
    fn requires_the_exact_pin() {
        assert!(check_pin(Some("2468"), Some("2468")).is_ok());
        assert!(check_pin(Some("2468"), Some("2468\n")).is_ok());
        assert!(matches!(
            check_pin(Some("2468"), Some("1357")),
            Err(AppError::AccessDenied)
        ));
        assert!(matches!(
            check_pin(Some("2468"), None),
            Err(AppError::AccessDenied)
        ));
    }
}
