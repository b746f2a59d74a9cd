//! Inspection of decoded device responses.
//!
//! The device reports application failures in-band, inside an HTTP 200
//! response:
//!
//! ```json
//! {"status": "Error", "statustext": "Invalid password"}
//! ```
//!
//! Only the exact string `"Error"` in `status` counts as a failure.  Any other
//! status (`"OK"`, `"Warning"`, a number, ...) and bodies without a `status`
//! key are returned to the caller untouched.

use serde_json::Value;
use tracing::debug;

use crate::error::KioskError;

/// Key holding the status marker.
pub const RESPONSE_STATUS: &str = "status";
/// Key holding the human-readable status message.
pub const RESPONSE_STATUSTEXT: &str = "statustext";
/// The one status value treated as an error.
pub const RESPONSE_ERRORSTATUS: &str = "Error";

/// Returns `payload` unchanged unless it carries the error marker.
///
/// # Errors
///
/// Returns [`KioskError::Application`] when `payload` is an object whose
/// `status` is the string `"Error"`.  The message is the `statustext` value:
/// verbatim if it is a string, rendered as JSON if it is anything else, and
/// empty if it is missing.
pub fn check_response(payload: Value) -> Result<Value, KioskError> {
    let is_error =
        payload.get(RESPONSE_STATUS).and_then(Value::as_str) == Some(RESPONSE_ERRORSTATUS);
    if !is_error {
        return Ok(payload);
    }

    let message = match payload.get(RESPONSE_STATUSTEXT) {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    };
    debug!("device reported an application error: {message}");
    Err(KioskError::Application {
        kind: RESPONSE_ERRORSTATUS.to_string(),
        message,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_status_becomes_application_error() {
        // Arrange
        let payload = json!({"status": "Error", "statustext": "Invalid password"});

        // Act
        let result = check_response(payload);

        // Assert
        match result {
            Err(KioskError::Application { kind, message }) => {
                assert_eq!(kind, "Error");
                assert_eq!(message, "Invalid password");
            }
            other => panic!("expected application error, got {other:?}"),
        }
    }

    #[test]
    fn test_ok_status_passes_through() {
        let payload = json!({"status": "OK", "statustext": "Loading URL"});
        assert_eq!(check_response(payload.clone()).unwrap(), payload);
    }

    #[test]
    fn test_other_status_values_pass_through() {
        for status in [json!("Warning"), json!("error"), json!(1), json!(null)] {
            let payload = json!({"status": status, "statustext": "x"});
            assert_eq!(check_response(payload.clone()).unwrap(), payload);
        }
    }

    #[test]
    fn test_body_without_status_passes_through() {
        let payload = json!({"deviceName": "Lobby tablet", "screenOn": true});
        assert_eq!(check_response(payload.clone()).unwrap(), payload);
    }

    #[test]
    fn test_non_object_payloads_pass_through() {
        for payload in [json!([1, 2, 3]), json!("Error"), json!(42), json!(null)] {
            assert_eq!(check_response(payload.clone()).unwrap(), payload);
        }
    }

    #[test]
    fn test_missing_statustext_yields_empty_message() {
        let result = check_response(json!({"status": "Error"}));
        assert!(matches!(
            result,
            Err(KioskError::Application { ref message, .. }) if message.is_empty()
        ));
    }

    #[test]
    fn test_non_string_statustext_is_rendered_as_json() {
        let result = check_response(json!({"status": "Error", "statustext": 17}));
        assert!(matches!(
            result,
            Err(KioskError::Application { ref message, .. }) if message == "17"
        ));
    }
}
