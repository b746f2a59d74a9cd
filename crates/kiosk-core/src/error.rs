//! Error taxonomy for the kiosk remote-control API.
//!
//! Every public operation returns [`KioskError`] on failure.  The variants map
//! one-to-one onto the places a request can go wrong:
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | [`KioskError::Session`] | The HTTP session never produced a status (connect refused, timeout, ...) |
//! | [`KioskError::Transport`] | The device answered with a status other than 200 |
//! | [`KioskError::Decode`] | The device answered 200 but the body is not JSON |
//! | [`KioskError::Application`] | The JSON body carries `{"status": "Error"}` |
//! | [`KioskError::ReservedParameter`] | A parameter set tried to set `cmd`, `password` or `type` |
//!
//! None of these are retried or recovered anywhere in the library.  The caller
//! owns retry and backoff policy.

use thiserror::Error;

/// Failure reported by an HTTP session before any response status arrived.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The request could not be sent or no response was received.
    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    /// A response arrived but its body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Error type returned by every kiosk command.
#[derive(Debug, Error)]
pub enum KioskError {
    /// The HTTP layer returned a non-success status.
    #[error("device returned HTTP {status}: {body}")]
    Transport { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("failed to decode device response as JSON: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        /// Raw body text, kept for diagnostics.
        body: String,
    },

    /// The device reported an application-level error in-band.
    #[error("device reported {kind}: {message}")]
    Application { kind: String, message: String },

    /// The underlying HTTP session failed.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// A command argument collided with an envelope-managed parameter.
    #[error("parameter `{0}` is managed by the envelope and cannot be set by a command")]
    ReservedParameter(String),
}

impl KioskError {
    /// Returns the HTTP status for [`KioskError::Transport`], `None` otherwise.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `true` for errors signalled by the HTTP status line.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// `true` for errors signalled inside a successfully delivered JSON body.
    pub fn is_application(&self) -> bool {
        matches!(self, Self::Application { .. })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_exposes_status_code() {
        let err = KioskError::Transport {
            status: 500,
            body: "Internal Error".to_string(),
        };
        assert_eq!(err.status_code(), Some(500));
        assert!(err.is_transport());
        assert!(!err.is_application());
    }

    #[test]
    fn test_application_error_has_no_status_code() {
        let err = KioskError::Application {
            kind: "Error".to_string(),
            message: "Invalid password".to_string(),
        };
        assert_eq!(err.status_code(), None);
        assert!(err.is_application());
    }

    #[test]
    fn test_display_includes_status_and_body() {
        let err = KioskError::Transport {
            status: 404,
            body: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "device returned HTTP 404: Not Found");
    }

    #[test]
    fn test_session_error_converts_and_displays_transparently() {
        // Arrange
        let inner = SessionError::Request {
            url: "http://10.0.0.2:2323".to_string(),
            reason: "connection refused".to_string(),
        };

        // Act
        let err: KioskError = inner.into();

        // Assert
        assert_eq!(
            err.to_string(),
            "request to http://10.0.0.2:2323 failed: connection refused"
        );
        assert!(!err.is_transport());
    }
}
