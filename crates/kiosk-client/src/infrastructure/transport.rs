//! Transport adapter: turns an [`Envelope`] into one GET request and the
//! response into a decoded JSON value.
//!
//! # Request/response flow
//!
//! ```text
//! Envelope ──query_pairs()──► GET http://host:port/?cmd=..&password=..&type=json
//!                                  Accept: application/json
//!                                          │
//!             status != 200 ◄──────────────┤──────► status == 200
//!                   │                                    │
//!   KioskError::Transport {status, body}     serde_json::from_str(body)
//!                                                │              │
//!                                              Value   KioskError::Decode
//! ```
//!
//! The body is parsed as JSON whatever `Content-Type` the device declares.
//! It is known to send JSON labelled `text/html`.

use std::fmt;
use std::sync::Arc;

use kiosk_core::{Envelope, KioskError};
use serde_json::Value;
use tracing::{debug, warn};

use super::session::{HttpSession, SessionRequest};

/// The only status the device uses for a delivered response.
pub const HTTP_OK: u16 = 200;

/// Issues requests to one device through a shared [`HttpSession`].
pub struct RequestHandler {
    session: Arc<dyn HttpSession>,
    host: String,
    port: u16,
}

impl RequestHandler {
    pub fn new(session: Arc<dyn HttpSession>, host: impl Into<String>, port: u16) -> Self {
        Self {
            session,
            host: host.into(),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Base URL of the device's control API.
    ///
    /// Bare IPv6 literals are bracketed.
    pub fn url(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("http://[{}]:{}", self.host, self.port)
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }

    /// Sends `envelope` and decodes the response body.
    ///
    /// # Errors
    ///
    /// - [`KioskError::Session`] if the session produced no response.
    /// - [`KioskError::Transport`] if the status is not 200.
    /// - [`KioskError::Decode`] if the body is not valid JSON.
    pub async fn get(&self, envelope: &Envelope) -> Result<Value, KioskError> {
        let url = self.url();
        debug!("sending request to: {url}");
        debug!("parameters: {:?}", envelope.redacted_pairs());

        let request = SessionRequest {
            url,
            headers: vec![("Accept".to_string(), "application/json".to_string())],
            query: envelope.query_pairs(),
        };
        let response = self.session.get(request).await?;

        if response.status != HTTP_OK {
            warn!(
                "invalid response from kiosk API for `{}`: {}",
                envelope.command(),
                response.status
            );
            return Err(KioskError::Transport {
                status: response.status,
                body: response.body,
            });
        }

        let data: Value = serde_json::from_str(&response.body).map_err(|source| {
            KioskError::Decode {
                source,
                body: response.body.clone(),
            }
        })?;
        debug!("{data}");
        Ok(data)
    }
}

impl fmt::Debug for RequestHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestHandler")
            .field("url", &self.url())
            .finish_non_exhaustive()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
