//! The HTTP session seam.
//!
//! The client never owns an HTTP connection pool.  The caller hands it a
//! shared [`HttpSession`] and keeps ownership of its lifecycle, timeouts and
//! TLS settings.  The session only has to do one thing: perform a GET with
//! the given headers and query and report the status and body text.
//!
//! # Implementations
//!
//! - `reqwest::Client` – production.  Clone the caller's client (clones share
//!   one connection pool) and wrap it in an `Arc`.
//! - [`mock::MockSession`] – records requests and replays scripted responses
//!   for tests.
//!
//! # Testability
//!
//! Because the transport adapter only sees `Arc<dyn HttpSession>`, tests can
//! exercise the whole request/response contract without a network.

use async_trait::async_trait;
use kiosk_core::SessionError;

pub mod mock;
mod reqwest_session;

/// One outbound GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRequest {
    /// Target URL without query string, e.g. `http://192.168.1.10:2323`.
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Already-stringified query parameters, in send order.
    pub query: Vec<(String, String)>,
}

impl SessionRequest {
    /// First value of query parameter `key`, if present.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of times `key` occurs in the query.
    pub fn query_count(&self, key: &str) -> usize {
        self.query.iter().filter(|(k, _)| k == key).count()
    }
}

/// Status line and body text of a completed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResponse {
    pub status: u16,
    pub body: String,
}

impl SessionResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// A shared HTTP session able to perform GET requests.
///
/// Implementations must release the underlying response on every path,
/// including when reading the body fails.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpSession: Send + Sync {
    /// Performs `request` and returns the status and body text.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when no HTTP status could be obtained or the
    /// body could not be read.  Non-2xx statuses are NOT errors at this
    /// level.
    async fn get(&self, request: SessionRequest) -> Result<SessionResponse, SessionError>;
}

// ── Tests ─────────────────────────────────────────────────────────────────────
