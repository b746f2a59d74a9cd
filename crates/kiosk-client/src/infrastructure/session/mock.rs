//! Mock HTTP session for tests.
//!
//! Records every [`SessionRequest`] it receives and answers with scripted
//! responses, so tests can assert on the exact query string a command
//! produced without opening a socket.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use kiosk_core::SessionError;

use super::{HttpSession, SessionRequest, SessionResponse};

/// A scripted outcome for one request.
#[derive(Debug, Clone)]
enum Scripted {
    Response(SessionResponse),
    Unreachable(String),
}

/// A mock implementation of [`HttpSession`].
///
/// Scripted responses are consumed in order.  When the script runs out, the
/// fallback response (if any) is repeated; with no fallback the request fails
/// with [`SessionError::Request`].
#[derive(Default)]
pub struct MockSession {
    script: Mutex<VecDeque<Scripted>>,
    fallback: Mutex<Option<SessionResponse>>,
    requests: Mutex<Vec<SessionRequest>>,
}

impl MockSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session that answers every request with `status` and `body`.
    pub fn always(status: u16, body: impl Into<String>) -> Self {
        let session = Self::new();
        *lock(&session.fallback) = Some(SessionResponse::new(status, body));
        session
    }

    /// Queues one response.
    pub fn push_response(&self, status: u16, body: impl Into<String>) {
        lock(&self.script).push_back(Scripted::Response(SessionResponse::new(status, body)));
    }

    /// Queues one request that fails before any status is received.
    pub fn push_unreachable(&self, reason: impl Into<String>) {
        lock(&self.script).push_back(Scripted::Unreachable(reason.into()));
    }

    /// All requests received so far, oldest first.
    pub fn requests(&self) -> Vec<SessionRequest> {
        lock(&self.requests).clone()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<SessionRequest> {
        lock(&self.requests).last().cloned()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[async_trait]
impl HttpSession for MockSession {
    async fn get(&self, request: SessionRequest) -> Result<SessionResponse, SessionError> {
        let url = request.url.clone();
        lock(&self.requests).push(request);

        let next = lock(&self.script).pop_front();
        match next {
            Some(Scripted::Response(response)) => Ok(response),
            Some(Scripted::Unreachable(reason)) => Err(SessionError::Request { url, reason }),
            None => lock(&self.fallback).clone().ok_or(SessionError::Request {
                url,
                reason: "mock session has no scripted response".to_string(),
            }),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn request(cmd: &str) -> SessionRequest {
        SessionRequest {
            url: "http://127.0.0.1:2323".to_string(),
            headers: Vec::new(),
            query: vec![("cmd".to_string(), cmd.to_string())],
        }
    }

    #[tokio::test]
    async fn test_mock_session_replays_script_in_order() {
        // Arrange
        let session = MockSession::new();
        session.push_response(200, "{}");
        session.push_response(500, "boom");

        // Act
        let first = session.get(request("a")).await.unwrap();
        let second = session.get(request("b")).await.unwrap();

        // Assert
        assert_eq!(first, SessionResponse::new(200, "{}"));
        assert_eq!(second, SessionResponse::new(500, "boom"));
        assert_eq!(session.request_count(), 2);
        assert_eq!(session.last_request().unwrap().query_value("cmd"), Some("b"));
    }

    #[tokio::test]
    async fn test_mock_session_without_script_or_fallback_fails() {
        let session = MockSession::new();
        let result = session.get(request("a")).await;
        assert!(matches!(result, Err(SessionError::Request { .. })));
        // The request is still recorded.
        assert_eq!(session.request_count(), 1);
    }

    #[test]
    fn test_mock_session_fallback_repeats() {
        let session = MockSession::always(200, r#"{"status":"OK"}"#);
        tokio_test::block_on(async {
            for _ in 0..3 {
                let response = session.get(request("screenOn")).await.unwrap();
                assert_eq!(response.status, 200);
            }
        });
        assert_eq!(session.request_count(), 3);
    }

    #[tokio::test]
    async fn test_scripted_unreachable_reports_session_error() {
        let session = MockSession::always(200, "{}");
        session.push_unreachable("connection refused");

        let result = session.get(request("a")).await;

        assert!(matches!(
            result,
            Err(SessionError::Request { ref reason, .. }) if reason == "connection refused"
        ));
    }
}
