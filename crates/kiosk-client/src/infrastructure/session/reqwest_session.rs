//! [`HttpSession`] for `reqwest::Client`.
//!
//! `reqwest` frees the connection when the `Response` is consumed by
//! `text()` or dropped, so every early return below releases it.

use async_trait::async_trait;
use kiosk_core::SessionError;

use super::{HttpSession, SessionRequest, SessionResponse};

#[async_trait]
impl HttpSession for reqwest::Client {
    async fn get(&self, request: SessionRequest) -> Result<SessionResponse, SessionError> {
        let mut builder = reqwest::Client::get(self, request.url.as_str()).query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| SessionError::Request {
                url: request.url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status().as_u16();
        // The device labels its JSON as text/html; read raw text and let the
        // transport adapter decide how to parse it.
        let body = response
            .text()
            .await
            .map_err(|e| SessionError::Body(e.to_string()))?;

        Ok(SessionResponse { status, body })
    }
}
