//! HTTP transport used by the translator.
//!
//! The translator only needs "send a GET, hand back status and body", so the
//! network sits behind a small trait and tests can swap in a stub.

use reqwest::{Client, Url};
use std::future::Future;
use std::time::Duration;
use tracing::debug;

use super::error::BoxError;

/// A fully built outbound request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
    pub timeout: Duration,
}

/// Status and raw body text of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Sends a GET request and reads the whole response body.
///
/// Errors are transport-level failures only; a non-200 status is a
/// successful send, even when its body cannot be read in full.
pub trait Transport {
    fn send(
        &self,
        request: &HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, BoxError>> + Send;
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, BoxError> {
        let mut builder = self
            .client
            .get(request.url.clone())
            .timeout(request.timeout);

        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = if status == 200 {
            response.text().await?
        } else {
            // the status takes precedence over an unreadable body
            response.text().await.unwrap_or_else(|e| {
                debug!(status, error = %e, "failed to read error response body");
                String::new()
            })
        };

        Ok(HttpResponse { status, body })
    }
}
