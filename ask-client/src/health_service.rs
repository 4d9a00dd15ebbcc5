//! Health probe for the RAG backend.
//!
//! Wraps `GET {base}/health` and returns a [`HealthStatus`] that is
//! JSON-serializable and suitable for printing or piping to other tools.
//! [`HealthService::probe`] is resilient and never fails (errors mapped to
//! `ok=false`).

use std::time::Instant;

use serde::Serialize;
use tracing::{info, warn};

use crate::error_handler::make_snippet;
use crate::services::ask_service::AskClient;

/// A serializable health snapshot for the configured backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthStatus {
    /// Target endpoint base URL.
    pub endpoint: String,
    /// Overall health flag.
    pub ok: bool,
    /// HTTP status code, when the server answered at all.
    pub status_code: Option<u16>,
    /// Measured HTTP latency in milliseconds.
    pub latency_ms: u128,
    /// Short human-readable message with details.
    pub message: String,
}

/// Health checker that reuses the client's HTTP connection pool.
pub struct HealthService<'a> {
    client: &'a AskClient,
}

impl<'a> HealthService<'a> {
    /// Creates a health service on top of an existing client.
    pub fn new(client: &'a AskClient) -> Self {
        Self { client }
    }

    /// Probes the backend.
    ///
    /// This method is **resilient**: it never returns an error. Any failure is
    /// converted to `HealthStatus { ok: false, message: ... }`.
    pub async fn probe(&self) -> HealthStatus {
        let endpoint = self.client.base_url().to_string();
        let start = Instant::now();

        let status = match self.client.get_health().await {
            Ok(resp) => {
                let code = resp.status();
                let latency_ms = start.elapsed().as_millis();
                if code.is_success() {
                    HealthStatus {
                        endpoint,
                        ok: true,
                        status_code: Some(code.as_u16()),
                        latency_ms,
                        message: "RAG service is online".to_string(),
                    }
                } else {
                    let text = resp.text().await.unwrap_or_default();
                    let snippet = make_snippet(&text);
                    let message = if snippet.is_empty() {
                        format!("RAG service answered HTTP {code}")
                    } else {
                        format!("RAG service answered HTTP {code}: {snippet}")
                    };
                    HealthStatus {
                        endpoint,
                        ok: false,
                        status_code: Some(code.as_u16()),
                        latency_ms,
                        message,
                    }
                }
            }
            Err(e) => {
                let message = if e.is_timeout() {
                    format!(
                        "RAG service did not answer within {:?}",
                        self.client.health_timeout()
                    )
                } else {
                    format!("RAG service is offline: {e}")
                };
                HealthStatus {
                    endpoint,
                    ok: false,
                    status_code: None,
                    latency_ms: start.elapsed().as_millis(),
                    message,
                }
            }
        };

        if status.ok {
            info!(
                endpoint = %status.endpoint,
                latency_ms = status.latency_ms,
                "health probe completed"
            );
        } else {
            warn!(
                endpoint = %status.endpoint,
                latency_ms = status.latency_ms,
                message = %status.message,
                "health probe failed"
            );
        }
        status
    }
}
