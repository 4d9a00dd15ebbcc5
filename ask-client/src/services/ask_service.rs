//! Thin HTTP client for the Micro-RAG backend.
//!
//! - `POST {base}/ask`    one question, one answer (no retries, no timeout)
//! - `GET  {base}/health` liveness probe, translated to `bool`
//!
//! # Examples
//!
//! ```no_run
//! use ask_client::config::client_config::AskClientConfig;
//! use ask_client::services::ask_service::AskClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AskClient::new(AskClientConfig::new("http://localhost:8000"))?;
//!
//! let answer = client.ask("O que é RAG?").await?;
//! println!("{}", answer.answer);
//!
//! println!("healthy = {}", client.check_health().await);
//! # Ok(()) }
//! ```

use std::time::{Duration, Instant};

use tracing::{debug, error, instrument, warn};

use crate::backend::AskBackend;
use crate::config::client_config::AskClientConfig;
use crate::error_handler::{
    ConfigError, RequestError, Result, make_snippet, message_from_error_body,
};
use crate::models::{AnswerPayload, AskRequest};

/// Default health probe timeout when the config leaves it unset.
pub const DEFAULT_HEALTH_TIMEOUT_SECS: u64 = 10;

/// HTTP client bound to one backend.
///
/// Reuses a single `reqwest::Client`. The client itself has no timeout, so a
/// hanging `/ask` blocks until the server answers; only health probes are
/// bounded, per request.
#[derive(Debug, Clone)]
pub struct AskClient {
    client: reqwest::Client,
    base_url: String,
    url_ask: String,
    url_health: String,
    health_timeout: Duration,
}

impl AskClient {
    /// Creates a client for `cfg.base_url`.
    ///
    /// # Errors
    /// - [`ConfigError::InvalidFormat`] if the base URL is not http(s)
    /// - [`ConfigError::HttpClient`] if the HTTP client cannot be built
    pub fn new(cfg: AskClientConfig) -> Result<Self> {
        let base = cfg.base().to_string();
        crate::error_handler::validate_http_endpoint("RAG_API_URL", &base)?;

        let client = reqwest::Client::builder()
            .build()
            .map_err(ConfigError::HttpClient)?;

        let health_timeout = Duration::from_secs(
            cfg.health_timeout_secs
                .unwrap_or(DEFAULT_HEALTH_TIMEOUT_SECS),
        );

        Ok(Self {
            client,
            url_ask: format!("{base}/ask"),
            url_health: format!("{base}/health"),
            base_url: base,
            health_timeout,
        })
    }

    /// Backend root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Timeout applied to health probes.
    pub fn health_timeout(&self) -> Duration {
        self.health_timeout
    }

    /// Posts a question to `/ask` and decodes the answer.
    ///
    /// The question is sent exactly as given; validation is the caller's job.
    ///
    /// # Errors
    /// - [`RequestError::Transport`] when the request cannot be sent
    /// - [`RequestError::HttpStatus`] for non-2xx responses, carrying the
    ///   server's `detail` or the generic fallback
    /// - [`RequestError::Decode`] if the body is not an answer payload
    #[instrument(skip_all, fields(url = %self.url_ask, question_len = question.chars().count()))]
    pub async fn ask(&self, question: &str) -> std::result::Result<AnswerPayload, RequestError> {
        let start = Instant::now();
        debug!("POST {}", self.url_ask);

        let resp = self
            .client
            .post(&self.url_ask)
            .json(&AskRequest { question })
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "POST /ask failed before a response");
                RequestError::Transport(e)
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let message = message_from_error_body(&text);
            error!(
                %status,
                snippet = %make_snippet(&text),
                latency_ms = start.elapsed().as_millis(),
                "POST /ask returned non-success status"
            );
            return Err(RequestError::HttpStatus {
                status,
                url: self.url_ask.clone(),
                message,
            });
        }

        let payload: AnswerPayload = resp.json().await.map_err(|e| {
            warn!(error = %e, "failed to decode /ask response");
            RequestError::Decode(e.to_string())
        })?;

        debug!(
            latency_ms = start.elapsed().as_millis(),
            citations = payload.citations.len(),
            "answer received"
        );
        Ok(payload)
    }

    /// Probes `/health`; `true` iff the server answers 2xx.
    ///
    /// This method is **resilient**: it never returns an error.
    #[instrument(skip_all, fields(url = %self.url_health))]
    pub async fn check_health(&self) -> bool {
        match self.get_health().await {
            Ok(resp) if resp.status().is_success() => true,
            Ok(resp) => {
                warn!(status = %resp.status(), "backend reported unhealthy");
                false
            }
            Err(e) => {
                warn!(error = %e, "backend offline");
                false
            }
        }
    }

    /// Raw `GET /health`, shared with [`HealthService`](crate::health_service::HealthService).
    pub(crate) async fn get_health(&self) -> reqwest::Result<reqwest::Response> {
        debug!("GET {}", self.url_health);
        self.client
            .get(&self.url_health)
            .timeout(self.health_timeout)
            .send()
            .await
    }
}

impl AskBackend for AskClient {
    async fn ask(&self, question: &str) -> std::result::Result<AnswerPayload, RequestError> {
        AskClient::ask(self, question).await
    }

    async fn check_health(&self) -> bool {
        AskClient::check_health(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> AskClient {
        AskClient::new(AskClientConfig::new(server.uri())).unwrap()
    }

    #[test]
    fn rejects_non_http_base() {
        assert!(AskClient::new(AskClientConfig::new("localhost:8000")).is_err());
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = AskClient::new(AskClientConfig::new("http://localhost:8000/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.health_timeout(),
            Duration::from_secs(DEFAULT_HEALTH_TIMEOUT_SECS)
        );
    }

    #[tokio::test]
    async fn ask_posts_exact_question() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ask"))
            .and(body_json(serde_json::json!({ "question": "O que é RAG?" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "answer": "RAG é...",
                "citations": [],
                "metrics": {}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let payload = client_for(&server).ask("O que é RAG?").await.unwrap();
        assert_eq!(payload.answer, "RAG é...");
        assert!(payload.citations.is_empty());
    }

    #[tokio::test]
    async fn server_detail_becomes_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ask"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(serde_json::json!({ "detail": "boom" })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).ask("q?").await.unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert_eq!(err.status(), Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[tokio::test]
    async fn non_json_error_uses_fallback() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ask"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let err = client_for(&server).ask("q?").await.unwrap_err();
        assert_eq!(err.to_string(), crate::error_handler::FALLBACK_REQUEST_MESSAGE);
    }

    #[tokio::test]
    async fn malformed_success_body_is_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ask"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server).ask("q?").await.unwrap_err();
        assert!(matches!(err, RequestError::Decode(_)));
    }

    #[tokio::test]
    async fn health_maps_status_to_bool() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        assert!(client_for(&server).check_health().await);
    }

    #[tokio::test]
    async fn health_is_false_on_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        assert!(!client_for(&server).check_health().await);
    }

    #[tokio::test]
    async fn health_is_false_when_unreachable() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        drop(server);

        assert!(!client.check_health().await);
    }

    #[tokio::test]
    async fn slow_health_endpoint_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let client = AskClient::new(AskClientConfig {
            base_url: server.uri(),
            health_timeout_secs: Some(1),
        })
        .unwrap();
        assert_eq!(client.health_timeout(), Duration::from_secs(1));

        let start = Instant::now();
        assert!(!client.check_health().await);
        assert!(start.elapsed() < Duration::from_secs(3));
    }

    #[tokio::test]
    async fn ask_is_not_bounded_by_health_timeout() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ask"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_millis(1500))
                    .set_body_json(serde_json::json!({ "answer": "devagar" })),
            )
            .mount(&server)
            .await;

        let client = AskClient::new(AskClientConfig {
            base_url: server.uri(),
            health_timeout_secs: Some(1),
        })
        .unwrap();
        let payload = client.ask("q?").await.unwrap();
        assert_eq!(payload.answer, "devagar");
    }
}
