//! Unified error handling for `ask-client`.
//!
//! This module exposes a single top-level error type [`AskClientError`] for the
//! whole library, and groups domain-specific errors in nested enums
//! ([`ConfigError`], [`RequestError`]). Small helpers for reading/validating
//! environment variables are provided and return the unified [`Result<T>`]
//! alias. [`ValidationError`] stays separate: it is produced at the submission
//! boundary and never travels with the other two.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Message surfaced when the server gives no usable `detail`.
pub const FALLBACK_REQUEST_MESSAGE: &str = "Error processing question";

/// Message surfaced when a blank question is submitted.
pub const EMPTY_QUESTION_MESSAGE: &str = "Please enter a question";

/* ------------------------------------------------------------------------- */
/* Public result alias                                                       */
/* ------------------------------------------------------------------------- */

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, AskClientError>;

/* ------------------------------------------------------------------------- */
/* Top-level error                                                           */
/* ------------------------------------------------------------------------- */

/// Top-level error for the `ask-client` crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AskClientError {
    /// Configuration/validation errors (startup).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A failed `/ask` or `/health` round trip.
    #[error(transparent)]
    Request(#[from] RequestError),
}

/* ------------------------------------------------------------------------- */
/* Config errors                                                             */
/* ------------------------------------------------------------------------- */

/// Error enum for environment/config-driven setup.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A number failed to parse (timeouts).
    #[error("invalid number in {var}: {reason}")]
    InvalidNumber {
        /// Variable name (e.g., `RAG_HEALTH_TIMEOUT_SECS`).
        var: &'static str,
        /// Human-readable reason (e.g., `expected u64`).
        reason: &'static str,
    },

    /// Value had the wrong format (e.g., invalid URL).
    #[error("invalid format in {var}: {reason}")]
    InvalidFormat {
        /// Variable name (e.g., `RAG_API_URL`).
        var: &'static str,
        /// Explanation (e.g., `must start with http:// or https://`).
        reason: &'static str,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/* ------------------------------------------------------------------------- */
/* Request errors                                                            */
/* ------------------------------------------------------------------------- */

/// A failed round trip to the backend.
///
/// `Display` is the message shown to the user: for [`RequestError::HttpStatus`]
/// that is the server-provided `detail` (or [`FALLBACK_REQUEST_MESSAGE`]).
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RequestError {
    /// Connection refused, DNS failure, broken body, etc.
    #[error("could not reach the RAG service: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream returned a non-successful HTTP status.
    #[error("{message}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: StatusCode,
        /// Request URL.
        url: String,
        /// Message taken from the error body, or the generic fallback.
        message: String,
    },

    /// A 2xx body that is not a valid answer payload.
    #[error("unexpected response from the RAG service: {0}")]
    Decode(String),
}

impl RequestError {
    /// HTTP status of the failure, when the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RequestError::HttpStatus { status, .. } => Some(*status),
            RequestError::Transport(e) => e.status(),
            RequestError::Decode(_) => None,
        }
    }
}

/* ------------------------------------------------------------------------- */
/* Validation errors                                                         */
/* ------------------------------------------------------------------------- */

/// Client-side rejection of a question. Never reaches the network.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The question was empty or whitespace-only.
    #[error("{}", EMPTY_QUESTION_MESSAGE)]
    EmptyQuestion,
}

/// Validates a raw question at the submission boundary.
///
/// The question is returned untouched: only the emptiness check trims.
///
/// # Errors
/// Returns [`ValidationError::EmptyQuestion`] for blank input.
pub fn validate_question(question: &str) -> std::result::Result<&str, ValidationError> {
    if question.trim().is_empty() {
        Err(ValidationError::EmptyQuestion)
    } else {
        Ok(question)
    }
}

/* ------------------------------------------------------------------------- */
/* Error body decoding                                                       */
/* ------------------------------------------------------------------------- */

/// Error body returned by the backend on non-2xx responses.
///
/// FastAPI produces either `{"detail": "..."}` for raised HTTP errors or
/// `{"detail": [{"loc": [...], "msg": "...", "type": "..."}]}` for request
/// validation failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Message(String),
    Items(Vec<ErrorItem>),
}

#[derive(Debug, Deserialize)]
struct ErrorItem {
    #[serde(default)]
    msg: Option<String>,
}

/// Extracts a user-facing message from a raw error body.
///
/// Falls back to [`FALLBACK_REQUEST_MESSAGE`] when the body is not JSON, has
/// no `detail`, or the detail is blank.
pub fn message_from_error_body(body: &str) -> String {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail);

    let message = match detail {
        Some(ErrorDetail::Message(m)) => m,
        Some(ErrorDetail::Items(items)) => items
            .into_iter()
            .filter_map(|i| i.msg)
            .filter(|m| !m.trim().is_empty())
            .collect::<Vec<_>>()
            .join("; "),
        None => String::new(),
    };

    if message.trim().is_empty() {
        FALLBACK_REQUEST_MESSAGE.to_string()
    } else {
        message
    }
}

/// Clamps a response body to a short single-line snippet for logs.
pub fn make_snippet(text: &str) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let trimmed = flat.trim();
    if trimmed.chars().count() > 240 {
        let head: String = trimmed.chars().take(240).collect();
        format!("{head}…")
    } else {
        trimmed.to_string()
    }
}

/* ------------------------------------------------------------------------- */
/* Config value helpers (return unified `Result<T>`)                         */
/* ------------------------------------------------------------------------- */

/// Trimmed `raw`, or `default` when it is missing or blank.
pub fn value_or_default(raw: Option<&str>, default: &str) -> String {
    match raw.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

/// Parses `raw` as a `u64` on behalf of variable `var`; blank means `None`.
///
/// # Errors
/// Returns [`AskClientError::Config`] with [`ConfigError::InvalidNumber`] if
/// `raw` is set but not a valid `u64`.
pub fn parse_opt_u64(var: &'static str, raw: Option<&str>) -> Result<Option<u64>> {
    match raw.map(str::trim) {
        Some(v) if !v.is_empty() => v.parse::<u64>().map(Some).map_err(|_| {
            AskClientError::from(ConfigError::InvalidNumber {
                var,
                reason: "expected u64",
            })
        }),
        _ => Ok(None),
    }
}

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
///
/// # Errors
/// Returns [`AskClientError::Config`] with [`ConfigError::InvalidFormat`] when
/// the string does not start with a valid HTTP scheme.
pub fn validate_http_endpoint(var: &'static str, value: &str) -> Result<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidFormat {
            var,
            reason: "must start with http:// or https://",
        }
        .into())
    }
}
