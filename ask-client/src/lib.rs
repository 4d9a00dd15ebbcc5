//! HTTP client for the Micro-RAG question-answering backend.
//!
//! Public surface:
//! - [`AskClient`]: `ask(question)` and `check_health()`
//! - [`AskBackend`]: the trait state containers depend on
//! - [`HealthService`]: detailed, serializable health probe
//! - [`models`]: the `/ask` wire contract
//! - [`error_handler`]: unified errors and env helpers

pub mod backend;
pub mod error_handler;
pub mod health_service;
pub mod models;
pub mod telemetry;

pub mod config {
    pub mod client_config;
    pub mod default_config;
}

pub mod services {
    pub mod ask_service;
}

pub use backend::AskBackend;
pub use config::client_config::AskClientConfig;
pub use error_handler::{AskClientError, RequestError, ValidationError};
pub use health_service::{HealthService, HealthStatus};
pub use models::{AnswerPayload, Citation, Metrics};
pub use services::ask_service::AskClient;
