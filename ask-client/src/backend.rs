//! The seam between the interaction state and the network.

use std::future::Future;

use crate::error_handler::RequestError;
use crate::models::AnswerPayload;

/// Anything that can answer a question and report liveness.
///
/// [`AskClient`](crate::services::ask_service::AskClient) is the production
/// implementation. Futures must be `Send` so callers can spawn them.
pub trait AskBackend: Send + Sync + 'static {
    /// Sends one question and returns the decoded answer.
    fn ask(&self, question: &str)
    -> impl Future<Output = Result<AnswerPayload, RequestError>> + Send;

    /// Liveness probe. Never fails: any problem is `false`.
    fn check_health(&self) -> impl Future<Output = bool> + Send;
}
