//! The store: owns one state, one backend, and at most one request in flight.
//!
//! Overlapping submissions follow a cancel-and-replace policy: starting a new
//! request (or resetting, or submitting a blank question) aborts the one in
//! flight, and its result is never applied.

use std::sync::Arc;

use ask_client::error_handler::{FALLBACK_REQUEST_MESSAGE, validate_question};
use ask_client::{AnswerPayload, AskBackend, RequestError};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::action::{Action, Phase, Reducer, Ticket};
use crate::state::InteractionState;

struct InFlight {
    ticket: Ticket,
    handle: JoinHandle<Result<AnswerPayload, RequestError>>,
}

/// Explicit state container driving the question/answer cycle.
///
/// `S` picks the view shape: [`InteractionState`] (single answer, default) or
/// [`ChatState`](crate::chat::ChatState).
pub struct InteractionStore<B: AskBackend, S: Reducer = InteractionState> {
    backend: Arc<B>,
    state: S,
    next_ticket: u64,
    in_flight: Option<InFlight>,
}

impl<B: AskBackend, S: Reducer> InteractionStore<B, S> {
    pub fn new(backend: B) -> Self {
        Self::with_backend(Arc::new(backend))
    }

    /// Store over a backend shared with other owners.
    pub fn with_backend(backend: Arc<B>) -> Self {
        Self {
            backend,
            state: S::default(),
            next_ticket: 0,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Validates and dispatches a question without waiting for the answer.
    ///
    /// Returns the ticket of the started request, or `None` if the question
    /// was rejected (the state is then Failed and no request was made).
    /// Any request already in flight is aborted.
    ///
    /// # Panics
    /// Must be called from within a Tokio runtime.
    pub fn submit(&mut self, question: &str) -> Option<Ticket> {
        self.cancel_in_flight();

        let question = match validate_question(question) {
            Ok(q) => q.to_string(),
            Err(err) => {
                debug!("question rejected: {err}");
                self.state.reduce(Action::Rejected(err));
                return None;
            }
        };

        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        info!(ticket = ticket.get(), "submitting question");

        self.state.reduce(Action::Submitted {
            ticket,
            question: question.clone(),
        });

        let backend = Arc::clone(&self.backend);
        let handle = tokio::spawn(async move { backend.ask(&question).await });
        self.in_flight = Some(InFlight { ticket, handle });

        Some(ticket)
    }

    /// Waits for the request in flight and applies its outcome.
    ///
    /// Returns `None` immediately when nothing is pending. Dropping this future
    /// before it completes leaves the request running; calling it again picks
    /// the same request up.
    pub async fn settle(&mut self) -> Option<Phase> {
        let in_flight = self.in_flight.as_mut()?;
        let ticket = in_flight.ticket;
        let joined = (&mut in_flight.handle).await;
        self.in_flight = None;

        let action = match joined {
            Ok(Ok(payload)) => Action::Answered { ticket, payload },
            Ok(Err(err)) => Action::Failed {
                ticket,
                message: err.to_string(),
            },
            Err(join_err) => {
                error!(ticket = ticket.get(), error = %join_err, "request task did not complete");
                Action::Failed {
                    ticket,
                    message: FALLBACK_REQUEST_MESSAGE.to_string(),
                }
            }
        };
        self.state.reduce(action);

        Some(self.state.phase())
    }

    /// Full cycle: [`submit`](Self::submit) then [`settle`](Self::settle).
    pub async fn ask(&mut self, question: &str) -> &S {
        if self.submit(question).is_some() {
            self.settle().await;
        }
        &self.state
    }

    /// Back to idle. Aborts any request in flight.
    pub fn reset(&mut self) {
        self.cancel_in_flight();
        self.state.reduce(Action::Reset);
    }

    /// Delegates to the backend's liveness probe.
    pub async fn check_health(&self) -> bool {
        self.backend.check_health().await
    }

    fn cancel_in_flight(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            debug!(ticket = in_flight.ticket.get(), "aborting request in flight");
            in_flight.handle.abort();
        }
    }
}

impl<B: AskBackend, S: Reducer> Drop for InteractionStore<B, S> {
    fn drop(&mut self) {
        self.cancel_in_flight();
    }
}
