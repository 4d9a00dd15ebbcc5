//! Single-answer interaction state: one question, one answer card.

use ask_client::AnswerPayload;
use tracing::debug;

use crate::action::{Action, Phase, Reducer, Ticket};

/// `{loading, error, response}` for the single-answer view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    pub loading: bool,
    pub error: Option<String>,
    pub response: Option<AnswerPayload>,
    pending: Option<Ticket>,
}

impl InteractionState {
    /// Ticket of the request whose result this state is waiting for.
    pub fn pending(&self) -> Option<Ticket> {
        self.pending
    }
}

impl Reducer for InteractionState {
    fn reduce(&mut self, action: Action) {
        match action {
            Action::Submitted { ticket, .. } => {
                self.loading = true;
                self.error = None;
                self.response = None;
                self.pending = Some(ticket);
            }
            Action::Rejected(err) => {
                self.loading = false;
                self.error = Some(err.to_string());
                self.response = None;
                self.pending = None;
            }
            Action::Answered { ticket, payload } => {
                if self.pending != Some(ticket) {
                    debug!(ticket = ticket.get(), "dropping stale answer");
                    return;
                }
                self.loading = false;
                self.error = None;
                self.response = Some(payload);
                self.pending = None;
            }
            Action::Failed { ticket, message } => {
                if self.pending != Some(ticket) {
                    debug!(ticket = ticket.get(), "dropping stale failure");
                    return;
                }
                self.loading = false;
                self.error = Some(message);
                self.response = None;
                self.pending = None;
            }
            Action::Reset => *self = Self::default(),
        }
    }

    fn loading(&self) -> bool {
        self.loading
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Failed
        } else if self.response.is_some() {
            Phase::Answered
        } else {
            Phase::Idle
        }
    }
}
