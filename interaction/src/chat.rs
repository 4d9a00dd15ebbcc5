//! Chat interaction state: the transient in-memory conversation.
//!
//! Nothing here is sent back to the server; every question is asked on its own.

use ask_client::AnswerPayload;
use chrono::{DateTime, Local};
use tracing::debug;

use crate::action::{Action, Phase, Reducer, Ticket};

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One entry of the conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Local>,
    /// Full answer for assistant messages (citations and metrics included).
    pub payload: Option<AnswerPayload>,
}

/// `{loading, error, messages}` for the chat view.
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    pub loading: bool,
    pub error: Option<String>,
    pub messages: Vec<Message>,
    pending: Option<Ticket>,
    next_id: u64,
    answered: bool,
}

impl ChatState {
    /// Most recent assistant answer, if any.
    pub fn last_answer(&self) -> Option<&AnswerPayload> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::Assistant)
            .and_then(|m| m.payload.as_ref())
    }

    fn push(&mut self, role: Role, content: String, payload: Option<AnswerPayload>) {
        self.next_id += 1;
        self.messages.push(Message {
            id: self.next_id,
            role,
            content,
            timestamp: Local::now(),
            payload,
        });
    }
}

impl Reducer for ChatState {
    fn reduce(&mut self, action: Action) {
        match action {
            Action::Submitted { ticket, question } => {
                self.loading = true;
                self.error = None;
                self.answered = false;
                self.pending = Some(ticket);
                self.push(Role::User, question, None);
            }
            Action::Rejected(err) => {
                self.loading = false;
                self.error = Some(err.to_string());
                self.answered = false;
                self.pending = None;
            }
            Action::Answered { ticket, payload } => {
                if self.pending != Some(ticket) {
                    debug!(ticket = ticket.get(), "dropping stale chat answer");
                    return;
                }
                self.loading = false;
                self.error = None;
                self.answered = true;
                self.pending = None;
                self.push(Role::Assistant, payload.answer.clone(), Some(payload));
            }
            Action::Failed { ticket, message } => {
                if self.pending != Some(ticket) {
                    debug!(ticket = ticket.get(), "dropping stale chat failure");
                    return;
                }
                self.loading = false;
                self.error = Some(message);
                self.answered = false;
                self.pending = None;
            }
            Action::Reset => {
                // History survives a reset; only the transient slots are cleared.
                self.loading = false;
                self.error = None;
                self.answered = false;
                self.pending = None;
            }
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
        } else if self.answered {
            Phase::Answered
        } else {
            Phase::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ask_client::ValidationError;

    fn answer(ticket: u64, text: &str) -> Action {
        Action::Answered {
            ticket: Ticket(ticket),
            payload: AnswerPayload {
                answer: text.to_string(),
                citations: vec![],
                metrics: Default::default(),
            },
        }
    }

    fn ask(ticket: u64, q: &str) -> Action {
        Action::Submitted {
            ticket: Ticket(ticket),
            question: q.to_string(),
        }
    }

    #[test]
    fn conversation_accumulates() {
        let mut s = ChatState::default();
        s.reduce(ask(1, "O que é RAG?"));
        assert_eq!(s.messages.len(), 1);
        assert_eq!(s.messages[0].role, Role::User);

        s.reduce(answer(1, "RAG é..."));
        s.reduce(ask(2, "E MMR?"));
        s.reduce(answer(2, "MMR é..."));

        let roles: Vec<Role> = s.messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![Role::User, Role::Assistant, Role::User, Role::Assistant]
        );
        let ids: Vec<u64> = s.messages.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(s.last_answer().map(|p| p.answer.as_str()), Some("MMR é..."));
    }

    #[test]
    fn failure_adds_no_assistant_message() {
        let mut s = ChatState::default();
        s.reduce(ask(1, "q"));
        s.reduce(Action::Failed {
            ticket: Ticket(1),
            message: "boom".into(),
        });
        assert_eq!(s.messages.len(), 1);
        assert_eq!(s.phase(), Phase::Failed);
        assert!(!s.loading);
    }

    #[test]
    fn reset_keeps_history() {
        let mut s = ChatState::default();
        s.reduce(ask(1, "q"));
        s.reduce(answer(1, "a"));
        s.reduce(Action::Rejected(ValidationError::EmptyQuestion));
        assert!(s.error.is_some());

        s.reduce(Action::Reset);
        s.reduce(Action::Reset);
        assert_eq!(s.error, None);
        assert!(!s.loading);
        assert_eq!(s.messages.len(), 2);
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn stale_answer_is_not_appended() {
        let mut s = ChatState::default();
        s.reduce(ask(1, "first"));
        s.reduce(ask(2, "second"));
        s.reduce(answer(1, "late"));
        assert_eq!(s.messages.len(), 2);
        assert!(s.loading);
    }
}
