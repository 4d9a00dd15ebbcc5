//! Actions accepted by the reducers and the trait that applies them.

use ask_client::{AnswerPayload, ValidationError};

/// Identifies one submission. Later submissions get larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(pub(crate) u64);

impl Ticket {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Every state transition goes through one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A valid question was sent; the request identified by `ticket` is in flight.
    Submitted { ticket: Ticket, question: String },
    /// The question was rejected before reaching the network.
    Rejected(ValidationError),
    /// The request identified by `ticket` returned an answer.
    Answered {
        ticket: Ticket,
        payload: AnswerPayload,
    },
    /// The request identified by `ticket` failed with a user-facing message.
    Failed { ticket: Ticket, message: String },
    /// Back to idle.
    Reset,
}

/// Logical phase of an interaction, derivable from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Answered,
    Failed,
}

/// A state shape that knows how to apply [`Action`]s.
///
/// Implementations must ignore `Answered`/`Failed` for any ticket other than the
/// one currently pending, so a stale result can never overwrite a newer one.
pub trait Reducer: Default + Send {
    /// Applies one action in place.
    fn reduce(&mut self, action: Action);

    /// True while a request is in flight.
    fn loading(&self) -> bool;

    /// Current error message, if any.
    fn error(&self) -> Option<&str>;

    /// Logical phase derived from the state.
    fn phase(&self) -> Phase;
}
