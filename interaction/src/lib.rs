//! Question/answer interaction state for the Micro-RAG client.
//!
//! State lives in an explicit [`InteractionStore`] owned by the composition
//! root. Views read it through [`InteractionStore::state`]; only the store's
//! operations (`submit`, `settle`, `ask`, `reset`) change it, via reducers.

pub mod action;
pub mod chat;
pub mod state;
pub mod store;

pub use action::{Action, Phase, Reducer, Ticket};
pub use chat::{ChatState, Message, Role};
pub use state::InteractionState;
pub use store::InteractionStore;
