//! Terminal rendering for the Micro-RAG client.
//!
//! - [`formatters`]: metric values to short display strings
//! - [`components`]: alerts, spinners, cards, bubbles, layout
//! - [`page`]: whole-page composition for both interaction variants

pub mod components;
pub mod formatters;
pub mod page;

pub use components::query_form::{DEFAULT_EXAMPLES, QueryForm};
pub use page::{View, render_chat, render_page, render_view};
