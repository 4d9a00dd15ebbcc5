//! Page composition for both interaction variants.
//!
//! What fills the body is decided by [`View`], in strict precedence:
//! error, then loading, then answer, then the idle prompt.

use ask_client::AnswerPayload;
use interaction::{ChatState, InteractionState};

use crate::components::alert::Alert;
use crate::components::chat_message::ChatMessage;
use crate::components::layout::{Container, divider};
use crate::components::query_form::QueryForm;
use crate::components::response_card::ResponseCard;
use crate::components::spinner::LoadingIndicator;

/// The one section a page shows below its history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
    Error(&'a str),
    Loading,
    Answer(&'a AnswerPayload),
    Idle,
}

impl<'a> View<'a> {
    pub fn select(
        error: Option<&'a str>,
        loading: bool,
        response: Option<&'a AnswerPayload>,
    ) -> Self {
        if let Some(message) = error {
            View::Error(message)
        } else if loading {
            View::Loading
        } else if let Some(payload) = response {
            View::Answer(payload)
        } else {
            View::Idle
        }
    }

    pub fn for_state(state: &'a InteractionState) -> Self {
        Self::select(state.error.as_deref(), state.loading, state.response.as_ref())
    }
}

/// Single-answer page body.
pub fn render_page(state: &InteractionState, form: &QueryForm<'_>) -> String {
    render_view(View::for_state(state), form)
}

pub fn render_view(view: View<'_>, form: &QueryForm<'_>) -> String {
    let body = match view {
        View::Error(message) => Alert::error(message).to_string(),
        View::Loading => LoadingIndicator::default().to_string(),
        View::Answer(payload) => ResponseCard { payload }.to_string(),
        View::Idle => form.to_string(),
    };
    Container { body: &body }.to_string()
}

/// Chat page body: the whole history, then the tail section.
///
/// Answers already live in the history, so the tail never repeats one.
/// The prompt examples only show while the conversation is empty.
pub fn render_chat(state: &ChatState, form: &QueryForm<'_>) -> String {
    let mut sections: Vec<String> = state
        .messages
        .iter()
        .map(|message| ChatMessage { message }.to_string())
        .collect();

    match View::select(state.error.as_deref(), state.loading, None) {
        View::Error(message) => sections.push(Alert::error(message).to_string()),
        View::Loading => sections.push(LoadingIndicator::default().to_string()),
        View::Answer(_) => {}
        View::Idle if state.messages.is_empty() => sections.push(form.to_string()),
        View::Idle => {}
    }

    let body = sections.join(&format!("\n\n{}\n\n", divider()));
    Container { body: &body }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use interaction::{Action, Reducer};

    fn payload(answer: &str) -> AnswerPayload {
        serde_json::from_value(serde_json::json!({ "answer": answer })).unwrap()
    }

    #[test]
    fn precedence_error_loading_answer_idle() {
        let p = payload("a");
        assert_eq!(View::select(Some("e"), true, Some(&p)), View::Error("e"));
        assert_eq!(View::select(None, true, Some(&p)), View::Loading);
        assert_eq!(View::select(None, false, Some(&p)), View::Answer(&p));
        assert_eq!(View::select(None, false, None), View::Idle);
    }

    #[test]
    fn idle_page_lists_examples() {
        colored::control::set_override(false);
        let out = render_page(&InteractionState::default(), &QueryForm::default());
        assert!(out.contains("Ask your question"));
        assert!(out.contains("/1 "));
    }

    #[test]
    fn error_page_shows_only_the_alert() {
        colored::control::set_override(false);
        let mut state = InteractionState::default();
        state.reduce(Action::Rejected(ask_client::ValidationError::EmptyQuestion));

        let out = render_page(&state, &QueryForm::default());
        assert!(out.contains("Please enter a question"));
        assert!(!out.contains("Ask your question"));
    }

    #[test]
    fn answer_view_without_citations() {
        colored::control::set_override(false);
        let p = payload("RAG é...");
        let out = render_view(View::Answer(&p), &QueryForm::default());
        assert!(out.contains("RAG é..."));
        assert!(!out.contains("Sources"));
        assert!(!out.contains("Ask your question"));
    }

    #[test]
    fn loading_view() {
        colored::control::set_override(false);
        let out = render_view(View::Loading, &QueryForm::default());
        assert!(out.contains("Processing your question"));
    }

    #[test]
    fn empty_chat_shows_examples_and_history_hides_them() {
        colored::control::set_override(false);
        let form = QueryForm::default();
        let mut state = ChatState::default();
        assert!(render_chat(&state, &form).contains("Try one of these"));

        state.reduce(Action::Reset);
        state.error = Some("boom".into());
        let out = render_chat(&state, &form);
        assert!(out.contains("boom"));
        assert!(!out.contains("Try one of these"));
    }
}
