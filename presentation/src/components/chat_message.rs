//! A conversation entry: the bubble, plus sources and metrics for answers.

use std::fmt;

use interaction::{Message, Role};

use crate::components::chat_bubble::ChatBubble;
use crate::components::citations_list::CitationsList;
use crate::components::metrics_card::MetricsCard;

pub struct ChatMessage<'a> {
    pub message: &'a Message,
}

impl fmt::Display for ChatMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.message;
        write!(
            f,
            "{}",
            ChatBubble {
                role: m.role,
                text: &m.content,
                timestamp: Some(m.timestamp),
            }
        )?;

        if m.role == Role::User {
            return Ok(());
        }
        if let Some(payload) = &m.payload {
            if payload.has_citations() {
                write!(
                    f,
                    "\n\n{}",
                    CitationsList {
                        citations: &payload.citations
                    }
                )?;
            }
            write!(
                f,
                "\n\n{}",
                MetricsCard {
                    metrics: &payload.metrics
                }
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ask_client::AnswerPayload;
    use chrono::Local;

    fn message(role: Role, content: &str, payload: Option<AnswerPayload>) -> Message {
        Message {
            id: 1,
            role,
            content: content.to_string(),
            timestamp: Local::now(),
            payload,
        }
    }

    #[test]
    fn user_message_is_just_a_bubble() {
        colored::control::set_override(false);
        let out = ChatMessage {
            message: &message(Role::User, "O que é RAG?", None),
        }
        .to_string();
        assert!(out.contains("O que é RAG?"));
        assert!(!out.contains("Execution metrics"));
    }

    #[test]
    fn assistant_message_embeds_sources_and_metrics() {
        colored::control::set_override(false);
        let payload: AnswerPayload = serde_json::from_value(serde_json::json!({
            "answer": "Curva ABC classifica itens...",
            "citations": [{ "source": "GESTAO_DE_ESTOQUES.pdf", "excerpt": "A curva ABC...", "chunk_id": 4 }],
            "metrics": { "total_tokens": 780 }
        }))
        .unwrap();
        let text = payload.answer.clone();
        let out = ChatMessage {
            message: &message(Role::Assistant, &text, Some(payload)),
        }
        .to_string();

        assert!(out.contains("RAG Assistant"));
        assert!(out.contains("(chunk #4)"));
        assert!(out.contains("Execution metrics"));
        assert!(out.contains("780"));
    }
}
