//! Single-answer view: answer text, sources, metrics.

use std::fmt;

use ask_client::AnswerPayload;
use colored::Colorize;

use crate::components::citations_list::CitationsList;
use crate::components::layout::{PAGE_WIDTH, divider, wrap};
use crate::components::metrics_card::MetricsCard;

pub struct ResponseCard<'a> {
    pub payload: &'a AnswerPayload,
}

impl fmt::Display for ResponseCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}  {}", "Answer".bold().green(), "[generated]".dimmed())?;
        for line in wrap(&self.payload.answer, PAGE_WIDTH - 4) {
            writeln!(f, "{line}")?;
        }

        if self.payload.has_citations() {
            writeln!(f, "\n{}", divider())?;
            writeln!(
                f,
                "{}",
                CitationsList {
                    citations: &self.payload.citations
                }
            )?;
        }

        writeln!(f, "\n{}", divider())?;
        writeln!(
            f,
            "{}",
            MetricsCard {
                metrics: &self.payload.metrics
            }
        )?;
        write!(
            f,
            "\n{}",
            "Type a new question, or /reset to start over.".dimmed()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: serde_json::Value) -> AnswerPayload {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn answer_without_citations_hides_sources() {
        colored::control::set_override(false);
        let p = payload(serde_json::json!({
            "answer": "RAG é...", "citations": [], "metrics": {}
        }));
        let out = ResponseCard { payload: &p }.to_string();

        assert!(out.contains("RAG é..."));
        assert!(!out.contains("Sources"));
        assert!(out.contains("Execution metrics"));
        assert!(out.contains("/reset"));
    }

    #[test]
    fn answer_with_citations() {
        colored::control::set_override(false);
        let p = payload(serde_json::json!({
            "answer": "Estoque de segurança é...",
            "citations": [{ "source": "GESTAO_DE_ESTOQUES.pdf", "excerpt": "O estoque de segurança..." }]
        }));
        let out = ResponseCard { payload: &p }.to_string();
        assert!(out.contains("Sources (1)"));
        assert!(out.contains("GESTAO_DE_ESTOQUES.pdf"));
    }
}
