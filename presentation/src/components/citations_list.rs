//! Numbered list of the documents an answer was grounded on.

use std::fmt;

use ask_client::Citation;
use colored::Colorize;

use crate::components::layout::{PAGE_WIDTH, wrap};
use crate::formatters::truncate_text;

/// Longest excerpt shown per citation, in characters.
const EXCERPT_LIMIT: usize = 300;
const EXCERPT_INDENT: &str = "     ";

/// Renders nothing at all for an empty slice.
pub struct CitationsList<'a> {
    pub citations: &'a [Citation],
}

impl fmt::Display for CitationsList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.citations.is_empty() {
            return Ok(());
        }

        write!(
            f,
            "{}",
            format!("Sources ({})", self.citations.len()).bold()
        )?;

        let width = PAGE_WIDTH - 4 - EXCERPT_INDENT.len();
        for (i, citation) in self.citations.iter().enumerate() {
            write!(f, "\n  {} {}", format!("[{}]", i + 1).cyan(), citation.source.bold())?;
            if let Some(id) = citation.chunk_id {
                write!(f, " {}", format!("(chunk #{id})").dimmed())?;
            }

            let excerpt = citation.excerpt.trim();
            if excerpt.is_empty() {
                continue;
            }
            let quoted = format!("\"{}\"", truncate_text(excerpt, EXCERPT_LIMIT));
            for line in wrap(&quoted, width) {
                write!(f, "\n{EXCERPT_INDENT}{}", line.italic())?;
            }
        }
        Ok(())
    }
}
