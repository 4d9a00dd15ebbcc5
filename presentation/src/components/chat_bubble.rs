//! A single speech bubble. User bubbles hug the right edge, assistant
//! bubbles the left.

use std::fmt;

use chrono::{DateTime, Local};
use colored::Colorize;
use interaction::Role;

use crate::components::layout::{PAGE_WIDTH, wrap};

/// Widest a bubble's text column may grow.
const BUBBLE_WIDTH: usize = 60;
/// Usable row width inside a [`Container`](crate::components::layout::Container).
const ROW_WIDTH: usize = PAGE_WIDTH - 4;

pub struct ChatBubble<'a> {
    pub role: Role,
    pub text: &'a str,
    pub timestamp: Option<DateTime<Local>>,
}

impl ChatBubble<'_> {
    fn header(&self) -> String {
        let name = match self.role {
            Role::User => "You".bold().blue(),
            Role::Assistant => "RAG Assistant".bold().green(),
        };
        match self.timestamp {
            Some(ts) => format!("{name} {}", ts.format("%H:%M").to_string().dimmed()),
            None => name.to_string(),
        }
    }
}

impl fmt::Display for ChatBubble<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = wrap(self.text, BUBBLE_WIDTH);
        match self.role {
            Role::Assistant => {
                write!(f, "{}", self.header())?;
                for line in &lines {
                    write!(f, "\n{} {line}", "│".green())?;
                }
            }
            Role::User => {
                // Pad by visible width; the header carries ANSI codes.
                let header_len = "You".len() + self.timestamp.map_or(0, |_| " HH:MM".len());
                write!(f, "{}{}", pad(header_len), self.header())?;
                let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
                for line in &lines {
                    let len = line.chars().count();
                    write!(
                        f,
                        "\n{}{}{line} {}",
                        pad(widest + 2),
                        " ".repeat(widest - len),
                        "│".blue()
                    )?;
                }
            }
        }
        Ok(())
    }
}

fn pad(visible: usize) -> String {
    " ".repeat(ROW_WIDTH.saturating_sub(visible))
}
