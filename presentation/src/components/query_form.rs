//! Prompt header with canned example questions.

use std::fmt;

use colored::Colorize;

/// Example questions shown on the idle screen, in `/N` order.
pub const DEFAULT_EXAMPLES: &[&str] = &[
    "O que é gestão de estoques?",
    "Quais são os principais métodos de controle de estoque?",
    "Como funciona a curva ABC?",
    "O que é estoque de segurança?",
];

pub struct QueryForm<'a> {
    pub examples: &'a [&'a str],
}

impl Default for QueryForm<'_> {
    fn default() -> Self {
        Self {
            examples: DEFAULT_EXAMPLES,
        }
    }
}

impl<'a> QueryForm<'a> {
    /// 1-based lookup, matching the `/N` shortcut shown on screen.
    pub fn example(&self, n: usize) -> Option<&'a str> {
        n.checked_sub(1).and_then(|i| self.examples.get(i)).copied()
    }
}

impl fmt::Display for QueryForm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", "Ask your question".bold().cyan())?;
        write!(
            f,
            "\n{}",
            "Questions are answered from the indexed inventory-management documents.".dimmed()
        )?;
        if self.examples.is_empty() {
            return Ok(());
        }
        write!(f, "\n\n{}", "Try one of these:".bold())?;
        for (i, example) in self.examples.iter().enumerate() {
            write!(f, "\n  {} {example}", format!("/{}", i + 1).cyan())?;
        }
        Ok(())
    }
}
