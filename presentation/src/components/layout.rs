//! Page framing: header, footer, and a fixed-width container.

use std::fmt;

use colored::Colorize;

/// Column budget for everything the client prints.
pub const PAGE_WIDTH: usize = 80;

/// Left margin applied by [`Container`].
const MARGIN: &str = "  ";

pub struct Header;

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "═".repeat(PAGE_WIDTH).dimmed())?;
        writeln!(
            f,
            "{}{}  {}",
            MARGIN,
            "Micro-RAG".bold().cyan(),
            "inventory management Q&A".dimmed()
        )?;
        write!(f, "{}", "═".repeat(PAGE_WIDTH).dimmed())
    }
}

pub struct Footer<'a> {
    /// Backend the client is talking to.
    pub endpoint: &'a str,
}

impl fmt::Display for Footer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "─".repeat(PAGE_WIDTH).dimmed())?;
        write!(
            f,
            "{}{} {}  {}",
            MARGIN,
            "Micro-RAG".bold(),
            format!("v{}", env!("CARGO_PKG_VERSION")).dimmed(),
            format!("backend: {}", self.endpoint).dimmed()
        )
    }
}

/// Indents every line of `body` by the page margin.
pub struct Container<'a> {
    pub body: &'a str,
}

impl fmt::Display for Container<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for line in self.body.lines() {
            if !first {
                writeln!(f)?;
            }
            first = false;
            if line.is_empty() {
                continue;
            }
            write!(f, "{MARGIN}{line}")?;
        }
        Ok(())
    }
}

/// Greedy word wrap on character counts. Existing line breaks are kept.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut len = 0usize;
        for word in paragraph.split_whitespace() {
            let wlen = word.chars().count();
            if len > 0 && len + 1 + wlen > width {
                out.push(std::mem::take(&mut line));
                len = 0;
            }
            if len > 0 {
                line.push(' ');
                len += 1;
            }
            line.push_str(word);
            len += wlen;
        }
        out.push(line);
    }

    if out.is_empty() {
        out.push(String::new());
    }
    out
}

/// Thin horizontal divider sized for content inside a [`Container`].
pub fn divider() -> String {
    "─".repeat(PAGE_WIDTH - 2 * MARGIN.len()).dimmed().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("a gestão de estoques consiste em armazenar", 12);
        assert!(lines.iter().all(|l| l.chars().count() <= 12));
        assert_eq!(lines.join(" "), "a gestão de estoques consiste em armazenar");
    }

    #[test]
    fn wrap_keeps_paragraphs() {
        assert_eq!(wrap("one\n\ntwo", 80), vec!["one", "", "two"]);
        assert_eq!(wrap("", 80), vec![""]);
    }

    #[test]
    fn long_words_are_not_split() {
        assert_eq!(wrap("supercalifragilistic", 5), vec!["supercalifragilistic"]);
    }

    #[test]
    fn container_indents_non_empty_lines() {
        colored::control::set_override(false);
        let out = Container { body: "a\n\nb" }.to_string();
        assert_eq!(out, "  a\n\n  b");
    }

    #[test]
    fn footer_names_endpoint() {
        colored::control::set_override(false);
        let out = Footer {
            endpoint: "http://localhost:8000",
        }
        .to_string();
        assert!(out.contains("backend: http://localhost:8000"));
    }
}
