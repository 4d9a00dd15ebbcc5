//! One-line status banners.

use std::fmt;

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Success,
    Warning,
    Error,
}

impl AlertKind {
    fn icon(self) -> &'static str {
        match self {
            AlertKind::Info => "ℹ",
            AlertKind::Success => "✔",
            AlertKind::Warning => "⚠",
            AlertKind::Error => "✖",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Alert<'a> {
    pub kind: AlertKind,
    pub message: &'a str,
    /// Appends a hint telling the user how to clear the alert.
    pub dismissable: bool,
}

impl<'a> Alert<'a> {
    pub fn error(message: &'a str) -> Self {
        Self {
            kind: AlertKind::Error,
            message,
            dismissable: true,
        }
    }

    pub fn info(message: &'a str) -> Self {
        Self {
            kind: AlertKind::Info,
            message,
            dismissable: false,
        }
    }

    pub fn success(message: &'a str) -> Self {
        Self {
            kind: AlertKind::Success,
            message,
            dismissable: false,
        }
    }

    pub fn warning(message: &'a str) -> Self {
        Self {
            kind: AlertKind::Warning,
            message,
            dismissable: false,
        }
    }
}

impl fmt::Display for Alert<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = format!("{} {}", self.kind.icon(), self.message);
        let line = match self.kind {
            AlertKind::Info => line.blue(),
            AlertKind::Success => line.green(),
            AlertKind::Warning => line.yellow(),
            AlertKind::Error => line.red().bold(),
        };
        write!(f, "{line}")?;
        if self.dismissable {
            write!(f, "  {}", "(/reset to dismiss)".dimmed())?;
        }
        Ok(())
    }
}
