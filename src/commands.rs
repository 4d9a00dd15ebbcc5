//! Slash commands accepted by the interactive session.
//!
//! - /1 .. /N   ask prompt example N
//! - /reset     clear the current answer or error
//! - /health    probe the backend
//! - /examples  list the prompt examples
//! - /help
//! - /quit

use thiserror::Error;

pub const HELP: &str = "\
Type a question and press Enter.

  /1 .. /N    ask one of the example questions
  /examples   list the example questions
  /reset      clear the current answer or error
  /health     check whether the backend is up
  /help       show this help
  /quit       leave (also /exit, Ctrl-D)

Typing a new question while one is pending replaces it.
Ctrl-C cancels a pending question, or leaves when nothing is pending.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashCommand {
    /// 1-based prompt example index.
    Example(usize),
    Reset,
    Health,
    Examples,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum CommandError {
    #[error("Not a slash command (must start with /)")]
    NotACommand,

    #[error("Empty command, type /help for the list")]
    Empty,

    #[error("Unknown command /{0}, type /help for the list")]
    Unknown(String),

    #[error("/{0} takes no arguments")]
    UnexpectedArguments(&'static str),

    #[error("There is no example /{0}")]
    NoSuchExample(usize),

    #[error("Input is not valid UTF-8, line ignored")]
    NotUtf8,
}

/// Turns one raw stdin line (without its `\n`) into text.
pub fn decode_line(raw: Vec<u8>) -> Result<String, CommandError> {
    let mut line = String::from_utf8(raw).map_err(|_| CommandError::NotUtf8)?;
    if line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

impl SlashCommand {
    /// True for lines that should go through [`SlashCommand::parse`]
    /// instead of being asked as a question.
    pub fn is_command(input: &str) -> bool {
        input.trim_start().starts_with('/')
    }

    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let trimmed = input.trim();
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Err(CommandError::NotACommand);
        };

        let mut parts = rest.split_whitespace();
        let Some(name) = parts.next() else {
            return Err(CommandError::Empty);
        };
        let has_args = parts.next().is_some();
        let name = name.to_lowercase();

        let (command, canonical) = match name.as_str() {
            "reset" | "clear" => (SlashCommand::Reset, "reset"),
            "health" => (SlashCommand::Health, "health"),
            "examples" | "ex" => (SlashCommand::Examples, "examples"),
            "help" | "h" | "?" => (SlashCommand::Help, "help"),
            "quit" | "exit" | "q" => (SlashCommand::Quit, "quit"),
            n => match n.parse::<usize>() {
                Ok(0) => return Err(CommandError::NoSuchExample(0)),
                Ok(index) => (SlashCommand::Example(index), "N"),
                Err(_) => return Err(CommandError::Unknown(n.to_string())),
            },
        };

        if has_args {
            return Err(CommandError::UnexpectedArguments(canonical));
        }
        Ok(command)
    }
}
