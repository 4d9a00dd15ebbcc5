//! Loading indicators: a static frame for page renders and a live spinner
//! for the terminal while a request is pending.

use std::fmt;
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const TICK: Duration = Duration::from_millis(80);

pub const DEFAULT_LOADING_MESSAGE: &str = "Processing your question...";

/// Static "busy" line used when a page is rendered mid-request.
pub struct LoadingIndicator<'a> {
    pub message: &'a str,
}

impl Default for LoadingIndicator<'_> {
    fn default() -> Self {
        Self {
            message: DEFAULT_LOADING_MESSAGE,
        }
    }
}

impl fmt::Display for LoadingIndicator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", FRAMES[0].cyan(), self.message.italic())
    }
}

/// Animated spinner on stderr. Hidden automatically when stderr is not a TTY.
pub struct TerminalSpinner {
    pb: ProgressBar,
}

impl TerminalSpinner {
    pub fn start(message: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        // A bad template keeps indicatif's default spinner style.
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg} {elapsed:.dim}") {
            pb.set_style(style.tick_strings(&tick_strings()));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK);
        Self { pb }
    }

    /// Removes the spinner line so the next render starts on a clean row.
    pub fn finish(self) {
        self.pb.finish_and_clear();
    }
}

/// indicatif wants the final entry to be the "finished" glyph.
fn tick_strings() -> Vec<&'static str> {
    let mut ticks = FRAMES.to_vec();
    ticks.push("✔");
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_frame_shows_message() {
        colored::control::set_override(false);
        assert_eq!(
            LoadingIndicator::default().to_string(),
            format!("⠋ {DEFAULT_LOADING_MESSAGE}")
        );
        let custom = LoadingIndicator {
            message: "Checking backend...",
        };
        assert_eq!(custom.to_string(), "⠋ Checking backend...");
    }

    #[test]
    fn tick_strings_end_with_finished_glyph() {
        let ticks = tick_strings();
        assert_eq!(ticks.len(), FRAMES.len() + 1);
        assert_eq!(ticks.last(), Some(&"✔"));
    }
}
