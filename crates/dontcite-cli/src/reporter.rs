//! Terminal status output

use async_trait::async_trait;
use colored::Colorize;
use dontcite::{StatusLevel, StatusMessage, StatusReporter};
use std::sync::Mutex;

/// Prints the status line with the popup's colours (green / yellow / red)
#[derive(Default)]
pub struct TerminalReporter {
    last: Mutex<Option<StatusLevel>>,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Level of the most recent report, if any
    pub fn last_level(&self) -> Option<StatusLevel> {
        self.last.lock().ok().and_then(|last| *last)
    }
}

pub fn render(status: &StatusMessage) -> String {
    match status.level {
        StatusLevel::Success => format!("{} {}", "✓".green(), status.text.green()),
        StatusLevel::Warning => format!("{} {}", "!".yellow(), status.text.yellow()),
        StatusLevel::Error => format!("{} {}", "✗".red(), status.text.red()),
    }
}

#[async_trait]
impl StatusReporter for TerminalReporter {
    async fn report(&self, status: &StatusMessage) {
        if let Ok(mut last) = self.last.lock() {
            *last = Some(status.level);
        }

        if status.is_error() {
            eprintln!("{}", render(status));
        } else {
            println!("{}", render(status));
        }
    }
}
