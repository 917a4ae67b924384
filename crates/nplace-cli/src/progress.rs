//! Busy indicator and status lines for commands that wait on the backend.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a request is in flight. Draws to stderr and stays
/// hidden when stderr is not a terminal.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    #[must_use]
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        let spinner_style = ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"])
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(spinner_style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    pub fn set_message(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    pub fn finish_success(&self, message: &str) {
        self.bar.finish_and_clear();
        success(message);
    }

    pub fn finish_warning(&self, message: &str) {
        self.bar.finish_and_clear();
        warning(message);
    }

    pub fn finish_clear(&self) {
        self.bar.finish_and_clear();
    }
}

pub fn success(message: &str) {
    println!("{} {message}", style("✓").green().bold());
}

pub fn warning(message: &str) {
    println!("{} {message}", style("⚠").yellow().bold());
}

pub fn error(message: &str) {
    eprintln!("{} {message}", style("✗").red().bold());
}
