//! Progress spinner for transfer operations
//!
//! The spinner draws on stderr and stays hidden when stderr is not a terminal.

use std::time::Duration;

/// Spinner wrapper
#[derive(Debug)]
pub struct ProgressBar {
    bar: Option<indicatif::ProgressBar>,
}

impl ProgressBar {
    /// Create a spinner for indeterminate progress
    pub fn spinner(message: &str) -> Self {
        let bar = indicatif::ProgressBar::new_spinner();
        if bar.is_hidden() {
            return Self::hidden();
        }

        let style = indicatif::ProgressStyle::default_spinner().template("{spinner:.green} {msg}");
        if let Ok(style) = style {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar: Some(bar) }
    }

    /// A spinner that never draws
    pub fn hidden() -> Self {
        Self { bar: None }
    }

    /// Finish and clear the spinner
    pub fn finish_and_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_spinner() {
        let bar = ProgressBar::hidden();
        assert!(bar.bar.is_none());
        bar.finish_and_clear();
    }
}
