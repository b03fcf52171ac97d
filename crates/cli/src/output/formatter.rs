//! Output formatter
//!
//! Ensures consistent output formatting for results and errors.

use console::style;

/// Formatter for CLI output
#[derive(Debug, Clone)]
pub struct Formatter {
    colors: bool,
}

impl Formatter {
    /// Create a formatter, coloring output when stderr supports it
    pub fn new() -> Self {
        Self::with_colors(console::colors_enabled_stderr())
    }

    pub fn with_colors(colors: bool) -> Self {
        Self { colors }
    }

    /// Output a success message
    pub fn success(&self, message: &str) {
        println!("{}", self.success_line(message));
    }

    /// Output an error message
    pub fn error(&self, message: &str) {
        eprintln!("{}", self.error_line(message));
    }

    fn success_line(&self, message: &str) -> String {
        if self.colors {
            format!("{} {message}", style("✓").green())
        } else {
            format!("✓ {message}")
        }
    }

    fn error_line(&self, message: &str) -> String {
        if self.colors {
            format!("{} {message}", style("✗").red())
        } else {
            format!("✗ {message}")
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}
