//! Output formatting utilities
//!
//! Human-readable result lines on stdout, error and warning lines on stderr,
//! and a spinner while a transfer runs.

mod formatter;
mod progress;

pub use formatter::Formatter;
pub use progress::ProgressBar;
