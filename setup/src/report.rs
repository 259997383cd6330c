//! User-facing console notifications.
//!
//! Every notification is one stdout line: a bracketed level tag followed by
//! the message text. This output (plus the process exit code) is the tool's
//! observable contract, so it goes through the [`Reporter`] seam rather than
//! bare `println!` calls; tests record notifications instead of scraping
//! stdout.

use std::fmt;

/// Severity tag for a console notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
    Success,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Level::Info => "[INFO]",
            Level::Error => "[ERROR]",
            Level::Success => "[SUCCESS]",
        };
        f.write_str(tag)
    }
}

/// Sink for user-facing notifications.
pub trait Reporter {
    fn emit(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.emit(Level::Info, message);
    }

    fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }

    fn success(&self, message: &str) {
        self.emit(Level::Success, message);
    }
}

/// Reporter that prints each notification to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn emit(&self, level: Level, message: &str) {
        println!("{level} {message}");
    }
}
