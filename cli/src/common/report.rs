//! # Lasrun Host Messaging Channel (`common::report`)
//!
//! File: cli/src/common/report.rs
//!
//! The toolbox host shows three kinds of lines: messages, warnings and errors.
//! `Reporter` is that channel. `ConsoleReporter` prints messages to stdout and
//! warnings and errors to stderr, leaving presentation to whatever reads them.
//!
use tracing::debug;

/// Severity of a reported line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Message,
    Warning,
    Error,
}

/// Sink for user-facing lines.
pub trait Reporter {
    fn report(&mut self, severity: Severity, text: &str);

    fn message(&mut self, text: &str) {
        self.report(Severity::Message, text);
    }

    fn warning(&mut self, text: &str) {
        self.report(Severity::Warning, text);
    }

    fn error(&mut self, text: &str) {
        self.report(Severity::Error, text);
    }
}

#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, severity: Severity, text: &str) {
        debug!(?severity, "{}", text);
        match severity {
            Severity::Message => println!("{}", text),
            Severity::Warning | Severity::Error => eprintln!("{}", text),
        }
    }
}

/// Keeps every line in memory; used by unit tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub lines: Vec<(Severity, String)>,
}

#[cfg(test)]
impl RecordingReporter {
    pub fn texts(&self, severity: Severity) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, t)| t.as_str())
            .collect()
    }
}

#[cfg(test)]
impl Reporter for RecordingReporter {
    fn report(&mut self, severity: Severity, text: &str) {
        self.lines.push((severity, text.to_string()));
    }
}
