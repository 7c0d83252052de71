//! Terminal rendering of the install report.

use console::{style, Term};
use rmpkg_core::report::{Phase, Reporter};

/// Writes report lines to stdout and errors to stderr. Colors are dropped
/// automatically when the stream is not a terminal.
pub struct ConsoleReporter {
    out: Term,
    err: Term,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn header_lines(system: &str) -> [String; 2] {
    [
        style("==== rmpkg =====").green().bright().to_string(),
        format!("System: {}", style(system).yellow().bright()),
    ]
}

pub(crate) fn phase_line(phase: Phase) -> String {
    style(format!("===== {} ======", phase.title()))
        .green()
        .bright()
        .to_string()
}

pub(crate) fn ignored_line(relative_path: &str) -> String {
    format!("{} {}", relative_path, style("[IGNORED]").red())
}

pub(crate) fn error_line(message: &str) -> String {
    style(message).red().bright().to_string()
}

impl Reporter for ConsoleReporter {
    fn header(&self, system: &str) {
        for line in header_lines(system) {
            let _ = self.out.write_line(&line);
        }
    }

    fn phase(&self, phase: Phase) {
        let _ = self.out.write_line(&phase_line(phase));
    }

    fn entry(&self, relative_path: &str) {
        let _ = self.out.write_line(relative_path);
    }

    fn ignored(&self, relative_path: &str) {
        let _ = self.out.write_line(&ignored_line(relative_path));
    }

    fn error(&self, message: &str) {
        let _ = self.err.write_line(&error_line(message));
    }
}
