//! Console report sink.
//!
//! The install run describes its progress through this trait; the CLI renders
//! it to the terminal and tests record it.

use std::sync::Mutex;

/// Run phases that get a banner line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Download,
    Unpack,
    Complete,
}

impl Phase {
    pub fn title(self) -> &'static str {
        match self {
            Phase::Download => "Download",
            Phase::Unpack => "Unpacking",
            Phase::Complete => "Complete",
        }
    }
}

/// Receives human-readable progress lines. Only called from the thread driving the run.
pub trait Reporter {
    /// Program header with the detected system identifier.
    fn header(&self, system: &str);
    fn phase(&self, phase: Phase);
    /// A manifest entry or unpacked file that is being processed.
    fn entry(&self, relative_path: &str);
    /// A manifest entry or unpacked file skipped by the ignore set.
    fn ignored(&self, relative_path: &str);
    /// A failure; goes to the error stream.
    fn error(&self, message: &str);
}

/// One recorded report line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    Header(String),
    Phase(Phase),
    Entry(String),
    Ignored(String),
    Error(String),
}

/// Reporter that keeps every line in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    lines: Mutex<Vec<ReportLine>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<ReportLine> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn errors(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|l| match l {
                ReportLine::Error(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn ignored_paths(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|l| match l {
                ReportLine::Ignored(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    fn push(&self, line: ReportLine) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
        }
    }
}

impl Reporter for RecordingReporter {
    fn header(&self, system: &str) {
        self.push(ReportLine::Header(system.to_string()));
    }

    fn phase(&self, phase: Phase) {
        self.push(ReportLine::Phase(phase));
    }

    fn entry(&self, relative_path: &str) {
        self.push(ReportLine::Entry(relative_path.to_string()));
    }

    fn ignored(&self, relative_path: &str) {
        self.push(ReportLine::Ignored(relative_path.to_string()));
    }

    fn error(&self, message: &str) {
        self.push(ReportLine::Error(message.to_string()));
    }
}
