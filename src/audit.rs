//! JSONL audit logging for sanitext
//!
//! Records every run to a JSONL file for later analysis.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::output::{ReportMode, SanitizeReport};

/// Log level for audit entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Unchanged,
    Sanitized,
    Detected,
    Error,
}

/// An audit log entry
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    /// Timestamp of the run
    pub timestamp: DateTime<Utc>,

    /// Log level (UNCHANGED, SANITIZED, DETECTED, ERROR)
    pub level: LogLevel,

    /// How the text was processed
    pub mode: ReportMode,

    /// Truncated input
    pub input_summary: String,

    /// Distinct characters outside the allowed set
    pub disallowed: usize,

    /// Known homoglyph and invisible occurrences
    pub anomalies: usize,

    /// Error message, if the run failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry from a report
    pub fn new(report: &SanitizeReport) -> Self {
        let level = match report.mode {
            ReportMode::Detect => LogLevel::Detected,
            _ if report.changed => LogLevel::Sanitized,
            _ => LogLevel::Unchanged,
        };

        Self {
            timestamp: Utc::now(),
            level,
            mode: report.mode,
            input_summary: summarize(&report.input),
            disallowed: report.distinct_disallowed(),
            anomalies: report.known.len(),
            reason: None,
        }
    }

    /// Create an entry for a failed run
    pub fn error(mode: ReportMode, input: &str, reason: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level: LogLevel::Error,
            mode,
            input_summary: summarize(input),
            disallowed: 0,
            anomalies: 0,
            reason: Some(reason.into()),
        }
    }
}

/// First 100 characters of the input
fn summarize(input: &str) -> String {
    match input.char_indices().nth(100) {
        Some((idx, _)) => format!("{}...", &input[..idx]),
        None => input.to_string(),
    }
}

/// Audit logger
#[derive(Default)]
pub struct AuditLogger {
    writer: Option<BufWriter<File>>,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(path: Option<&Path>) -> Self {
        let writer = path.and_then(|p| {
            // Ensure parent directory exists
            if let Some(parent) = p.parent() {
                let _ = std::fs::create_dir_all(parent);
            }

            OpenOptions::new()
                .create(true)
                .append(true)
                .open(p)
                .ok()
                .map(BufWriter::new)
        });

        Self { writer }
    }

    /// Log an audit entry
    pub fn log(&mut self, entry: &AuditEntry) -> Result<(), std::io::Error> {
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(entry)?;
            writeln!(writer, "{}", json)?;
            writer.flush()?;
        }
        Ok(())
    }

    /// Log a finished run
    pub fn log_report(&mut self, report: &SanitizeReport) -> Result<(), std::io::Error> {
        self.log(&AuditEntry::new(report))
    }

    /// Check if logging is enabled
    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }
}
