//! Decoded log records
//!
//! Pairs one decoded metadata word with its parsed format string. The two
//! halves arrive separately from the log transport; this is the composition
//! point for callers that want the whole record at once.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use crate::format::FormatString;
use crate::metadata::{LogLevel, Metadata};

/// One fully decoded log record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    metadata: Metadata,
    format: FormatString,
}

/// Flat, serializable view of a record for rendering (e.g. JSON output)
#[derive(Debug, Clone, Serialize)]
pub struct RecordSummary {
    /// Raw numeric log level
    pub log_level: u64,

    /// Level name, when the numeric level has one
    pub level_name: Option<LogLevel>,

    /// Module token from the metadata word
    pub module_token: u64,

    /// Flag bits
    pub flags: u64,

    /// Source line number
    pub line: u64,

    /// Message text (the `msg` field, or the whole format string)
    pub message: String,

    /// Module name from the format string, empty if absent
    pub module: String,

    /// File path from the format string, empty if absent
    pub file: String,

    /// Every embedded field, in order of appearance
    pub fields: IndexMap<String, String>,
}

impl LogRecord {
    /// Pair a decoded metadata word with its parsed format string
    pub fn new(metadata: Metadata, format: FormatString) -> Self {
        Self { metadata, format }
    }

    /// The metadata half of the record
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// The format-string half of the record
    pub fn format(&self) -> &FormatString {
        &self.format
    }

    /// Build the flat serializable view
    pub fn summary(&self) -> RecordSummary {
        RecordSummary {
            log_level: self.metadata.log_level(),
            level_name: LogLevel::from_value(self.metadata.log_level()),
            module_token: self.metadata.module_token(),
            flags: self.metadata.flags(),
            line: self.metadata.line(),
            message: self.format.message().to_string(),
            module: self.format.module().to_string(),
            file: self.format.file().to_string(),
            fields: self.format.fields().clone(),
        }
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = self.metadata.log_level();
        match LogLevel::from_value(level) {
            Some(name) => write!(f, "[{}] {}", name, self.format.message()),
            None => write!(f, "[{}] {}", level, self.format.message()),
        }
    }
}
