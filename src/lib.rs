//! # tokenlog
//!
//! Decoder for tokenized log records:
//! - Bit-exact extraction of the packed metadata word (level, module token,
//!   flags, line number)
//! - Parsing of format strings annotated with sentinel-delimited fields
//! - Pairing of both halves into a decoded log record
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Log Stream (external)                    │
//! │        metadata word + format string, per log record        │
//! └──────────────┬─────────────────────────────┬────────────────┘
//!                │                             │
//! ┌──────────────▼──────────────┐ ┌────────────▼────────────────┐
//! │          Metadata           │ │        FormatString         │
//! │   (packed u64 bitfields)    │ │  (■key♦value field prefix)  │
//! └──────────────┬──────────────┘ └────────────┬────────────────┘
//!                │                             │
//!                └──────────────┬──────────────┘
//!                               ▼
//!                       ┌─────────────┐
//!                       │  LogRecord  │
//!                       └─────────────┘
//! ```
//!
//! Both decoders are pure value parsers: construction is the only mutation
//! point, all accessors are read-only derivations, and nothing here performs
//! I/O. They are safe to use from any number of threads.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;

pub mod bits;
pub mod metadata;
pub mod format;
pub mod record;
pub mod watch;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, TokenLogError};
pub use format::FormatString;
pub use metadata::{BitLayout, LogLevel, Metadata};
pub use record::LogRecord;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of tokenlog
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
