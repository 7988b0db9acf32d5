//! Metadata word decoding
//!
//! A tokenized log record carries its structured metadata packed into a
//! single unsigned integer: four adjacent bitfields starting at bit 0, in
//! the order log level, module token, flags, line number.
//!
//! ## Word Layout (default widths)
//!
//! ```text
//!  bit 31                                                    bit 0
//! ┌───────────────┬─────────┬───────────────────────────┬─────────┐
//! │   line (11)   │ flag (2)│     module token (16)     │ log (3) │
//! └───────────────┴─────────┴───────────────────────────┴─────────┘
//! ```
//!
//! The widths and their order are an interop contract with the producing
//! tool; the defaults must not be changed without changing the producer.

use serde::Serialize;
use std::fmt;

use crate::bits;
use crate::error::{Result, TokenLogError};

// =============================================================================
// Bit Layout
// =============================================================================

/// Field widths for a packed metadata word
///
/// Widths are fixed at construction and the four fields occupy consecutive,
/// non-overlapping bit ranges starting at bit 0, each immediately following
/// the previous one.
///
/// The fields are public for literal construction, but a layout whose
/// widths sum past 64 is a precondition violation: fields past the backing
/// word silently read as 0. [`BitLayout::builder`] checks this at
/// `build()`; use it when the widths are not compile-time constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BitLayout {
    /// Width of the log level field (bits 0..log_bits)
    pub log_bits: u32,

    /// Width of the module token field
    pub module_bits: u32,

    /// Width of the flags field
    pub flag_bits: u32,

    /// Width of the line number field
    pub line_bits: u32,
}

impl Default for BitLayout {
    fn default() -> Self {
        Self {
            log_bits: 3,
            module_bits: 16,
            flag_bits: 2,
            line_bits: 11,
        }
    }
}

impl BitLayout {
    /// Create a new layout builder
    pub fn builder() -> BitLayoutBuilder {
        BitLayoutBuilder::default()
    }

    /// Total width of all four fields
    ///
    /// Summed in u64 so that absurd widths report their true total instead
    /// of wrapping.
    pub fn total_bits(&self) -> u64 {
        u64::from(self.log_bits)
            + u64::from(self.module_bits)
            + u64::from(self.flag_bits)
            + u64::from(self.line_bits)
    }

    /// Bit offset of the log level field (always 0)
    pub fn log_offset(&self) -> u32 {
        0
    }

    /// Bit offset of the module token field
    pub fn module_offset(&self) -> u32 {
        self.log_bits
    }

    /// Bit offset of the flags field
    pub fn flag_offset(&self) -> u32 {
        self.log_bits + self.module_bits
    }

    /// Bit offset of the line number field
    pub fn line_offset(&self) -> u32 {
        self.log_bits + self.module_bits + self.flag_bits
    }

    /// Check that every field fits in the 64-bit backing word
    fn validate(self) -> Result<Self> {
        let total = self.total_bits();
        if total > u64::from(u64::BITS) {
            return Err(TokenLogError::LayoutOverflow { total });
        }
        Ok(self)
    }
}

/// Builder for BitLayout
///
/// Fails at `build()` if the widths sum past 64 bits, since fields beyond
/// the backing word would be silently truncated.
#[derive(Default)]
pub struct BitLayoutBuilder {
    layout: BitLayout,
}

impl BitLayoutBuilder {
    /// Set the log level field width
    pub fn log_bits(mut self, bits: u32) -> Self {
        self.layout.log_bits = bits;
        self
    }

    /// Set the module token field width
    pub fn module_bits(mut self, bits: u32) -> Self {
        self.layout.module_bits = bits;
        self
    }

    /// Set the flags field width
    pub fn flag_bits(mut self, bits: u32) -> Self {
        self.layout.flag_bits = bits;
        self
    }

    /// Set the line number field width
    pub fn line_bits(mut self, bits: u32) -> Self {
        self.layout.line_bits = bits;
        self
    }

    pub fn build(self) -> Result<BitLayout> {
        self.layout.validate()
    }
}

// =============================================================================
// Metadata Word
// =============================================================================

/// A decoded metadata word
///
/// Immutable after construction. Accessors are pure derivations from the
/// stored word and never fail: bits beyond the configured total width are
/// ignored, and an oversized subfield simply contributes its low-order bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
    /// The raw packed word, treated as opaque bits
    value: u64,

    /// Field widths, fixed at construction
    layout: BitLayout,
}

impl Metadata {
    /// Wrap a raw word using the default field widths
    pub fn new(value: u64) -> Self {
        Self {
            value,
            layout: BitLayout::default(),
        }
    }

    /// Wrap a raw word using an explicit layout
    ///
    /// The layout is not re-validated here: widths summing past 64 are a
    /// precondition violation whose out-of-range fields read as 0 (see
    /// [`BitLayout`]).
    pub fn with_layout(value: u64, layout: BitLayout) -> Self {
        Self { value, layout }
    }

    /// Pack four subfields into a word using the default layout
    ///
    /// Each subfield is masked to its configured width before placement, so
    /// oversized inputs contribute only their low-order bits.
    pub fn pack(log_level: u64, module_token: u64, flags: u64, line: u64) -> Self {
        Self::pack_with_layout(log_level, module_token, flags, line, BitLayout::default())
    }

    /// Pack four subfields into a word using an explicit layout
    pub fn pack_with_layout(
        log_level: u64,
        module_token: u64,
        flags: u64,
        line: u64,
        layout: BitLayout,
    ) -> Self {
        let value = bits::insert(log_level, layout.log_offset(), layout.log_bits)
            | bits::insert(module_token, layout.module_offset(), layout.module_bits)
            | bits::insert(flags, layout.flag_offset(), layout.flag_bits)
            | bits::insert(line, layout.line_offset(), layout.line_bits);
        Self { value, layout }
    }

    /// The raw packed word
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The field layout this word is decoded with
    pub fn layout(&self) -> &BitLayout {
        &self.layout
    }

    /// Numeric log level (bits 0..log_bits)
    pub fn log_level(&self) -> u64 {
        bits::extract(self.value, self.layout.log_offset(), self.layout.log_bits)
    }

    /// Module token (module_bits bits following the log level)
    pub fn module_token(&self) -> u64 {
        bits::extract(
            self.value,
            self.layout.module_offset(),
            self.layout.module_bits,
        )
    }

    /// Flag bits (flag_bits bits following the module token)
    pub fn flags(&self) -> u64 {
        bits::extract(self.value, self.layout.flag_offset(), self.layout.flag_bits)
    }

    /// Source line number (line_bits bits following the flags)
    pub fn line(&self) -> u64 {
        bits::extract(self.value, self.layout.line_offset(), self.layout.line_bits)
    }
}

// =============================================================================
// Log Levels
// =============================================================================

/// Named log levels used by the producing logger
///
/// Values outside this set are still valid level numbers on the wire; they
/// simply have no name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LogLevel {
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Critical = 5,
    Fatal = 7,
}

impl LogLevel {
    /// Map a numeric level to its name, if it has one
    pub fn from_value(value: u64) -> Option<Self> {
        match value {
            1 => Some(Self::Debug),
            2 => Some(Self::Info),
            3 => Some(Self::Warn),
            4 => Some(Self::Error),
            5 => Some(Self::Critical),
            7 => Some(Self::Fatal),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
            Self::Fatal => "FATAL",
        };
        f.write_str(name)
    }
}
