//! Annotated format string parsing
//!
//! Tokenized log format strings may carry named metadata embedded in the
//! text itself, as a prefix of sentinel-delimited key/value fields:
//!
//! ```text
//! ■msg♦Something happened■module♦core■file♦core.c
//! ```
//!
//! A key is `■` followed by an ASCII letter and any number of ASCII word
//! characters, closed by `♦`. The value is everything up to the next `■`-key
//! or the end of the string, taken verbatim. Strings that do not *start*
//! with a well-formed key are ordinary messages with no fields.
//!
//! The sentinel characters and key grammar are an interop contract with the
//! producing tool and must stay in sync with it.

use indexmap::IndexMap;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Opens a field key
pub const FIELD_OPEN: char = '■';

/// Closes a field key
pub const FIELD_CLOSE: char = '♦';

/// Key pattern: open sentinel, ASCII letter, ASCII word chars, close sentinel
fn field_key() -> &'static Regex {
    static FIELD_KEY: OnceLock<Regex> = OnceLock::new();
    FIELD_KEY.get_or_init(|| {
        Regex::new(r"■([A-Za-z][0-9A-Za-z_]*)♦").expect("field key pattern is valid")
    })
}

/// A log format string with optional embedded metadata fields
///
/// Immutable after construction. Parsing is total: text that does not match
/// the field grammar is a valid, undecorated message, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatString {
    /// The original text, preserved verbatim
    raw: String,

    /// Field name → field value, in order of appearance
    fields: IndexMap<String, String>,
}

impl FormatString {
    /// Parse a raw format string
    ///
    /// Fields are extracted only when the string begins with a well-formed
    /// key; a sentinel appearing anywhere else is literal message text.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let mut fields = IndexMap::new();

        // Only look for fields if the raw string starts with one.
        let starts_with_key = field_key()
            .find(&raw)
            .is_some_and(|m| m.start() == 0);

        if starts_with_key {
            // Each key match owns the span from its close sentinel to the
            // next key's open sentinel (or end of string), verbatim.
            let matches: Vec<_> = field_key().captures_iter(&raw).collect();
            for (i, caps) in matches.iter().enumerate() {
                let whole = caps.get(0).expect("match 0 always present");
                let key = &caps[1];
                let value_end = matches
                    .get(i + 1)
                    .map(|next| next.get(0).expect("match 0 always present").start())
                    .unwrap_or(raw.len());
                let value = &raw[whole.end()..value_end];

                if fields.contains_key(key) {
                    tracing::debug!(key, "duplicate field key, keeping later value");
                }
                // Last write wins; IndexMap keeps the original position.
                fields.insert(key.to_string(), value.to_string());
            }
        }

        Self { raw, fields }
    }

    /// The original text, unmodified
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// All extracted fields, in order of appearance
    pub fn fields(&self) -> &IndexMap<String, String> {
        &self.fields
    }

    /// The `msg` field, or the whole raw string if it is not present
    pub fn message(&self) -> &str {
        self.fields.get("msg").map(String::as_str).unwrap_or(&self.raw)
    }

    /// The `module` field, or empty if absent
    pub fn module(&self) -> &str {
        self.fields.get("module").map(String::as_str).unwrap_or("")
    }

    /// The `file` field, or empty if absent
    pub fn file(&self) -> &str {
        self.fields.get("file").map(String::as_str).unwrap_or("")
    }
}

impl fmt::Display for FormatString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
