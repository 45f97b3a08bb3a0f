//! Record rendering mode

use crate::constants::{FORMATTER_JSON, FORMATTER_TEXT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value Object: Formatter Kind
///
/// How a logger renders its records. Text is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatterKind {
    /// Human-readable single-line text
    #[default]
    Text,
    /// One JSON object per record
    Json,
}

impl FormatterKind {
    /// Resolve a configured formatter name.
    ///
    /// `"json"` matches in any case. Every other value resolves to text;
    /// the second element is `true` when that fallback was not requested
    /// explicitly with the exact name `"text"` and deserves an advisory.
    pub fn resolve(name: &str) -> (Self, bool) {
        if name.eq_ignore_ascii_case(FORMATTER_JSON) {
            (Self::Json, false)
        } else {
            (Self::Text, name != FORMATTER_TEXT)
        }
    }

    /// Lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => FORMATTER_TEXT,
            Self::Json => FORMATTER_JSON,
        }
    }
}

impl fmt::Display for FormatterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
