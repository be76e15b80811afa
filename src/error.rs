//! Error types for the TOON codec.
//!
//! The format's error model is deliberately narrow: a decode failure is a
//! single error kind carrying a human-readable message, the 1-based line
//! number it occurred on, and a truncated rendering of the offending line.
//! An encode failure is a single error kind covering unsupported input
//! shapes. There is no taxonomy of error *types* to match against — callers
//! are expected to read the message, not pattern-match a variant.
//!
//! ## Examples
//!
//! ```rust
//! use toon::{decode, DecodeOptions};
//!
//! let result = decode("a:\tb", &DecodeOptions::new());
//! assert!(result.is_err());
//! let message = result.unwrap_err().to_string();
//! assert!(message.contains("line 1"));
//! ```

use std::fmt;
use thiserror::Error;

/// The maximum number of characters of offending-line context an error
/// message carries before truncating with `…` (spec §4.H).
pub const CONTEXT_TRUNCATE_LEN: usize = 200;

/// All errors this crate can produce.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A decode failure: malformed TOON source. Carries the 1-based source
    /// line number and a truncated rendering of that line alongside the
    /// message.
    #[error("parse error at line {line}: {message}\n  {context}")]
    Parse {
        line: usize,
        message: String,
        context: String,
    },

    /// An encode failure: the input value (or, in the host-language
    /// wrapper, the `Serialize` shape) cannot be represented in TOON.
    #[error("cannot encode: {0}")]
    Encode(String),

    /// I/O failure reading from or writing to a stream.
    #[error("I/O error: {0}")]
    Io(String),

    /// A `serde::de::Error`/`serde::ser::Error` custom message raised by the
    /// host-language wrapper, e.g. from a `Deserialize`/`Serialize` impl.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Builds a decode/parse error, truncating `context` to
    /// [`CONTEXT_TRUNCATE_LEN`] characters per spec.
    pub fn parse(line: usize, context: impl Into<String>, message: impl Into<String>) -> Self {
        let context = context.into();
        let context = if context.chars().count() > CONTEXT_TRUNCATE_LEN {
            let truncated: String = context.chars().take(CONTEXT_TRUNCATE_LEN).collect();
            format!("{truncated}…")
        } else {
            context
        };
        Error::Parse {
            line,
            message: message.into(),
            context,
        }
    }

    pub fn encode(msg: impl fmt::Display) -> Self {
        Error::Encode(msg.to_string())
    }

    pub fn io(msg: impl fmt::Display) -> Self {
        Error::Io(msg.to_string())
    }

    pub fn custom(msg: impl fmt::Display) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_truncates_long_context() {
        let context = "x".repeat(250);
        let err = Error::parse(3, context, "boom");
        let rendered = err.to_string();
        assert!(rendered.contains("line 3"));
        assert!(rendered.contains('…'));
    }
}
