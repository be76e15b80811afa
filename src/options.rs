//! Configuration surfaces for the decoder and the encoder.
//!
//! TOON has separate option sets for each direction: [`DecodeOptions`]
//! controls how strictly malformed input is treated, [`EncodeOptions`]
//! controls the output shape. They are deliberately not a single shared
//! struct — decoding and encoding don't share a concern except the
//! indentation width and the delimiter choice.
//!
//! ## Examples
//!
//! ```rust
//! use toon::{DecodeOptions, EncodeOptions, Delimiter, decode, encode};
//!
//! let lenient = DecodeOptions::new().strict(false);
//! let value = decode("a: 1\nb: 2", &lenient).unwrap();
//!
//! let options = EncodeOptions::new().delimiter(Delimiter::Pipe);
//! let _ = encode(&value, &options);
//! ```

/// Delimiter choice for TOON arrays and tables.
///
/// - **Comma**: default, most compact.
/// - **Tab**: best for TSV-like output.
/// - **Pipe**: readable for markdown-style tables.
///
/// # Examples
///
/// ```rust
/// use toon::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_char(), ',');
/// assert_eq!(Delimiter::Tab.as_char(), '\t');
/// assert_eq!(Delimiter::Pipe.as_char(), '|');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    /// Returns the delimiter character.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }

    /// Recognizes the header-bracket delimiter indicator: a literal TAB or
    /// `|` byte immediately after the length digits. Absence means comma —
    /// callers check that case themselves before falling back here.
    pub(crate) fn from_marker(c: char) -> Option<Delimiter> {
        match c {
            '\t' => Some(Delimiter::Tab),
            '|' => Some(Delimiter::Pipe),
            _ => None,
        }
    }
}

/// Decoder configuration.
///
/// # Examples
///
/// ```rust
/// use toon::DecodeOptions;
///
/// let options = DecodeOptions::new();
/// assert!(options.strict);
/// assert_eq!(options.indent_width, 2);
/// ```
#[derive(Clone, Debug)]
pub struct DecodeOptions {
    /// When `true` (the default), promote advisories — blank lines inside
    /// tables, row-count mismatches, misaligned indentation, tabs in
    /// indentation, trailing spaces, over-indented rows — to hard errors.
    /// When `false`, tolerate them and best-effort parse.
    pub strict: bool,
    /// Spaces per indentation level.
    pub indent_width: usize,
    /// Emits a trace of each production the block parser enters through the
    /// `log` facade (`log::trace!`/`log::debug!`). Advisory only — never
    /// affects the decoded `Value` or whether decoding succeeds.
    pub debug: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            strict: true,
            indent_width: 2,
            debug: false,
        }
    }
}

impl DecodeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub fn indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    #[must_use]
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Encoder configuration.
///
/// # Examples
///
/// ```rust
/// use toon::{EncodeOptions, Delimiter};
///
/// let options = EncodeOptions::new()
///     .delimiter(Delimiter::Pipe)
///     .length_marker(true);
/// ```
#[derive(Clone, Debug)]
pub struct EncodeOptions {
    /// Spaces per indentation level.
    pub indent_width: usize,
    /// The delimiter used in tabular rows and inline arrays.
    pub delimiter: Delimiter,
    /// When `true`, emit `[#N]` instead of `[N]` in headers.
    pub length_marker: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            indent_width: 2,
            delimiter: Delimiter::default(),
            length_marker: false,
        }
    }
}

impl EncodeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    #[must_use]
    pub fn delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn length_marker(mut self, length_marker: bool) -> Self {
        self.length_marker = length_marker;
        self
    }
}
