//! Header recognizer (component D): detects and parses the array-header
//! syntax `key?[#?N<d>?]{fields}?: inline?`.

use crate::error::{Error, Result};
use crate::options::Delimiter;
use crate::splitter::{self, first_unquoted_index};

/// A recognized array-header descriptor.
#[derive(Clone, Debug, PartialEq)]
pub struct Header {
    /// Absent when the array is the document root or a list-item value.
    pub key: Option<String>,
    /// The declared length `N`.
    pub length: usize,
    /// Whether `#` preceded `N` in the bracket.
    pub length_marker: bool,
    /// The active delimiter for this array's rows/fields/inline values.
    pub delimiter: Delimiter,
    /// Present iff the array is tabular.
    pub fields: Option<Vec<String>>,
    /// Present iff the array is inline (non-empty tail after the colon).
    pub inline: Option<String>,
}

/// Decodes a key token (component 4.E.6): a quoted string, or an unquoted
/// token matching `^[A-Za-z_][A-Za-z0-9_.]*$`.
pub fn decode_key(tok: &str, line: usize) -> Result<String> {
    if tok.starts_with('"') {
        return match crate::primitive::parse_primitive(tok) {
            Ok(crate::value::Value::String(s)) => Ok(s),
            _ => Err(Error::parse(line, tok, "Invalid unquoted key")),
        };
    }
    if is_valid_unquoted_key(tok) {
        Ok(tok.to_string())
    } else {
        Err(Error::parse(line, tok, "Invalid unquoted key"))
    }
}

pub(crate) fn is_valid_unquoted_key(tok: &str) -> bool {
    let mut chars = tok.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

impl Header {
    /// Attempts to recognize `content` as a header line. Returns `Ok(None)`
    /// when there is no unquoted `[` at all (definitely not a header —
    /// callers fall back to plain `key: value` handling). Returns `Err`
    /// when an unquoted `[` is present but the rest of the shape is
    /// malformed — once a `[` commits a line to being a header, failure to
    /// parse is a structural error, not a fallback.
    pub fn try_parse(content: &str, line: usize) -> Result<Option<Header>> {
        let bracket_start = match first_unquoted_index(content, '[') {
            Some(idx) => idx,
            None => return Ok(None),
        };

        // A `[` only introduces a header when it precedes the line's first
        // unquoted `:` — otherwise it's just a `[` inside an ordinary value
        // (`x: [1,2,3]`, `desc: see [1]`) and this is a plain key/value line.
        if let Some(colon_idx) = first_unquoted_index(content, ':') {
            if colon_idx < bracket_start {
                return Ok(None);
            }
        }

        let chars: Vec<char> = content.chars().collect();
        let key_part: String = chars[..bracket_start].iter().collect::<String>();
        let key_part = key_part.trim();
        let key = if key_part.is_empty() {
            None
        } else {
            Some(decode_key(key_part, line)?)
        };

        let mut i = bracket_start + 1; // past '['
        let len = chars.len();

        let length_marker = i < len && chars[i] == '#';
        if length_marker {
            i += 1;
        }

        let digit_start = i;
        while i < len && chars[i].is_ascii_digit() {
            i += 1;
        }
        if i == digit_start {
            return Err(Error::parse(line, content, "Invalid array length"));
        }
        let length: usize = chars[digit_start..i]
            .iter()
            .collect::<String>()
            .parse()
            .map_err(|_| Error::parse(line, content, "Invalid array length"))?;

        let mut delimiter = Delimiter::Comma;
        if i < len && chars[i] != ']' {
            match Delimiter::from_marker(chars[i]) {
                Some(d) => {
                    delimiter = d;
                    i += 1;
                }
                None => {
                    return Err(Error::parse(
                        line,
                        content,
                        "Invalid array header (missing [...])",
                    ))
                }
            }
        }

        if i >= len || chars[i] != ']' {
            return Err(Error::parse(
                line,
                content,
                "Invalid array header (missing [...])",
            ));
        }
        i += 1; // past ']'

        let fields = if i < len && chars[i] == '{' {
            let close_rel = first_unquoted_index(&chars[i + 1..].iter().collect::<String>(), '}')
                .ok_or_else(|| {
                    Error::parse(line, content, "Invalid header fields segment")
                })?;
            let inner: String = chars[i + 1..i + 1 + close_rel].iter().collect();
            i = i + 1 + close_rel + 1; // past '}'
            let parts = splitter::split(&inner, delimiter.as_char())
                .map_err(|msg| Error::parse(line, content, msg))?;
            if parts.is_empty() || parts.iter().all(|p| p.trim().is_empty()) {
                return Err(Error::parse(
                    line,
                    content,
                    "Missing fields in tabular header",
                ));
            }
            let mut decoded = Vec::with_capacity(parts.len());
            for part in parts {
                decoded.push(decode_key(part.trim(), line)?);
            }
            Some(decoded)
        } else {
            None
        };

        if i >= len || chars[i] != ':' {
            return Err(Error::parse(line, content, "Missing colon in header"));
        }
        i += 1; // past ':'

        let tail: String = chars[i..].iter().collect::<String>().trim().to_string();

        if fields.is_some() && !tail.is_empty() {
            return Err(Error::parse(line, content, "Invalid header fields segment"));
        }

        let inline = if fields.is_none() && !tail.is_empty() {
            Some(tail)
        } else {
            None
        };

        Ok(Some(Header {
            key,
            length,
            length_marker,
            delimiter,
            fields,
            inline,
        }))
    }

    /// Same as [`Header::try_parse`] but turns "not a header at all" into an
    /// error too — used where the caller already knows the line must be a
    /// header.
    pub fn parse_or_fail(content: &str, line: usize) -> Result<Header> {
        Header::try_parse(content, line)?
            .ok_or_else(|| Error::parse(line, content, "Invalid array header (missing [...])"))
    }
}
