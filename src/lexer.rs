//! Line lexer / scanner (component A): turns a whole document into a
//! sequence of classified [`Line`]s the block parser consumes.
//!
//! Newlines are normalized (`\r\n` and bare `\r` become `\n`) before
//! splitting. Each line is classified once, eagerly, up front — the parser
//! never re-derives indentation depth or trims a line itself.

use crate::error::{Error, Result};
use crate::options::DecodeOptions;

/// A single classified line of source text.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    /// 1-based line number in the normalized document.
    pub number: usize,
    /// The line as it appeared in the source, leading/trailing whitespace
    /// untouched.
    pub raw: String,
    /// Count of SPACE characters making up the indentation run. Tabs
    /// embedded in that run do not count toward this.
    pub leading_spaces: usize,
    /// `leading_spaces / indent_width`, per [`DecodeOptions::strict`]'s
    /// rounding policy.
    pub depth: usize,
    /// `raw` with the leading-space run removed and trailing spaces
    /// trimmed.
    pub content: String,
    /// Whether `content` is empty.
    pub blank: bool,
}

impl Line {
    /// Whether this line is a comment at mapping/list scope: its first
    /// non-space character is `#`. Not meaningful for table-row content,
    /// where `#` is ordinary data (the block parser only calls this where
    /// the grammar allows comments).
    pub fn is_comment(&self) -> bool {
        self.content.starts_with('#')
    }

    /// A rendering of this line's content truncated for use as decode-error
    /// context, per [`crate::error::CONTEXT_TRUNCATE_LEN`].
    pub fn context(&self) -> &str {
        &self.content
    }
}

/// Sequential cursor over a document's classified lines.
pub struct Scanner {
    lines: Vec<Line>,
    pos: usize,
}

impl Scanner {
    /// Normalizes, splits, and classifies `text` into lines, applying
    /// strict-mode line-level validation as it goes.
    pub fn new(text: &str, options: &DecodeOptions) -> Result<Scanner> {
        if options.indent_width == 0 {
            return Err(Error::custom("indent_width must be a positive integer"));
        }
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let mut lines = Vec::new();
        for (idx, raw) in normalized.split('\n').enumerate() {
            let number = idx + 1;
            let line = classify_line(number, raw, options)?;
            if options.debug {
                log::trace!(
                    "line {}: depth={} blank={} content={:?}",
                    line.number,
                    line.depth,
                    line.blank,
                    line.content
                );
            }
            lines.push(line);
        }
        Ok(Scanner { lines, pos: 0 })
    }

    /// The next line without advancing the cursor.
    pub fn peek(&self) -> Option<&Line> {
        self.lines.get(self.pos)
    }

    /// The line `n` positions ahead of the cursor, without advancing.
    pub fn peek_at(&self, n: usize) -> Option<&Line> {
        self.lines.get(self.pos + n)
    }

    /// Advances past and returns the next line.
    pub fn next(&mut self) -> Option<Line> {
        let line = self.lines.get(self.pos).cloned();
        if line.is_some() {
            self.pos += 1;
        }
        line
    }

    /// All not-yet-consumed lines.
    pub fn remaining(&self) -> &[Line] {
        &self.lines[self.pos..]
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.lines.len()
    }

    /// Skips blank and comment lines, then returns the first remaining
    /// line if it sits at depth 0, erroring if the document is exhausted
    /// first. Used to locate the first significant root-level line.
    pub fn next_nonblank_depth0_or_fail(&mut self) -> Result<Line> {
        loop {
            match self.peek() {
                None => {
                    return Err(Error::parse(
                        self.lines.len() + 1,
                        "",
                        "Unexpected EOF while expecting a root token",
                    ))
                }
                Some(line) if line.blank || line.is_comment() => {
                    self.next();
                }
                Some(_) => {
                    let line = self.next().expect("peeked Some");
                    if line.depth != 0 {
                        return Err(Error::parse(
                            line.number,
                            line.context(),
                            "Unexpected indentation at root",
                        ));
                    }
                    return Ok(line);
                }
            }
        }
    }
}

fn classify_line(number: usize, raw: &str, options: &DecodeOptions) -> Result<Line> {
    let bytes: Vec<char> = raw.chars().collect();
    let mut run_end = 0;
    let mut leading_spaces = 0;
    let mut has_tab_in_run = false;
    while run_end < bytes.len() && (bytes[run_end] == ' ' || bytes[run_end] == '\t') {
        if bytes[run_end] == ' ' {
            leading_spaces += 1;
        } else {
            has_tab_in_run = true;
        }
        run_end += 1;
    }
    let after_indent: String = bytes[run_end..].iter().collect();
    let content = after_indent.trim_end_matches(' ').to_string();

    if options.strict {
        if has_tab_in_run {
            return Err(Error::parse(
                number,
                raw,
                "Tabs are not allowed in indentation",
            ));
        }
        if leading_spaces % options.indent_width != 0 {
            return Err(Error::parse(
                number,
                raw,
                format!(
                    "Indentation must be a multiple of {}",
                    options.indent_width
                ),
            ));
        }
        if !content.is_empty() && raw.ends_with(' ') {
            return Err(Error::parse(
                number,
                raw,
                "Trailing spaces are not allowed",
            ));
        }
    } else if options.debug {
        if has_tab_in_run {
            log::warn!("line {number}: tab in indentation, tolerated (lenient mode)");
        }
        if leading_spaces % options.indent_width != 0 {
            log::warn!("line {number}: indentation not a multiple of indent_width, rounding down");
        }
    }

    let depth = leading_spaces / options.indent_width;
    let blank = content.is_empty();

    Ok(Line {
        number,
        raw: raw.to_string(),
        leading_spaces,
        depth,
        content,
        blank,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> DecodeOptions {
        DecodeOptions::new()
    }

    #[test]
    fn classifies_depth_from_indent_width() {
        let scanner = Scanner::new("a: 1\n  b: 2\n", &opts()).unwrap();
        assert_eq!(scanner.peek().unwrap().depth, 0);
        assert_eq!(scanner.peek_at(1).unwrap().depth, 1);
    }

    #[test]
    fn strict_rejects_tab_indentation() {
        let err = Scanner::new("a:\n\tb: 1\n", &opts()).unwrap_err();
        assert!(err.to_string().contains("Tabs"));
    }

    #[test]
    fn strict_rejects_misaligned_indentation() {
        let err = Scanner::new("a:\n   b: 1\n", &opts()).unwrap_err();
        assert!(err.to_string().contains("multiple of"));
    }

    #[test]
    fn strict_rejects_trailing_spaces() {
        let err = Scanner::new("a: 1 \n", &opts()).unwrap_err();
        assert!(err.to_string().contains("Trailing"));
    }

    #[test]
    fn lenient_tolerates_misaligned_indentation() {
        let scanner = Scanner::new("a:\n   b: 1\n", &opts().strict(false)).unwrap();
        assert_eq!(scanner.peek_at(1).unwrap().depth, 1);
    }

    #[test]
    fn crlf_is_normalized() {
        let scanner = Scanner::new("a: 1\r\nb: 2\r\n", &opts()).unwrap();
        assert_eq!(scanner.remaining().len(), 3);
    }
}
