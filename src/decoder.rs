//! Block parser (component E): the central state machine. Detects the
//! document's root form, then recursively consumes mappings, tabular
//! arrays, inline arrays, and expanded lists using indentation depth as the
//! sole structural signal.

use crate::error::{Error, Result};
use crate::header::{decode_key, Header};
use crate::lexer::{Line, Scanner};
use crate::map::ToonMap;
use crate::options::DecodeOptions;
use crate::primitive::parse_primitive;
use crate::splitter::{self, first_unquoted_index};
use crate::value::Value;

/// Decodes a complete TOON document into a [`Value`].
pub fn decode(text: &str, options: &DecodeOptions) -> Result<Value> {
    let mut scanner = Scanner::new(text, options)?;

    let value = decode_root(&mut scanner, options)?;

    // Trailing-blank lines after the root value are tolerated; any other
    // remaining content is an error (spec §9 Open Questions).
    loop {
        match scanner.peek() {
            None => break,
            Some(line) if line.blank => {
                scanner.next();
            }
            Some(line) => {
                return Err(Error::parse(
                    line.number,
                    line.context(),
                    "Trailing content after root value",
                ));
            }
        }
    }

    Ok(value)
}

fn decode_root(scanner: &mut Scanner, options: &DecodeOptions) -> Result<Value> {
    let significant: Vec<Line> = scanner
        .remaining()
        .iter()
        .filter(|l| l.depth == 0 && !l.blank && !l.is_comment())
        .cloned()
        .collect();

    if significant.is_empty() {
        return Ok(Value::Mapping(ToonMap::new()));
    }

    let first = &significant[0];
    let header_opt = Header::try_parse(&first.content, first.number)?;

    if let Some(header) = &header_opt {
        if header.key.is_none() {
            let header_line = scanner.next_nonblank_depth0_or_fail()?;
            return parse_header_value(header, &header_line, scanner, options);
        }
    }

    let is_root_primitive = significant.len() == 1
        && header_opt.is_none()
        && first_unquoted_index(&first.content, ':').is_none();

    if is_root_primitive {
        let line = scanner.next_nonblank_depth0_or_fail()?;
        return parse_primitive(&line.content)
            .map_err(|msg| Error::parse(line.number, line.context(), msg));
    }

    let map = parse_mapping(scanner, 0, options)?;
    Ok(Value::Mapping(map))
}

/// Mapping parse at `base_indent` (component 4.E.2).
fn parse_mapping(scanner: &mut Scanner, base_indent: usize, options: &DecodeOptions) -> Result<ToonMap> {
    let mut map = ToonMap::new();

    loop {
        let line = match scanner.peek() {
            None => break,
            Some(l) => l.clone(),
        };

        if line.blank || line.is_comment() {
            scanner.next();
            continue;
        }

        if line.depth < base_indent {
            break;
        }

        if line.depth > base_indent {
            if options.strict {
                return Err(Error::parse(
                    line.number,
                    line.context(),
                    format!("Unexpected indentation at line {}", line.number),
                ));
            }
            scanner.next();
            continue;
        }

        if options.debug {
            log::debug!("line {}: mapping entry at depth {}", line.number, base_indent);
        }

        if let Some(tail) = line.content.strip_prefix("-:") {
            scanner.next();
            let value = parse_primitive(tail.trim())
                .map_err(|msg| Error::parse(line.number, line.context(), msg))?;
            map.insert(String::new(), value);
            continue;
        }

        if let Some(header) = Header::try_parse(&line.content, line.number)? {
            scanner.next();
            let key = header.key.clone().ok_or_else(|| {
                Error::parse(
                    line.number,
                    line.context(),
                    "Header at object level must have a key",
                )
            })?;
            let value = parse_header_value(&header, &line, scanner, options)?;
            map.insert(key, value);
            continue;
        }

        if let Some(colon_idx) = first_unquoted_index(&line.content, ':') {
            scanner.next();
            let chars: Vec<char> = line.content.chars().collect();
            let key_tok: String = chars[..colon_idx].iter().collect::<String>();
            let key = decode_key(key_tok.trim(), line.number)?;
            let rhs: String = chars[colon_idx + 1..].iter().collect::<String>();
            let rhs = rhs.trim();
            if rhs.is_empty() {
                let nested = parse_mapping(scanner, base_indent + 1, options)?;
                map.insert(key, Value::Mapping(nested));
            } else {
                let value = parse_primitive(rhs)
                    .map_err(|msg| Error::parse(line.number, line.context(), msg))?;
                map.insert(key, value);
            }
            continue;
        }

        // No handler accepts this line: it does not belong to this mapping.
        break;
    }

    Ok(map)
}

fn parse_header_value(
    header: &Header,
    header_line: &Line,
    scanner: &mut Scanner,
    options: &DecodeOptions,
) -> Result<Value> {
    if options.debug {
        log::debug!(
            "line {}: header key={:?} fields={:?} inline={:?} length={}",
            header_line.number,
            header.key,
            header.fields,
            header.inline,
            header.length
        );
    }
    if let Some(fields) = &header.fields {
        parse_tabular(header, fields, header_line, scanner, options)
    } else if let Some(inline) = &header.inline {
        parse_inline(header, inline, header_line, options)
    } else {
        parse_expanded(header, header_line, scanner, options)
    }
}

/// Tabular array parse (component 4.E.3).
fn parse_tabular(
    header: &Header,
    fields: &[String],
    header_line: &Line,
    scanner: &mut Scanner,
    options: &DecodeOptions,
) -> Result<Value> {
    let row_indent = header_line.depth + 1;
    let delim = header.delimiter.as_char();
    let mut rows: Vec<ToonMap> = Vec::new();

    loop {
        let line = match scanner.peek() {
            None => break,
            Some(l) => l.clone(),
        };

        if line.blank {
            if options.strict && upcoming_row_follows(scanner, row_indent, delim) {
                return Err(Error::parse(
                    line.number,
                    line.context(),
                    "Blank line inside tabular rows is not allowed",
                ));
            }
            scanner.next();
            continue;
        }

        if line.depth < row_indent {
            break;
        }

        if line.depth > row_indent {
            if options.strict {
                return Err(Error::parse(
                    line.number,
                    line.context(),
                    format!("Unexpected indentation at line {}", line.number),
                ));
            }
            scanner.next();
            continue;
        }

        if !is_row_content(&line.content, delim) {
            break;
        }

        scanner.next();
        let parts = splitter::split(&line.content, delim)
            .map_err(|msg| Error::parse(line.number, line.context(), msg))?;

        if options.strict && parts.len() != fields.len() {
            return Err(Error::parse(
                line.number,
                line.context(),
                "Tabular row width mismatch",
            ));
        }

        let mut row = ToonMap::new();
        for (i, field) in fields.iter().enumerate() {
            let cell = parts.get(i).map(|s| s.trim()).unwrap_or("");
            let value = parse_primitive(cell)
                .map_err(|msg| Error::parse(line.number, line.context(), msg))?;
            row.insert(field.clone(), value);
        }
        rows.push(row);

        if options.strict && rows.len() > header.length {
            return Err(Error::parse(
                line.number,
                line.context(),
                "Too many tabular rows",
            ));
        }
    }

    if options.strict && rows.len() != header.length {
        return Err(Error::parse(
            header_line.number,
            header_line.context(),
            format!("Expected {} rows, got {}", header.length, rows.len()),
        ));
    }

    Ok(Value::Sequence(rows.into_iter().map(Value::Mapping).collect()))
}

fn upcoming_row_follows(scanner: &Scanner, row_indent: usize, delim: char) -> bool {
    let mut n = 0;
    loop {
        match scanner.peek_at(n) {
            None => return false,
            Some(line) if line.blank => {
                n += 1;
            }
            Some(line) => {
                return line.depth == row_indent && is_row_content(&line.content, delim);
            }
        }
    }
}

/// Disambiguates a tabular row from a nested key per 4.E.3: an unquoted
/// colon occurring before the first unquoted delimiter means this line is
/// not row data.
fn is_row_content(content: &str, delim: char) -> bool {
    match first_unquoted_index(content, ':') {
        None => true,
        Some(colon_idx) => match first_unquoted_index(content, delim) {
            Some(delim_idx) => colon_idx >= delim_idx,
            None => false,
        },
    }
}

/// Inline array parse (component 4.E.4).
fn parse_inline(
    header: &Header,
    tail: &str,
    header_line: &Line,
    options: &DecodeOptions,
) -> Result<Value> {
    let parts = splitter::split(tail, header.delimiter.as_char())
        .map_err(|msg| Error::parse(header_line.number, header_line.context(), msg))?;

    if options.strict && parts.len() != header.length {
        return Err(Error::parse(
            header_line.number,
            header_line.context(),
            "Inline array length mismatch",
        ));
    }

    let mut values = Vec::with_capacity(parts.len());
    for part in parts {
        let value = parse_primitive(part.trim())
            .map_err(|msg| Error::parse(header_line.number, header_line.context(), msg))?;
        values.push(value);
    }
    Ok(Value::Sequence(values))
}

/// Expanded list parse (component 4.E.5).
fn parse_expanded(
    header: &Header,
    header_line: &Line,
    scanner: &mut Scanner,
    options: &DecodeOptions,
) -> Result<Value> {
    let item_indent = header_line.depth + 1;
    let mut items = Vec::new();

    loop {
        let line = match scanner.peek() {
            None => break,
            Some(l) => l.clone(),
        };

        if line.blank {
            if options.strict {
                return Err(Error::parse(
                    line.number,
                    line.context(),
                    "Expected list item starting with '-'",
                ));
            }
            scanner.next();
            continue;
        }

        if line.depth < item_indent {
            break;
        }

        if line.depth > item_indent {
            if options.strict {
                return Err(Error::parse(
                    line.number,
                    line.context(),
                    format!("Unexpected indentation at line {}", line.number),
                ));
            }
            scanner.next();
            continue;
        }

        if line.content != "-" && !line.content.starts_with("- ") {
            break;
        }

        scanner.next();
        let body = if line.content == "-" {
            ""
        } else {
            line.content[2..].trim_start()
        };

        let looks_like_mapping =
            body.starts_with('[') || body.starts_with('{') || first_unquoted_index(body, ':').is_some();

        if looks_like_mapping {
            if options.strict {
                return Err(Error::parse(
                    line.number,
                    line.context(),
                    "List item maps are not supported in strict mode",
                ));
            }
            let item = parse_list_item_mapping(body, &line, item_indent, scanner, options)?;
            items.push(item);
        } else {
            let value = parse_primitive(body)
                .map_err(|msg| Error::parse(line.number, line.context(), msg))?;
            items.push(value);
        }
    }

    if options.strict && items.len() != header.length {
        return Err(Error::parse(
            header_line.number,
            header_line.context(),
            "List array item count mismatch",
        ));
    }

    Ok(Value::Sequence(items))
}

fn parse_list_item_mapping(
    body: &str,
    line: &Line,
    item_indent: usize,
    scanner: &mut Scanner,
    options: &DecodeOptions,
) -> Result<Value> {
    match first_unquoted_index(body, ':') {
        Some(colon_idx) => {
            let chars: Vec<char> = body.chars().collect();
            let key_tok: String = chars[..colon_idx].iter().collect::<String>();
            let key = decode_key(key_tok.trim(), line.number)?;
            let rhs: String = chars[colon_idx + 1..].iter().collect::<String>();
            let rhs = rhs.trim();
            let mut map = ToonMap::new();
            if rhs.is_empty() {
                let nested = parse_mapping(scanner, item_indent + 1, options)?;
                map.insert(key, Value::Mapping(nested));
            } else {
                let value = parse_primitive(rhs)
                    .map_err(|msg| Error::parse(line.number, line.context(), msg))?;
                map.insert(key, value);
            }
            Ok(Value::Mapping(map))
        }
        None => parse_primitive(body).map_err(|msg| Error::parse(line.number, line.context(), msg)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> DecodeOptions {
        DecodeOptions::new()
    }

    #[test]
    fn empty_document_is_empty_mapping() {
        let v = decode("", &opts()).unwrap();
        assert_eq!(v, Value::Mapping(ToonMap::new()));
    }

    #[test]
    fn root_primitive() {
        let v = decode("42", &opts()).unwrap();
        assert_eq!(v.as_i64(), Some(42));
    }

    #[test]
    fn simple_mapping() {
        let v = decode("name: Alice\nage: 30", &opts()).unwrap();
        let m = v.as_mapping().unwrap();
        assert_eq!(m.get("name").unwrap().as_str(), Some("Alice"));
        assert_eq!(m.get("age").unwrap().as_i64(), Some(30));
    }

    #[test]
    fn nested_mapping_via_empty_rhs() {
        let text = "config:\n  title: \"My App\"\n  debug: true\n  limits:\n    retries: 3\n    timeout: 5.5";
        let v = decode(text, &opts()).unwrap();
        let config = v.as_mapping().unwrap().get("config").unwrap().as_mapping().unwrap();
        assert_eq!(config.get("title").unwrap().as_str(), Some("My App"));
        assert_eq!(config.get("debug").unwrap().as_bool(), Some(true));
        let limits = config.get("limits").unwrap().as_mapping().unwrap();
        assert_eq!(limits.get("retries").unwrap().as_i64(), Some(3));
    }

    #[test]
    fn tabular_decode_with_length_marker() {
        let text = "users[#2]{id,name,role}:\n  1,Alice,admin\n  2,Bob,user";
        let v = decode(text, &opts()).unwrap();
        let users = v.as_mapping().unwrap().get("users").unwrap().as_sequence().unwrap();
        assert_eq!(users.len(), 2);
        let first = users[0].as_mapping().unwrap();
        assert_eq!(first.get("id").unwrap().as_i64(), Some(1));
        assert_eq!(first.get("name").unwrap().as_str(), Some("Alice"));
    }

    #[test]
    fn strict_row_count_mismatch() {
        let text = "users[#3]{id,name,role}:\n  1,Alice,admin\n  2,Bob,user";
        let err = decode(text, &opts()).unwrap_err();
        assert!(err.to_string().contains("Expected"));
    }

    #[test]
    fn strict_rejects_tabs_in_indentation() {
        let text = "users[#1]{id}:\n\t1";
        let err = decode(text, &opts()).unwrap_err();
        assert!(err.to_string().to_lowercase().contains("tab"));
    }

    #[test]
    fn inline_primitive_array_at_mapping_level() {
        let v = decode("tags[3]: red,green,blue", &opts()).unwrap();
        let tags = v.as_mapping().unwrap().get("tags").unwrap().as_sequence().unwrap();
        assert_eq!(tags.len(), 3);
        assert_eq!(tags[0].as_str(), Some("red"));
    }

    #[test]
    fn blank_line_inside_table_strict_errors() {
        let text = "users[#2]{id,name,role}:\n  1,Alice,admin\n\n  2,Bob,user";
        let err = decode(text, &opts()).unwrap_err();
        assert!(err.to_string().to_lowercase().contains("blank"));
    }

    #[test]
    fn blank_line_inside_table_lenient_ok() {
        let text = "users[#2]{id,name,role}:\n  1,Alice,admin\n\n  2,Bob,user";
        let v = decode(text, &opts().strict(false)).unwrap();
        let users = v.as_mapping().unwrap().get("users").unwrap().as_sequence().unwrap();
        assert_eq!(users.len(), 2);
    }

    #[test]
    fn leading_zero_integer_is_string() {
        let v = decode("id: 05", &opts()).unwrap();
        assert_eq!(
            v.as_mapping().unwrap().get("id").unwrap().as_str(),
            Some("05")
        );
    }

    #[test]
    fn trailing_content_after_root_value_errors() {
        let text = "a: 1\nb: 2\n- not part of anything";
        assert!(decode(text, &opts()).is_err());
    }

    #[test]
    fn bracket_inside_a_plain_value_is_not_mistaken_for_a_header() {
        let v = decode("x: [1,2,3]", &opts()).unwrap();
        assert_eq!(v.as_mapping().unwrap().get("x").unwrap().as_str(), Some("[1,2,3]"));

        let v = decode("desc: see [1]", &opts()).unwrap();
        assert_eq!(
            v.as_mapping().unwrap().get("desc").unwrap().as_str(),
            Some("see [1]")
        );
    }
}
