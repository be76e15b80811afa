//! Encoder (component G): walks a [`Value`], chooses tabular, inline, or
//! expanded form for each sequence, and emits canonical scalars with the
//! minimum quoting the grammar requires.

use crate::error::{Error, Result};
use crate::header::is_valid_unquoted_key;
use crate::map::ToonMap;
use crate::options::{Delimiter, EncodeOptions};
use crate::value::Value;

/// Encodes `value` into a complete TOON document. The result never ends
/// with a trailing newline.
pub fn encode(value: &Value, options: &EncodeOptions) -> Result<String> {
    let mut out = Vec::new();
    match value {
        Value::Mapping(m) => emit_mapping(m, 0, options, &mut out)?,
        Value::Sequence(items) => emit_sequence(None, items, 0, options, &mut out)?,
        scalar => out.push(render_scalar(scalar)?),
    }
    Ok(out.join("\n"))
}

fn indent(level: usize, options: &EncodeOptions) -> String {
    " ".repeat(level * options.indent_width)
}

/// Mapping emission at `level` (component 4.G.1).
fn emit_mapping(map: &ToonMap, level: usize, options: &EncodeOptions, out: &mut Vec<String>) -> Result<()> {
    for (key, value) in map.iter() {
        match value {
            Value::Sequence(items) => emit_sequence(Some(key), items, level, options, out)?,
            Value::Mapping(nested) => {
                out.push(format!("{}{}:", indent(level, options), render_key(key)));
                emit_mapping(nested, level + 1, options, out)?;
            }
            scalar => {
                out.push(format!(
                    "{}{}: {}",
                    indent(level, options),
                    render_key(key),
                    render_scalar(scalar)?
                ));
            }
        }
    }
    Ok(())
}

/// Sequence homogeneity test (component 4.G.2). Returns the shared key
/// order when `items` is tabular-eligible.
fn tabular_fields(items: &[Value]) -> Option<Vec<String>> {
    if items.is_empty() {
        return None;
    }
    let first_map = items[0].as_mapping()?;
    if first_map.is_empty() {
        return None;
    }
    let order: Vec<String> = first_map.keys().cloned().collect();
    for item in items {
        let m = item.as_mapping()?;
        let keys: Vec<&String> = m.keys().collect();
        if keys.len() != order.len() || keys.into_iter().ne(order.iter()) {
            return None;
        }
    }
    Some(order)
}

fn is_primitive_eligible(items: &[Value]) -> bool {
    items.iter().all(Value::is_scalar)
}

fn header_bracket(length: usize, options: &EncodeOptions) -> String {
    let mut s = String::new();
    if options.length_marker {
        s.push('#');
    }
    s.push_str(&length.to_string());
    match options.delimiter {
        Delimiter::Comma => {}
        Delimiter::Tab => s.push('\t'),
        Delimiter::Pipe => s.push('|'),
    }
    s
}

/// Sequence emission (component 4.G.3). `key` is absent for a root
/// sequence, which has no enclosing mapping entry to hang a key off of —
/// its header is written as bare `[N]...` so it round-trips through the
/// decoder's key-less root-array detection (spec §4.E.1).
fn emit_sequence(
    key: Option<&str>,
    items: &[Value],
    level: usize,
    options: &EncodeOptions,
    out: &mut Vec<String>,
) -> Result<()> {
    let delim = options.delimiter.as_char();
    let rendered_key = key.map(render_key).unwrap_or_default();
    let bracket = header_bracket(items.len(), options);

    if let Some(fields) = tabular_fields(items) {
        let header_fields = fields
            .iter()
            .map(|f| render_key(f))
            .collect::<Vec<_>>()
            .join(&delim.to_string());
        out.push(format!(
            "{}{}[{}]{{{}}}:",
            indent(level, options),
            rendered_key,
            bracket,
            header_fields
        ));
        for item in items {
            let m = item
                .as_mapping()
                .expect("tabular_fields already verified every element is a mapping");
            let mut cells = Vec::with_capacity(fields.len());
            for field in &fields {
                let v = m
                    .get(field)
                    .expect("tabular_fields already verified key order matches");
                cells.push(render_scalar_in_cell(v, delim)?);
            }
            out.push(format!(
                "{}{}",
                indent(level + 1, options),
                cells.join(&delim.to_string())
            ));
        }
        return Ok(());
    }

    if !items.is_empty() && is_primitive_eligible(items) {
        let mut cells = Vec::with_capacity(items.len());
        for item in items {
            cells.push(render_scalar_in_cell(item, delim)?);
        }
        out.push(format!(
            "{}{}[{}]: {}",
            indent(level, options),
            rendered_key,
            bracket,
            cells.join(&delim.to_string())
        ));
        return Ok(());
    }

    out.push(format!("{}{}[{}]:", indent(level, options), rendered_key, bracket));
    for item in items {
        emit_list_item(item, level + 1, options, out)?;
    }
    Ok(())
}

/// Emits one expanded-list item. Only scalar items and single-key mapping
/// items round-trip through [`crate::decoder`]'s list-item grammar, so
/// anything else is an encode error rather than a guess at a layout the
/// decoder couldn't read back.
fn emit_list_item(item: &Value, level: usize, options: &EncodeOptions, out: &mut Vec<String>) -> Result<()> {
    match item {
        Value::Sequence(_) => Err(Error::encode("a list item cannot itself be a sequence")),
        Value::Mapping(m) => {
            if m.len() != 1 {
                return Err(Error::encode(
                    "list item mappings must have exactly one key to round-trip",
                ));
            }
            let (k, v) = m.iter().next().expect("len checked above");
            match v {
                Value::Mapping(nested) => {
                    out.push(format!("{}- {}:", indent(level, options), render_key(k)));
                    emit_mapping(nested, level + 1, options, out)
                }
                Value::Sequence(_) => Err(Error::encode(
                    "a list item's single key cannot hold a sequence",
                )),
                scalar => {
                    out.push(format!(
                        "{}- {}: {}",
                        indent(level, options),
                        render_key(k),
                        render_scalar(scalar)?
                    ));
                    Ok(())
                }
            }
        }
        scalar => {
            out.push(format!("{}- {}", indent(level, options), render_scalar(scalar)?));
            Ok(())
        }
    }
}

fn render_key(key: &str) -> String {
    if is_valid_unquoted_key(key) {
        key.to_string()
    } else {
        escape_string(key)
    }
}

/// Scalar rendering (component 4.G.4), outside a table cell.
fn render_scalar(value: &Value) -> Result<String> {
    match value {
        Value::Null => Ok("null".to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Integer(i) => Ok(i.to_string()),
        Value::Decimal(d) => Ok(d.to_string()),
        Value::String(s) => Ok(render_string_scalar(s, None)),
        other => Err(Error::encode(format!(
            "cannot encode {other:?} in a scalar position"
        ))),
    }
}

/// Scalar rendering inside a table row or inline array, where quoting only
/// needs to guard against the active delimiter rather than the full fixed
/// ambiguity set.
fn render_scalar_in_cell(value: &Value, delim: char) -> Result<String> {
    match value {
        Value::String(s) => Ok(render_string_scalar(s, Some(delim))),
        other => render_scalar(other),
    }
}

fn render_string_scalar(s: &str, cell_delim: Option<char>) -> String {
    let quote = match cell_delim {
        Some(delim) => needs_quoting_in_cell(s, delim),
        None => needs_quoting(s),
    };
    if quote {
        escape_string(s)
    } else {
        s.to_string()
    }
}

fn looks_numeric(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    let mut i = 0;
    if chars.first() == Some(&'-') {
        i += 1;
    }
    let int_start = i;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    if i == int_start {
        return false;
    }
    if i < chars.len() && chars[i] == '.' {
        i += 1;
        let frac_start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        if i == frac_start {
            return false;
        }
    }
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        i += 1;
        if i < chars.len() && (chars[i] == '+' || chars[i] == '-') {
            i += 1;
        }
        let exp_start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == chars.len()
}

/// The full, conservative quoting rule (component 4.G.4) used outside table
/// cells: empty, leading/trailing whitespace, a reserved literal, numeric
/// lexically, a leading `-`, or containing any ambiguous character.
fn needs_quoting(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    let first = s.chars().next().expect("non-empty checked above");
    let last = s.chars().last().expect("non-empty checked above");
    if first.is_whitespace() || last.is_whitespace() {
        return true;
    }
    if matches!(s, "true" | "false" | "null") {
        return true;
    }
    if looks_numeric(s) {
        return true;
    }
    if s.starts_with('-') {
        return true;
    }
    s.chars()
        .any(|c| matches!(c, ':' | '"' | '\\' | '[' | ']' | '{' | '}' | '\t' | '|' | ','))
}

/// The relaxed variant used inside a table cell or inline array element:
/// only the active delimiter (plus the structural characters that are
/// always ambiguous) forces quoting.
fn needs_quoting_in_cell(s: &str, delim: char) -> bool {
    if s.is_empty() {
        return true;
    }
    let first = s.chars().next().expect("non-empty checked above");
    let last = s.chars().last().expect("non-empty checked above");
    if first.is_whitespace() || last.is_whitespace() {
        return true;
    }
    if matches!(s, "true" | "false" | "null") {
        return true;
    }
    if looks_numeric(s) {
        return true;
    }
    if s.starts_with('-') {
        return true;
    }
    s.chars()
        .any(|c| c == ':' || c == '"' || c == '\\' || c == '[' || c == ']' || c == '{' || c == '}' || c == delim)
}

fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::decode;
    use crate::options::DecodeOptions;
    use num_bigint::BigInt;

    fn opts() -> EncodeOptions {
        EncodeOptions::new()
    }

    #[test]
    fn empty_mapping_encodes_to_empty_string() {
        assert_eq!(encode(&Value::Mapping(ToonMap::new()), &opts()).unwrap(), "");
    }

    #[test]
    fn simple_mapping_roundtrips() {
        let mut map = ToonMap::new();
        map.insert("name".to_string(), Value::from("Alice"));
        map.insert("age".to_string(), Value::from(30));
        let value = Value::Mapping(map);
        let text = encode(&value, &opts()).unwrap();
        assert_eq!(text, "name: Alice\nage: 30");
        let decoded = decode(&text, &DecodeOptions::new()).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn nested_mapping_indents() {
        let mut inner = ToonMap::new();
        inner.insert("retries".to_string(), Value::from(3));
        let mut outer = ToonMap::new();
        outer.insert("limits".to_string(), Value::Mapping(inner));
        let text = encode(&Value::Mapping(outer), &opts()).unwrap();
        assert_eq!(text, "limits:\n  retries: 3");
    }

    #[test]
    fn tabular_array_emits_header_and_rows() {
        let mut row1 = ToonMap::new();
        row1.insert("id".to_string(), Value::from(1));
        row1.insert("name".to_string(), Value::from("Alice"));
        let mut row2 = ToonMap::new();
        row2.insert("id".to_string(), Value::from(2));
        row2.insert("name".to_string(), Value::from("Bob"));
        let mut map = ToonMap::new();
        map.insert(
            "users".to_string(),
            Value::Sequence(vec![Value::Mapping(row1), Value::Mapping(row2)]),
        );
        let text = encode(&Value::Mapping(map), &opts()).unwrap();
        assert_eq!(text, "users[2]{id,name}:\n  1,Alice\n  2,Bob");
    }

    #[test]
    fn length_marker_option_emits_hash() {
        let mut map = ToonMap::new();
        map.insert(
            "tags".to_string(),
            Value::Sequence(vec![Value::from("a"), Value::from("b")]),
        );
        let text = encode(&Value::Mapping(map), &opts().length_marker(true)).unwrap();
        assert_eq!(text, "tags[#2]: a,b");
    }

    #[test]
    fn mixed_scalar_sequence_uses_inline_form() {
        let mut map = ToonMap::new();
        map.insert(
            "items".to_string(),
            Value::Sequence(vec![Value::from(1), Value::from("two")]),
        );
        let text = encode(&Value::Mapping(map), &opts()).unwrap();
        assert_eq!(text, "items[2]: 1,two");
    }

    #[test]
    fn non_tabular_object_sequence_expands() {
        let mut a = ToonMap::new();
        a.insert("x".to_string(), Value::from(1));
        let mut b = ToonMap::new();
        b.insert("y".to_string(), Value::from(2));
        let mut map = ToonMap::new();
        map.insert(
            "items".to_string(),
            Value::Sequence(vec![Value::Mapping(a), Value::Mapping(b)]),
        );
        let text = encode(&Value::Mapping(map), &opts()).unwrap();
        assert_eq!(text, "items[2]:\n  - x: 1\n  - y: 2");
    }

    #[test]
    fn string_needing_quote_is_quoted() {
        let mut map = ToonMap::new();
        map.insert("note".to_string(), Value::from("has: colon"));
        let text = encode(&Value::Mapping(map), &opts()).unwrap();
        assert_eq!(text, "note: \"has: colon\"");
    }

    #[test]
    fn numeric_looking_string_is_quoted() {
        let mut map = ToonMap::new();
        map.insert("code".to_string(), Value::from("007"));
        let text = encode(&Value::Mapping(map), &opts()).unwrap();
        assert_eq!(text, "code: \"007\"");
    }

    #[test]
    fn very_small_decimal_has_no_exponent() {
        let value = Value::Decimal(crate::decimal::Decimal::from_parts(false, "0", "000001", 0));
        assert_eq!(render_scalar(&value).unwrap(), "0.000001");
    }

    #[test]
    fn empty_sequence_has_no_trailing_space() {
        let mut map = ToonMap::new();
        map.insert("tags".to_string(), Value::Sequence(vec![]));
        let text = encode(&Value::Mapping(map), &opts()).unwrap();
        assert_eq!(text, "tags[0]:");
        let decoded = decode(&text, &DecodeOptions::new()).unwrap();
        assert!(decoded
            .as_mapping()
            .unwrap()
            .get("tags")
            .unwrap()
            .as_sequence()
            .unwrap()
            .is_empty());
    }

    #[test]
    fn root_sequence_has_no_key_in_its_header() {
        let text = encode(&Value::Sequence(vec![Value::from(1), Value::from(2)]), &opts()).unwrap();
        assert_eq!(text, "[2]: 1,2");
        let decoded = decode(&text, &DecodeOptions::new()).unwrap();
        assert_eq!(decoded, Value::Sequence(vec![Value::from(1), Value::from(2)]));
    }

    #[test]
    fn root_tabular_sequence_round_trips() {
        let mut row = ToonMap::new();
        row.insert("id".to_string(), Value::from(1));
        row.insert("name".to_string(), Value::from("Alice"));
        let value = Value::Sequence(vec![Value::Mapping(row)]);
        let text = encode(&value, &opts()).unwrap();
        assert_eq!(text, "[1]{id,name}:\n  1,Alice");
        let decoded = decode(&text, &DecodeOptions::new()).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn root_scalar_is_one_line() {
        let text = encode(&Value::Integer(BigInt::from(42)), &opts()).unwrap();
        assert_eq!(text, "42");
    }

    #[test]
    fn unquoted_key_stays_bare_quoted_key_gets_quoted() {
        let mut map = ToonMap::new();
        map.insert("plain_key".to_string(), Value::from(1));
        map.insert("has space".to_string(), Value::from(2));
        let text = encode(&Value::Mapping(map), &opts()).unwrap();
        assert_eq!(text, "plain_key: 1\n\"has space\": 2");
    }

    #[test]
    fn multi_key_list_item_mapping_is_an_encode_error() {
        let mut item = ToonMap::new();
        item.insert("a".to_string(), Value::from(1));
        item.insert("b".to_string(), Value::from(2));
        let mut map = ToonMap::new();
        map.insert(
            "items".to_string(),
            Value::Sequence(vec![Value::Mapping(item), Value::from(1)]),
        );
        assert!(encode(&Value::Mapping(map), &opts()).is_err());
    }
}
