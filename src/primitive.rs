//! Primitive-token parser (component C): converts a single, already
//! whitespace-trimmed token into a scalar [`Value`].

use crate::decimal::Decimal;
use crate::value::Value;
use num_bigint::BigInt;

/// Parses `token` (already trimmed of surrounding spaces) per the canonical
/// primitive rules: empty string, quoted string, boolean/null literals,
/// numeric literals (with the leading-zero-as-string rule), falling back to
/// an unquoted string.
///
/// Returns a plain description on failure; callers attach source line and
/// context to build a full [`crate::Error`].
pub fn parse_primitive(token: &str) -> Result<Value, String> {
    if token.is_empty() {
        return Ok(Value::String(String::new()));
    }

    if let Some(stripped) = token.strip_prefix('"') {
        return parse_quoted(stripped);
    }

    match token {
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        "null" | "~" => return Ok(Value::Null),
        _ => {}
    }

    if let Some(numeric) = try_parse_numeric(token) {
        return Ok(numeric);
    }

    Ok(Value::String(token.to_string()))
}

fn parse_quoted(after_open_quote: &str) -> Result<Value, String> {
    if !after_open_quote.ends_with('"') {
        return Err("Unterminated string".to_string());
    }
    let inner = &after_open_quote[..after_open_quote.len() - 1];
    unescape(inner).map(Value::String)
}

fn unescape(inner: &str) -> Result<String, String> {
    let chars: Vec<char> = inner.chars().collect();
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '\\' {
            if i + 1 >= chars.len() {
                return Err("Unterminated escape".to_string());
            }
            let escaped = match chars[i + 1] {
                '\\' => '\\',
                '"' => '"',
                'n' => '\n',
                'r' => '\r',
                't' => '\t',
                other => return Err(format!("Invalid escape sequence: \\{other}")),
            };
            out.push(escaped);
            i += 2;
        } else {
            out.push(c);
            i += 1;
        }
    }
    Ok(out)
}

/// Matches `^-?\d+(\.\d+)?([eE][+\-]?\d+)?$` against the whole token and
/// applies the leading-zero-as-string and numeric-type-selection rules.
fn try_parse_numeric(token: &str) -> Option<Value> {
    let chars: Vec<char> = token.chars().collect();
    let mut i = 0;
    let negative = chars.first() == Some(&'-');
    if negative {
        i += 1;
    }

    let int_start = i;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    if i == int_start {
        return None; // no integer part at all: not numeric
    }
    let int_digits: String = chars[int_start..i].iter().collect();

    let mut frac_digits = String::new();
    if i < chars.len() && chars[i] == '.' {
        let save = i;
        i += 1;
        let frac_start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        if i == frac_start {
            i = save; // '.' not followed by a digit: not part of the number
        } else {
            frac_digits = chars[frac_start..i].iter().collect();
        }
    }

    let mut exponent: i64 = 0;
    let mut has_exponent = false;
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        let save = i;
        i += 1;
        let exp_negative = i < chars.len() && (chars[i] == '+' || chars[i] == '-');
        let exp_sign_negative = i < chars.len() && chars[i] == '-';
        if exp_negative {
            i += 1;
        }
        let exp_start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            i = save; // 'e' not followed by digits: not part of the number
        } else {
            let digits: String = chars[exp_start..i].iter().collect();
            let magnitude: i64 = digits.parse().ok()?;
            exponent = if exp_sign_negative { -magnitude } else { magnitude };
            has_exponent = true;
        }
    }

    if i != chars.len() {
        return None; // trailing garbage: not a clean numeric match
    }

    // Leading-zero rule: "05", "-00123" stay strings, but "0" and "0.5" do not.
    if int_digits.len() > 1 && int_digits.starts_with('0') {
        return None;
    }

    if frac_digits.is_empty() && !has_exponent {
        let mut text = String::new();
        if negative {
            text.push('-');
        }
        text.push_str(&int_digits);
        let big: BigInt = text.parse().ok()?;
        Some(Value::Integer(big))
    } else {
        Some(Value::Decimal(Decimal::from_parts(
            negative,
            &int_digits,
            &frac_digits,
            exponent,
        )))
    }
}
