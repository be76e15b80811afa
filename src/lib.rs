//! # toon
//!
//! A line-oriented, indentation-structured data codec, optimized for token
//! efficiency when a document is destined for an LLM prompt.
//!
//! ## What is TOON?
//!
//! TOON (Token-Oriented Object Notation) is a compact, human-readable data
//! format. It achieves a large token reduction versus equivalent JSON while
//! keeping the document readable, by dropping braces, brackets, and most
//! quoting, and by folding homogeneous arrays of objects into tables.
//!
//! ## Key Features
//!
//! - **Token-efficient**: minimal syntax — no unnecessary braces, brackets,
//!   or quotes.
//! - **Tabular arrays**: homogeneous object arrays serialize as compact
//!   tables with a shared header row.
//! - **Serde-compatible**: works with existing Rust types via
//!   `#[derive(Serialize, Deserialize)]`.
//! - **Arbitrary precision**: integers and decimals round-trip exactly via
//!   [`num_bigint::BigInt`] and [`Decimal`], never through a lossy `f64`.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! toon = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Basic Serialization and Deserialization
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use toon::{to_string, from_str};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "Alice".to_string(),
//!     active: true,
//! };
//!
//! let text = to_string(&user).unwrap();
//! // id: 123
//! // name: Alice
//! // active: true
//!
//! let user_back: User = from_str(&text).unwrap();
//! assert_eq!(user, user_back);
//! ```
//!
//! ### Arrays of Homogeneous Objects (Tabular Format)
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use toon::to_string;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Product {
//!     id: u32,
//!     name: String,
//!     price: f64,
//! }
//!
//! let products = vec![
//!     Product { id: 1, name: "Widget".to_string(), price: 9.99 },
//!     Product { id: 2, name: "Gadget".to_string(), price: 14.99 },
//! ];
//!
//! let toon = to_string(&products).unwrap();
//! assert_eq!(toon, "[2]{id,name,price}:\n  1,Widget,9.99\n  2,Gadget,14.99");
//! ```
//!
//! ### Dynamic Values with the `toon!` Macro
//!
//! ```rust
//! use toon::{toon, Value};
//!
//! let data = toon!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["rust", "serde", "llm"]
//! });
//!
//! if let Value::Mapping(map) = data {
//!     assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! }
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code.
//! - All array indexing is bounds-checked.
//! - Errors propagate through `Result`; decoding never panics on malformed
//!   input.
//!
//! ## Format Specification
//!
//! See the [`spec`] module for a description of the wire format this crate
//! implements, and [`decoder`]/[`encoder`] for the implementation of the
//! core decode/encode algorithm independent of `serde`.
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable examples:
//!
//! - **`simple.rs`** — basic serialization and deserialization.
//! - **`macro.rs`** — building values with the `toon!` macro.
//! - **`tabular_arrays.rs`** — TOON's signature feature, homogeneous arrays
//!   as tables.
//! - **`dynamic_values.rs`** — working with [`Value`] dynamically.
//! - **`custom_options.rs`** — customizing delimiters and length markers.
//! - **`token_efficiency.rs`** — TOON vs. JSON size comparison.
//!
//! Run any example with: `cargo run --example <name>`.

pub mod de;
pub mod decimal;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod header;
pub mod lexer;
pub mod macros;
pub mod map;
pub mod options;
pub mod primitive;
pub mod ser;
pub mod spec;
pub mod splitter;
pub mod value;

pub use de::Deserializer;
pub use decimal::Decimal;
pub use error::{Error, Result};
pub use map::ToonMap;
pub use options::{DecodeOptions, Delimiter, EncodeOptions};
pub use ser::{Serializer, ToonValueSerializer};
pub use value::Value;

use serde::{Deserialize, Serialize};
use std::io;

/// Decodes `text` into a dynamic [`Value`] tree under `options`.
///
/// This is the core, `serde`-independent entry point: the line lexer,
/// splitter, primitive parser, header recognizer, and block parser, run
/// end to end.
///
/// # Errors
///
/// Returns [`Error::Parse`] if `text` is not valid TOON under `options`.
///
/// # Examples
///
/// ```rust
/// use toon::{decode, DecodeOptions};
///
/// let value = decode("a: 1\nb: 2", &DecodeOptions::new()).unwrap();
/// assert!(value.is_mapping());
/// ```
pub fn decode(text: &str, options: &DecodeOptions) -> Result<Value> {
    decoder::decode(text, options)
}

/// Encodes a [`Value`] tree to TOON text under `options`.
///
/// # Errors
///
/// Returns [`Error::Encode`] if `value` contains a shape TOON cannot
/// represent (e.g. a list item mapping with more than one key).
///
/// # Examples
///
/// ```rust
/// use toon::{encode, EncodeOptions, Value};
///
/// let value = Value::from(vec![1, 2, 3]);
/// assert_eq!(encode(&value, &EncodeOptions::new()).unwrap(), "[3]: 1,2,3");
/// ```
pub fn encode(value: &Value, options: &EncodeOptions) -> Result<String> {
    encoder::encode(value, options)
}

/// Serializes any `T: Serialize` to a TOON string under the default
/// [`EncodeOptions`].
///
/// # Examples
///
/// ```rust
/// use toon::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// let toon = to_string(&point).unwrap();
/// assert_eq!(toon, "x: 1\ny: 2");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized (e.g. an unsupported
/// type, or a tuple/struct enum variant).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &EncodeOptions::default())
}

/// Serializes any `T: Serialize` to a TOON string with custom
/// [`EncodeOptions`] (delimiter, indentation, length marker).
///
/// # Examples
///
/// ```rust
/// use toon::{to_string_with_options, EncodeOptions, Delimiter};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// let options = EncodeOptions::new().delimiter(Delimiter::Tab).length_marker(true);
/// let toon = to_string_with_options(&point, &options).unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &EncodeOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Serializer::new(options.clone()).to_string(value)
}

/// Converts any `T: Serialize` to a [`Value`].
///
/// Useful for working with TOON data dynamically when the structure isn't
/// known at compile time.
///
/// # Examples
///
/// ```rust
/// use toon::to_value;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// let value = to_value(&point).unwrap();
/// assert!(value.is_mapping());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ToonValueSerializer)
}

/// Serializes any `T: Serialize` to a writer in TOON format.
///
/// # Examples
///
/// ```rust
/// use toon::to_writer;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &point).unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, &EncodeOptions::default())
}

/// Serializes any `T: Serialize` to a writer in TOON format with custom
/// [`EncodeOptions`].
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: &EncodeOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(e.to_string()))?;
    Ok(())
}

/// Deserializes an instance of `T` from a string of TOON text under the
/// default [`DecodeOptions`].
///
/// # Examples
///
/// ```rust
/// use toon::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x: 1\ny: 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if `s` is not valid TOON, or cannot be deserialized to
/// `T`. Parse errors carry the 1-based source line and a truncated
/// rendering of that line.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    from_str_with_options(s, &DecodeOptions::default())
}

/// Deserializes an instance of `T` from a string of TOON text under custom
/// [`DecodeOptions`] (e.g. `strict(false)` to tolerate malformed
/// indentation).
///
/// # Errors
///
/// Returns an error if `s` is not valid TOON under `options`, or cannot be
/// deserialized to `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<'a, T>(s: &'a str, options: &DecodeOptions) -> Result<T>
where
    T: Deserialize<'a>,
{
    let deserializer = Deserializer::from_str_with_options(s, options)?;
    T::deserialize(deserializer)
}

/// Deserializes an instance of `T` from an I/O stream of TOON text.
///
/// # Examples
///
/// ```rust
/// use toon::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let bytes = b"x: 1\ny: 2";
/// let point: Point = from_reader(Cursor::new(bytes)).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading from the reader fails, the input is not
/// valid TOON, or the data cannot be deserialized to `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(e.to_string()))?;
    from_str(&string)
}

/// Deserializes an instance of `T` from bytes of TOON text.
///
/// # Examples
///
/// ```rust
/// use toon::from_slice;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_slice(b"x: 1\ny: 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid TOON, or
/// cannot be deserialized to `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    #[test]
    fn round_trips_a_struct() {
        let point = Point { x: 1, y: 2 };
        let toon = to_string(&point).unwrap();
        let point_back: Point = from_str(&toon).unwrap();
        assert_eq!(point, point_back);
    }

    #[test]
    fn round_trips_a_struct_with_an_array_field() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        let toon = to_string(&user).unwrap();
        let user_back: User = from_str(&toon).unwrap();
        assert_eq!(user, user_back);
    }

    #[test]
    fn to_value_preserves_field_order() {
        let point = Point { x: 1, y: 2 };
        let value = to_value(&point).unwrap();

        match value {
            Value::Mapping(map) => {
                let keys: Vec<_> = map.keys().cloned().collect();
                assert_eq!(keys, vec!["x".to_string(), "y".to_string()]);
                assert_eq!(map.get("x").and_then(Value::as_i64), Some(1));
                assert_eq!(map.get("y").and_then(Value::as_i64), Some(2));
            }
            other => panic!("expected a mapping, got {other:?}"),
        }
    }

    #[test]
    fn round_trips_a_primitive_array() {
        let numbers = vec![1, 2, 3, 4, 5];
        let toon = to_string(&numbers).unwrap();
        let numbers_back: Vec<i32> = from_str(&toon).unwrap();
        assert_eq!(numbers, numbers_back);
    }

    #[test]
    fn round_trips_with_custom_options() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        let options = EncodeOptions::new()
            .delimiter(Delimiter::Tab)
            .length_marker(true);

        let toon = to_string_with_options(&user, &options).unwrap();
        let user_back: User = from_str(&toon).unwrap();
        assert_eq!(user, user_back);
    }

    #[test]
    fn lenient_decode_tolerates_a_malformed_indent() {
        let lenient = DecodeOptions::new().strict(false);
        let value = crate::decode("a: 1\nb: 2", &lenient).unwrap();
        assert!(value.is_mapping());
    }
}
