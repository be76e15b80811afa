//! TOON format specification, as implemented by this crate.
//!
//! # Overview
//!
//! TOON (Token-Oriented Object Notation) is a minimalist data serialization
//! format designed for efficient token usage in LLM-prompt contexts. It
//! achieves a large token reduction compared to JSON while keeping the
//! document readable and structurally unambiguous.
//!
//! ## Design Philosophy
//!
//! - **Token efficiency**: no unnecessary braces, brackets, or quotes.
//! - **Readability**: structure is carried by indentation, not punctuation.
//! - **Structural typing**: homogeneous arrays of objects fold into tables.
//! - **Exactness**: integers and decimals round-trip exactly; field order
//!   is always preserved, never sorted.
//!
//! # Core Syntax
//!
//! ## Mappings
//!
//! Mappings are newline-delimited `key: value` pairs:
//!
//! ```text
//! name: Alice
//! age: 30
//! active: true
//! ```
//!
//! - Keys must match `^[A-Za-z_][A-Za-z0-9_.]*$`, or be double-quoted.
//! - A space after `:` is conventional but not required.
//! - Nested mappings are indented (default 2 spaces per level).
//! - **Field order is preserved as inserted**, never sorted. A sequence of
//!   mappings is tabular-eligible only when every element has the same key
//!   set in the same order.
//! - Duplicate keys within one mapping: the last occurrence wins.
//!
//! ## Primitives
//!
//! | Type | Syntax | Example |
//! |------|--------|---------|
//! | Null | `null` (encode), `null` or `~` (decode) | `value: null` |
//! | Boolean | `true` or `false` | `active: true` |
//! | Integer | Arbitrary-precision, optional `-` | `large: 999999999999999999999` |
//! | Decimal | Arbitrary-precision, `.` and/or exponent | `price: 19.99` |
//! | String | Unquoted or `"quoted"` | `name: Alice` |
//!
//! Integers decode to [`num_bigint::BigInt`](crate::Value::Integer) and
//! decimals to [`Decimal`](crate::decimal::Decimal) — both arbitrary
//! precision, so a document never loses digits passing through this crate.
//! There is no `Date` type and no `Infinity`/`-Infinity`/`NaN` literal:
//! those are JavaScript-originated conveniences with no equivalent in
//! Rust's type system, and a bare token spelled `Infinity` or `NaN`
//! decodes as an ordinary (quoted-on-encode) string.
//!
//! ## Strings
//!
//! Strings are unquoted by default. Quoting (with `"`) is required when a
//! token would otherwise be ambiguous:
//!
//! - Empty, or containing only whitespace.
//! - Contains the active delimiter, a colon, a quote, or a backslash.
//! - Starts or ends with whitespace.
//! - Equals a reserved word: `true`, `false`, `null`.
//! - Would parse as a number.
//! - Starts with `-` followed by a space (looks like a list-item marker),
//!   or is exactly `-`.
//! - Looks like a structural token: starts with `[` or `{`.
//!
//! **Escape sequences** (quoted strings only — exactly five, no others):
//!
//! ```text
//! \"  quote
//! \\  backslash
//! \n  newline
//! \r  carriage return
//! \t  tab
//! ```
//!
//! # Array Formats
//!
//! TOON chooses one of three shapes for each array, in this preference
//! order: tabular, then inline, then expanded.
//!
//! ## Tabular arrays
//!
//! For non-empty arrays of mappings that all share the same keys in the
//! same order, with every value a scalar (TOON's signature feature):
//!
//! ```text
//! [3]{id,name,price}:
//!   1,Widget,9.99
//!   2,Gadget,14.99
//!   3,Tool,19.99
//! ```
//!
//! `[N]{field1,field2,...}:` followed by one indented row per element, in
//! the mappings' own field order (never sorted).
//!
//! ## Inline arrays
//!
//! For arrays of scalars:
//!
//! ```text
//! [3]: 1,2,3
//! [2]: Alice,Bob
//! [4]: true,false,null,42
//! ```
//!
//! `[N]: element1,element2,...` on a single line.
//!
//! ## Expanded (list) arrays
//!
//! For anything else — heterogeneous elements, nested arrays, or mappings
//! that aren't uniform enough to tabulate:
//!
//! ```text
//! [2]:
//!   - name: Alice
//!     role: admin
//!   - name: Bob
//!     role: user
//! ```
//!
//! `[N]:` followed by indented items, each starting with `- `. A mapping
//! item's first field shares the line with the `-`; subsequent fields
//! align two columns past it. In strict mode a list item may itself be a
//! mapping only if that mapping has exactly one key (anything else is a
//! parse error); non-strict decoding relaxes this.
//!
//! # Delimiters
//!
//! | Delimiter | Character | Header marker |
//! |-----------|-----------|----------------|
//! | Comma (default) | `,` | none |
//! | Tab | a literal tab byte | a literal tab byte in place of the comma |
//! | Pipe | `\|` | `\|` |
//!
//! A non-comma delimiter is written once, inside the array's `[...]`
//! bracket, and then implicitly applies to every row/inline value/header
//! field of that array:
//!
//! ```text
//! [3|]: 1|2|3
//! [3]{a|b|c}:
//!   1|2|3
//! ```
//!
//! # Length Markers
//!
//! An optional `#` just before the length, requested with
//! [`EncodeOptions::length_marker`](crate::EncodeOptions::length_marker):
//!
//! ```text
//! [#3]: 1,2,3
//! ```
//!
//! # Indentation
//!
//! Default 2 spaces per level, configurable via
//! [`DecodeOptions::indent_width`](crate::DecodeOptions::indent_width) /
//! [`EncodeOptions::indent_width`](crate::EncodeOptions::indent_width).
//! Indentation depth is the sole structural signal the decoder uses to
//! find the end of a nested block — there are no closing delimiters.
//! Trailing blank lines at the end of a document are tolerated.
//!
//! # Edge Cases
//!
//! ```text
//! empty_array: [0]:
//! empty_object:
//! ```
//!
//! A root-level empty array encodes as `[0]:` on its own.
//!
//! # Rust Enum Mapping
//!
//! This crate's `serde` integration (see [`crate::ser`] / [`crate::de`])
//! maps Rust enums as follows:
//!
//! - Unit variants serialize to a bare string: `status: Active`.
//! - Newtype and tuple/struct variant *payloads* serialize as a single-key
//!   mapping: `status: { Errored: "disk full" }` renders as
//!   `status:\n  Errored: disk full`.
//! - Tuple variants and struct variants with more than one field are not
//!   supported and are rejected at encode time; TOON's tabular/inline
//!   array grammar has no slot for a variant's discriminant alongside its
//!   fields.
//!
//! These are Rust-specific serde conventions, not part of the format
//! itself.
