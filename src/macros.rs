//! The [`toon!`] macro for building [`crate::Value`] trees inline, in the
//! same spirit as `serde_json::json!`.

/// Builds a [`crate::Value`] from JSON-like literal syntax.
///
/// # Examples
///
/// ```rust
/// use toon::{toon, Value};
///
/// let value = toon!({
///     "name": "Alice",
///     "age": 30,
///     "tags": ["rust", "serde"]
/// });
///
/// assert!(value.is_mapping());
/// ```
#[macro_export]
macro_rules! toon {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Sequence(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Sequence(vec![$($crate::toon!($elem)),*])
    };

    ({}) => {
        $crate::Value::Mapping($crate::ToonMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut map = $crate::ToonMap::new();
        $(
            map.insert($key.to_string(), $crate::toon!($value));
        )*
        $crate::Value::Mapping(map)
    }};

    // Fallback: any other expression goes through `to_value`.
    ($other:expr) => {
        $crate::to_value(&$other).unwrap_or($crate::Value::Null)
    };
}
