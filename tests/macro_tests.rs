use num_bigint::BigInt;
use toon::{to_string, toon, ToonMap, Value};

#[test]
fn test_toon_macro_null() {
    let value = toon!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_toon_macro_booleans() {
    let true_val = toon!(true);
    assert_eq!(true_val, Value::Bool(true));

    let false_val = toon!(false);
    assert_eq!(false_val, Value::Bool(false));
}

#[test]
fn test_toon_macro_numbers() {
    let int_val = toon!(42);
    assert_eq!(int_val, Value::Integer(BigInt::from(42)));

    let float_val = toon!(3.5);
    assert!(float_val.is_decimal());

    let negative_val = toon!(-123);
    assert_eq!(negative_val, Value::Integer(BigInt::from(-123)));
}

#[test]
fn test_toon_macro_strings() {
    let string_val = toon!("hello world");
    assert_eq!(string_val, Value::String("hello world".to_string()));

    let empty_string = toon!("");
    assert_eq!(empty_string, Value::String("".to_string()));
}

#[test]
fn test_toon_macro_arrays() {
    let empty_array = toon!([]);
    assert_eq!(empty_array, Value::Sequence(vec![]));

    let number_array = toon!([1, 2, 3]);
    assert_eq!(
        number_array,
        Value::Sequence(vec![
            Value::Integer(BigInt::from(1)),
            Value::Integer(BigInt::from(2)),
            Value::Integer(BigInt::from(3)),
        ])
    );

    let mixed_array = toon!([1, "hello", true, null]);
    assert_eq!(
        mixed_array,
        Value::Sequence(vec![
            Value::Integer(BigInt::from(1)),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_toon_macro_objects() {
    let empty_object = toon!({});
    assert_eq!(empty_object, Value::Mapping(ToonMap::new()));

    let simple_object = toon!({
        "name": "Alice",
        "age": 30
    });

    match simple_object {
        Value::Mapping(ref obj) => {
            assert_eq!(obj.len(), 2);
            assert_eq!(obj.get("name"), Some(&Value::String("Alice".to_string())));
            assert_eq!(obj.get("age"), Some(&Value::Integer(BigInt::from(30))));
        }
        other => panic!("Expected a mapping, got {other:?}"),
    }
}

#[test]
fn test_toon_macro_nested() {
    let nested = toon!({
        "user": {
            "id": 123,
            "name": "Bob",
            "active": true
        },
        "tags": ["admin", "developer"],
        "count": 42
    });

    match nested {
        Value::Mapping(ref obj) => {
            assert_eq!(obj.len(), 3);

            if let Some(Value::Mapping(user)) = obj.get("user") {
                assert_eq!(user.get("id"), Some(&Value::Integer(BigInt::from(123))));
                assert_eq!(user.get("name"), Some(&Value::String("Bob".to_string())));
                assert_eq!(user.get("active"), Some(&Value::Bool(true)));
            } else {
                panic!("Expected user to be a mapping");
            }

            if let Some(Value::Sequence(tags)) = obj.get("tags") {
                assert_eq!(tags.len(), 2);
                assert_eq!(tags[0], Value::String("admin".to_string()));
                assert_eq!(tags[1], Value::String("developer".to_string()));
            } else {
                panic!("Expected tags to be a sequence");
            }

            assert_eq!(obj.get("count"), Some(&Value::Integer(BigInt::from(42))));
        }
        other => panic!("Expected a mapping, got {other:?}"),
    }
}

#[test]
fn test_toon_value_methods() {
    let null_val = toon!(null);
    assert!(null_val.is_null());
    assert!(!null_val.is_bool());
    assert!(!null_val.is_number());
    assert!(!null_val.is_string());
    assert!(!null_val.is_sequence());
    assert!(!null_val.is_mapping());

    let bool_val = toon!(true);
    assert!(bool_val.is_bool());
    assert_eq!(bool_val.as_bool(), Some(true));

    let str_val = toon!("hello");
    assert!(str_val.is_string());
    assert_eq!(str_val.as_str(), Some("hello"));

    let array_val = toon!([1, 2, 3]);
    assert!(array_val.is_sequence());
    assert_eq!(array_val.as_sequence().unwrap().len(), 3);

    let obj_val = toon!({"key": "value"});
    assert!(obj_val.is_mapping());
    assert_eq!(obj_val.as_mapping().unwrap().len(), 1);
}

#[test]
fn test_string_quoting_needs() {
    // Quoting decisions live in the encoder, not on `Value` itself — drive
    // them through `to_string` and check the rendered token.
    assert_eq!(to_string(&Value::from("hello")).unwrap(), "hello");
    assert_eq!(to_string(&Value::from("hello,world")).unwrap(), "\"hello,world\"");
    assert_eq!(to_string(&Value::from("key:value")).unwrap(), "\"key:value\"");
    assert_eq!(to_string(&Value::from("")).unwrap(), "\"\"");
    assert_eq!(to_string(&Value::from("true")).unwrap(), "\"true\"");
    assert_eq!(to_string(&Value::from("123")).unwrap(), "\"123\"");
}
