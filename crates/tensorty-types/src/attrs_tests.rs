use indoc::indoc;
use tensorty_core::DataType;

use crate::attrs::{AttrValue, Attrs};

#[test]
fn with_returns_new_bag() {
    let empty = Attrs::new();
    let one = empty.with("axis", 0i64);

    assert!(empty.is_empty());
    assert_eq!(one.len(), 1);
    assert_eq!(one.get("axis"), Some(&AttrValue::Int(0)));
    assert_eq!(one.get("missing"), None);
}

#[test]
fn with_overwrites_in_place() {
    let attrs = Attrs::new()
        .with("a", 1i64)
        .with("b", 2i64)
        .with("a", 3i64);

    let entries: Vec<_> = attrs.iter().map(|(k, v)| (k, v.clone())).collect();
    assert_eq!(
        entries,
        vec![("a", AttrValue::Int(3)), ("b", AttrValue::Int(2))]
    );
}

#[test]
fn equality_is_order_sensitive() {
    let ab = Attrs::new().with("a", 1i64).with("b", 2i64);
    let ba = Attrs::new().with("b", 2i64).with("a", 1i64);
    let ab2 = Attrs::new().with("a", 1i64).with("b", 2i64);

    assert_eq!(ab, ab2);
    assert_ne!(ab, ba);
}

#[test]
fn from_json() {
    let json = indoc! {r#"
    {
        "axis": 1,
        "keepdims": false,
        "eps": 0.5,
        "layout": "NCHW",
        "strides": [1, 2]
    }
    "#};

    let attrs = Attrs::from_json(json).unwrap();

    insta::assert_snapshot!(attrs, @r#"{axis: 1, keepdims: false, eps: 0.5, layout: "NCHW", strides: [1, 2]}"#);
    assert_eq!(attrs.get("layout"), Some(&AttrValue::Str("NCHW".into())));
}

#[test]
fn from_json_rejects_nested() {
    assert!(Attrs::from_json(r#"{"nested": {"a": 1}}"#).is_err());
    assert!(Attrs::from_json("[1, 2]").is_err());
    assert!(Attrs::from_json(r#"{"floats": [0.5]}"#).is_err());
}

#[test]
fn dtype_values() {
    let attrs = Attrs::new().with("out_dtype", DataType::INT64);
    assert_eq!(attrs.to_string(), "{out_dtype: int64}");
    assert_eq!(
        attrs.get("out_dtype"),
        Some(&AttrValue::DataType(DataType::INT64))
    );
}

#[test]
fn float_values_compare_by_bits() {
    assert_eq!(AttrValue::Float(f64::NAN), AttrValue::Float(f64::NAN));
    assert_ne!(AttrValue::Float(0.0), AttrValue::Float(-0.0));
}
