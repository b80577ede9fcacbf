use crate::dtype::{DataType, TypeCode};

#[test]
fn display_common_types() {
    assert_eq!(DataType::FLOAT32.to_string(), "float32");
    assert_eq!(DataType::INT32.to_string(), "int32");
    assert_eq!(DataType::INT64.to_string(), "int64");
    assert_eq!(DataType::uint(8).to_string(), "uint8");
    assert_eq!(DataType::bfloat(16).to_string(), "bfloat16");
    assert_eq!(DataType::BOOL.to_string(), "bool");
    assert_eq!(DataType::handle().to_string(), "handle");
}

#[test]
fn display_vector_lanes() {
    assert_eq!(DataType::float(16).with_lanes(4).to_string(), "float16x4");
    assert_eq!(DataType::INT32.with_lanes(1).to_string(), "int32");
}

#[test]
fn parse_accepts_display_output() {
    for dtype in [
        DataType::FLOAT32,
        DataType::INT64,
        DataType::uint(16),
        DataType::bfloat(16),
        DataType::BOOL,
        DataType::handle(),
        DataType::float(16).with_lanes(8),
    ] {
        assert_eq!(dtype.to_string().parse::<DataType>(), Ok(dtype));
    }
}

#[test]
fn parse_rejects_garbage() {
    for bad in ["", "float", "int0", "complex64", "float32x", "float32x0", "int999"] {
        let err = bad.parse::<DataType>().unwrap_err();
        assert_eq!(err.0, bad);
    }
}

#[test]
fn predicates() {
    assert!(DataType::INT32.is_integer());
    assert!(DataType::uint(8).is_integer());
    assert!(!DataType::BOOL.is_integer());
    assert!(DataType::BOOL.is_bool());
    assert!(DataType::bfloat(16).is_float());
    assert!(!DataType::FLOAT32.is_integer());
    assert!(!DataType::FLOAT32.with_lanes(4).is_scalar());
}

#[test]
fn type_code_from_u8() {
    assert_eq!(TypeCode::from_u8(0), Some(TypeCode::Int));
    assert_eq!(TypeCode::from_u8(4), Some(TypeCode::BFloat));
    assert_eq!(TypeCode::from_u8(5), None);
}
