use crate::DataType;
use crate::colors::{Colors, Role};

#[test]
fn default_is_off() {
    assert_eq!(Colors::default(), Colors::OFF);
    assert!(!Colors::default().is_enabled());
}

#[test]
fn new_selects_palette() {
    assert_eq!(Colors::new(true), Colors::ON);
    assert_eq!(Colors::new(false), Colors::OFF);
    assert!(Colors::ON.is_enabled());
}

#[test]
fn off_leaves_text_bare() {
    for role in [Role::Node, Role::DType, Role::Identity] {
        assert_eq!(Colors::OFF.paint(role, "x").to_string(), "x");
    }
}

#[test]
fn each_role_has_its_own_escape() {
    let c = Colors::ON;
    assert_eq!(c.paint(Role::Node, "Any").to_string(), "\x1b[34mAny\x1b[0m");
    assert_eq!(
        c.paint(Role::DType, DataType::FLOAT32).to_string(),
        "\x1b[32mfloat32\x1b[0m"
    );
    assert_eq!(c.paint(Role::Identity, "?3").to_string(), "\x1b[2m?3\x1b[0m");
}
