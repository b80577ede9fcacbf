#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Leaf data consumed by the tensorty type layer.
//!
//! - `dtype` - element data types (`float32`, `int64`, ...)
//! - `shape` - symbolic shape expressions used as tensor dimensions
//! - `colors` - role-based terminal coloring for human-readable dumps

pub mod colors;
pub mod dtype;
pub mod shape;

#[cfg(test)]
mod colors_tests;
#[cfg(test)]
mod dtype_tests;

pub use colors::{Colors, Painted, Role};
pub use dtype::{DataType, ParseDataTypeError, TypeCode};
pub use shape::{PrimExpr, PrimExprNode, ShapeVar};
