#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Type representation and constraint model for a tensor-program IR.
//!
//! This crate provides:
//! - `ty` - the sealed type variant family (tensors, variables, calls, functions, ...)
//! - `kind` - kinds of type variables
//! - `relation` - type relations deferring operator inference to pluggable resolvers
//! - `attrs` - the attribute bag relations carry
//! - `printer` - the debug text format
//! - `visitor` - traversal and functional rewriting
//! - `subst` - identity-keyed substitution for solvers
//! - `builder` - incremental construction with missing-child checks
//!
//! All nodes are immutable and `Send + Sync`; concurrent passes may share them freely.

pub mod attrs;
pub mod builder;
pub mod error;
pub mod kind;
pub mod printer;
pub mod relation;
pub mod subst;
pub mod ty;
pub mod visitor;

#[cfg(test)]
mod attrs_tests;
#[cfg(test)]
mod printer_tests;
#[cfg(test)]
mod subst_tests;

pub use attrs::{AttrValue, Attrs};
pub use builder::{FuncTypeBuilder, RefTypeBuilder, TypeCallBuilder, TypeRelationBuilder};
pub use error::{DimError, Error, Result};
pub use kind::Kind;
pub use printer::TypePrinter;
pub use relation::{RelationOutcome, TypeConstraint, TypeRelation, TypeRelationFn, TypeReporter};
pub use subst::Substitution;
pub use ty::{
    FuncType, GlobalTypeVar, IncompleteType, RefType, TensorType, TupleType, Type, TypeCall,
    TypeNode, TypeTag, TypeVar, VarId,
};
pub use visitor::{TypeFolder, TypeVisitor};

pub use tensorty_core::{Colors, DataType, PrimExpr};
