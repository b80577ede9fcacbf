//! Builders for front-ends that discover children one at a time.
//!
//! `build()` checks that every required child was supplied and fails with
//! `Error::NullChild` otherwise. Nothing is constructed on failure.

use crate::attrs::Attrs;
use crate::error::{Error, Result};
use crate::relation::{TypeConstraint, TypeRelation, TypeRelationFn};
use crate::ty::{FuncType, RefType, Type, TypeCall, TypeVar};

fn require<T>(child: Option<T>, node: &'static str, field: &'static str) -> Result<T> {
    child.ok_or_else(|| {
        tracing::debug!(node, field, "missing required child");
        Error::NullChild { node, field }
    })
}

#[derive(Clone, Debug, Default)]
pub struct FuncTypeBuilder {
    arg_types: Vec<Type>,
    ret_type: Option<Type>,
    type_params: Vec<TypeVar>,
    type_constraints: Vec<TypeConstraint>,
}

impl FuncTypeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg(mut self, ty: Type) -> Self {
        self.arg_types.push(ty);
        self
    }

    pub fn args(mut self, types: impl IntoIterator<Item = Type>) -> Self {
        self.arg_types.extend(types);
        self
    }

    pub fn ret(mut self, ty: Type) -> Self {
        self.ret_type = Some(ty);
        self
    }

    pub fn type_param(mut self, var: TypeVar) -> Self {
        self.type_params.push(var);
        self
    }

    pub fn constraint(mut self, rel: TypeConstraint) -> Self {
        self.type_constraints.push(rel);
        self
    }

    pub fn build(self) -> Result<FuncType> {
        let ret_type = require(self.ret_type, "FuncType", "ret_type")?;
        Ok(FuncType::new(
            self.arg_types,
            ret_type,
            self.type_params,
            self.type_constraints,
        ))
    }
}

#[derive(Clone, Debug, Default)]
pub struct TypeCallBuilder {
    func: Option<Type>,
    args: Vec<Type>,
}

impl TypeCallBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn func(mut self, func: Type) -> Self {
        self.func = Some(func);
        self
    }

    pub fn arg(mut self, ty: Type) -> Self {
        self.args.push(ty);
        self
    }

    pub fn build(self) -> Result<TypeCall> {
        let func = require(self.func, "TypeCall", "func")?;
        Ok(TypeCall::new(func, self.args))
    }
}

#[derive(Clone, Debug, Default)]
pub struct RefTypeBuilder {
    value: Option<Type>,
}

impl RefTypeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, ty: Type) -> Self {
        self.value = Some(ty);
        self
    }

    pub fn build(self) -> Result<RefType> {
        let value = require(self.value, "RefType", "value")?;
        Ok(RefType::new(value))
    }
}

/// When `num_inputs` is never set, every argument but the last is an input.
#[derive(Clone, Debug, Default)]
pub struct TypeRelationBuilder {
    func: Option<TypeRelationFn>,
    args: Vec<Type>,
    num_inputs: Option<i64>,
    attrs: Attrs,
}

impl TypeRelationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn func(mut self, func: TypeRelationFn) -> Self {
        self.func = Some(func);
        self
    }

    pub fn arg(mut self, ty: Type) -> Self {
        self.args.push(ty);
        self
    }

    pub fn num_inputs(mut self, num_inputs: i64) -> Self {
        self.num_inputs = Some(num_inputs);
        self
    }

    pub fn attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn build(self) -> Result<TypeRelation> {
        let func = require(self.func, "TypeRelation", "func")?;
        let num_inputs = self
            .num_inputs
            .unwrap_or_else(|| self.args.len().saturating_sub(1) as i64);
        TypeRelation::new(func, self.args, num_inputs, self.attrs)
    }
}
