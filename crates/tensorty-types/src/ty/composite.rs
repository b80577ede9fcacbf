use crate::relation::TypeConstraint;

use super::{Type, TypeVar};

/// Application of a type constructor to arguments.
///
/// Arity and kind checking belong to the solver.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TypeCall {
    func: Type,
    args: Vec<Type>,
}

impl TypeCall {
    pub fn new(func: Type, args: Vec<Type>) -> Self {
        Self { func, args }
    }

    #[inline]
    pub fn func(&self) -> &Type {
        &self.func
    }

    #[inline]
    pub fn args(&self) -> &[Type] {
        &self.args
    }
}

/// Function type, possibly generic over `type_params` and constrained by relations.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct FuncType {
    arg_types: Vec<Type>,
    ret_type: Type,
    type_params: Vec<TypeVar>,
    type_constraints: Vec<TypeConstraint>,
}

impl FuncType {
    pub fn new(
        arg_types: Vec<Type>,
        ret_type: Type,
        type_params: Vec<TypeVar>,
        type_constraints: Vec<TypeConstraint>,
    ) -> Self {
        Self {
            arg_types,
            ret_type,
            type_params,
            type_constraints,
        }
    }

    #[inline]
    pub fn arg_types(&self) -> &[Type] {
        &self.arg_types
    }

    #[inline]
    pub fn ret_type(&self) -> &Type {
        &self.ret_type
    }

    #[inline]
    pub fn type_params(&self) -> &[TypeVar] {
        &self.type_params
    }

    #[inline]
    pub fn type_constraints(&self) -> &[TypeConstraint] {
        &self.type_constraints
    }

    pub fn is_generic(&self) -> bool {
        !self.type_params.is_empty()
    }
}

/// Positional product type.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TupleType {
    fields: Vec<Type>,
}

impl TupleType {
    pub fn new(fields: Vec<Type>) -> Self {
        Self { fields }
    }

    /// The empty tuple.
    pub fn unit() -> Self {
        Self::new(Vec::new())
    }

    #[inline]
    pub fn fields(&self) -> &[Type] {
        &self.fields
    }

    pub fn arity(&self) -> usize {
        self.fields.len()
    }
}

/// Mutable reference cell holding a value of `value` type.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct RefType {
    value: Type,
}

impl RefType {
    pub fn new(value: Type) -> Self {
        Self { value }
    }

    #[inline]
    pub fn value(&self) -> &Type {
        &self.value
    }
}
