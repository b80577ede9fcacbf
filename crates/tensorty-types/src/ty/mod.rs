//! The sealed type variant family.
//!
//! `Type` is a cheap-to-clone shared handle over an immutable `TypeNode`.
//! Nodes form a DAG: many parents may share one child, and since nothing can be
//! mutated after construction no cycle can be built. An "edit" is always a new
//! node (see `visitor::TypeFolder`).
//!
//! Equality is structural, except for variables and placeholders, which compare
//! by identity (`VarId`).

mod composite;
mod tensor;
mod var;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use tensorty_core::{DataType, PrimExpr};

use crate::Result;
use crate::kind::Kind;
use crate::relation::TypeConstraint;

pub use composite::{FuncType, RefType, TupleType, TypeCall};
pub use tensor::TensorType;
pub use var::{GlobalTypeVar, IncompleteType, TypeVar, VarId};

/// Discriminant of a `TypeNode`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum TypeTag {
    Tensor = 0,
    TypeVar = 1,
    GlobalTypeVar = 2,
    TypeCall = 3,
    Incomplete = 4,
    Func = 5,
    Tuple = 6,
    Ref = 7,
    Any = 8,
}

impl TypeTag {
    /// Node name used by the debug printer.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tensor => "TensorType",
            Self::TypeVar => "TypeVarNode",
            Self::GlobalTypeVar => "GlobalTypeVarNode",
            Self::TypeCall => "TypeCallNode",
            Self::Incomplete => "IncompleteTypeNode",
            Self::Func => "FuncTypeNode",
            Self::Tuple => "TupleTypeNode",
            Self::Ref => "RefTypeNode",
            Self::Any => "Any",
        }
    }
}

/// A type node.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum TypeNode {
    Tensor(TensorType),
    /// Lexical type variable, bound by a function's type parameters.
    TypeVar(TypeVar),
    /// Module-level type variable, e.g. an ADT constructor.
    GlobalTypeVar(GlobalTypeVar),
    TypeCall(TypeCall),
    /// Placeholder for a type still to be inferred.
    Incomplete(IncompleteType),
    Func(FuncType),
    Tuple(TupleType),
    /// Mutable reference cell.
    Ref(RefType),
    /// Unconstrained wildcard.
    Any,
}

impl TypeNode {
    pub fn tag(&self) -> TypeTag {
        match self {
            Self::Tensor(_) => TypeTag::Tensor,
            Self::TypeVar(_) => TypeTag::TypeVar,
            Self::GlobalTypeVar(_) => TypeTag::GlobalTypeVar,
            Self::TypeCall(_) => TypeTag::TypeCall,
            Self::Incomplete(_) => TypeTag::Incomplete,
            Self::Func(_) => TypeTag::Func,
            Self::Tuple(_) => TypeTag::Tuple,
            Self::Ref(_) => TypeTag::Ref,
            Self::Any => TypeTag::Any,
        }
    }
}

/// Shared, immutable handle to a type node.
#[derive(Clone)]
pub struct Type(Arc<TypeNode>);

impl Type {
    pub fn new(node: TypeNode) -> Self {
        Self(Arc::new(node))
    }

    #[inline]
    pub fn node(&self) -> &TypeNode {
        &self.0
    }

    #[inline]
    pub fn tag(&self) -> TypeTag {
        self.0.tag()
    }

    /// Pointer identity of the two handles.
    pub fn same_node(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Tensor type; fails if a dimension is not a valid extent.
    pub fn tensor(shape: Vec<PrimExpr>, dtype: DataType) -> Result<Self> {
        TensorType::new(shape, dtype).map(Self::from)
    }

    /// 0-D tensor of `dtype`.
    pub fn scalar(dtype: DataType) -> Self {
        Self::from(TensorType::scalar(dtype))
    }

    /// Fresh lexical type variable.
    pub fn var(name_hint: &str, kind: Kind) -> Self {
        Self::from(TypeVar::new(name_hint, kind))
    }

    /// Fresh global type variable.
    pub fn global_var(name_hint: &str, kind: Kind) -> Self {
        Self::from(GlobalTypeVar::new(name_hint, kind))
    }

    /// Fresh placeholder.
    pub fn incomplete(kind: Kind) -> Self {
        Self::from(IncompleteType::new(kind))
    }

    pub fn call(func: Type, args: Vec<Type>) -> Self {
        Self::from(TypeCall::new(func, args))
    }

    pub fn func(
        arg_types: Vec<Type>,
        ret_type: Type,
        type_params: Vec<TypeVar>,
        type_constraints: Vec<TypeConstraint>,
    ) -> Self {
        Self::from(FuncType::new(
            arg_types,
            ret_type,
            type_params,
            type_constraints,
        ))
    }

    pub fn tuple(fields: Vec<Type>) -> Self {
        Self::from(TupleType::new(fields))
    }

    pub fn reference(value: Type) -> Self {
        Self::from(RefType::new(value))
    }

    pub fn any() -> Self {
        Self::new(TypeNode::Any)
    }

    pub fn as_tensor(&self) -> Option<&TensorType> {
        match self.node() {
            TypeNode::Tensor(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_type_var(&self) -> Option<&TypeVar> {
        match self.node() {
            TypeNode::TypeVar(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_global_type_var(&self) -> Option<&GlobalTypeVar> {
        match self.node() {
            TypeNode::GlobalTypeVar(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_type_call(&self) -> Option<&TypeCall> {
        match self.node() {
            TypeNode::TypeCall(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_incomplete(&self) -> Option<&IncompleteType> {
        match self.node() {
            TypeNode::Incomplete(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_func(&self) -> Option<&FuncType> {
        match self.node() {
            TypeNode::Func(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&TupleType> {
        match self.node() {
            TypeNode::Tuple(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_ref_type(&self) -> Option<&RefType> {
        match self.node() {
            TypeNode::Ref(r) => Some(r),
            _ => None,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self.node(), TypeNode::Any)
    }

    /// Identity of a variable or placeholder node.
    pub fn var_id(&self) -> Option<VarId> {
        match self.node() {
            TypeNode::TypeVar(v) => Some(v.id()),
            TypeNode::GlobalTypeVar(v) => Some(v.id()),
            TypeNode::Incomplete(i) => Some(i.id()),
            _ => None,
        }
    }

    /// Kind of a variable or placeholder node.
    pub fn var_kind(&self) -> Option<Kind> {
        match self.node() {
            TypeNode::TypeVar(v) => Some(v.kind()),
            TypeNode::GlobalTypeVar(v) => Some(v.kind()),
            TypeNode::Incomplete(i) => Some(i.kind()),
            _ => None,
        }
    }

    /// Direct child types in field order.
    ///
    /// Function type parameters and constraints are not plain types;
    /// `visitor::TypeVisitor` reaches them.
    pub fn children(&self) -> Vec<&Type> {
        match self.node() {
            TypeNode::Tensor(_)
            | TypeNode::TypeVar(_)
            | TypeNode::GlobalTypeVar(_)
            | TypeNode::Incomplete(_)
            | TypeNode::Any => Vec::new(),
            TypeNode::TypeCall(call) => std::iter::once(call.func()).chain(call.args()).collect(),
            TypeNode::Func(func) => func
                .arg_types()
                .iter()
                .chain(std::iter::once(func.ret_type()))
                .collect(),
            TypeNode::Tuple(tuple) => tuple.fields().iter().collect(),
            TypeNode::Ref(r) => vec![r.value()],
        }
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        Self::same_node(self, other) || self.0 == other.0
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<TypeNode> for Type {
    fn from(node: TypeNode) -> Self {
        Self::new(node)
    }
}

impl From<TensorType> for Type {
    fn from(t: TensorType) -> Self {
        Self::new(TypeNode::Tensor(t))
    }
}

impl From<TypeVar> for Type {
    fn from(v: TypeVar) -> Self {
        Self::new(TypeNode::TypeVar(v))
    }
}

impl From<GlobalTypeVar> for Type {
    fn from(v: GlobalTypeVar) -> Self {
        Self::new(TypeNode::GlobalTypeVar(v))
    }
}

impl From<TypeCall> for Type {
    fn from(c: TypeCall) -> Self {
        Self::new(TypeNode::TypeCall(c))
    }
}

impl From<IncompleteType> for Type {
    fn from(i: IncompleteType) -> Self {
        Self::new(TypeNode::Incomplete(i))
    }
}

impl From<FuncType> for Type {
    fn from(f: FuncType) -> Self {
        Self::new(TypeNode::Func(f))
    }
}

impl From<TupleType> for Type {
    fn from(t: TupleType) -> Self {
        Self::new(TypeNode::Tuple(t))
    }
}

impl From<RefType> for Type {
    fn from(r: RefType) -> Self {
        Self::new(TypeNode::Ref(r))
    }
}
