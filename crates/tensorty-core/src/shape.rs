//! Symbolic integer expressions used as tensor shape dimensions.
//!
//! This is the representation only. Simplification and proving belong to the
//! arithmetic layer; the builders here never fold or reorder operands, so
//! `a * b` is always the node `Mul(a, b)`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::dtype::DataType;

static NEXT_SHAPE_VAR: AtomicU64 = AtomicU64::new(0);

/// A symbolic dimension variable.
///
/// Not interned: every construction yields a distinct variable, even with the
/// same name. Clones share the identity.
#[derive(Clone, Debug)]
pub struct ShapeVar {
    id: u64,
    name_hint: Arc<str>,
    dtype: DataType,
}

impl ShapeVar {
    pub fn new(name_hint: &str, dtype: DataType) -> Self {
        Self {
            id: NEXT_SHAPE_VAR.fetch_add(1, Ordering::Relaxed),
            name_hint: Arc::from(name_hint),
            dtype,
        }
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn name_hint(&self) -> &str {
        &self.name_hint
    }

    #[inline]
    pub fn dtype(&self) -> DataType {
        self.dtype
    }
}

impl PartialEq for ShapeVar {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ShapeVar {}

impl Hash for ShapeVar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Node of a shape expression tree.
#[derive(Clone, Debug)]
pub enum PrimExprNode {
    IntImm { value: i64, dtype: DataType },
    FloatImm { value: f64, dtype: DataType },
    Var(ShapeVar),
    Add(PrimExpr, PrimExpr),
    Sub(PrimExpr, PrimExpr),
    Mul(PrimExpr, PrimExpr),
    FloorDiv(PrimExpr, PrimExpr),
    /// Wildcard dimension, unifies with anything.
    Any,
}

/// Shared, immutable handle to a shape expression.
#[derive(Clone)]
pub struct PrimExpr(Arc<PrimExprNode>);

impl PrimExpr {
    pub fn new(node: PrimExprNode) -> Self {
        Self(Arc::new(node))
    }

    /// An `int32` literal.
    pub fn int(value: i64) -> Self {
        Self::const_int(value, DataType::INT32)
    }

    pub fn const_int(value: i64, dtype: DataType) -> Self {
        Self::new(PrimExprNode::IntImm { value, dtype })
    }

    /// A `float32` literal.
    pub fn float(value: f64) -> Self {
        Self::new(PrimExprNode::FloatImm {
            value,
            dtype: DataType::FLOAT32,
        })
    }

    /// A fresh `int32` shape variable.
    pub fn var(name_hint: &str) -> Self {
        Self::from(ShapeVar::new(name_hint, DataType::INT32))
    }

    pub fn any() -> Self {
        Self::new(PrimExprNode::Any)
    }

    pub fn add(lhs: PrimExpr, rhs: PrimExpr) -> Self {
        Self::new(PrimExprNode::Add(lhs, rhs))
    }

    pub fn sub(lhs: PrimExpr, rhs: PrimExpr) -> Self {
        Self::new(PrimExprNode::Sub(lhs, rhs))
    }

    pub fn mul(lhs: PrimExpr, rhs: PrimExpr) -> Self {
        Self::new(PrimExprNode::Mul(lhs, rhs))
    }

    pub fn floor_div(lhs: PrimExpr, rhs: PrimExpr) -> Self {
        Self::new(PrimExprNode::FloorDiv(lhs, rhs))
    }

    #[inline]
    pub fn node(&self) -> &PrimExprNode {
        &self.0
    }

    /// Result type of the expression. Binary nodes take the left operand's type.
    pub fn dtype(&self) -> DataType {
        match self.node() {
            PrimExprNode::IntImm { dtype, .. } | PrimExprNode::FloatImm { dtype, .. } => *dtype,
            PrimExprNode::Var(var) => var.dtype(),
            PrimExprNode::Add(lhs, _)
            | PrimExprNode::Sub(lhs, _)
            | PrimExprNode::Mul(lhs, _)
            | PrimExprNode::FloorDiv(lhs, _) => lhs.dtype(),
            PrimExprNode::Any => DataType::INT32,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self.node(), PrimExprNode::Any)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self.node() {
            PrimExprNode::IntImm { value, .. } => Some(*value),
            _ => None,
        }
    }

    pub fn as_var(&self) -> Option<&ShapeVar> {
        match self.node() {
            PrimExprNode::Var(var) => Some(var),
            _ => None,
        }
    }

    /// Pointer identity of the two handles.
    pub fn same_node(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl From<ShapeVar> for PrimExpr {
    fn from(var: ShapeVar) -> Self {
        Self::new(PrimExprNode::Var(var))
    }
}

impl From<i64> for PrimExpr {
    fn from(value: i64) -> Self {
        Self::int(value)
    }
}

impl ops::Add for PrimExpr {
    type Output = PrimExpr;

    fn add(self, rhs: PrimExpr) -> PrimExpr {
        PrimExpr::add(self, rhs)
    }
}

impl ops::Sub for PrimExpr {
    type Output = PrimExpr;

    fn sub(self, rhs: PrimExpr) -> PrimExpr {
        PrimExpr::sub(self, rhs)
    }
}

impl ops::Mul for PrimExpr {
    type Output = PrimExpr;

    fn mul(self, rhs: PrimExpr) -> PrimExpr {
        PrimExpr::mul(self, rhs)
    }
}

impl ops::MulAssign for PrimExpr {
    fn mul_assign(&mut self, rhs: PrimExpr) {
        *self = PrimExpr::mul(self.clone(), rhs);
    }
}

// Structural equality; variables compare by identity, float literals by bits.
impl PartialEq for PrimExpr {
    fn eq(&self, other: &Self) -> bool {
        if Self::same_node(self, other) {
            return true;
        }
        match (self.node(), other.node()) {
            (
                PrimExprNode::IntImm { value: a, dtype: da },
                PrimExprNode::IntImm { value: b, dtype: db },
            ) => a == b && da == db,
            (
                PrimExprNode::FloatImm { value: a, dtype: da },
                PrimExprNode::FloatImm { value: b, dtype: db },
            ) => a.to_bits() == b.to_bits() && da == db,
            (PrimExprNode::Var(a), PrimExprNode::Var(b)) => a == b,
            (PrimExprNode::Add(a0, a1), PrimExprNode::Add(b0, b1))
            | (PrimExprNode::Sub(a0, a1), PrimExprNode::Sub(b0, b1))
            | (PrimExprNode::Mul(a0, a1), PrimExprNode::Mul(b0, b1))
            | (PrimExprNode::FloorDiv(a0, a1), PrimExprNode::FloorDiv(b0, b1)) => {
                a0 == b0 && a1 == b1
            }
            (PrimExprNode::Any, PrimExprNode::Any) => true,
            _ => false,
        }
    }
}

impl Eq for PrimExpr {}

impl Hash for PrimExpr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self.node()).hash(state);
        match self.node() {
            PrimExprNode::IntImm { value, dtype } => {
                value.hash(state);
                dtype.hash(state);
            }
            PrimExprNode::FloatImm { value, dtype } => {
                value.to_bits().hash(state);
                dtype.hash(state);
            }
            PrimExprNode::Var(var) => var.hash(state),
            PrimExprNode::Add(a, b)
            | PrimExprNode::Sub(a, b)
            | PrimExprNode::Mul(a, b)
            | PrimExprNode::FloorDiv(a, b) => {
                a.hash(state);
                b.hash(state);
            }
            PrimExprNode::Any => {}
        }
    }
}

impl fmt::Debug for PrimExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for PrimExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node() {
            PrimExprNode::IntImm { value, dtype } if *dtype == DataType::INT32 => {
                write!(f, "{value}")
            }
            PrimExprNode::IntImm { value, dtype } => write!(f, "({dtype}){value}"),
            PrimExprNode::FloatImm { value, dtype } if *dtype == DataType::FLOAT32 => {
                write!(f, "{value:?}f")
            }
            PrimExprNode::FloatImm { value, dtype } => write!(f, "({dtype}){value:?}"),
            PrimExprNode::Var(var) => f.write_str(var.name_hint()),
            PrimExprNode::Add(a, b) => write!(f, "({a} + {b})"),
            PrimExprNode::Sub(a, b) => write!(f, "({a} - {b})"),
            PrimExprNode::Mul(a, b) => write!(f, "({a}*{b})"),
            PrimExprNode::FloorDiv(a, b) => write!(f, "floordiv({a}, {b})"),
            PrimExprNode::Any => f.write_str("?"),
        }
    }
}
