use tensorty_core::{DataType, PrimExpr, PrimExprNode};

use crate::error::{DimError, Error, Result};

/// Tensor type: symbolic shape plus element type.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TensorType {
    shape: Vec<PrimExpr>,
    dtype: DataType,
}

impl TensorType {
    /// Every dimension must be the `Any` wildcard or a well-typed scalar integer
    /// expression; integer literals must be nonnegative.
    pub fn new(shape: Vec<PrimExpr>, dtype: DataType) -> Result<Self> {
        for (index, dim) in shape.iter().enumerate() {
            if let Err(reason) = check_dim(dim) {
                tracing::debug!(index, %dim, %reason, "rejected tensor shape dimension");
                return Err(Error::InvalidShapeDimension { index, reason });
            }
        }
        Ok(Self { shape, dtype })
    }

    /// 0-D tensor.
    pub fn scalar(dtype: DataType) -> Self {
        Self {
            shape: Vec::new(),
            dtype,
        }
    }

    #[inline]
    pub fn shape(&self) -> &[PrimExpr] {
        &self.shape
    }

    #[inline]
    pub fn dtype(&self) -> DataType {
        self.dtype
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn is_scalar(&self) -> bool {
        self.shape.is_empty()
    }

    /// Number of elements as a symbolic product.
    ///
    /// Left fold from the first dimension: `[m, n, p]` gives `((m*n)*p)`.
    /// A 0-D tensor has size `(int64)1`.
    pub fn size(&self) -> PrimExpr {
        let Some((first, rest)) = self.shape.split_first() else {
            return PrimExpr::const_int(1, DataType::INT64);
        };
        rest.iter()
            .fold(first.clone(), |acc, dim| PrimExpr::mul(acc, dim.clone()))
    }
}

fn check_dim(dim: &PrimExpr) -> std::result::Result<(), DimError> {
    match dim.node() {
        PrimExprNode::IntImm { value, .. } if *value < 0 => Err(DimError::Negative(*value)),
        _ => dim_dtype(dim).map(|_| ()),
    }
}

/// Type of a well-typed integer expression, `None` for a bare wildcard.
///
/// Every leaf must be a scalar integer and both operands of a binary node must
/// agree. A wildcard operand takes the type of the other side.
fn dim_dtype(expr: &PrimExpr) -> std::result::Result<Option<DataType>, DimError> {
    match expr.node() {
        PrimExprNode::Any => Ok(None),
        PrimExprNode::IntImm { dtype, .. } => scalar_integer(*dtype).map(Some),
        PrimExprNode::FloatImm { dtype, .. } => Err(DimError::NotInteger(*dtype)),
        PrimExprNode::Var(var) => scalar_integer(var.dtype()).map(Some),
        PrimExprNode::Add(lhs, rhs)
        | PrimExprNode::Sub(lhs, rhs)
        | PrimExprNode::Mul(lhs, rhs)
        | PrimExprNode::FloorDiv(lhs, rhs) => match (dim_dtype(lhs)?, dim_dtype(rhs)?) {
            (Some(l), Some(r)) if l != r => Err(DimError::Mismatch(l, r)),
            (l, r) => Ok(l.or(r)),
        },
    }
}

fn scalar_integer(dtype: DataType) -> std::result::Result<DataType, DimError> {
    if !dtype.is_integer() {
        Err(DimError::NotInteger(dtype))
    } else if !dtype.is_scalar() {
        Err(DimError::NotScalar(dtype))
    } else {
        Ok(dtype)
    }
}
