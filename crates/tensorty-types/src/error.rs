use tensorty_core::DataType;

/// Why a shape dimension was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DimError {
    #[error("expected an integer expression, found {0}")]
    NotInteger(DataType),

    #[error("expected a scalar integer, found {0}")]
    NotScalar(DataType),

    #[error("operand types differ: {0} and {1}")]
    Mismatch(DataType, DataType),

    #[error("negative extent {0}")]
    Negative(i64),
}

/// Construction errors.
///
/// All are raised eagerly by constructors; a failed construction produces no node.
/// Errors that only show up while solving (unsatisfiable relations, unresolved
/// placeholders, kind mismatches) are reported by the solver, not here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `num_inputs` is negative or exceeds the argument count.
    #[error("malformed type relation: num_inputs {num_inputs} out of range for {arity} arguments")]
    MalformedRelation { num_inputs: i64, arity: usize },

    #[error("invalid shape dimension at index {index}: {reason}")]
    InvalidShapeDimension { index: usize, reason: DimError },

    /// A required child was never supplied to a builder.
    #[error("{node} is missing required child `{field}`")]
    NullChild {
        node: &'static str,
        field: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
