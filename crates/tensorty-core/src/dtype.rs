//! Element data types.
//!
//! A data type is a (code, bits, lanes) triple. Lanes > 1 describes a
//! vector element, e.g. `float16x4`.

use std::fmt;
use std::str::FromStr;

/// Type code of a data type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum TypeCode {
    Int = 0,
    UInt = 1,
    Float = 2,
    /// Opaque handle (pointer-sized, no arithmetic).
    Handle = 3,
    BFloat = 4,
}

impl TypeCode {
    /// Convert from raw discriminant.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Int),
            1 => Some(Self::UInt),
            2 => Some(Self::Float),
            3 => Some(Self::Handle),
            4 => Some(Self::BFloat),
            _ => None,
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Float => "float",
            Self::Handle => "handle",
            Self::BFloat => "bfloat",
        }
    }
}

/// Element data type of a tensor or scalar expression.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct DataType {
    code: TypeCode,
    bits: u8,
    lanes: u16,
}

impl DataType {
    pub const INT32: Self = Self::int(32);
    pub const INT64: Self = Self::int(64);
    pub const FLOAT32: Self = Self::float(32);
    pub const BOOL: Self = Self::bool();

    pub const fn new(code: TypeCode, bits: u8, lanes: u16) -> Self {
        Self { code, bits, lanes }
    }

    pub const fn int(bits: u8) -> Self {
        Self::new(TypeCode::Int, bits, 1)
    }

    pub const fn uint(bits: u8) -> Self {
        Self::new(TypeCode::UInt, bits, 1)
    }

    pub const fn float(bits: u8) -> Self {
        Self::new(TypeCode::Float, bits, 1)
    }

    pub const fn bfloat(bits: u8) -> Self {
        Self::new(TypeCode::BFloat, bits, 1)
    }

    /// Booleans are one-bit unsigned integers.
    pub const fn bool() -> Self {
        Self::uint(1)
    }

    pub const fn handle() -> Self {
        Self::new(TypeCode::Handle, 64, 1)
    }

    /// Same element type with a different lane count.
    pub const fn with_lanes(self, lanes: u16) -> Self {
        Self { lanes, ..self }
    }

    #[inline]
    pub fn code(self) -> TypeCode {
        self.code
    }

    #[inline]
    pub fn bits(self) -> u8 {
        self.bits
    }

    #[inline]
    pub fn lanes(self) -> u16 {
        self.lanes
    }

    pub fn is_int(self) -> bool {
        self.code == TypeCode::Int
    }

    pub fn is_uint(self) -> bool {
        self.code == TypeCode::UInt
    }

    pub fn is_float(self) -> bool {
        matches!(self.code, TypeCode::Float | TypeCode::BFloat)
    }

    pub fn is_bool(self) -> bool {
        self.code == TypeCode::UInt && self.bits == 1
    }

    pub fn is_handle(self) -> bool {
        self.code == TypeCode::Handle
    }

    /// Signed or unsigned integer, excluding `bool`.
    pub fn is_integer(self) -> bool {
        (self.is_int() || self.is_uint()) && !self.is_bool()
    }

    pub fn is_scalar(self) -> bool {
        self.lanes == 1
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_bool() {
            f.write_str("bool")?;
        } else if self.is_handle() {
            f.write_str("handle")?;
        } else {
            write!(f, "{}{}", self.code.prefix(), self.bits)?;
        }
        if self.lanes > 1 {
            write!(f, "x{}", self.lanes)?;
        }
        Ok(())
    }
}

/// Error returned when a string does not name a data type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid data type: {0:?}")]
pub struct ParseDataTypeError(pub String);

impl FromStr for DataType {
    type Err = ParseDataTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseDataTypeError(s.to_owned());

        let (scalar, lanes) = match s.split_once('x') {
            Some((scalar, lanes)) => (scalar, lanes.parse::<u16>().map_err(|_| err())?),
            None => (s, 1),
        };
        if lanes == 0 {
            return Err(err());
        }

        let base = match scalar {
            "bool" => Self::bool(),
            "handle" => Self::handle(),
            _ => {
                // Longest prefix first: "uint" before "int", "bfloat" before "float".
                let (code, digits) = [
                    TypeCode::UInt,
                    TypeCode::Int,
                    TypeCode::BFloat,
                    TypeCode::Float,
                ]
                .into_iter()
                .find_map(|code| scalar.strip_prefix(code.prefix()).map(|rest| (code, rest)))
                .ok_or_else(err)?;
                let bits = digits.parse::<u8>().map_err(|_| err())?;
                if bits == 0 {
                    return Err(err());
                }
                Self::new(code, bits, 1)
            }
        };

        Ok(base.with_lanes(lanes))
    }
}
