//! Kinds: what a type variable may be substituted with.

use std::fmt;

/// Classification of type variables and placeholders.
///
/// A variable of kind `ShapeVar` stands for a shape dimension and may only be
/// resolved to something shape-compatible; `Type` ranges over ordinary types.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum Kind {
    /// Ordinary type.
    Type = 0,
    /// Single shape dimension.
    ShapeVar = 1,
    /// Element (base) type.
    BaseType = 2,
    /// Whole shape.
    Shape = 3,
    /// Type constraint.
    Constraint = 4,
    /// Handle to an algebraic data type constructor.
    AdtHandle = 5,
    /// Algebraic data type definition.
    TypeData = 6,
}

impl Kind {
    /// Convert from raw discriminant.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Type),
            1 => Some(Self::ShapeVar),
            2 => Some(Self::BaseType),
            3 => Some(Self::Shape),
            4 => Some(Self::Constraint),
            5 => Some(Self::AdtHandle),
            6 => Some(Self::TypeData),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Type => "Type",
            Self::ShapeVar => "ShapeVar",
            Self::BaseType => "BaseType",
            Self::Shape => "Shape",
            Self::Constraint => "Constraint",
            Self::AdtHandle => "AdtHandle",
            Self::TypeData => "TypeData",
        }
    }

    /// Whether this kind ranges over shapes or shape dimensions.
    pub fn is_shape_like(self) -> bool {
        matches!(self, Self::ShapeVar | Self::Shape)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
