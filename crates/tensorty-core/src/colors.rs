//! Terminal coloring for type dumps.
//!
//! Colors are assigned by what a span of text denotes, not by hue, so the
//! printer never names an escape code itself.

use std::fmt;

/// What a colored span of a dump denotes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Variant names: `TensorType`, `FuncTypeNode`, `Any`.
    Node,
    /// Element data types: `float32`, `int64x4`.
    DType,
    /// Identity suffixes that tell apart otherwise identical placeholders.
    Identity,
}

impl Role {
    const fn escape(self) -> &'static str {
        match self {
            Role::Node => "\x1b[34m",
            Role::DType => "\x1b[32m",
            Role::Identity => "\x1b[2m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Whether dumps are colored. Off by default; the uncolored text is the
/// format snapshots and tooling rely on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Colors {
    enabled: bool,
}

impl Colors {
    pub const ON: Self = Self { enabled: true };
    pub const OFF: Self = Self { enabled: false };

    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub const fn is_enabled(self) -> bool {
        self.enabled
    }

    /// Wrap `value` in the escape codes for `role`, or leave it bare when off.
    pub fn paint<T: fmt::Display>(self, role: Role, value: T) -> Painted<T> {
        Painted {
            role: self.enabled.then_some(role),
            value,
        }
    }
}

/// A value rendered in the color of its role.
#[derive(Clone, Copy, Debug)]
pub struct Painted<T> {
    role: Option<Role>,
    value: T,
}

impl<T: fmt::Display> fmt::Display for Painted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.role {
            Some(role) => write!(f, "{}{}{RESET}", role.escape(), self.value),
            None => self.value.fmt(f),
        }
    }
}
