use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::kind::Kind;

static NEXT_VAR_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of a type variable or placeholder.
///
/// Minted once per construction and shared by clones. Ordered by creation.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct VarId(u64);

impl VarId {
    fn fresh() -> Self {
        Self(NEXT_VAR_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.0)
    }
}

/// Lexical type variable, scoped to the function that binds it.
#[derive(Clone, Debug)]
pub struct TypeVar {
    id: VarId,
    name_hint: Arc<str>,
    kind: Kind,
}

impl TypeVar {
    pub fn new(name_hint: &str, kind: Kind) -> Self {
        let id = VarId::fresh();
        tracing::trace!(id = id.0, name_hint, %kind, "new type variable");
        Self {
            id,
            name_hint: Arc::from(name_hint),
            kind,
        }
    }

    #[inline]
    pub fn id(&self) -> VarId {
        self.id
    }

    /// For diagnostics only; never used for comparison.
    #[inline]
    pub fn name_hint(&self) -> &str {
        &self.name_hint
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        self.kind
    }
}

/// Type variable referenced across module boundaries (ADT constructors).
///
/// Uniqueness of names within a module is up to the module builder.
#[derive(Clone, Debug)]
pub struct GlobalTypeVar {
    id: VarId,
    name_hint: Arc<str>,
    kind: Kind,
}

impl GlobalTypeVar {
    pub fn new(name_hint: &str, kind: Kind) -> Self {
        let id = VarId::fresh();
        tracing::trace!(id = id.0, name_hint, %kind, "new global type variable");
        Self {
            id,
            name_hint: Arc::from(name_hint),
            kind,
        }
    }

    #[inline]
    pub fn id(&self) -> VarId {
        self.id
    }

    #[inline]
    pub fn name_hint(&self) -> &str {
        &self.name_hint
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        self.kind
    }
}

/// Placeholder for a type that must be inferred.
///
/// Resolution lives in a solver-owned map keyed by `id()`; the node itself
/// never changes.
#[derive(Clone, Debug)]
pub struct IncompleteType {
    id: VarId,
    kind: Kind,
}

impl IncompleteType {
    pub fn new(kind: Kind) -> Self {
        let id = VarId::fresh();
        tracing::trace!(id = id.0, %kind, "new incomplete type");
        Self { id, kind }
    }

    #[inline]
    pub fn id(&self) -> VarId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        self.kind
    }
}

macro_rules! identity_eq {
    ($($ty:ty),*) => {$(
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }

        impl Eq for $ty {}

        impl Hash for $ty {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.id.hash(state);
            }
        }
    )*};
}

identity_eq!(TypeVar, GlobalTypeVar, IncompleteType);
