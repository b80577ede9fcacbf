//! Type relations: operator-specific inference logic represented as data.
//!
//! A relation pairs argument types with an external resolver. The solver calls
//! the resolver repeatedly until it reports `Satisfied` or `Unsatisfiable`; the
//! relation node itself never invokes it.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use tensorty_core::PrimExpr;

use crate::attrs::Attrs;
use crate::error::{Error, Result};
use crate::ty::Type;

/// Result of one resolver invocation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum RelationOutcome {
    /// All outputs are resolved (recorded through the reporter).
    Satisfied,
    /// The arguments contradict the relation.
    Unsatisfiable,
    /// Not enough is known yet; retry after other relations make progress.
    Indeterminate,
}

/// Solver-side sink the resolver writes its conclusions to.
pub trait TypeReporter {
    /// Record that `dst` must be `src`.
    fn assign(&mut self, dst: &Type, src: &Type);

    /// Require two dimensions to be equal. Returns `false` if they provably differ.
    fn assert_dims_eq(&mut self, lhs: &PrimExpr, rhs: &PrimExpr) -> bool;

    /// Record an error; the solver attaches its current source location.
    fn error(&mut self, message: String);
}

type ResolverFn =
    dyn Fn(&[Type], usize, &Attrs, &mut dyn TypeReporter) -> RelationOutcome + Send + Sync;

/// Named resolver function. Clones share the same function.
#[derive(Clone)]
pub struct TypeRelationFn {
    name: Arc<str>,
    resolver: Arc<ResolverFn>,
}

impl TypeRelationFn {
    pub fn new<F>(name: &str, resolver: F) -> Self
    where
        F: Fn(&[Type], usize, &Attrs, &mut dyn TypeReporter) -> RelationOutcome
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: Arc::from(name),
            resolver: Arc::new(resolver),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the resolver. Called by the solver, with `args` being its current
    /// view of the relation's arguments.
    pub fn call(
        &self,
        args: &[Type],
        num_inputs: usize,
        attrs: &Attrs,
        reporter: &mut dyn TypeReporter,
    ) -> RelationOutcome {
        (self.resolver)(args, num_inputs, attrs, reporter)
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.resolver) as *const ()
    }
}

// Functions compare by identity: two closures with the same name are different.
impl PartialEq for TypeRelationFn {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for TypeRelationFn {}

impl Hash for TypeRelationFn {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Debug for TypeRelationFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeRelationFn").field(&self.name).finish()
    }
}

#[derive(PartialEq, Eq, Hash, Debug)]
struct RelationData {
    func: TypeRelationFn,
    args: Vec<Type>,
    num_inputs: usize,
    attrs: Attrs,
}

/// Constraint over `args`: the first `num_inputs` are known inputs, the rest
/// are outputs for the resolver to determine.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TypeRelation(Arc<RelationData>);

/// The constraint form carried by function types.
pub type TypeConstraint = TypeRelation;

impl TypeRelation {
    /// Fails with `MalformedRelation` unless `0 <= num_inputs <= args.len()`.
    pub fn new(
        func: TypeRelationFn,
        args: Vec<Type>,
        num_inputs: i64,
        attrs: Attrs,
    ) -> Result<Self> {
        let arity = args.len();
        let num_inputs = match usize::try_from(num_inputs) {
            Ok(n) if n <= arity => n,
            _ => {
                tracing::debug!(
                    relation = func.name(),
                    num_inputs,
                    arity,
                    "rejected malformed type relation"
                );
                return Err(Error::MalformedRelation { num_inputs, arity });
            }
        };
        Ok(Self(Arc::new(RelationData {
            func,
            args,
            num_inputs,
            attrs,
        })))
    }

    #[inline]
    pub fn func(&self) -> &TypeRelationFn {
        &self.0.func
    }

    #[inline]
    pub fn args(&self) -> &[Type] {
        &self.0.args
    }

    #[inline]
    pub fn num_inputs(&self) -> usize {
        self.0.num_inputs
    }

    pub fn inputs(&self) -> &[Type] {
        &self.0.args[..self.0.num_inputs]
    }

    pub fn outputs(&self) -> &[Type] {
        &self.0.args[self.0.num_inputs..]
    }

    #[inline]
    pub fn attrs(&self) -> &Attrs {
        &self.0.attrs
    }

    /// Pointer identity of the two handles.
    pub fn same_node(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Same relation over rewritten arguments. Arity must not change.
    pub(crate) fn rebuild_args(&self, args: Vec<Type>) -> Self {
        debug_assert_eq!(args.len(), self.0.args.len());
        Self(Arc::new(RelationData {
            func: self.0.func.clone(),
            args,
            num_inputs: self.0.num_inputs,
            attrs: self.0.attrs.clone(),
        }))
    }
}
