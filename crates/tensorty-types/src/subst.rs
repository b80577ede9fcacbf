//! Identity-keyed substitution for variables and placeholders.
//!
//! This is solver-owned state: binding a placeholder never touches the node.
//! Keys are `VarId`s, so a binding for one variable never affects another
//! variable that merely has the same name. Kinds are not checked here.
//!
//! A function type's own type parameters are bound inside it, so `apply` leaves
//! their occurrences in that function alone. To instantiate a generic, apply a
//! substitution for its parameters to `arg_types` and `ret_type` directly.

use std::collections::HashMap;

use crate::ty::{GlobalTypeVar, IncompleteType, Type, TypeNode, TypeVar, VarId};
use crate::visitor::{TypeFolder, super_fold_type};

#[derive(Clone, Debug, Default)]
pub struct Substitution {
    map: HashMap<VarId, Type>,
}

impl Substitution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `id` to `ty`, replacing any previous binding.
    /// Binding a variable to itself is ignored.
    pub fn bind(&mut self, id: VarId, ty: Type) {
        if ty.var_id() == Some(id) {
            return;
        }
        tracing::trace!(id = id.as_u64(), %ty, "bind");
        self.map.insert(id, ty);
    }

    pub fn bind_var(&mut self, var: &TypeVar, ty: Type) {
        self.bind(var.id(), ty);
    }

    pub fn bind_global(&mut self, var: &GlobalTypeVar, ty: Type) {
        self.bind(var.id(), ty);
    }

    pub fn bind_incomplete(&mut self, placeholder: &IncompleteType, ty: Type) {
        self.bind(placeholder.id(), ty);
    }

    pub fn lookup(&self, id: VarId) -> Option<&Type> {
        self.map.get(&id)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Follow bindings from `ty` until reaching an unbound variable or a
    /// non-variable type. Only the head is resolved; children are not.
    pub fn resolve(&self, ty: &Type) -> Type {
        let mut current = ty.clone();
        // A chain can visit each binding at most once; anything longer is a cycle.
        for _ in 0..=self.map.len() {
            let Some(next) = current.var_id().and_then(|id| self.map.get(&id)) else {
                return current;
            };
            current = next.clone();
        }
        current
    }

    /// Replace every bound occurrence throughout `ty`, except occurrences of a
    /// function's own type parameters inside that function.
    pub fn apply(&self, ty: &Type) -> Type {
        Apply {
            subst: self,
            depth: 0,
            shadowed: Vec::new(),
        }
        .fold_type(ty)
    }
}

struct Apply<'a> {
    subst: &'a Substitution,
    depth: usize,
    /// Type parameters of the enclosing function types.
    shadowed: Vec<VarId>,
}

impl TypeFolder for Apply<'_> {
    fn fold_type(&mut self, ty: &Type) -> Type {
        if let TypeNode::Func(func) = ty.node() {
            let scope = self.shadowed.len();
            self.shadowed
                .extend(func.type_params().iter().map(TypeVar::id));
            let folded = super_fold_type(self, ty);
            self.shadowed.truncate(scope);
            return folded;
        }
        if ty.var_id().is_some_and(|id| self.shadowed.contains(&id)) {
            return ty.clone();
        }
        let resolved = self.subst.resolve(ty);
        if Type::same_node(&resolved, ty) || self.depth > self.subst.len() {
            return super_fold_type(self, ty);
        }
        // The bound type may itself mention bound variables.
        self.depth += 1;
        let folded = self.fold_type(&resolved);
        self.depth -= 1;
        folded
    }
}
