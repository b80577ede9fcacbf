//! Traversal over the type graph.
//!
//! # Usage
//!
//! Implement `TypeVisitor` and override `visit_*` methods. Call the matching
//! `walk_*` function inside an override to continue into children (or omit it
//! to stop).
//!
//! ```ignore
//! impl TypeVisitor for FreeVars {
//!     fn visit_type_var(&mut self, var: &TypeVar) {
//!         self.found.push(var.clone());
//!     }
//! }
//! ```
//!
//! `TypeFolder` is the rewriting counterpart: it returns new nodes and leaves
//! the input untouched. Unchanged subtrees keep their original handles.

use crate::relation::TypeRelation;
use crate::ty::{
    FuncType, GlobalTypeVar, IncompleteType, RefType, TensorType, TupleType, Type, TypeCall,
    TypeNode, TypeVar,
};

pub trait TypeVisitor: Sized {
    fn visit_type(&mut self, ty: &Type) {
        walk_type(self, ty);
    }

    fn visit_tensor(&mut self, _tensor: &TensorType) {
        // Leaf: dimensions are shape expressions, not types
    }

    fn visit_type_var(&mut self, _var: &TypeVar) {}

    fn visit_global_type_var(&mut self, _var: &GlobalTypeVar) {}

    fn visit_incomplete(&mut self, _incomplete: &IncompleteType) {}

    fn visit_type_call(&mut self, call: &TypeCall) {
        walk_type_call(self, call);
    }

    fn visit_func(&mut self, func: &FuncType) {
        walk_func(self, func);
    }

    fn visit_relation(&mut self, rel: &TypeRelation) {
        walk_relation(self, rel);
    }

    fn visit_tuple(&mut self, tuple: &TupleType) {
        walk_tuple(self, tuple);
    }

    fn visit_ref(&mut self, r: &RefType) {
        walk_ref(self, r);
    }

    fn visit_any(&mut self) {}
}

pub fn walk_type<V: TypeVisitor>(visitor: &mut V, ty: &Type) {
    match ty.node() {
        TypeNode::Tensor(t) => visitor.visit_tensor(t),
        TypeNode::TypeVar(v) => visitor.visit_type_var(v),
        TypeNode::GlobalTypeVar(v) => visitor.visit_global_type_var(v),
        TypeNode::TypeCall(c) => visitor.visit_type_call(c),
        TypeNode::Incomplete(i) => visitor.visit_incomplete(i),
        TypeNode::Func(f) => visitor.visit_func(f),
        TypeNode::Tuple(t) => visitor.visit_tuple(t),
        TypeNode::Ref(r) => visitor.visit_ref(r),
        TypeNode::Any => visitor.visit_any(),
    }
}

pub fn walk_type_call<V: TypeVisitor>(visitor: &mut V, call: &TypeCall) {
    visitor.visit_type(call.func());
    for arg in call.args() {
        visitor.visit_type(arg);
    }
}

/// Type parameters, argument types, return type, then constraints.
pub fn walk_func<V: TypeVisitor>(visitor: &mut V, func: &FuncType) {
    for param in func.type_params() {
        visitor.visit_type_var(param);
    }
    for arg in func.arg_types() {
        visitor.visit_type(arg);
    }
    visitor.visit_type(func.ret_type());
    for rel in func.type_constraints() {
        visitor.visit_relation(rel);
    }
}

pub fn walk_relation<V: TypeVisitor>(visitor: &mut V, rel: &TypeRelation) {
    for arg in rel.args() {
        visitor.visit_type(arg);
    }
}

pub fn walk_tuple<V: TypeVisitor>(visitor: &mut V, tuple: &TupleType) {
    for field in tuple.fields() {
        visitor.visit_type(field);
    }
}

pub fn walk_ref<V: TypeVisitor>(visitor: &mut V, r: &RefType) {
    visitor.visit_type(r.value());
}

pub trait TypeFolder: Sized {
    fn fold_type(&mut self, ty: &Type) -> Type {
        super_fold_type(self, ty)
    }

    fn fold_relation(&mut self, rel: &TypeRelation) -> TypeRelation {
        super_fold_relation(self, rel)
    }
}

/// Fold the children of `ty`, rebuilding it only if one of them changed.
///
/// Function type parameters are binders and are kept as they are.
pub fn super_fold_type<F: TypeFolder>(folder: &mut F, ty: &Type) -> Type {
    match ty.node() {
        TypeNode::Tensor(_)
        | TypeNode::TypeVar(_)
        | TypeNode::GlobalTypeVar(_)
        | TypeNode::Incomplete(_)
        | TypeNode::Any => ty.clone(),
        TypeNode::TypeCall(call) => {
            let func = folder.fold_type(call.func());
            let (args, args_changed) = fold_types(folder, call.args());
            if !args_changed && Type::same_node(&func, call.func()) {
                return ty.clone();
            }
            Type::call(func, args)
        }
        TypeNode::Func(func) => {
            let (args, args_changed) = fold_types(folder, func.arg_types());
            let ret = folder.fold_type(func.ret_type());
            let mut constraints_changed = false;
            let constraints: Vec<_> = func
                .type_constraints()
                .iter()
                .map(|rel| {
                    let folded = folder.fold_relation(rel);
                    constraints_changed |= !TypeRelation::same_node(&folded, rel);
                    folded
                })
                .collect();
            if !args_changed && !constraints_changed && Type::same_node(&ret, func.ret_type()) {
                return ty.clone();
            }
            Type::func(args, ret, func.type_params().to_vec(), constraints)
        }
        TypeNode::Tuple(tuple) => {
            let (fields, changed) = fold_types(folder, tuple.fields());
            if !changed {
                return ty.clone();
            }
            Type::tuple(fields)
        }
        TypeNode::Ref(r) => {
            let value = folder.fold_type(r.value());
            if Type::same_node(&value, r.value()) {
                return ty.clone();
            }
            Type::reference(value)
        }
    }
}

pub fn super_fold_relation<F: TypeFolder>(folder: &mut F, rel: &TypeRelation) -> TypeRelation {
    let (args, changed) = fold_types(folder, rel.args());
    if !changed {
        return rel.clone();
    }
    rel.rebuild_args(args)
}

fn fold_types<F: TypeFolder>(folder: &mut F, types: &[Type]) -> (Vec<Type>, bool) {
    let mut changed = false;
    let folded = types
        .iter()
        .map(|ty| {
            let new = folder.fold_type(ty);
            changed |= !Type::same_node(&new, ty);
            new
        })
        .collect();
    (folded, changed)
}
