use tensorty_core::DataType;

use crate::kind::Kind;
use crate::subst::Substitution;
use crate::ty::{IncompleteType, Type, TypeVar};

#[test]
fn binding_is_by_identity_not_name() {
    let v1 = TypeVar::new("a", Kind::Type);
    let v2 = TypeVar::new("a", Kind::Type);
    let ty = Type::tuple(vec![Type::from(v1.clone()), Type::from(v2.clone())]);

    let mut subst = Substitution::new();
    subst.bind_var(&v1, Type::scalar(DataType::INT32));

    let applied = subst.apply(&ty);
    let fields = applied.as_tuple().unwrap().fields();
    assert_eq!(fields[0], Type::scalar(DataType::INT32));
    assert_eq!(fields[1], Type::from(v2));
}

#[test]
fn placeholder_resolution_leaves_node_intact() {
    let hole = IncompleteType::new(Kind::Type);
    let ty = Type::reference(Type::from(hole.clone()));

    let mut subst = Substitution::new();
    subst.bind_incomplete(&hole, Type::scalar(DataType::FLOAT32));

    insta::assert_snapshot!(subst.apply(&ty), @"RefTypeNode(TensorType([], float32))");
    assert!(ty.as_ref_type().unwrap().value().as_incomplete().is_some());
}

#[test]
fn chains_are_followed() {
    let a = IncompleteType::new(Kind::Type);
    let b = IncompleteType::new(Kind::Type);

    let mut subst = Substitution::new();
    subst.bind_incomplete(&a, Type::from(b.clone()));
    subst.bind_incomplete(&b, Type::scalar(DataType::BOOL));

    assert_eq!(subst.resolve(&Type::from(a)), Type::scalar(DataType::BOOL));
    assert_eq!(subst.len(), 2);
}

#[test]
fn bound_types_are_applied_deeply() {
    let a = IncompleteType::new(Kind::Type);
    let b = IncompleteType::new(Kind::Type);

    let mut subst = Substitution::new();
    subst.bind_incomplete(&a, Type::tuple(vec![Type::from(b.clone())]));
    subst.bind_incomplete(&b, Type::any());

    insta::assert_snapshot!(subst.apply(&Type::from(a)), @"TupleTypeNode([Any])");
}

#[test]
fn self_binding_is_ignored() {
    let a = TypeVar::new("a", Kind::Type);
    let mut subst = Substitution::new();
    subst.bind_var(&a, Type::from(a.clone()));

    assert!(subst.is_empty());
}

#[test]
fn cycles_terminate() {
    let a = IncompleteType::new(Kind::Type);
    let b = IncompleteType::new(Kind::Type);

    let mut subst = Substitution::new();
    subst.bind_incomplete(&a, Type::from(b.clone()));
    subst.bind_incomplete(&b, Type::from(a.clone()));
    let _ = subst.resolve(&Type::from(a.clone()));

    let list = Type::global_var("List", Kind::AdtHandle);
    let c = IncompleteType::new(Kind::Type);
    subst.bind_incomplete(&c, Type::call(list, vec![Type::from(c.clone())]));
    let applied = subst.apply(&Type::from(c));
    assert!(applied.as_type_call().is_some());
}

#[test]
fn unbound_types_pass_through() {
    let subst = Substitution::new();
    let ty = Type::tuple(vec![Type::incomplete(Kind::Type)]);

    assert!(Type::same_node(&subst.apply(&ty), &ty));
    assert_eq!(subst.lookup(ty.as_tuple().unwrap().fields()[0].var_id().unwrap()), None);
}

#[test]
fn global_vars_bind_by_identity() {
    let g1 = crate::ty::GlobalTypeVar::new("T", Kind::Type);
    let g2 = crate::ty::GlobalTypeVar::new("T", Kind::Type);

    let mut subst = Substitution::new();
    subst.bind_global(&g1, Type::any());

    assert_eq!(subst.apply(&Type::from(g1)), Type::any());
    assert_eq!(subst.apply(&Type::from(g2.clone())), Type::from(g2));
}

#[test]
fn type_params_are_untouched_inside_their_binder() {
    let a = TypeVar::new("a", Kind::Type);
    let hole = IncompleteType::new(Kind::Type);
    let identity = Type::func(
        vec![Type::from(a.clone())],
        Type::from(a.clone()),
        vec![a.clone()],
        vec![],
    );
    let ty = Type::tuple(vec![
        identity.clone(),
        Type::from(a.clone()),
        Type::from(hole.clone()),
    ]);

    let mut subst = Substitution::new();
    subst.bind_var(&a, Type::scalar(DataType::INT32));
    subst.bind_incomplete(&hole, identity.clone());

    let applied = subst.apply(&ty);
    let fields = applied.as_tuple().unwrap().fields();
    // The generic keeps its parameter; the free occurrence outside it is replaced.
    assert!(Type::same_node(&fields[0], &identity));
    assert_eq!(fields[1], Type::scalar(DataType::INT32));
    assert_eq!(fields[2], identity);

    // Instantiation goes through the signature, not the binder.
    let func = identity.as_func().unwrap();
    insta::assert_snapshot!(subst.apply(&func.arg_types()[0]), @"TensorType([], int32)");
    insta::assert_snapshot!(subst.apply(func.ret_type()), @"TensorType([], int32)");
}
