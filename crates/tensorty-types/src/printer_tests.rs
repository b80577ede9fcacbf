use tensorty_core::{Colors, DataType, PrimExpr};

use crate::attrs::Attrs;
use crate::kind::Kind;
use crate::printer::TypePrinter;
use crate::relation::{RelationOutcome, TypeRelation, TypeRelationFn};
use crate::ty::{Type, TypeVar};

fn broadcast() -> TypeRelationFn {
    TypeRelationFn::new("Broadcast", |_, _, _, _| RelationOutcome::Indeterminate)
}

#[test]
fn tensor_type() {
    let n = PrimExpr::var("n");
    let ty = Type::tensor(vec![n, PrimExpr::int(3)], DataType::FLOAT32).unwrap();

    insta::assert_snapshot!(ty, @"TensorType([n, 3], float32)");
}

#[test]
fn scalar_tensor_type() {
    insta::assert_snapshot!(Type::scalar(DataType::BOOL), @"TensorType([], bool)");
}

#[test]
fn any_dimension() {
    let ty = Type::tensor(vec![PrimExpr::any(), PrimExpr::int(4)], DataType::INT64).unwrap();

    insta::assert_snapshot!(ty, @"TensorType([?, 4], int64)");
}

#[test]
fn type_vars() {
    insta::assert_snapshot!(Type::var("a", Kind::Type), @"TypeVarNode(a, Type)");
    insta::assert_snapshot!(Type::var("n", Kind::ShapeVar), @"TypeVarNode(n, ShapeVar)");
    insta::assert_snapshot!(
        Type::global_var("List", Kind::AdtHandle),
        @"GlobalTypeVarNode(List, AdtHandle)"
    );
}

#[test]
fn type_call() {
    let list = Type::global_var("List", Kind::AdtHandle);
    let ty = Type::call(list, vec![Type::scalar(DataType::FLOAT32)]);

    insta::assert_snapshot!(ty, @"TypeCallNode(GlobalTypeVarNode(List, AdtHandle), [TensorType([], float32)])");
}

#[test]
fn incomplete_type_shows_identity() {
    let hole = Type::incomplete(Kind::Type);
    let id = hole.var_id().unwrap();

    assert_eq!(hole.to_string(), format!("IncompleteTypeNode(Type, ?{})", id.as_u64()));
}

#[test]
fn func_type_field_order() {
    let a = TypeVar::new("a", Kind::Type);
    let out = Type::incomplete(Kind::Type);
    let rel = TypeRelation::new(
        broadcast(),
        vec![Type::from(a.clone()), Type::from(a.clone()), out.clone()],
        2,
        Attrs::new(),
    )
    .unwrap();
    let ty = Type::func(
        vec![Type::from(a.clone()), Type::from(a.clone())],
        out.clone(),
        vec![a],
        vec![rel],
    );

    let out = out.to_string();
    assert_eq!(
        ty.to_string(),
        format!(
            "FuncTypeNode([TypeVarNode(a, Type)], [TypeVarNode(a, Type), TypeVarNode(a, Type)], \
             {out}, [TypeRelationNode(Broadcast, [TypeVarNode(a, Type), TypeVarNode(a, Type), {out}])])"
        )
    );
}

#[test]
fn empty_sequences_render_as_brackets() {
    let ty = Type::func(vec![], Type::tuple(vec![]), vec![], vec![]);

    insta::assert_snapshot!(ty, @"FuncTypeNode([], [], TupleTypeNode([]), [])");
}

#[test]
fn tuple_and_ref() {
    let f32 = Type::scalar(DataType::FLOAT32);
    let ty = Type::tuple(vec![f32.clone(), Type::reference(f32), Type::any()]);

    insta::assert_snapshot!(ty, @"TupleTypeNode([TensorType([], float32), RefTypeNode(TensorType([], float32)), Any])");
}

#[test]
fn relation() {
    let rel = TypeRelation::new(
        broadcast(),
        vec![Type::scalar(DataType::INT32), Type::any()],
        1,
        Attrs::new().with("axis", 0i64),
    )
    .unwrap();

    insta::assert_snapshot!(rel, @"TypeRelationNode(Broadcast, [TensorType([], int32), Any])");
    assert_eq!(TypePrinter::default().print_relation(&rel), rel.to_string());
}

#[test]
fn symbolic_size_in_shape() {
    let m = PrimExpr::var("m");
    let n = PrimExpr::var("n");
    let ty = Type::tensor(vec![m * n, PrimExpr::const_int(8, DataType::INT64)], DataType::FLOAT32)
        .unwrap();

    insta::assert_snapshot!(ty, @"TensorType([(m*n), (int64)8], float32)");
}

#[test]
fn printing_is_deterministic() {
    let a = TypeVar::new("a", Kind::Type);
    let ty = Type::func(
        vec![Type::from(a.clone())],
        Type::tuple(vec![Type::from(a.clone()), Type::incomplete(Kind::Shape)]),
        vec![a],
        vec![],
    );
    let printer = TypePrinter::default();

    let first = printer.print_type(&ty);
    let second = printer.print_type(&ty);
    assert_eq!(first, second);
    assert_eq!(first, ty.to_string());
    assert_eq!(format!("{ty:?}"), first);
}

#[test]
fn colors_wrap_names_and_dtypes() {
    let printer = TypePrinter::new(Colors::ON);
    let ty = Type::tuple(vec![Type::scalar(DataType::FLOAT32)]);

    assert_eq!(
        printer.print_type(&ty),
        "\x1b[34mTupleTypeNode\x1b[0m([\x1b[34mTensorType\x1b[0m([], \x1b[32mfloat32\x1b[0m)])"
    );
}

#[test]
fn colors_off_matches_display() {
    let ty = Type::reference(Type::any());
    assert_eq!(TypePrinter::new(Colors::OFF).print_type(&ty), ty.to_string());
    assert_eq!(
        TypePrinter::default().display_type(&ty).to_string(),
        "RefTypeNode(Any)"
    );
}
