//! Debug printer for types and relations.
//!
//! One `match` on the node tag per node. The field order of every format is a
//! compatibility contract with snapshot tests and external tooling:
//!
//! ```text
//! TensorType([n, 3], float32)
//! TypeVarNode(a, Type)
//! GlobalTypeVarNode(List, AdtHandle)
//! TypeCallNode(<func>, [<args>])
//! IncompleteTypeNode(Type, ?7)
//! FuncTypeNode([<type_params>], [<arg_types>], <ret_type>, [<constraints>])
//! TypeRelationNode(<fn name>, [<args>])
//! TupleTypeNode([<fields>])
//! RefTypeNode(<value>)
//! Any
//! ```

use std::fmt;

use tensorty_core::{Colors, DataType, Role};

use crate::kind::Kind;
use crate::relation::TypeRelation;
use crate::ty::{Type, TypeNode, TypeTag, TypeVar};

/// Renders types and relations as text.
#[derive(Clone, Copy, Debug, Default)]
pub struct TypePrinter {
    colors: Colors,
}

impl TypePrinter {
    pub fn new(colors: Colors) -> Self {
        Self { colors }
    }

    pub fn print_type(&self, ty: &Type) -> String {
        self.display_type(ty).to_string()
    }

    pub fn print_relation(&self, rel: &TypeRelation) -> String {
        self.display_relation(rel).to_string()
    }

    pub fn display_type<'a>(&'a self, ty: &'a Type) -> impl fmt::Display + 'a {
        DisplayType { printer: self, ty }
    }

    pub fn display_relation<'a>(&'a self, rel: &'a TypeRelation) -> impl fmt::Display + 'a {
        DisplayRelation { printer: self, rel }
    }

    fn write_type(&self, w: &mut dyn fmt::Write, ty: &Type) -> fmt::Result {
        match ty.node() {
            TypeNode::Tensor(t) => {
                self.open(w, TypeTag::Tensor.name())?;
                self.write_seq(w, t.shape(), |w, dim| write!(w, "{dim}"))?;
                w.write_str(", ")?;
                self.write_dtype(w, t.dtype())?;
                w.write_char(')')
            }
            TypeNode::TypeVar(v) => {
                self.open(w, TypeTag::TypeVar.name())?;
                self.write_var(w, v.name_hint(), v.kind())
            }
            TypeNode::GlobalTypeVar(v) => {
                self.open(w, TypeTag::GlobalTypeVar.name())?;
                self.write_var(w, v.name_hint(), v.kind())
            }
            TypeNode::TypeCall(call) => {
                self.open(w, TypeTag::TypeCall.name())?;
                self.write_type(w, call.func())?;
                w.write_str(", ")?;
                self.write_types(w, call.args())?;
                w.write_char(')')
            }
            TypeNode::Incomplete(i) => {
                self.open(w, TypeTag::Incomplete.name())?;
                let id = self.colors.paint(Role::Identity, i.id());
                write!(w, "{}, {id})", i.kind())
            }
            TypeNode::Func(func) => {
                self.open(w, TypeTag::Func.name())?;
                self.write_seq(w, func.type_params(), |w, v: &TypeVar| {
                    self.open(w, TypeTag::TypeVar.name())?;
                    self.write_var(w, v.name_hint(), v.kind())
                })?;
                w.write_str(", ")?;
                self.write_types(w, func.arg_types())?;
                w.write_str(", ")?;
                self.write_type(w, func.ret_type())?;
                w.write_str(", ")?;
                self.write_seq(w, func.type_constraints(), |w, rel| {
                    self.write_relation(w, rel)
                })?;
                w.write_char(')')
            }
            TypeNode::Tuple(tuple) => {
                self.open(w, TypeTag::Tuple.name())?;
                self.write_types(w, tuple.fields())?;
                w.write_char(')')
            }
            TypeNode::Ref(r) => {
                self.open(w, TypeTag::Ref.name())?;
                self.write_type(w, r.value())?;
                w.write_char(')')
            }
            TypeNode::Any => {
                write!(w, "{}", self.colors.paint(Role::Node, TypeTag::Any.name()))
            }
        }
    }

    fn write_relation(&self, w: &mut dyn fmt::Write, rel: &TypeRelation) -> fmt::Result {
        self.open(w, "TypeRelationNode")?;
        write!(w, "{}, ", rel.func().name())?;
        self.write_types(w, rel.args())?;
        w.write_char(')')
    }

    /// `Name(` with the name colored.
    fn open(&self, w: &mut dyn fmt::Write, name: &str) -> fmt::Result {
        write!(w, "{}(", self.colors.paint(Role::Node, name))
    }

    fn write_var(&self, w: &mut dyn fmt::Write, name_hint: &str, kind: Kind) -> fmt::Result {
        write!(w, "{name_hint}, {kind})")
    }

    fn write_dtype(&self, w: &mut dyn fmt::Write, dtype: DataType) -> fmt::Result {
        write!(w, "{}", self.colors.paint(Role::DType, dtype))
    }

    fn write_types(&self, w: &mut dyn fmt::Write, types: &[Type]) -> fmt::Result {
        self.write_seq(w, types, |w, ty| self.write_type(w, ty))
    }

    fn write_seq<T>(
        &self,
        w: &mut dyn fmt::Write,
        items: &[T],
        mut write_item: impl FnMut(&mut dyn fmt::Write, &T) -> fmt::Result,
    ) -> fmt::Result {
        w.write_char('[')?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                w.write_str(", ")?;
            }
            write_item(&mut *w, item)?;
        }
        w.write_char(']')
    }
}

struct DisplayType<'a> {
    printer: &'a TypePrinter,
    ty: &'a Type,
}

impl fmt::Display for DisplayType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.printer.write_type(f, self.ty)
    }
}

struct DisplayRelation<'a> {
    printer: &'a TypePrinter,
    rel: &'a TypeRelation,
}

impl fmt::Display for DisplayRelation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.printer.write_relation(f, self.rel)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TypePrinter::default().write_type(f, self)
    }
}

impl fmt::Display for TypeRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TypePrinter::default().write_relation(f, self)
    }
}
