// Strongly-typed model of the resolved type graph. No serde_json::Value here.

use serde::{Deserialize, Serialize};

/// One node in the closed type-category graph handed over by the
/// front end. Named and alias references carry an identifier only;
/// they never inline the referenced structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ty {
    Basic(Basic),
    Named { name: String },
    Alias { name: String },
    Pointer { elem: Box<Ty> },
    Slice { elem: Box<Ty> },
    Array {
        elem: Box<Ty>,
        len: u64,            // structurally present, erased on output
    },
    Map { key: Box<Ty>, value: Box<Ty> },
    Struct {
        fields: Vec<Field>,  // declaration order, significant
    },
    Tuple { elems: Vec<TupleElem> },
    Union { terms: Vec<Ty> },
}

/// Basic categories. Anything the front end cannot place in the
/// supported set arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Basic {
    Bool,
    Numeric,
    String,
    Complex,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    /// Empty = embedded/anonymous field; poisons the whole struct.
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Ty,
}

/// Tuple elements carry a label only; their types are not part of the
/// output contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TupleElem {
    pub name: String,
}

/// A named top-level declaration, fixed once the provider produces it.
#[derive(Debug, Clone)]
pub struct Decl {
    pub name: String,
    pub ty: Ty,
}

impl Ty {
    /// Short label for error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Ty::Basic(Basic::Bool) => "bool",
            Ty::Basic(Basic::Numeric) => "numeric",
            Ty::Basic(Basic::String) => "string",
            Ty::Basic(Basic::Complex) => "complex",
            Ty::Basic(Basic::Other) => "other",
            Ty::Named { .. } => "named",
            Ty::Alias { .. } => "alias",
            Ty::Pointer { .. } => "pointer",
            Ty::Slice { .. } => "slice",
            Ty::Array { .. } => "array",
            Ty::Map { .. } => "map",
            Ty::Struct { .. } => "struct",
            Ty::Tuple { .. } => "tuple",
            Ty::Union { .. } => "union",
        }
    }
}
