//! Recursive translation of resolved type nodes into structural
//! notation text.
//!
//! The walk is pure and total over the closed category set: every arm
//! either yields text or a [`TranslateError`]. Named and alias
//! references emit their identifier and stop the recursion, so the
//! walk strictly descends through sub-nodes and always terminates.

use thiserror::Error;

use crate::ir::{Basic, Field, TupleElem, Ty};

/// Per-declaration recoverable failure. The first one encountered
/// anywhere in a declaration's graph aborts that declaration only,
/// with no partial output; the run continues with the next one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// A category outside the supported set (complex numbers and
    /// whatever else the front end folded into `other`).
    #[error("type is unsupported: {0}")]
    Unsupported(&'static str),
    /// A struct with an anonymous member.
    #[error("embedded fields are not supported")]
    EmbeddedField,
}

/// Map one type node to notation text.
pub fn type_to_notation(ty: &Ty) -> Result<String, TranslateError> {
    match ty {
        Ty::Basic(Basic::Bool) => Ok("bool".to_string()),
        Ty::Basic(Basic::Numeric) => Ok("number".to_string()),
        Ty::Basic(Basic::String) => Ok("string".to_string()),
        Ty::Basic(Basic::Complex) | Ty::Basic(Basic::Other) => {
            Err(TranslateError::Unsupported(ty.label()))
        }
        // Nominal reference: emit the identifier, recursion stops here.
        Ty::Named { name } | Ty::Alias { name } => Ok(name.clone()),
        Ty::Pointer { elem } => Ok(format!("[null | {}]", type_to_notation(elem)?)),
        // Fixed-size arrays and open slices print alike; the length is erased.
        Ty::Array { elem, .. } | Ty::Slice { elem } => {
            Ok(format!("[]{}", type_to_notation(elem)?))
        }
        Ty::Map { key, value } => Ok(format!(
            "Map<{}, {}>",
            type_to_notation(key)?,
            type_to_notation(value)?
        )),
        Ty::Struct { fields } => struct_to_notation(fields),
        Ty::Tuple { elems } => Ok(tuple_to_notation(elems)),
        Ty::Union { terms } => union_to_notation(terms),
    }
}

/// Multi-line brace block, one `  name type` line per field, closing
/// brace unindented. Atomic: the first empty-named or untranslatable
/// field discards the whole struct, never a partial body.
fn struct_to_notation(fields: &[Field]) -> Result<String, TranslateError> {
    let mut out = String::from("{\n");
    for field in fields {
        if field.name.is_empty() {
            return Err(TranslateError::EmbeddedField);
        }
        let value = type_to_notation(&field.ty)?;
        out.push_str("  ");
        out.push_str(&field.name);
        out.push(' ');
        out.push_str(&value);
        out.push('\n');
    }
    out.push('}');
    Ok(out)
}

/// Label-list stub: emits element names only, element types are
/// discarded. Nothing in the current category set produces a tuple
/// node, but the empty case must still come out as `[]`.
fn tuple_to_notation(elems: &[TupleElem]) -> String {
    let names: Vec<&str> = elems.iter().map(|e| e.name.as_str()).collect();
    format!("[{}]", names.join(", "))
}

/// `a | b | c` over the constraint's terms; the first failing term
/// aborts the whole union. An empty term list (malformed input)
/// yields an empty string rather than a panic.
fn union_to_notation(terms: &[Ty]) -> Result<String, TranslateError> {
    let parts = terms
        .iter()
        .map(type_to_notation)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(parts.join(" | "))
}
