//! Resolved-type provider: loads the serialized module document and
//! produces the fixed, name-ordered declaration sequence.
//!
//! The document stands in for parsing and static resolution of the
//! source module, so every failure here is fatal; recoverable
//! (per-declaration) failures only exist downstream in `translate`.

use std::collections::BTreeSet;

use anyhow::{Context, Result, bail};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::ir::{Decl, Ty};

/// Top-level shape of the provider document: the front end's scope is
/// a name-keyed map, and this is its serialization. Document order is
/// irrelevant; [`load_decls`] freezes ascending name order.
#[derive(Debug, Deserialize)]
pub struct ModuleDoc {
    pub declarations: IndexMap<String, Ty>,
}

/// Decode `src`, validate it, and freeze the declaration order.
pub fn load_decls(src: &str) -> Result<Vec<Decl>> {
    let doc = decode_with_path(src)?;
    let mut decls: Vec<Decl> = doc
        .declarations
        .into_iter()
        .map(|(name, ty)| Decl { name, ty })
        .collect();
    if decls.iter().any(|d| d.name.is_empty()) {
        bail!("module document declares a type with an empty name");
    }
    decls.sort_by(|a, b| a.name.cmp(&b.name));
    resolve_references(&decls)?;
    Ok(decls)
}

/// Deserialize with JSON-path context in error messages.
fn decode_with_path(src: &str) -> Result<ModuleDoc> {
    let de = &mut serde_json::Deserializer::from_str(src);
    match serde_path_to_error::deserialize::<_, ModuleDoc>(de) {
        Ok(doc) => Ok(doc),
        Err(err) => {
            let path = err.path().to_string();
            bail!("module document does not decode: at JSON path {path} → {}", err.into_inner())
        }
    }
}

/// Stand-in for static name resolution: every named/alias identifier
/// must point at a declared type. Whether the target later proves
/// translatable is not resolution's business.
fn resolve_references(decls: &[Decl]) -> Result<()> {
    let declared: BTreeSet<&str> = decls.iter().map(|d| d.name.as_str()).collect();
    for decl in decls {
        check_refs(&decl.ty, &declared)
            .with_context(|| format!("in declaration `{}`", decl.name))?;
    }
    Ok(())
}

fn check_refs(ty: &Ty, declared: &BTreeSet<&str>) -> Result<()> {
    match ty {
        Ty::Named { name } | Ty::Alias { name } => {
            if !declared.contains(name.as_str()) {
                bail!("reference to undeclared type `{name}`");
            }
            Ok(())
        }
        Ty::Pointer { elem } | Ty::Slice { elem } | Ty::Array { elem, .. } => {
            check_refs(elem, declared)
        }
        Ty::Map { key, value } => {
            check_refs(key, declared)?;
            check_refs(value, declared)
        }
        Ty::Struct { fields } => fields.iter().try_for_each(|f| check_refs(&f.ty, declared)),
        Ty::Union { terms } => terms.iter().try_for_each(|t| check_refs(t, declared)),
        // basics carry no references; tuple elements carry labels only
        Ty::Basic(_) | Ty::Tuple { .. } => Ok(()),
    }
}
