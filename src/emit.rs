//! Declaration enumeration: walk the provider's declarations in
//! order, translate each one, and assemble the output text.

use crate::ir::Decl;
use crate::translate::{TranslateError, type_to_notation};

/// Render every translatable declaration as a `type N = V` block,
/// silently dropping the ones that fail. Provider order (ascending by
/// name) is the output order; nothing is reordered here.
pub fn render_declarations(decls: &[Decl]) -> String {
    render_declarations_with(decls, |_, _| {})
}

/// Same as [`render_declarations`], with an observer invoked once per
/// dropped declaration. The rendered text is byte-identical either
/// way; the observer exists so a diagnostic layer can sit on top
/// without changing the skip-and-continue contract.
pub fn render_declarations_with(
    decls: &[Decl],
    mut on_skip: impl FnMut(&Decl, &TranslateError),
) -> String {
    let mut out = String::new();
    for decl in decls {
        match type_to_notation(&decl.ty) {
            Ok(value) => {
                out.push_str("type ");
                out.push_str(&decl.name);
                out.push_str(" = ");
                out.push_str(&value);
                out.push('\n');
            }
            Err(err) => on_skip(decl, &err),
        }
    }
    out
}
