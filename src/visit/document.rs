use apollo_compiler::Name;
use apollo_compiler::ast;

/// Observes every type reference in an executable document and decides
/// replacement names.
pub(crate) trait DocumentVisitor {
    /// Offered the name of each type reference. Return the replacement name,
    /// or `None` to keep the reference as is.
    fn named_type_reference(&self, name: &Name) -> Option<Name>;
}

/// Rebuilds `document` with `visitor`'s replacements applied at every type
/// reference position: variable definition types (through list and non-null
/// wrappers), fragment definition type conditions, and inline fragment type
/// conditions.
///
/// The input document is never modified; unaffected nodes stay shared with
/// it.
pub(crate) fn document(visitor: &impl DocumentVisitor, document: &ast::Document) -> ast::Document {
    let mut rewritten = document.clone();
    for definition in &mut rewritten.definitions {
        match definition {
            ast::Definition::OperationDefinition(operation) => {
                let operation = operation.make_mut();
                for variable in &mut operation.variables {
                    rewrite_type(visitor, variable.make_mut().ty.make_mut());
                }
                selection_set(visitor, &mut operation.selection_set);
            }
            ast::Definition::FragmentDefinition(fragment) => {
                let fragment = fragment.make_mut();
                if let Some(renamed) = visitor.named_type_reference(&fragment.type_condition) {
                    fragment.type_condition = renamed;
                }
                selection_set(visitor, &mut fragment.selection_set);
            }
            _ => {}
        }
    }
    rewritten
}

fn selection_set(visitor: &impl DocumentVisitor, selections: &mut [ast::Selection]) {
    for selection in selections {
        match selection {
            ast::Selection::Field(field) => {
                selection_set(visitor, &mut field.make_mut().selection_set);
            }
            ast::Selection::InlineFragment(inline) => {
                let inline = inline.make_mut();
                if let Some(condition) = &mut inline.type_condition {
                    if let Some(renamed) = visitor.named_type_reference(condition) {
                        *condition = renamed;
                    }
                }
                selection_set(visitor, &mut inline.selection_set);
            }
            ast::Selection::FragmentSpread(_) => {}
        }
    }
}

fn rewrite_type(visitor: &impl DocumentVisitor, ty: &mut ast::Type) {
    match ty {
        ast::Type::Named(name) | ast::Type::NonNullNamed(name) => {
            if let Some(renamed) = visitor.named_type_reference(name) {
                *name = renamed;
            }
        }
        ast::Type::List(inner) | ast::Type::NonNullList(inner) => rewrite_type(visitor, inner),
    }
}
