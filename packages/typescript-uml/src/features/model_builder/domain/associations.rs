//! Association derivation
//!
//! Walks a classified type and yields the names it references:
//! - TypeReference: the reference itself, then its type arguments
//! - ArrayType / TupleType: element types only
//! - Union / Intersection: every branch
//! - everything else: nothing

use crate::shared::models::{Association, PrimaryTypeKind, Type};

/// Referenced entity names in a type, depth-first, duplicates kept
pub fn referenced_names(ty: &Type) -> Vec<&str> {
    let mut names = Vec::new();
    let mut stack = vec![ty];

    while let Some(current) = stack.pop() {
        if let Type::Primary(primary) = current {
            match primary.kind {
                PrimaryTypeKind::TypeReference => {
                    if let Some(name) = primary.name.as_deref() {
                        names.push(name);
                    }
                }
                PrimaryTypeKind::ArrayType | PrimaryTypeKind::TupleType => {}
                // No structured children worth following
                _ => continue,
            }
        }
        // Reverse so children pop in declaration order
        stack.extend(current.children().iter().rev());
    }

    names
}

/// Associations from `owner` to every entity referenced by `ty`
pub fn derive_associations(owner: &str, ty: &Type) -> Vec<Association> {
    referenced_names(ty)
        .into_iter()
        .map(|name| Association::new(owner, name))
        .collect()
}
