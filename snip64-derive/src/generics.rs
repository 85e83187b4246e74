//! Generic type parameter handling and trait bound management.
//!
//! Bounds are only added for generics that appear in walked fields.
//!
//! ## PhantomData Handling
//!
//! `PhantomData<T>` is skipped when collecting generics, and the runtime crate
//! has no `Snippable` impl for it, so such fields should carry `#[snip(skip)]`:
//!
//! ```ignore
//! struct TypedUpload<T> {
//!     body: String,
//!     #[snip(skip)]
//!     _marker: PhantomData<T>,  // T must NOT require Snippable
//! }
//! ```

use syn::{parse_quote, Ident};

use crate::crate_path;

pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    match ty {
        syn::Type::Path(path) => {
            let Some(segment) = path.path.segments.last() else {
                return;
            };
            if segment.ident == "PhantomData" {
                return;
            }

            for ty_segment in &path.path.segments {
                if let syn::PathArguments::AngleBracketed(args) = &ty_segment.arguments {
                    for arg in &args.args {
                        if let syn::GenericArgument::Type(inner_ty) = arg {
                            collect_generics_from_type(inner_ty, generics, result);
                        }
                    }
                }
            }

            if path.path.segments.len() == 1 {
                for param in generics.type_params() {
                    if segment.ident == param.ident && !result.iter().any(|g| g == &param.ident) {
                        result.push(param.ident.clone());
                    }
                }
            }
        }
        syn::Type::Paren(inner) => collect_generics_from_type(&inner.elem, generics, result),
        syn::Type::Group(inner) => collect_generics_from_type(&inner.elem, generics, result),
        _ => {}
    }
}

/// Adds `Snippable` bounds to generic parameters used in walked fields.
pub(crate) fn add_snippable_bounds(
    mut generics: syn::Generics,
    used_generics: &[Ident],
) -> syn::Generics {
    let snippable_path = crate_path("Snippable");
    for param in generics.type_params_mut() {
        if used_generics.iter().any(|g| g == &param.ident) {
            param.bounds.push(parse_quote!(#snippable_path));
        }
    }
    generics
}
