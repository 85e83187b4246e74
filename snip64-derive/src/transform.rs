//! Shared field transformation logic for struct and enum derivation.

use proc_macro2::{Ident, Span, TokenStream};
use quote::quote_spanned;

use crate::{generics::collect_generics_from_type, strategy::Strategy, types::is_scalar_type};

/// Accumulated state during field processing.
pub(crate) struct DeriveContext<'a> {
    pub(crate) generics: &'a syn::Generics,
    pub(crate) snippable_path: &'a TokenStream,
    pub(crate) used_generics: &'a mut Vec<Ident>,
}

/// Generates the transform token stream for a single field.
///
/// | Strategy | Field type | Behavior |
/// |----------|------------|----------|
/// | `Skip` | any | Pass through unchanged, no bounds |
/// | `Walk` | primitive scalar | Pass through unchanged, no bounds |
/// | `Walk` | anything else | `Snippable::snip_with` |
pub(crate) fn generate_field_transform(
    ctx: &mut DeriveContext<'_>,
    ty: &syn::Type,
    binding: &Ident,
    span: Span,
    strategy: Strategy,
) -> TokenStream {
    let snippable_path = ctx.snippable_path;

    match strategy {
        // Pass-through fields keep their destructured binding as is.
        Strategy::Skip => TokenStream::new(),
        Strategy::Walk if is_scalar_type(ty) => TokenStream::new(),
        Strategy::Walk => {
            collect_generics_from_type(ty, ctx.generics, ctx.used_generics);
            quote_spanned! { span =>
                let #binding = #snippable_path::snip_with(#binding, __snip64_redactor);
            }
        }
    }
}
