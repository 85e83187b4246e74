//! Struct-specific `Snippable` derivation.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{spanned::Spanned, DataStruct, Fields, Result};

use crate::{
    strategy::parse_field_strategy,
    transform::{generate_field_transform, DeriveContext},
};

pub(crate) struct StructDeriveOutput {
    pub(crate) snip_body: TokenStream,
    pub(crate) used_generics: Vec<Ident>,
}

pub(crate) fn derive_struct(
    data: DataStruct,
    generics: &syn::Generics,
    snippable_path: &TokenStream,
) -> Result<StructDeriveOutput> {
    let mut used_generics = Vec::new();
    let mut ctx = DeriveContext {
        generics,
        snippable_path,
        used_generics: &mut used_generics,
    };

    let snip_body = match data.fields {
        Fields::Named(fields) => {
            let mut bindings = Vec::new();
            let mut transforms = Vec::new();
            for field in fields.named {
                let span = field.span();
                let strategy = parse_field_strategy(&field.attrs)?;
                let ident = field
                    .ident
                    .ok_or_else(|| syn::Error::new(span, "named field without an identifier"))?;
                transforms.push(generate_field_transform(
                    &mut ctx, &field.ty, &ident, span, strategy,
                ));
                bindings.push(ident);
            }
            quote! {
                let Self { #(#bindings),* } = self;
                #(#transforms)*
                Self { #(#bindings),* }
            }
        }
        Fields::Unnamed(fields) => {
            let mut bindings = Vec::new();
            let mut transforms = Vec::new();
            for (index, field) in fields.unnamed.into_iter().enumerate() {
                let span = field.span();
                let strategy = parse_field_strategy(&field.attrs)?;
                let ident = format_ident!("field_{index}");
                transforms.push(generate_field_transform(
                    &mut ctx, &field.ty, &ident, span, strategy,
                ));
                bindings.push(ident);
            }
            quote! {
                let Self ( #(#bindings),* ) = self;
                #(#transforms)*
                Self ( #(#bindings),* )
            }
        }
        Fields::Unit => quote! { self },
    };

    Ok(StructDeriveOutput {
        snip_body,
        used_generics,
    })
}
