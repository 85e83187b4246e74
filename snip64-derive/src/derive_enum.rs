//! Enum-specific `Snippable` derivation.
//!
//! This module generates one match arm per variant. Each arm rebuilds the
//! same variant, so variant identity never changes.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{spanned::Spanned, DataEnum, Fields, Result};

use crate::{
    strategy::parse_field_strategy,
    transform::{generate_field_transform, DeriveContext},
};

pub(crate) struct EnumDeriveOutput {
    pub(crate) snip_body: TokenStream,
    pub(crate) used_generics: Vec<Ident>,
}

pub(crate) fn derive_enum(
    name: &Ident,
    data: DataEnum,
    generics: &syn::Generics,
    snippable_path: &TokenStream,
) -> Result<EnumDeriveOutput> {
    let mut arms = Vec::new();
    let mut used_generics = Vec::new();
    let mut ctx = DeriveContext {
        generics,
        snippable_path,
        used_generics: &mut used_generics,
    };

    for variant in data.variants {
        let variant_ident = &variant.ident;
        let arm = match variant.fields {
            Fields::Unit => quote! { #name::#variant_ident => #name::#variant_ident },
            Fields::Named(fields) => {
                let mut bindings = Vec::new();
                let mut transforms = Vec::new();
                for field in fields.named {
                    let span = field.span();
                    let strategy = parse_field_strategy(&field.attrs)?;
                    let ident = field.ident.ok_or_else(|| {
                        syn::Error::new(span, "named field without an identifier")
                    })?;
                    transforms.push(generate_field_transform(
                        &mut ctx, &field.ty, &ident, span, strategy,
                    ));
                    bindings.push(ident);
                }
                quote! {
                    #name::#variant_ident { #(#bindings),* } => {
                        #(#transforms)*
                        #name::#variant_ident { #(#bindings),* }
                    }
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
                    #name::#variant_ident ( #(#bindings),* ) => {
                        #(#transforms)*
                        #name::#variant_ident ( #(#bindings),* )
                    }
                }
            }
        };
        arms.push(arm);
    }

    Ok(EnumDeriveOutput {
        snip_body: quote! {
            match self {
                #(#arms),*
            }
        },
        used_generics,
    })
}
