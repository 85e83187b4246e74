//! Derive macros for `snip64`.
//!
//! This crate generates the traversal code behind `#[derive(Snippable)]`. It:
//! - reads `#[snip(...)]` field attributes
//! - emits a `Snippable` implementation that walks every field with the
//!   caller's `Redactor`
//!
//! It does **not** detect or format base64 payloads. That lives in the main
//! `snip64` crate and runs at runtime.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod derive_enum;
mod derive_struct;
mod generics;
mod strategy;
mod transform;
mod types;
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::add_snippable_bounds;
use strategy::reject_container_attrs;

/// Derives `snip64::Snippable` for structs and enums.
///
/// # Field Attributes
///
/// - **No annotation**: the field is walked with `Snippable::snip_with`.
///   `String` fields are snipped, containers recurse, nested types that derive
///   `Snippable` are walked. Bare primitive scalars (`i32`, `bool`, ...) pass
///   through without requiring a trait bound.
///
/// - `#[snip(skip)]`: the field passes through unchanged. Use this for
///   external types that do not implement `Snippable`, such as
///   `chrono::DateTime` or `PhantomData<T>`.
///
/// Container-level `#[snip]` attributes and unions are rejected at compile
/// time.
///
/// # Generics
///
/// Type parameters that appear in walked fields receive a `Snippable` bound.
/// Parameters used only in skipped fields or inside `PhantomData` do not.
#[proc_macro_derive(Snippable, attributes(snip))]
pub fn derive_snippable(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the snip64 crate root.
///
/// Handles crate renaming (e.g., `my_snip = { package = "snip64", ... }`)
/// and internal usage (when derive is used inside the snip64 crate itself).
fn crate_root() -> TokenStream {
    match crate_name("snip64") {
        Ok(FoundCrate::Itself) => quote! { crate },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::snip64 },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_ident = format_ident!("{}", item);
    quote! { #root::#item_ident }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    reject_container_attrs(&attrs)?;

    let crate_root = crate_root();
    let snippable_path = crate_path("Snippable");

    let (snip_body, used_generics) = match data {
        Data::Struct(data) => {
            let output = derive_struct(data, &generics, &snippable_path)?;
            (output.snip_body, output.used_generics)
        }
        Data::Enum(data) => {
            let output = derive_enum(&ident, data, &generics, &snippable_path)?;
            (output.snip_body, output.used_generics)
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Snippable` cannot be derived for unions",
            ));
        }
    };

    let snip_generics = add_snippable_bounds(generics, &used_generics);
    let (impl_generics, ty_generics, where_clause) = snip_generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #snippable_path for #ident #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn snip_with(self, __snip64_redactor: &#crate_root::Redactor) -> Self {
                #snip_body
            }
        }
    })
}
