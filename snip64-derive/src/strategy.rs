//! Parsing of `#[snip(...)]` attributes.
//!
//! This module maps attribute syntax to traversal decisions and produces
//! structured errors for invalid forms.

use proc_macro2::Span;
use syn::{spanned::Spanned, Attribute, Meta, Result};

/// Field traversal strategy based on `#[snip(...)]` attributes.
///
/// | Attribute | Strategy | Behavior |
/// |-----------|----------|----------|
/// | None | `Walk` | Field is walked with `Snippable` |
/// | `#[snip]` | `Walk` | Same as no annotation |
/// | `#[snip(skip)]` | `Skip` | Field passes through unchanged |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Strategy {
    /// Walk the field; string leaves inside it may be snipped.
    Walk,
    /// Pass the field through unchanged.
    ///
    /// External types without a `Snippable` impl need this.
    Skip,
}

fn set_strategy(target: &mut Option<Strategy>, next: Strategy, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "multiple #[snip] attributes specified on the same field",
        ));
    }
    *target = Some(next);
    Ok(())
}

pub(crate) fn parse_field_strategy(attrs: &[Attribute]) -> Result<Strategy> {
    let mut strategy: Option<Strategy> = None;
    for attr in attrs {
        if !attr.path().is_ident("snip") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                set_strategy(&mut strategy, Strategy::Walk, attr.span())?;
            }
            Meta::List(list) => {
                let mut parsed = None;
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("skip") {
                        set_strategy(&mut parsed, Strategy::Skip, attr.span())
                    } else {
                        Err(meta.error(format!(
                            "unknown field option `{}`; expected `skip`",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )))
                    }
                })?;
                if let Some(next) = parsed {
                    set_strategy(&mut strategy, next, attr.span())?;
                }
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "name-value syntax is not supported for #[snip]",
                ));
            }
        }
    }

    Ok(strategy.unwrap_or(Strategy::Walk))
}

/// Container-level `#[snip]` has no options; any use of it is an error.
pub(crate) fn reject_container_attrs(attrs: &[Attribute]) -> Result<()> {
    match attrs.iter().find(|attr| attr.path().is_ident("snip")) {
        Some(attr) => Err(syn::Error::new(
            attr.span(),
            "#[snip] is only supported on fields",
        )),
        None => Ok(()),
    }
}
