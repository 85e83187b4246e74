//! Type utilities for the derive macro.

/// Checks if a type is a recognized scalar primitive.
///
/// Returns `true` for bare primitive type names like `i32`, `bool`, `f64`, etc.
/// Returns `false` for qualified paths, generic types, or type aliases.
///
/// Scalars can never hold a base64 payload, so the derive passes them through
/// without a trait call. Anything not definitively a scalar is walked.
pub(crate) fn is_scalar_type(ty: &syn::Type) -> bool {
    let syn::Type::Path(path) = ty else {
        return false;
    };
    if path.qself.is_some() || path.path.leading_colon.is_some() {
        return false;
    }
    if path.path.segments.len() != 1 {
        return false;
    }
    let Some(segment) = path.path.segments.last() else {
        return false;
    };
    if !segment.arguments.is_empty() {
        return false;
    }
    matches!(
        segment.ident.to_string().as_str(),
        "i8" | "i16"
            | "i32"
            | "i64"
            | "i128"
            | "isize"
            | "u8"
            | "u16"
            | "u32"
            | "u64"
            | "u128"
            | "usize"
            | "f32"
            | "f64"
            | "bool"
            | "char"
    )
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    fn parse_type(tokens: proc_macro2::TokenStream) -> syn::Type {
        syn::parse2(tokens).expect("should parse as Type")
    }

    #[test]
    fn scalar_primitives_detected() {
        for tokens in [quote! { i32 }, quote! { bool }, quote! { char }, quote! { f64 }] {
            assert!(is_scalar_type(&parse_type(tokens)));
        }
    }

    #[test]
    fn string_is_not_scalar() {
        assert!(!is_scalar_type(&parse_type(quote! { String })));
    }

    #[test]
    fn generic_wrapper_is_not_scalar() {
        assert!(!is_scalar_type(&parse_type(quote! { Option<i32> })));
    }

    #[test]
    fn qualified_paths_are_not_scalar() {
        assert!(!is_scalar_type(&parse_type(quote! { std::primitive::i32 })));
        assert!(!is_scalar_type(&parse_type(quote! { ::std::primitive::i32 })));
    }
}
