//! Procedural macros for the `impact_shader_vector` crate.

mod swizzle;

use proc_macro::TokenStream;
use syn::parse_macro_input;

/// Generates the named component accessors and swizzles for the vector type
/// of the given arity (2, 3 or 4).
///
/// For every component family valid at the arity (`xyzw`, `rgba`, `XYZW`,
/// `RGBA`) this emits
/// - `x()` and `x_mut()` for each single component,
/// - a read accessor (`zzy()`) for every selection of 2 to 4 components,
///   repeated components included,
/// - an additional `*_mut()` accessor returning a `SwizzleMut` view for every
///   selection whose components are pairwise distinct.
///
/// The expansion refers to `crate::Vector` and `crate::SwizzleMut`, so the
/// macro is only usable from inside `impact_shader_vector`.
#[proc_macro]
pub fn impl_swizzles(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as swizzle::SwizzlesInput);
    swizzle::impl_swizzles(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
