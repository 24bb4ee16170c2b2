//! Generation of swizzle accessors.

use proc_macro2::{Ident, Literal, Span, TokenStream};
use quote::quote;
use syn::{
    LitInt, Result,
    parse::{Parse, ParseStream},
};

const MAX_ARITY: usize = 4;

/// Component names of each family, in index order.
const FAMILIES: [[char; MAX_ARITY]; 4] = [
    ['x', 'y', 'z', 'w'],
    ['r', 'g', 'b', 'a'],
    ['X', 'Y', 'Z', 'W'],
    ['R', 'G', 'B', 'A'],
];

pub(crate) struct SwizzlesInput {
    arity: usize,
    span: Span,
}

pub(crate) fn impl_swizzles(input: SwizzlesInput) -> Result<TokenStream> {
    let arity = input.arity;

    if !(2..=MAX_ARITY).contains(&arity) {
        return Err(syn::Error::new(
            input.span,
            format!("swizzles are only defined for arities 2 to {MAX_ARITY}, not {arity}"),
        ));
    }

    let arity_lit = Literal::usize_unsuffixed(arity);

    let mut methods = Vec::new();

    for family in &FAMILIES {
        let names = &family[..arity];

        for (index, &name) in names.iter().enumerate() {
            methods.push(component_accessors(name, index));
        }

        for len in 2..=MAX_ARITY {
            for indices in selections(arity, len) {
                methods.push(swizzle_accessors(names, &indices, &arity_lit));
            }
        }
    }

    Ok(quote! {
        #[allow(non_snake_case)]
        impl crate::Vector<#arity_lit> {
            #(#methods)*
        }
    })
}

fn component_accessors(name: char, index: usize) -> TokenStream {
    let getter = Ident::new(&name.to_string(), Span::call_site());
    let getter_mut = Ident::new(&format!("{name}_mut"), Span::call_site());
    let index = Literal::usize_unsuffixed(index);

    let doc = format!("The `{name}`-component.");
    let doc_mut = format!("A mutable reference to the `{name}`-component.");

    quote! {
        #[doc = #doc]
        #[inline]
        pub fn #getter(&self) -> f64 {
            self[#index]
        }

        #[doc = #doc_mut]
        #[inline]
        pub fn #getter_mut(&mut self) -> &mut f64 {
            &mut self[#index]
        }
    }
}

fn swizzle_accessors(names: &[char], indices: &[usize], arity_lit: &Literal) -> TokenStream {
    let name: String = indices.iter().map(|&index| names[index]).collect();
    let len = Literal::usize_unsuffixed(indices.len());
    let index_lits = indices.iter().map(|&index| Literal::usize_unsuffixed(index));

    let getter = Ident::new(&name, Span::call_site());
    let doc = format!(
        "The `{name}` swizzle: components {indices:?} as a new {}-component vector.",
        indices.len()
    );

    let read = quote! {
        #[doc = #doc]
        #[inline]
        pub fn #getter(&self) -> crate::Vector<#len> {
            self.swizzle([#(#index_lits),*])
        }
    };

    if !all_distinct(indices) {
        return read;
    }

    let getter_mut = Ident::new(&format!("{name}_mut"), Span::call_site());
    let index_lits = indices.iter().map(|&index| Literal::usize_unsuffixed(index));
    let doc_mut = format!("An assignable view of the `{name}` swizzle.");

    quote! {
        #read

        #[doc = #doc_mut]
        #[inline]
        pub fn #getter_mut(&mut self) -> crate::SwizzleMut<'_, #arity_lit, #len> {
            crate::SwizzleMut::new_unchecked(self, [#(#index_lits),*])
        }
    }
}

/// All sequences of `len` indices below `arity`, repetition allowed, in
/// lexicographic order.
fn selections(arity: usize, len: usize) -> Vec<Vec<usize>> {
    let mut selections = vec![Vec::new()];
    for _ in 0..len {
        selections = selections
            .into_iter()
            .flat_map(|prefix| {
                (0..arity).map(move |index| {
                    let mut selection = prefix.clone();
                    selection.push(index);
                    selection
                })
            })
            .collect();
    }
    selections
}

fn all_distinct(indices: &[usize]) -> bool {
    indices
        .iter()
        .enumerate()
        .all(|(i, index)| !indices[..i].contains(index))
}

impl Parse for SwizzlesInput {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let lit: LitInt = input.parse()?;
        Ok(Self {
            arity: lit.base10_parse()?,
            span: lit.span(),
        })
    }
}
