//! Procedural macros for the aoc-solver library

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive the `Solver` trait from a set of `PartSolver<N>` impls
///
/// `#[aoc_solver(max_parts = N)]` is required. The generated `solve_part`
/// sends part `k` (for `1 <= k <= N`) to `<Self as PartSolver<k>>::solve`
/// and answers any other part with `SolveError::PartNotImplemented`.
///
/// ```ignore
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// struct Day1;
///
/// impl AocParser for Day1 { /* ... */ }
/// impl PartSolver<1> for Day1 { /* ... */ }
/// impl PartSolver<2> for Day1 { /* ... */ }
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_aoc_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_aoc_solver(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc_solver"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                name,
                "AocSolver derive macro requires #[aoc_solver(max_parts = N)] attribute",
            )
        })?;

    let mut max_parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            let value: Lit = meta.value()?.parse()?;
            match value {
                Lit::Int(lit_int) => max_parts = Some(lit_int.base10_parse()?),
                other => return Err(syn::Error::new_spanned(other, "max_parts must be an integer")),
            }
            Ok(())
        } else {
            Err(meta.error("unsupported aoc_solver attribute"))
        }
    })?;

    let max_parts = max_parts
        .ok_or_else(|| syn::Error::new_spanned(attr, "missing required 'max_parts' attribute"))?;
    if max_parts == 0 {
        return Err(syn::Error::new_spanned(attr, "max_parts must be at least 1"));
    }

    let arms = (1..=max_parts).map(|part| {
        quote! {
            #part => <Self as ::aoc_solver::PartSolver<#part>>::solve(shared),
        }
    });

    Ok(quote! {
        impl #impl_generics ::aoc_solver::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #max_parts;

            fn solve_part(
                shared: &mut <Self as ::aoc_solver::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::aoc_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::aoc_solver::SolveError::PartNotImplemented(part)),
                }
            }
        }
    })
}

/// Derive macro for automatically registering solvers with the plugin system
///
/// # Attributes
///
/// - `year`: Required. The Advent of Code year (e.g., 2022)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["grid", "parsing"])
///
/// The type must implement the `Solver` trait and be a unit struct, since
/// the plugin holds a `&'static` instance of it.
///
/// ```ignore
/// #[derive(AocSolver, AutoRegisterSolver)]
/// #[aoc_solver(max_parts = 2)]
/// #[aoc(year = 2022, day = 6, tags = ["2022", "strings"])]
/// pub struct TuningTrouble;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_auto_register(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_auto_register(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let aoc_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                name,
                "AutoRegisterSolver derive macro requires #[aoc(...)] attribute",
            )
        })?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    aoc_attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                year = Some(lit_int.base10_parse()?);
            }
        } else if meta.path.is_ident("day") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                day = Some(lit_int.base10_parse()?);
            }
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                let lit: Lit = content.parse()?;
                if let Lit::Str(lit_str) = lit {
                    tags.push(lit_str.value());
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        } else {
            return Err(meta.error("unsupported aoc attribute"));
        }
        Ok(())
    })?;

    let year =
        year.ok_or_else(|| syn::Error::new_spanned(aoc_attr, "missing required 'year' attribute"))?;
    let day =
        day.ok_or_else(|| syn::Error::new_spanned(aoc_attr, "missing required 'day' attribute"))?;
    if !(1..=25).contains(&day) {
        return Err(syn::Error::new_spanned(aoc_attr, "day must be between 1 and 25"));
    }

    let tag_strs = tags.iter().map(String::as_str);

    Ok(quote! {
        const _: () = {
            // Surfaces a readable error when the Solver impl is missing
            trait MustImplementSolver: ::aoc_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::aoc_solver::inventory::submit! {
            ::aoc_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: &[#(#tag_strs),*],
            }
        }
    })
}
