//! Implementation of the `#[derive(Linked)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Index, Member, parse_macro_input};

const LINK_ATTRIBUTE: &str = "link";

/// Main implementation of the Linked derive macro.
pub fn derive_linked_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let expanded = expand(&input).unwrap_or_else(syn::Error::into_compile_error);
    TokenStream::from(expanded)
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let member = link_member(input)?;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::lambdacraft::sequence::Linked for #name #type_generics #where_clause {
            #[inline]
            fn link(&self) -> ::core::option::Option<&Self> {
                ::core::option::Option::as_deref(&self.#member)
            }

            #[inline]
            fn take_link(&mut self) -> ::core::option::Option<::std::boxed::Box<Self>> {
                ::core::option::Option::take(&mut self.#member)
            }
        }
    })
}

/// Locates the single field marked `#[link]`.
fn link_member(input: &DeriveInput) -> syn::Result<Member> {
    let fields = match &input.data {
        Data::Struct(data_struct) => &data_struct.fields,
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Linked can only be derived for structs, not enums.",
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Linked cannot be derived for unions.",
            ));
        }
    };

    if matches!(fields, Fields::Unit) {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Linked cannot be derived for unit structs: mark an `Option<Box<Self>>` field with #[link].",
        ));
    }

    let mut marked = fields.iter().enumerate().filter(|(_, field)| {
        field
            .attrs
            .iter()
            .any(|attribute| attribute.path().is_ident(LINK_ATTRIBUTE))
    });

    let Some((position, field)) = marked.next() else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Linked requires one field marked #[link] holding the successor (`Option<Box<Self>>`).",
        ));
    };

    if let Some((_, duplicate)) = marked.next() {
        return Err(syn::Error::new_spanned(
            duplicate,
            "Only one field may be marked #[link].",
        ));
    }

    Ok(field.ident.clone().map_or_else(
        || Member::Unnamed(Index::from(position)),
        Member::Named,
    ))
}
