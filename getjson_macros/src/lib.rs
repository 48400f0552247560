//! Derive support for the getjson `ToJson` conversion trait.
//!
//! `#[derive(ToJson)]` covers the two shapes the conversion layer cannot
//! express generically: plain records with named fields, converted to a JSON
//! object keyed by field name in declaration order, and enums made of unit
//! variants, converted to a JSON string holding the variant name.

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DataEnum, DeriveInput, Fields};

#[proc_macro_derive(ToJson)]
pub fn derive_to_json(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let body = match &input.data {
        Data::Struct(data) => record_body(input, &data.fields)?,
        Data::Enum(data) => enum_body(input, data)?,
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "ToJson cannot be derived for unions",
            ))
        }
    };
    Ok(quote! {
        impl #impl_generics ::getjson::json::ToJson for #name #ty_generics #where_clause {
            fn to_json(&self) -> ::getjson::json::JsonValue {
                #body
            }
        }
    })
}

fn record_body(input: &DeriveInput, fields: &Fields) -> syn::Result<proc_macro2::TokenStream> {
    let named = match fields {
        Fields::Named(named) => &named.named,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "ToJson can only be derived for structs with named fields",
            ))
        }
    };
    let pairs = named.iter().filter_map(|field| {
        let ident = field.ident.as_ref()?;
        let key = ident.to_string();
        Some(quote! {
            (#key.to_string(), ::getjson::json::ToJson::to_json(&self.#ident))
        })
    });
    Ok(quote! {
        let fields: ::std::vec::Vec<(::std::string::String, ::getjson::json::JsonValue)> =
            ::std::vec![#(#pairs),*];
        ::getjson::json::JsonValue::object(fields)
    })
}

fn enum_body(input: &DeriveInput, data: &DataEnum) -> syn::Result<proc_macro2::TokenStream> {
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "ToJson cannot be derived for empty enums",
        ));
    }
    let arms = data
        .variants
        .iter()
        .map(|variant| {
            if !matches!(variant.fields, Fields::Unit) {
                return Err(syn::Error::new_spanned(
                    variant,
                    "ToJson enums may only have unit variants",
                ));
            }
            let ident = &variant.ident;
            let name = ident.to_string();
            Ok(quote! {
                Self::#ident => ::getjson::json::JsonValue::String(#name.to_string())
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;
    Ok(quote! {
        match self {
            #(#arms),*
        }
    })
}
