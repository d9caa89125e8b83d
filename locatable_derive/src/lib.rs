// locatable_derive/src/lib.rs

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, FieldsNamed};

fn has_location_field(fields: &FieldsNamed) -> bool {
    fields
        .named
        .iter()
        .any(|f| f.ident.as_ref().map_or(false, |ident| ident == "location"))
}

/// Derives `crate::source_location::Locatable`.
///
/// Structs must have a named `location` field. Enum variants are either
/// newtypes around another `Locatable`, or struct variants with a `location` field.
#[proc_macro_derive(Locatable)]
pub fn derive_locatable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let body = match input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(fields) if has_location_field(fields) => {
                quote! { self.location.clone() }
            }
            _ => {
                return syn::Error::new_spanned(
                    name,
                    "Locatable requires a struct with a named `location` field",
                )
                .to_compile_error()
                .into();
            }
        },
        Data::Enum(data_enum) => {
            let mut arms = Vec::new();
            for variant in &data_enum.variants {
                let variant_ident = &variant.ident;
                let arm = match &variant.fields {
                    // Newtype variant: Variant(inner)
                    Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                        quote! {
                            #name::#variant_ident(inner) => {
                                crate::source_location::Locatable::location(inner)
                            }
                        }
                    }
                    Fields::Named(fields) if has_location_field(fields) => {
                        quote! {
                            #name::#variant_ident { location, .. } => location.clone(),
                        }
                    }
                    _ => {
                        return syn::Error::new_spanned(
                            variant,
                            "Locatable variants must be newtypes or have a `location` field",
                        )
                        .to_compile_error()
                        .into();
                    }
                };
                arms.push(arm);
            }
            quote! {
                match self {
                    #(#arms)*
                }
            }
        }
        Data::Union(_) => {
            return syn::Error::new_spanned(name, "Locatable cannot be derived for unions")
                .to_compile_error()
                .into();
        }
    };

    let expanded = quote! {
        impl #impl_generics crate::source_location::Locatable for #name #ty_generics #where_clause {
            fn location(&self) -> crate::source_location::Location {
                #body
            }
        }
    };

    TokenStream::from(expanded)
}
