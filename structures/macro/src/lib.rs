use proc_macro::{self, TokenStream};
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

const STORAGE_FIELD: &str = "storage";

/// Implement `Container` for a struct by delegating to its `storage` field
#[proc_macro_derive(Container)]
pub fn derive(input: TokenStream) -> TokenStream {
    let DeriveInput {
        ident,
        generics,
        data,
        ..
    } = parse_macro_input!(input);

    match &data {
        syn::Data::Struct(struct_data) => {
            let has_storage = match &struct_data.fields {
                syn::Fields::Named(fields) => fields.named.iter().any(|f| {
                    f.ident.as_ref().map_or(false, |i| i == STORAGE_FIELD)
                }),
                _ => false,
            };
            if !has_storage {
                panic!("`Container` needs a named `storage` field");
            }
        }
        _ => panic!("`Container` has to be used with structs"),
    }

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let output = quote! {
        impl #impl_generics Container for #ident #ty_generics #where_clause {
            fn len(&self) -> usize {
                self.storage.len()
            }

            fn is_empty(&self) -> bool {
                self.storage.is_empty()
            }
        }
    };
    output.into()
}
