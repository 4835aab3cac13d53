use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream}, parse_macro_input, Data, DataStruct, DeriveInput, Field, Fields, Ident, LitStr, Token, Type, TypePath
};

struct LinkedAttribute {
    crate_path: syn::Path,
}

/// Parses the attribute in the format: `crate_path = "path::to::crate"`.
impl Parse for LinkedAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "crate_path" {
            return Err(syn::Error::new(key.span(), "expected attribute `crate_path`"));
        }

        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        let path: syn::Path = value.parse()?;

        Ok(LinkedAttribute { crate_path: path })
    }
}

fn crate_path(input: &DeriveInput) -> syn::Result<TokenStream2> {
    for attr in &input.attrs {
        if attr.path().is_ident("linked") {
            let path = attr.parse_args::<LinkedAttribute>()?.crate_path;
            return Ok(quote! { #path });
        }
    }
    Ok(quote! { ::intrusive_dll })
}

/// Finds the one named field whose type is `link_type`.
///
/// A record carries exactly one link, so zero or several matches are errors.
fn find_link_field(input: &DeriveInput, link_type: &str) -> syn::Result<Field> {
    let fields = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(fields),
            ..
        }) => fields,
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Linked derive macros only support structs with named fields",
            ));
        }
    };

    let mut found: Option<&Field> = None;
    for field in fields.named.iter() {
        let is_link = match &field.ty {
            Type::Path(TypePath { path, .. }) => path
                .segments
                .last()
                .is_some_and(|segment| segment.ident == link_type),
            _ => false,
        };
        if !is_link {
            continue;
        }
        if found.is_some() {
            return Err(syn::Error::new_spanned(
                field,
                format!("A record may embed only one `{link_type}` field"),
            ));
        }
        found = Some(field);
    }

    found.cloned().ok_or_else(|| {
        syn::Error::new_spanned(
            &input.ident,
            format!("Struct must have a field of type `{link_type}`"),
        )
    })
}

/// Derive macro implementing `Linked` for a struct embedding a `Link`.
///
/// The link offset is computed with `core::mem::offset_of!`, so it stays
/// correct under any field reordering the compiler applies. The field is
/// matched by type name, and the generated code then checks that it has the
/// crate's `Link` type, so an unrelated type that is also called `Link` is
/// rejected at compile time.
#[proc_macro_derive(Linked, attributes(linked))]
pub fn linked_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_linked(&input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn expand_linked(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let crate_path = crate_path(input)?;
    let field = find_link_field(input, "Link")?;
    let field_ident = &field.ident;
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        unsafe impl #impl_generics #crate_path::linked_list::intrusive::traits::Linked for #struct_name #ty_generics #where_clause {
            const LINK_OFFSET: usize = {
                // Fails to compile unless the field really is the crate's `Link`.
                let _: fn(&Self) -> &#crate_path::linked_list::intrusive::link::Link = |record| &record.#field_ident;
                ::core::mem::offset_of!(Self, #field_ident)
            };
        }
    })
}

/// Derive macro implementing `IndexLinked` for a struct embedding an `IndexLink`.
#[proc_macro_derive(IndexLinked, attributes(linked))]
pub fn index_linked_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_index_linked(&input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn expand_index_linked(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let crate_path = crate_path(input)?;
    let field = find_link_field(input, "IndexLink")?;
    let field_ident = &field.ident;
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let indexed_path = quote! { #crate_path::linked_list::indexed };

    Ok(quote! {
        impl #impl_generics #indexed_path::IndexLinked for #struct_name #ty_generics #where_clause {
            #[inline]
            fn index_link(&self) -> &#indexed_path::IndexLink {
                &self.#field_ident
            }

            #[inline]
            fn index_link_mut(&mut self) -> &mut #indexed_path::IndexLink {
                &mut self.#field_ident
            }
        }
    })
}
