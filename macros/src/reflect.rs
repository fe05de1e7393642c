//! Implementation of `#[derive(Reflect)]`
//!
//! Validates the input struct, reads the per-field options and generates the
//! `Typed`, `Reflect` and `Struct` impls. Ignored fields are left out of the
//! generated accessors entirely, so their types are never required to
//! implement anything.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Field, Fields, parse_macro_input, parse_quote};

use crate::common::parse_field_options;

/// Entry point for `#[derive(Reflect)]`.
pub fn derive_reflect_impl(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

// ============================================================================
// Input validation
// ============================================================================

/// A field as the generated code sees it.
struct ParsedField {
    /// Position in the declaration, used as the accessor index.
    index: usize,
    ident: syn::Ident,
    /// Field name with any `r#` prefix removed.
    name: String,
    role: Role,
}

enum Role {
    Named,
    Embedded,
    Ignored,
}

fn named_fields(input: &DeriveInput) -> syn::Result<Vec<&Field>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => Ok(named.named.iter().collect()),
            Fields::Unit => Ok(Vec::new()),
            Fields::Unnamed(unnamed) => Err(syn::Error::new_spanned(
                unnamed,
                "[transcribe] tuple structs are not supported, fields are matched by name",
            )),
        },
        Data::Enum(data) => Err(syn::Error::new_spanned(
            data.enum_token,
            "[transcribe] `Reflect` can only be derived for structs",
        )),
        Data::Union(data) => Err(syn::Error::new_spanned(
            data.union_token,
            "[transcribe] `Reflect` can only be derived for structs",
        )),
    }
}

fn parse_fields(input: &DeriveInput) -> syn::Result<Vec<ParsedField>> {
    let mut parsed = Vec::new();
    for (index, field) in named_fields(input)?.into_iter().enumerate() {
        let options = parse_field_options(field)?;
        let role = if options.ignore {
            Role::Ignored
        } else if options.flatten {
            Role::Embedded
        } else {
            Role::Named
        };
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "[transcribe] expected a named field"));
        };
        parsed.push(ParsedField {
            index,
            name: ident.unraw().to_string(),
            ident,
            role,
        });
    }
    Ok(parsed)
}

// ============================================================================
// Code generation
// ============================================================================

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "[transcribe] lifetime parameters are not supported, mapped values must be 'static",
        ));
    }

    let fields = parse_fields(&input)?;

    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::transcribe::Typed));
        param.bounds.push(parse_quote!(::core::clone::Clone));
        param.bounds.push(parse_quote!(::core::default::Default));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let name = &input.ident;

    let infos = fields.iter().map(|field| {
        let name = &field.name;
        let role = match field.role {
            Role::Named => quote!(Named),
            Role::Embedded => quote!(Embedded),
            Role::Ignored => quote!(Ignored),
        };
        quote! {
            ::transcribe::FieldInfo::new(#name, ::transcribe::FieldRole::#role)
        }
    });

    let visible: Vec<_> = fields
        .iter()
        .filter(|field| !matches!(field.role, Role::Ignored))
        .collect();
    let indices: Vec<_> = visible.iter().map(|field| field.index).collect();
    let idents: Vec<_> = visible.iter().map(|field| &field.ident).collect();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::transcribe::Typed for #name #ty_generics #where_clause {
            fn descriptor() -> ::transcribe::Ty {
                ::transcribe::Ty::of::<Self>(::transcribe::Kind::Struct)
            }
        }

        #[automatically_derived]
        impl #impl_generics ::transcribe::Reflect for #name #ty_generics #where_clause {
            fn ty(&self) -> ::transcribe::Ty {
                <Self as ::transcribe::Typed>::descriptor()
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
                self
            }

            fn into_any(
                self: ::std::boxed::Box<Self>,
            ) -> ::std::boxed::Box<dyn ::core::any::Any> {
                self
            }

            fn assign(&mut self, source: &dyn ::transcribe::Reflect) -> bool {
                ::transcribe::values::assign_cloned(self, source)
            }

            fn reflect_ref(&self) -> ::transcribe::ReflectRef<'_> {
                ::transcribe::ReflectRef::Struct(self)
            }

            fn reflect_mut(&mut self) -> ::transcribe::ReflectMut<'_> {
                ::transcribe::ReflectMut::Struct(self)
            }
        }

        #[automatically_derived]
        impl #impl_generics ::transcribe::Struct for #name #ty_generics #where_clause {
            fn fields(&self) -> &'static [::transcribe::FieldInfo] {
                const FIELDS: &[::transcribe::FieldInfo] = &[#(#infos),*];
                FIELDS
            }

            fn field(
                &self,
                index: usize,
            ) -> ::core::option::Option<&dyn ::transcribe::Reflect> {
                match index {
                    #(#indices => ::core::option::Option::Some(
                        &self.#idents as &dyn ::transcribe::Reflect
                    ),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_mut(
                &mut self,
                index: usize,
            ) -> ::core::option::Option<&mut dyn ::transcribe::Reflect> {
                match index {
                    #(#indices => ::core::option::Option::Some(
                        &mut self.#idents as &mut dyn ::transcribe::Reflect
                    ),)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}
