//! Attribute parsing shared by the derive.

use syn::{Attribute, Field};

/// Name of the helper attribute, as in `#[transcribe(...)]`.
pub(crate) const ATTR_NAME: &str = "transcribe";

/// Options collected from a field's `#[transcribe(...)]` attributes.
#[derive(Default)]
pub(crate) struct FieldOptions {
    pub flatten: bool,
    pub ignore: bool,
}

/// Parse the `#[transcribe(...)]` attributes of a field.
///
/// Several attributes may be given; their options accumulate. Unknown options
/// and `#[transcribe = ...]` are errors.
pub(crate) fn parse_field_options(field: &Field) -> syn::Result<FieldOptions> {
    let mut options = FieldOptions::default();
    for attr in field.attrs.iter().filter(|a| a.path().is_ident(ATTR_NAME)) {
        parse_attribute(attr, &mut options)?;
    }
    Ok(options)
}

fn parse_attribute(attr: &Attribute, options: &mut FieldOptions) -> syn::Result<()> {
    if !matches!(attr.meta, syn::Meta::List(_)) {
        return Err(syn::Error::new_spanned(
            attr,
            format!("[transcribe] expected `#[{}(flatten)]` or `#[{}(ignore)]`", ATTR_NAME, ATTR_NAME),
        ));
    }
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("flatten") {
            options.flatten = true;
            Ok(())
        } else if meta.path.is_ident("ignore") {
            options.ignore = true;
            Ok(())
        } else {
            Err(meta.error("[transcribe] unknown field option, expected `flatten` or `ignore`"))
        }
    })
}
