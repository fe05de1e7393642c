//! Procedural macros for transcribe.
//!
//! - `#[derive(Reflect)]` - Make a struct mappable

extern crate proc_macro;

use proc_macro::TokenStream;

mod common;
mod reflect;

/// Implement `Typed`, `Reflect` and `Struct` for a struct with named fields.
///
/// Every field that takes part in mapping must itself implement `Reflect`,
/// and the struct must implement `Clone` (same-type values are assigned by
/// cloning).
///
/// # Example
///
/// ```ignore
/// use transcribe::Reflect;
///
/// #[derive(Clone, Default, Reflect)]
/// struct Audit {
///     created_by: String,
/// }
///
/// #[derive(Clone, Default, Reflect)]
/// struct Product {
///     name: String,
///     price: f64,
///     #[transcribe(flatten)]
///     audit: Audit,
///     #[transcribe(ignore)]
///     cached_at: std::time::Instant,
/// }
/// ```
///
/// # Field attributes
///
/// - `#[transcribe(flatten)]` - Match the fields of this struct-typed field as
///   though they were declared on the outer struct. A flattened field whose
///   type is not a struct is matched by its own name.
/// - `#[transcribe(ignore)]` - Never read or write this field. Its type does
///   not need to implement `Reflect`. Combined with `flatten`, the nested
///   fields are hidden as well.
///
/// # Restrictions
///
/// - Only structs with named fields (or no fields) are supported
/// - Lifetime parameters are not supported
/// - Type parameters are given `Typed + Clone + Default` bounds
#[proc_macro_derive(Reflect, attributes(transcribe))]
pub fn derive_reflect(item: TokenStream) -> TokenStream {
    reflect::derive_reflect_impl(item)
}
