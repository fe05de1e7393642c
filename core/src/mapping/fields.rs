//! Struct field resolution.
//!
//! A [`FieldMap`] names every field of a struct that takes part in mapping and
//! records how to reach it: a path of field indices, one per level of
//! flattened (embedded) struct.

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::values::{FieldRole, Reflect, ReflectMut, ReflectRef, Struct};

/// Field indices leading from the outer struct to a field.
pub type FieldPath = SmallVec<[usize; 4]>;

/// Mappable fields of a struct by name, in declaration order.
pub type FieldMap = IndexMap<&'static str, FieldPath>;

/// Collect the mappable fields of `value`.
///
/// Ignored fields are skipped, along with everything nested in them. Fields of
/// a flattened struct are collected as though they were declared on `value`
/// itself. When two fields end up with the same name the later declaration
/// wins.
pub fn collect_fields(value: &dyn Struct) -> FieldMap {
    let mut fields = FieldMap::new();
    let mut path = FieldPath::new();
    collect_into(value, &mut path, &mut fields);
    fields
}

fn collect_into(value: &dyn Struct, path: &mut FieldPath, fields: &mut FieldMap) {
    for (index, info) in value.fields().iter().enumerate() {
        let field = match (info.role(), value.field(index)) {
            (FieldRole::Ignored, _) | (_, None) => continue,
            (_, Some(field)) => field,
        };

        path.push(index);
        match (info.role(), field.reflect_ref()) {
            (FieldRole::Embedded, ReflectRef::Struct(inner)) => {
                collect_into(inner, path, fields);
            }
            // A flattened field that is not a struct is matched by name.
            _ => {
                fields.insert(info.name(), path.clone());
            }
        }
        path.pop();
    }
}

/// Follow `path` from `value` down to a field.
pub fn resolve<'a>(value: &'a dyn Struct, path: &[usize]) -> Option<&'a dyn Reflect> {
    let (&index, rest) = path.split_first()?;
    let field = value.field(index)?;
    if rest.is_empty() {
        return Some(field);
    }
    match field.reflect_ref() {
        ReflectRef::Struct(inner) => resolve(inner, rest),
        _ => None,
    }
}

/// Mutable counterpart of [`resolve`].
pub fn resolve_mut<'a>(value: &'a mut dyn Struct, path: &[usize]) -> Option<&'a mut dyn Reflect> {
    let (&index, rest) = path.split_first()?;
    let field = value.field_mut(index)?;
    if rest.is_empty() {
        return Some(field);
    }
    match field.reflect_mut() {
        ReflectMut::Struct(inner) => resolve_mut(inner, rest),
        _ => None,
    }
}
