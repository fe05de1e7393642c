//! Transformers for composite values: structs, sequences and maps.
//!
//! Each one sizes the destination from the source, then maps the parts
//! through [`map_value`] and stops at the first error.

use crate::api::{Error, Mapper, NoValidMapping};
use crate::values::{Map, ReflectRef, Sequence, Struct};

use super::dispatch::map_value;
use super::fields::{collect_fields, resolve, resolve_mut};

/// Map every destination field that has a namesake in the source.
///
/// Destination-only fields keep their value; source-only fields are ignored.
pub fn map_struct(
    mapper: &Mapper,
    dst: &mut dyn Struct,
    src: &dyn Struct,
    depth: usize,
) -> Result<(), Error> {
    let dst_fields = collect_fields(&*dst);
    let src_fields = collect_fields(src);

    for (name, dst_path) in &dst_fields {
        let Some(src_path) = src_fields.get(name) else {
            continue;
        };
        let (Some(to), Some(from)) = (resolve_mut(dst, dst_path), resolve(src, src_path)) else {
            continue;
        };
        map_value(mapper, to, from, depth + 1)?;
    }
    Ok(())
}

/// Map position by position into a destination of the source's length.
pub fn map_sequence(
    mapper: &Mapper,
    dst: &mut dyn Sequence,
    src: &dyn Sequence,
    depth: usize,
) -> Result<(), Error> {
    dst.reset(src.len());
    for (index, element) in src.iter().enumerate() {
        let Some(slot) = dst.get_mut(index) else {
            break;
        };
        map_value(mapper, slot, element, depth + 1)?;
    }
    Ok(())
}

/// Map every entry, converting keys and values independently.
pub fn map_map(mapper: &Mapper, dst: &mut dyn Map, src: &dyn Map, depth: usize) -> Result<(), Error> {
    dst.reset(src.len());
    for (key, value) in src.entries() {
        let mut new_key = dst.new_key();
        let mut new_value = dst.new_value();
        map_value(mapper, &mut *new_key, key, depth + 1)?;
        map_value(mapper, &mut *new_value, value, depth + 1)?;
        if !dst.insert_boxed(new_key, new_value) {
            return Err(NoValidMapping::new(dst.ty(), src.ty()).into());
        }
    }
    Ok(())
}

/// Map the values of `src` into successive positions of `dst`, dropping keys.
///
/// If that fails for lack of a valid mapping and the map's values are
/// sequences, the map is flattened instead. Should flattening fail too, the
/// error from the first attempt is returned.
pub fn map_map_to_sequence(
    mapper: &Mapper,
    dst: &mut dyn Sequence,
    src: &dyn Map,
    depth: usize,
) -> Result<(), Error> {
    let error = match project_values(mapper, dst, src, depth) {
        Ok(()) => return Ok(()),
        Err(error) => error,
    };

    if error.no_valid_mapping().is_some() && src.value_ty().kind().is_sequence() {
        tracing::trace!(
            dst = dst.ty().name(),
            src = src.ty().name(),
            "Falling back to flattening map of sequences"
        );
        if flatten_values(mapper, dst, src, depth).is_ok() {
            return Ok(());
        }
    }
    Err(error)
}

fn project_values(
    mapper: &Mapper,
    dst: &mut dyn Sequence,
    src: &dyn Map,
    depth: usize,
) -> Result<(), Error> {
    dst.reset(src.len());
    for (index, (_, value)) in src.entries().enumerate() {
        let Some(slot) = dst.get_mut(index) else {
            break;
        };
        map_value(mapper, slot, value, depth + 1)?;
    }
    Ok(())
}

/// Concatenate the inner sequences of `src`, in map iteration order.
fn flatten_values(
    mapper: &Mapper,
    dst: &mut dyn Sequence,
    src: &dyn Map,
    depth: usize,
) -> Result<(), Error> {
    let total: usize = src
        .entries()
        .map(|(_, value)| match value.reflect_ref() {
            ReflectRef::Sequence(inner) => inner.len(),
            _ => 0,
        })
        .sum();
    dst.reset(total);

    let mut index = 0;
    for (_, value) in src.entries() {
        let ReflectRef::Sequence(inner) = value.reflect_ref() else {
            return Err(NoValidMapping::new(dst.ty(), src.ty()).into());
        };
        for element in inner.iter() {
            let Some(slot) = dst.get_mut(index) else {
                return Err(NoValidMapping::new(dst.ty(), src.ty()).into());
            };
            map_value(mapper, slot, element, depth + 1)?;
            index += 1;
        }
    }
    Ok(())
}
