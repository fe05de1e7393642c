use crate::api::{Error, Mapper, NoValidMapping};
use crate::registry::Receiver;
use crate::values::{Reflect, ReflectMut, ReflectRef};

use super::composite;

/// Map `src` into `dst`, then run the inspections registered for the pair.
///
/// `depth` counts the frames above this one in the current `map` call.
pub(crate) fn map_value(
    mapper: &Mapper,
    dst: &mut dyn Reflect,
    src: &dyn Reflect,
    depth: usize,
) -> Result<(), Error> {
    if let Some(limit) = mapper.options.max_depth {
        if depth > limit {
            return Err(Error::DepthExceeded { limit });
        }
    }
    dispatch(mapper, dst, src, depth)?;
    run_inspections(mapper, dst, src)
}

/// Apply the first rule that matches the (destination, source) pair.
fn dispatch(
    mapper: &Mapper,
    dst: &mut dyn Reflect,
    src: &dyn Reflect,
    depth: usize,
) -> Result<(), Error> {
    let dst_ty = dst.ty();
    let src_ty = src.ty();

    if let Some(conversion) = mapper.registry.conversion(src_ty, dst_ty) {
        tracing::trace!(dst = dst_ty.name(), src = src_ty.name(), "Applying conversion");
        return conversion.invoke(dst, src, mapper);
    }

    // With custom functions registered, composite values are always walked
    // so that hooks on their parts fire.
    if !mapper.has_custom_functions() || !src_ty.kind().is_composite() {
        if dst.assign(src) {
            tracing::trace!(dst = dst_ty.name(), src = src_ty.name(), "Assigned");
            return Ok(());
        }
        if cast(dst, src) {
            tracing::trace!(dst = dst_ty.name(), src = src_ty.name(), "Cast");
            return Ok(());
        }
    }

    if let ReflectRef::Pointer(pointer) = src.reflect_ref() {
        return match pointer.get() {
            Some(pointee) => map_value(mapper, dst, pointee, depth + 1),
            None => {
                tracing::trace!(src = src_ty.name(), "Skipping empty source");
                Ok(())
            }
        };
    }

    match (dst.reflect_mut(), src.reflect_ref()) {
        (ReflectMut::Pointer(pointer), _) => {
            map_value(mapper, pointer.get_or_insert_default(), src, depth + 1)
        }
        (ReflectMut::Struct(to), ReflectRef::Struct(from)) => {
            composite::map_struct(mapper, to, from, depth)
        }
        (ReflectMut::Sequence(to), ReflectRef::Sequence(from)) => {
            composite::map_sequence(mapper, to, from, depth)
        }
        (ReflectMut::Map(to), ReflectRef::Map(from)) => composite::map_map(mapper, to, from, depth),
        (ReflectMut::Sequence(to), ReflectRef::Map(from)) => {
            composite::map_map_to_sequence(mapper, to, from, depth)
        }
        _ => {
            tracing::trace!(dst = dst_ty.name(), src = src_ty.name(), "No valid mapping");
            Err(NoValidMapping::new(dst_ty, src_ty).into())
        }
    }
}

/// Convert between scalar types related by [`Scalar::can_cast_to`].
///
/// [`Scalar::can_cast_to`]: transcribe_types::Scalar::can_cast_to
fn cast(dst: &mut dyn Reflect, src: &dyn Reflect) -> bool {
    let (Some(to), Some(from)) = (dst.ty().kind().scalar(), src.ty().kind().scalar()) else {
        return false;
    };
    if !from.can_cast_to(to) {
        return false;
    }
    match (dst.reflect_mut(), src.reflect_ref()) {
        (ReflectMut::Primitive(target), ReflectRef::Primitive(value)) => {
            target.cast_from(&value.literal())
        }
        _ => false,
    }
}

/// Run the inspections for `dst`'s type: first those registered for `src`'s
/// type, then those that accept any source.
fn run_inspections(mapper: &Mapper, dst: &mut dyn Reflect, src: &dyn Reflect) -> Result<(), Error> {
    let dst_ty = dst.ty();
    let src_ty = src.ty();
    for receiver in [Receiver::Source(src_ty), Receiver::Any] {
        for inspection in mapper.registry.inspections(dst_ty, receiver) {
            tracing::trace!(dst = dst_ty.name(), receiver = ?receiver, "Running inspection");
            inspection.invoke(dst, src, mapper)?;
        }
    }
    Ok(())
}
