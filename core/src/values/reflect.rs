use core::any::Any;

use transcribe_types::Ty;

use super::{Map, Pointer, Primitive, Sequence, Struct};

/// A value the mapper can read from and write into.
///
/// This trait is object safe: the dispatcher only ever sees `&dyn Reflect` and
/// `&mut dyn Reflect`. Structural access goes through [`reflect_ref`] and
/// [`reflect_mut`], which return a view matching the value's [`Kind`].
///
/// Structs implement this with `#[derive(Reflect)]`; implementing it by hand
/// is possible but rarely needed.
///
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
/// [`Kind`]: transcribe_types::Kind
pub trait Reflect: Any {
    /// Descriptor of this value's type.
    fn ty(&self) -> Ty;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Direct assignment: overwrite `self` with a copy of `source` if both have
    /// exactly the same type. Returns whether the assignment happened.
    fn assign(&mut self, source: &dyn Reflect) -> bool;

    fn reflect_ref(&self) -> ReflectRef<'_>;

    fn reflect_mut(&mut self) -> ReflectMut<'_>;
}

/// Static access to the descriptor of a [`Reflect`] type.
///
/// Used at registration time, where the types come from a function signature
/// rather than from a value.
pub trait Typed: Reflect + Sized {
    fn descriptor() -> Ty;
}

/// Shared view of a value, tagged by kind.
pub enum ReflectRef<'a> {
    Primitive(&'a dyn Primitive),
    Pointer(&'a dyn Pointer),
    Struct(&'a dyn Struct),
    Sequence(&'a dyn Sequence),
    Map(&'a dyn Map),
}

/// Mutable view of a value, tagged by kind.
pub enum ReflectMut<'a> {
    Primitive(&'a mut dyn Primitive),
    Pointer(&'a mut dyn Pointer),
    Struct(&'a mut dyn Struct),
    Sequence(&'a mut dyn Sequence),
    Map(&'a mut dyn Map),
}

/// [`Reflect::assign`] for any `Clone` type.
pub fn assign_cloned<T: Reflect + Clone>(target: &mut T, source: &dyn Reflect) -> bool {
    match source.as_any().downcast_ref::<T>() {
        Some(value) => {
            target.clone_from(value);
            true
        }
        None => false,
    }
}
