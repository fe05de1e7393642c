//! Dynamic value model.
//!
//! Every mappable type implements [`Reflect`], which exposes its [`Ty`] and a
//! kind-tagged view ([`ReflectRef`] / [`ReflectMut`]) the dispatcher walks.
//! Implementations are provided for scalars, `Option`/`Box`, `Vec`/`VecDeque`
//! and the common map types; structs get theirs from `#[derive(Reflect)]`.
//!
//! [`Ty`]: transcribe_types::Ty

mod map;
mod pointer;
mod primitive;
mod record;
mod reflect;
mod sequence;

pub use map::Map;
pub use pointer::Pointer;
pub use primitive::{Literal, Primitive};
pub use record::{FieldInfo, FieldRole, Struct};
pub use reflect::{Reflect, ReflectMut, ReflectRef, Typed, assign_cloned};
pub use sequence::Sequence;


/// Implements the kind-independent `Reflect` methods for `Self`, tagging the
/// views with the given `ReflectRef`/`ReflectMut` variant.
macro_rules! reflect_methods {
    ($variant:ident) => {
        fn ty(&self) -> $crate::Ty {
            <Self as $crate::Typed>::descriptor()
        }

        fn as_any(&self) -> &dyn ::core::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
            self
        }

        fn into_any(self: Box<Self>) -> Box<dyn ::core::any::Any> {
            self
        }

        fn assign(&mut self, source: &dyn $crate::Reflect) -> bool {
            $crate::values::assign_cloned(self, source)
        }

        fn reflect_ref(&self) -> $crate::ReflectRef<'_> {
            $crate::ReflectRef::$variant(self)
        }

        fn reflect_mut(&mut self) -> $crate::ReflectMut<'_> {
            $crate::ReflectMut::$variant(self)
        }
    };
}

pub(crate) use reflect_methods;
