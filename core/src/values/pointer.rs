use transcribe_types::{Kind, Ty};

use super::{Reflect, Typed, reflect_methods};

/// View of an indirection that may or may not hold a value.
///
/// `Option<T>` plays the role of a nullable pointer; `Box<T>` is a pointer
/// that is always present.
pub trait Pointer: Reflect {
    /// Descriptor of the pointed-to type.
    fn pointee_ty(&self) -> Ty;

    /// The pointee, or `None` if the pointer is empty.
    fn get(&self) -> Option<&dyn Reflect>;

    /// The pointee, allocating a default value first if the pointer is empty.
    fn get_or_insert_default(&mut self) -> &mut dyn Reflect;
}

impl<T: Typed + Default + Clone> Typed for Option<T> {
    fn descriptor() -> Ty {
        Ty::of::<Self>(Kind::Pointer)
    }
}

impl<T: Typed + Default + Clone> Reflect for Option<T> {
    reflect_methods!(Pointer);
}

impl<T: Typed + Default + Clone> Pointer for Option<T> {
    fn pointee_ty(&self) -> Ty {
        T::descriptor()
    }

    fn get(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|value| value as &dyn Reflect)
    }

    fn get_or_insert_default(&mut self) -> &mut dyn Reflect {
        self.get_or_insert_with(T::default)
    }
}

impl<T: Typed + Clone> Typed for Box<T> {
    fn descriptor() -> Ty {
        Ty::of::<Self>(Kind::Pointer)
    }
}

impl<T: Typed + Clone> Reflect for Box<T> {
    reflect_methods!(Pointer);
}

impl<T: Typed + Clone> Pointer for Box<T> {
    fn pointee_ty(&self) -> Ty {
        T::descriptor()
    }

    fn get(&self) -> Option<&dyn Reflect> {
        Some(&**self)
    }

    fn get_or_insert_default(&mut self) -> &mut dyn Reflect {
        &mut **self
    }
}
