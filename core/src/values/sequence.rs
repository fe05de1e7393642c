use std::collections::VecDeque;

use transcribe_types::{Kind, Ty};

use super::{Reflect, Typed, reflect_methods};

/// View of an ordered, index-addressable collection.
pub trait Sequence: Reflect {
    /// Descriptor of the element type.
    fn element_ty(&self) -> Ty;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    fn iter(&self) -> Box<dyn Iterator<Item = &dyn Reflect> + '_>;

    /// Replace the contents with `len` default elements.
    fn reset(&mut self, len: usize);
}

macro_rules! impl_sequence {
    ($($seq:ident),*) => {
        $(
            impl<T: Typed + Default + Clone> Typed for $seq<T> {
                fn descriptor() -> Ty {
                    Ty::of::<Self>(Kind::Sequence)
                }
            }

            impl<T: Typed + Default + Clone> Reflect for $seq<T> {
                reflect_methods!(Sequence);
            }
        )*
    };
}

impl_sequence!(Vec, VecDeque);

// Element access goes through the slice: `Vec` has no inherent `get`, so
// method syntax on `self` would resolve back to `Sequence::get`.
impl<T: Typed + Default + Clone> Sequence for Vec<T> {
    fn element_ty(&self) -> Ty {
        T::descriptor()
    }

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|value| value as &dyn Reflect)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        self.as_mut_slice()
            .get_mut(index)
            .map(|value| value as &mut dyn Reflect)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &dyn Reflect> + '_> {
        Box::new(self.as_slice().iter().map(|value| value as &dyn Reflect))
    }

    fn reset(&mut self, len: usize) {
        self.clear();
        self.resize_with(len, T::default);
    }
}

impl<T: Typed + Default + Clone> Sequence for VecDeque<T> {
    fn element_ty(&self) -> Ty {
        T::descriptor()
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        VecDeque::get(self, index).map(|value| value as &dyn Reflect)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        VecDeque::get_mut(self, index).map(|value| value as &mut dyn Reflect)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &dyn Reflect> + '_> {
        Box::new(VecDeque::iter(self).map(|value| value as &dyn Reflect))
    }

    fn reset(&mut self, len: usize) {
        self.clear();
        self.resize_with(len, T::default);
    }
}
