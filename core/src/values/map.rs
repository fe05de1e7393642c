use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use transcribe_types::{Kind, Ty};

use super::{Reflect, Typed, reflect_methods};

/// View of a key-value collection.
///
/// Writing goes through boxed keys and values: the mapper allocates a fresh
/// key and value with [`new_key`](Map::new_key) / [`new_value`](Map::new_value),
/// fills them in, then hands them back with [`insert_boxed`](Map::insert_boxed).
pub trait Map: Reflect {
    fn key_ty(&self) -> Ty;

    fn value_ty(&self) -> Ty;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_>;

    /// Remove every entry, reserving room for `capacity` new ones.
    fn reset(&mut self, capacity: usize);

    fn new_key(&self) -> Box<dyn Reflect>;

    fn new_value(&self) -> Box<dyn Reflect>;

    /// Insert an entry built from [`new_key`](Map::new_key) and
    /// [`new_value`](Map::new_value). Returns `false` if either has the wrong
    /// type.
    fn insert_boxed(&mut self, key: Box<dyn Reflect>, value: Box<dyn Reflect>) -> bool;
}

fn unbox<T: 'static>(value: Box<dyn Reflect>) -> Option<T> {
    value.into_any().downcast::<T>().ok().map(|value| *value)
}

macro_rules! map_entries {
    ($key:ident, $value:ident) => {
        fn key_ty(&self) -> Ty {
            $key::descriptor()
        }

        fn value_ty(&self) -> Ty {
            $value::descriptor()
        }

        fn len(&self) -> usize {
            Self::len(self)
        }

        fn entries(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
            Box::new(
                Self::iter(self).map(|(key, value)| (key as &dyn Reflect, value as &dyn Reflect)),
            )
        }

        fn new_key(&self) -> Box<dyn Reflect> {
            Box::new($key::default())
        }

        fn new_value(&self) -> Box<dyn Reflect> {
            Box::new($value::default())
        }

        fn insert_boxed(&mut self, key: Box<dyn Reflect>, value: Box<dyn Reflect>) -> bool {
            match (unbox::<$key>(key), unbox::<$value>(value)) {
                (Some(key), Some(value)) => {
                    self.insert(key, value);
                    true
                }
                _ => false,
            }
        }
    };
}

impl<K, V, S> Typed for HashMap<K, V, S>
where
    K: Typed + Default + Clone + Eq + Hash,
    V: Typed + Default + Clone,
    S: BuildHasher + Default + Clone + 'static,
{
    fn descriptor() -> Ty {
        Ty::of::<Self>(Kind::Map)
    }
}

impl<K, V, S> Reflect for HashMap<K, V, S>
where
    K: Typed + Default + Clone + Eq + Hash,
    V: Typed + Default + Clone,
    S: BuildHasher + Default + Clone + 'static,
{
    reflect_methods!(Map);
}

impl<K, V, S> Map for HashMap<K, V, S>
where
    K: Typed + Default + Clone + Eq + Hash,
    V: Typed + Default + Clone,
    S: BuildHasher + Default + Clone + 'static,
{
    map_entries!(K, V);

    fn reset(&mut self, capacity: usize) {
        self.clear();
        self.reserve(capacity);
    }
}

impl<K, V, S> Typed for hashbrown::HashMap<K, V, S>
where
    K: Typed + Default + Clone + Eq + Hash,
    V: Typed + Default + Clone,
    S: BuildHasher + Default + Clone + 'static,
{
    fn descriptor() -> Ty {
        Ty::of::<Self>(Kind::Map)
    }
}

impl<K, V, S> Reflect for hashbrown::HashMap<K, V, S>
where
    K: Typed + Default + Clone + Eq + Hash,
    V: Typed + Default + Clone,
    S: BuildHasher + Default + Clone + 'static,
{
    reflect_methods!(Map);
}

impl<K, V, S> Map for hashbrown::HashMap<K, V, S>
where
    K: Typed + Default + Clone + Eq + Hash,
    V: Typed + Default + Clone,
    S: BuildHasher + Default + Clone + 'static,
{
    map_entries!(K, V);

    fn reset(&mut self, capacity: usize) {
        self.clear();
        self.reserve(capacity);
    }
}

impl<K, V> Typed for BTreeMap<K, V>
where
    K: Typed + Default + Clone + Ord,
    V: Typed + Default + Clone,
{
    fn descriptor() -> Ty {
        Ty::of::<Self>(Kind::Map)
    }
}

impl<K, V> Reflect for BTreeMap<K, V>
where
    K: Typed + Default + Clone + Ord,
    V: Typed + Default + Clone,
{
    reflect_methods!(Map);
}

impl<K, V> Map for BTreeMap<K, V>
where
    K: Typed + Default + Clone + Ord,
    V: Typed + Default + Clone,
{
    map_entries!(K, V);

    fn reset(&mut self, _capacity: usize) {
        self.clear();
    }
}
