use core::any::{TypeId, type_name};
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::Kind;

/// Descriptor of a runtime value's type: its identity plus its [`Kind`].
///
/// Two descriptors are equal iff they describe the same Rust type. The name and
/// kind are carried along for diagnostics and dispatch but do not take part in
/// comparison or hashing.
#[derive(Copy, Clone)]
pub struct Ty {
    id: TypeId,
    name: &'static str,
    kind: Kind,
}

impl Ty {
    /// Describe `T` as being of the given kind.
    pub fn of<T: ?Sized + 'static>(kind: Kind) -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            kind,
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified Rust type name, as reported by [`core::any::type_name`].
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Whether this descriptor describes `T`.
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for Ty {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Ty {}

impl Hash for Ty {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ty({}, {:?})", self.name, self.kind)
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
