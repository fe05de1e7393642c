//! Function registry: the user-supplied conversion and inspection functions a
//! [`Mapper`] consults at every node it maps.
//!
//! A function's role is read off its signature once, when it is registered
//! (see [`IntoConversion`] and [`IntoInspection`]). What gets stored is a
//! type-erased wrapper that downcasts its arguments and writes the result back
//! through `&mut dyn Reflect`, so dispatch never looks at the signature again.

mod conversion;
mod inspection;

use hashbrown::HashMap;
use smallvec::SmallVec;
use transcribe_types::Ty;

use crate::api::{BoxError, Error, Mapper, NoValidMapping};
use crate::values::{Reflect, Typed};

pub use conversion::{Fallible, IntoConversion, Plain};
pub use inspection::IntoInspection;


/// Calling convention of a registered function, as read from its signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    /// The function takes `&Mapper` after its value parameters.
    pub takes_mapper: bool,
    /// The function returns `Result<_, E>` rather than a bare value.
    pub fallible: bool,
}

impl Shape {
    pub const fn new(takes_mapper: bool, fallible: bool) -> Self {
        Self {
            takes_mapper,
            fallible,
        }
    }
}

/// Which source values an inspection function is run for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Receiver {
    /// Only when the destination was mapped from a value of this type.
    Source(Ty),
    /// Whatever the destination was mapped from.
    Any,
}

/// Type-erased body shared by conversions and inspections.
type ErasedFn = dyn Fn(&mut dyn Reflect, &dyn Reflect, &Mapper) -> Result<(), Error> + Send + Sync;

/// A registered conversion function, erased to operate on reflected values.
pub struct Conversion {
    source: Ty,
    target: Ty,
    shape: Shape,
    invoke: Box<ErasedFn>,
}

impl Conversion {
    /// Erase `f`, which turns an `A` into a `B`.
    pub(crate) fn new<A, B, F>(shape: Shape, f: F) -> Self
    where
        A: Typed,
        B: Typed,
        F: Fn(&A, &Mapper) -> Result<B, BoxError> + Send + Sync + 'static,
    {
        let source = A::descriptor();
        let target = B::descriptor();
        let invoke = move |dst: &mut dyn Reflect, src: &dyn Reflect, mapper: &Mapper| {
            let (Some(slot), Some(value)) = (
                dst.as_any_mut().downcast_mut::<B>(),
                src.as_any().downcast_ref::<A>(),
            ) else {
                return Err(Error::NoValidMapping(NoValidMapping::new(target, source)));
            };
            match f(value, mapper) {
                Ok(converted) => {
                    *slot = converted;
                    Ok(())
                }
                Err(error) => Err(Error::Conversion {
                    dst: target,
                    src: source,
                    error,
                }),
            }
        };
        Self {
            source,
            target,
            shape,
            invoke: Box::new(invoke),
        }
    }

    pub fn source(&self) -> Ty {
        self.source
    }

    pub fn target(&self) -> Ty {
        self.target
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub(crate) fn invoke(
        &self,
        dst: &mut dyn Reflect,
        src: &dyn Reflect,
        mapper: &Mapper,
    ) -> Result<(), Error> {
        (self.invoke)(dst, src, mapper)
    }
}

/// A registered inspection function, erased to operate on reflected values.
pub struct Inspection {
    target: Ty,
    receiver: Receiver,
    shape: Shape,
    invoke: Box<ErasedFn>,
}

impl Inspection {
    /// Erase `f`, which post-processes a `D` mapped from an `S`.
    pub(crate) fn with_source<D, S, F>(shape: Shape, f: F) -> Self
    where
        D: Typed,
        S: Typed,
        F: Fn(&mut D, &S, &Mapper) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        let target = D::descriptor();
        let source = S::descriptor();
        let invoke = move |dst: &mut dyn Reflect, src: &dyn Reflect, mapper: &Mapper| {
            let (Some(slot), Some(value)) = (
                dst.as_any_mut().downcast_mut::<D>(),
                src.as_any().downcast_ref::<S>(),
            ) else {
                return Err(Error::NoValidMapping(NoValidMapping::new(target, source)));
            };
            f(slot, value, mapper).map_err(|error| Error::Inspection {
                dst: target,
                src: source,
                error,
            })
        };
        Self {
            target,
            receiver: Receiver::Source(source),
            shape,
            invoke: Box::new(invoke),
        }
    }

    /// Erase `f`, which post-processes a `D` whatever it was mapped from.
    pub(crate) fn any_source<D, F>(shape: Shape, f: F) -> Self
    where
        D: Typed,
        F: Fn(&mut D) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        let target = D::descriptor();
        let invoke = move |dst: &mut dyn Reflect, src: &dyn Reflect, _: &Mapper| {
            let src_ty = src.ty();
            let Some(slot) = dst.as_any_mut().downcast_mut::<D>() else {
                return Err(Error::NoValidMapping(NoValidMapping::new(target, src_ty)));
            };
            f(slot).map_err(|error| Error::Inspection {
                dst: target,
                src: src_ty,
                error,
            })
        };
        Self {
            target,
            receiver: Receiver::Any,
            shape,
            invoke: Box::new(invoke),
        }
    }

    pub fn target(&self) -> Ty {
        self.target
    }

    pub fn receiver(&self) -> Receiver {
        self.receiver
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub(crate) fn invoke(
        &self,
        dst: &mut dyn Reflect,
        src: &dyn Reflect,
        mapper: &Mapper,
    ) -> Result<(), Error> {
        (self.invoke)(dst, src, mapper)
    }
}

/// Inspections registered for one destination type, in registration order.
type InspectionList = SmallVec<[Inspection; 1]>;

/// The two function tables of a [`Mapper`].
#[derive(Default)]
pub(crate) struct Registry {
    /// Keyed by `(source, target)`.
    conversions: HashMap<(Ty, Ty), Conversion>,
    /// Keyed by target, then receiver.
    inspections: HashMap<Ty, HashMap<Receiver, InspectionList>>,
}

impl Registry {
    pub fn insert_conversion(&mut self, conversion: Conversion) {
        let key = (conversion.source, conversion.target);
        tracing::debug!(
            src = conversion.source.name(),
            dst = conversion.target.name(),
            shape = ?conversion.shape,
            "Registering conversion"
        );
        if self.conversions.insert(key, conversion).is_some() {
            tracing::debug!(
                src = key.0.name(),
                dst = key.1.name(),
                "Replaced previously registered conversion"
            );
        }
    }

    pub fn insert_inspection(&mut self, inspection: Inspection) {
        tracing::debug!(
            dst = inspection.target.name(),
            receiver = ?inspection.receiver,
            shape = ?inspection.shape,
            "Registering inspection"
        );
        self.inspections
            .entry(inspection.target)
            .or_default()
            .entry(inspection.receiver)
            .or_default()
            .push(inspection);
    }

    pub fn conversion(&self, source: Ty, target: Ty) -> Option<&Conversion> {
        self.conversions.get(&(source, target))
    }

    pub fn inspections(&self, target: Ty, receiver: Receiver) -> &[Inspection] {
        self.inspections
            .get(&target)
            .and_then(|by_receiver| by_receiver.get(&receiver))
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.conversions.is_empty() && self.inspections.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inspections: usize = self
            .inspections
            .values()
            .flat_map(|by_receiver| by_receiver.values())
            .map(|list| list.len())
            .sum();
        f.debug_struct("Registry")
            .field("conversions", &self.conversions.len())
            .field("inspections", &inspections)
            .finish()
    }
}
