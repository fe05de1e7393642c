use crate::api::{BoxError, Mapper};
use crate::values::Typed;

use super::{Conversion, Shape};

/// Marker for functions that return their result directly.
#[doc(hidden)]
pub struct Plain;

/// Marker for functions that return `Result<_, E>`.
#[doc(hidden)]
pub struct Fallible;

/// A function that can be registered with
/// [`Mapper::register_conversion`](crate::Mapper::register_conversion).
///
/// Implemented for functions and closures of the shapes
///
/// | signature                             | [`Shape`]                      |
/// |---------------------------------------|--------------------------------|
/// | `Fn(&A) -> B`                         | plain                          |
/// | `Fn(&A, &Mapper) -> B`                | takes the active mapper        |
/// | `Fn(&A) -> Result<B, E>`              | fallible                       |
/// | `Fn(&A, &Mapper) -> Result<B, E>`     | fallible, takes the mapper     |
///
/// where `A` is the source type, `B` the destination type and
/// `E: Into<BoxError>`. `Marker` only exists so the four shapes can coexist;
/// it is always inferred.
///
/// Closure parameters have to be annotated (`|p: &Product| ...`), since the
/// signature cannot be inferred through this trait.
pub trait IntoConversion<Marker>: Send + Sync + 'static {
    #[doc(hidden)]
    fn into_conversion(self) -> Conversion;
}

impl<F, A, B> IntoConversion<(Plain, fn(&A) -> B)> for F
where
    F: Fn(&A) -> B + Send + Sync + 'static,
    A: Typed,
    B: Typed,
{
    fn into_conversion(self) -> Conversion {
        Conversion::new(Shape::new(false, false), move |source: &A, _: &Mapper| {
            Ok::<B, BoxError>(self(source))
        })
    }
}

impl<F, A, B> IntoConversion<(Plain, fn(&A, &Mapper) -> B)> for F
where
    F: Fn(&A, &Mapper) -> B + Send + Sync + 'static,
    A: Typed,
    B: Typed,
{
    fn into_conversion(self) -> Conversion {
        Conversion::new(Shape::new(true, false), move |source: &A, mapper: &Mapper| {
            Ok::<B, BoxError>(self(source, mapper))
        })
    }
}

impl<F, A, B, E> IntoConversion<(Fallible, fn(&A) -> Result<B, E>)> for F
where
    F: Fn(&A) -> Result<B, E> + Send + Sync + 'static,
    A: Typed,
    B: Typed,
    E: Into<BoxError>,
{
    fn into_conversion(self) -> Conversion {
        Conversion::new(Shape::new(false, true), move |source: &A, _: &Mapper| {
            self(source).map_err(Into::into)
        })
    }
}

impl<F, A, B, E> IntoConversion<(Fallible, fn(&A, &Mapper) -> Result<B, E>)> for F
where
    F: Fn(&A, &Mapper) -> Result<B, E> + Send + Sync + 'static,
    A: Typed,
    B: Typed,
    E: Into<BoxError>,
{
    fn into_conversion(self) -> Conversion {
        Conversion::new(Shape::new(true, true), move |source: &A, mapper: &Mapper| {
            self(source, mapper).map_err(Into::into)
        })
    }
}
