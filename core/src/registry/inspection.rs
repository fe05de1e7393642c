use crate::api::{BoxError, Mapper};
use crate::values::Typed;

use super::conversion::{Fallible, Plain};
use super::{Inspection, Shape};

/// A function that can be registered with
/// [`Mapper::register_inspection`](crate::Mapper::register_inspection).
///
/// Implemented for functions and closures taking `&mut D` (the populated
/// destination), optionally followed by `&S` (the value it was mapped from)
/// and then `&Mapper`, and returning either `()` or `Result<(), E>` with
/// `E: Into<BoxError>`.
///
/// Without an `&S` parameter the function runs for every `D`, whatever it was
/// mapped from. With one, it only runs when the source has type `S`.
pub trait IntoInspection<Marker>: Send + Sync + 'static {
    #[doc(hidden)]
    fn into_inspection(self) -> Inspection;
}

impl<F, D> IntoInspection<(Plain, fn(&mut D))> for F
where
    F: Fn(&mut D) + Send + Sync + 'static,
    D: Typed,
{
    fn into_inspection(self) -> Inspection {
        Inspection::any_source(Shape::new(false, false), move |dst: &mut D| {
            self(dst);
            Ok::<(), BoxError>(())
        })
    }
}

impl<F, D, E> IntoInspection<(Fallible, fn(&mut D) -> Result<(), E>)> for F
where
    F: Fn(&mut D) -> Result<(), E> + Send + Sync + 'static,
    D: Typed,
    E: Into<BoxError>,
{
    fn into_inspection(self) -> Inspection {
        Inspection::any_source(Shape::new(false, true), move |dst: &mut D| {
            self(dst).map_err(Into::into)
        })
    }
}

impl<F, D, S> IntoInspection<(Plain, fn(&mut D, &S))> for F
where
    F: Fn(&mut D, &S) + Send + Sync + 'static,
    D: Typed,
    S: Typed,
{
    fn into_inspection(self) -> Inspection {
        Inspection::with_source(
            Shape::new(false, false),
            move |dst: &mut D, src: &S, _: &Mapper| {
                self(dst, src);
                Ok::<(), BoxError>(())
            },
        )
    }
}

impl<F, D, S, E> IntoInspection<(Fallible, fn(&mut D, &S) -> Result<(), E>)> for F
where
    F: Fn(&mut D, &S) -> Result<(), E> + Send + Sync + 'static,
    D: Typed,
    S: Typed,
    E: Into<BoxError>,
{
    fn into_inspection(self) -> Inspection {
        Inspection::with_source(
            Shape::new(false, true),
            move |dst: &mut D, src: &S, _: &Mapper| self(dst, src).map_err(Into::into),
        )
    }
}

impl<F, D, S> IntoInspection<(Plain, fn(&mut D, &S, &Mapper))> for F
where
    F: Fn(&mut D, &S, &Mapper) + Send + Sync + 'static,
    D: Typed,
    S: Typed,
{
    fn into_inspection(self) -> Inspection {
        Inspection::with_source(
            Shape::new(true, false),
            move |dst: &mut D, src: &S, mapper: &Mapper| {
                self(dst, src, mapper);
                Ok::<(), BoxError>(())
            },
        )
    }
}

impl<F, D, S, E> IntoInspection<(Fallible, fn(&mut D, &S, &Mapper) -> Result<(), E>)> for F
where
    F: Fn(&mut D, &S, &Mapper) -> Result<(), E> + Send + Sync + 'static,
    D: Typed,
    S: Typed,
    E: Into<BoxError>,
{
    fn into_inspection(self) -> Inspection {
        Inspection::with_source(
            Shape::new(true, true),
            move |dst: &mut D, src: &S, mapper: &Mapper| self(dst, src, mapper).map_err(Into::into),
        )
    }
}
