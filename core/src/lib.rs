//! Core of the transcribe mapping engine.
//!
//! Copies data from a source value into a destination value of a possibly
//! unrelated type by matching structure: struct field names, sequence
//! positions and map keys. Callers can override how one type becomes another
//! with conversion functions, and post-process populated values with
//! inspection functions.

// Lets the `#[derive(Reflect)]` output, which refers to `::transcribe`, resolve
// from within this crate as well as through the facade crate.
extern crate self as transcribe;

pub mod api;
pub mod mapping;
pub mod registry;
pub mod values;

pub use api::{BoxError, Error, Mapper, MapperOptions, NoValidMapping, map};
pub use registry::{IntoConversion, IntoInspection, Receiver, Shape};
pub use transcribe_types::{Kind, Scalar, Ty};
pub use values::{
    FieldInfo, FieldRole, Literal, Map, Pointer, Primitive, Reflect, ReflectMut, ReflectRef,
    Sequence, Struct, Typed,
};
