//! Type descriptors for the transcribe mapping engine.
//!
//! A [`Ty`] is the comparable identity of a runtime value's type together with
//! its coarse [`Kind`]. Descriptors key the function registries and are carried
//! by mapping errors for diagnostics.
//!
//! # Example
//!
//! ```
//! use transcribe_types::{Kind, Scalar, Ty};
//!
//! let int = Ty::of::<i64>(Kind::Primitive(Scalar::I64));
//! assert_eq!(int.kind(), Kind::Primitive(Scalar::I64));
//! assert!(int.is::<i64>());
//! assert!(Scalar::F32.can_cast_to(Scalar::I64));
//! ```

#![no_std]

mod kind;
mod ty;

pub use kind::{Kind, Scalar};
pub use ty::Ty;
