//! Public entry points: [`Mapper`], its options and errors.

pub mod error;
pub mod mapper;
pub mod options;

pub use error::{BoxError, Error, NoValidMapping};
pub use mapper::{Mapper, map};
pub use options::MapperOptions;
