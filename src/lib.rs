//! Transcribe - structural data mapping
//!
//! # Overview
//!
//! Transcribe copies data from a source value into a destination value of a
//! possibly unrelated type by matching structure rather than types: struct
//! fields by name, sequences by position, maps by key. Common use cases
//! include:
//!
//! - Turning domain models into DTOs and back
//! - Narrowing or widening numeric fields between layers
//! - Collapsing keyed collections into lists
//!
//! # Quick Start
//!
//! ```
//! use transcribe::Reflect;
//!
//! #[derive(Clone, Default, Reflect)]
//! struct Product {
//!     name: String,
//!     price: f64,
//! }
//!
//! #[derive(Clone, Debug, Default, PartialEq, Reflect)]
//! struct ProductDto {
//!     name: String,
//!     price: i64,
//! }
//!
//! let product = Product { name: "Shoes".into(), price: 17.3 };
//! let mut dto = ProductDto::default();
//! transcribe::map(&mut dto, &product).unwrap();
//!
//! assert_eq!(dto, ProductDto { name: "Shoes".into(), price: 17 });
//! ```
//!
//! # Custom Functions
//!
//! A [`Mapper`] carries conversion functions, which replace the built-in rules
//! for one pair of types, and inspection functions, which run after a value
//! has been populated:
//!
//! ```
//! use transcribe::{Mapper, Reflect};
//!
//! #[derive(Clone, Default, Reflect)]
//! struct Product {
//!     name: String,
//!     price: f64,
//! }
//!
//! #[derive(Clone, Debug, Default, PartialEq, Reflect)]
//! struct ProductDto {
//!     name: String,
//!     price: String,
//!     expensive: bool,
//! }
//!
//! let mut mapper = Mapper::new();
//! mapper.register_conversion(|price: &f64| format!("${price:.2}"));
//! mapper.register_inspection(|dto: &mut ProductDto, product: &Product| {
//!     dto.expensive = product.price > 10.0;
//! });
//!
//! let product = Product { name: "Shoes".into(), price: 17.3 };
//! let dto: ProductDto = mapper.map_new(&product).unwrap();
//!
//! assert_eq!(dto.price, "$17.30");
//! assert!(dto.expensive);
//! ```
//!
//! # Mapping Rules
//!
//! For every (destination, source) pair the first matching rule wins:
//!
//! 1. A conversion function registered for exactly these two types
//! 2. Assignment of an identical type, or a scalar cast (`f64` to `i64`,
//!    `char` to `String`, ...). When custom functions are registered,
//!    identical structs, sequences and maps are walked instead so that hooks
//!    on their parts still fire
//! 3. An `Option`/`Box` source is unwrapped; `None` maps to nothing
//! 4. An `Option`/`Box` destination is filled in, allocating if needed
//! 5. Struct to struct, field by field, by name
//! 6. Sequence to sequence, element by element
//! 7. Map to map, key and value independently
//! 8. Map to sequence, projecting the values; if that fails and the values
//!    are themselves sequences, they are concatenated
//!
//! Anything else fails with [`NoValidMapping`].

pub use transcribe_core::*;
pub use transcribe_macros::Reflect;
