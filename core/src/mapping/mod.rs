//! The mapping algorithm.
//!
//! The dispatcher picks a rule for each (destination, source) pair and
//! recurses through the composite transformers. [`fields`] resolves struct
//! fields by name.

mod composite;
mod dispatch;
pub mod fields;

pub(crate) use dispatch::map_value;

#[cfg(test)]
mod composite_test;
