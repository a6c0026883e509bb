//! `valuearrays-core` — immutable arrays with value semantics.
//!
//! This crate contains the [`ValueArray`] container and the small pieces it
//! is built from (error model, hash combiner, value object marker). It has no
//! runtime configuration and installs no tracing subscriber.

pub mod error;
pub mod hash;
pub mod value_array;
pub mod value_object;

pub use error::{ValueArrayError, ValueArrayResult};
pub use hash::HashCombiner;
pub use value_array::ValueArray;
pub use value_object::ValueObject;
