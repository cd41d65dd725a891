//! Core utilities for the oag client generator.
//!
//! This crate provides the naming-convention helpers shared by the
//! language backends.

mod naming;

pub use naming::{to_camel_case, to_pascal_case, to_snake_case};
