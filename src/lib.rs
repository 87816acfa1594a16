//! gramdl — baking ingredient unit conversion.
//!
//! Grams to deciliters and back, driven by a compiled-in density table.
//! Deciliters, because that is how Nordic baking recipes measure dry goods.

pub mod cli;
pub mod core;
