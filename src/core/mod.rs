//! Core conversion logic — ingredient catalog, conversion math, formatting,
//! and session state.

pub mod catalog;
pub mod convert;
pub mod format;
pub mod state;
