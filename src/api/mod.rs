//! HTTP API Wrappers
//!
//! Frontend bindings to SWAPI and the favorites store, organized by service.

mod swapi;
mod favorites;

pub use swapi::*;
pub use favorites::*;
