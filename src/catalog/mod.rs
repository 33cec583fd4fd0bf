//! Restaurant listing and menu queries over an in-memory catalog.

pub mod fixtures;
mod implementation;
mod public_types;

pub use implementation::*;
pub use public_types::*;
