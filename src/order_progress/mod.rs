//! Delivery order lifecycle: the fixed status sequence, its lookup tables,
//! and the stepper classification used to render it.

mod implementation;
mod public_types;
pub mod tracker;

pub use implementation::*;
pub use public_types::*;
