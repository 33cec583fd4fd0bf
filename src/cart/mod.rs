//! Cart pricing: line-item mutations and the totals derived from them.

mod implementation;
mod public_types;

pub use implementation::*;
pub use public_types::*;
