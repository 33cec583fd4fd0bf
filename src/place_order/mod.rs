//! Checkout: turns a submitted form and cart into a priced, placed order.

pub mod api;
mod implementation;
mod internal_types;
mod public_types;
#[cfg(test)]
mod tests;

pub use implementation::{
    place_order, CheckProductExists, GetProductPrice, PlaceOrder, SendOrderAcknowledgment,
};
pub use internal_types::{Acknowledgment, Letter, SendResult};
pub use public_types::*;
