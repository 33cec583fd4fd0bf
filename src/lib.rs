//! Domain core of a food-delivery storefront: cart pricing, order progress,
//! restaurant listing queries and the checkout workflow. Everything here is
//! in-process; rendering and routing belong to the caller.

pub mod cart;
pub mod catalog;
pub mod common;
pub mod config;
pub mod order_progress;
pub mod place_order;

pub use cart::{CartTotals, LineItem, QuantityChange};
pub use common::errors::DomainError;
pub use common::simple_types::*;
pub use config::PricingConfig;
pub use order_progress::{OrderStatus, StepState};
