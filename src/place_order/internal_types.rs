use crate::cart::{CartTotals, LineItem};
use crate::common::simple_types::*;

use super::public_types::{DeliveryAddress, PaymentMethod};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendResult {
    Sent,
    NotSent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Letter {
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Acknowledgment {
    pub order_id: OrderId,
    pub letter: Letter,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ValidatedOrderLine {
    pub(crate) product_id: LineItemId,
    pub(crate) quantity: Quantity,
}

pub(crate) struct ValidatedCheckout {
    pub(crate) order_id: OrderId,
    pub(crate) address: DeliveryAddress,
    pub(crate) payment: PaymentMethod,
    pub(crate) lines: Vec<ValidatedOrderLine>,
}

#[derive(Clone, Debug)]
pub(crate) struct PricedOrder {
    pub(crate) order_id: OrderId,
    pub(crate) address: DeliveryAddress,
    pub(crate) payment: PaymentMethod,
    pub(crate) lines: Vec<LineItem>,
    pub(crate) totals: CartTotals,
}
