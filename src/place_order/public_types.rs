use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::common::simple_types::*;
use crate::order_progress::OrderStatus;

// ---------------------------
// Inputs
// ---------------------------

/// Checkout form exactly as submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnvalidatedCheckout {
    pub order_id: String,
    pub address: UnvalidatedAddress,
    pub payment: UnvalidatedPayment,
    pub lines: Vec<UnvalidatedOrderLine>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnvalidatedAddress {
    pub full_name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: Option<String>,
    pub phone: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnvalidatedPayment {
    /// `"creditCard"` or `"paypal"`.
    pub method: Option<String>,
    pub card_name: Option<String>,
    pub card_number: Option<String>,
    /// `MM/YY`
    pub card_expiry: Option<String>,
    pub card_cvc: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnvalidatedOrderLine {
    pub product_id: String,
    pub quantity: i64,
}

// ---------------------------
// Validated values
// ---------------------------

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    pub full_name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub phone: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetails {
    pub holder_name: String,
    /// Digits only.
    pub number: String,
    pub expiry: String,
}

impl CardDetails {
    pub fn last_four(&self) -> &str {
        match self.number.char_indices().rev().nth(3) {
            Some((start, _)) => &self.number[start..],
            None => &self.number,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    CreditCard(CardDetails),
    PayPal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingAmount {
    value: Money,
}

impl BillingAmount {
    pub fn new(value: Money) -> Self {
        Self { value }
    }
    pub fn value(&self) -> Money {
        self.value
    }
}

// ---------------------------
// Events
// ---------------------------

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AcknowledgmentSent {
    pub order_id: OrderId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OrderPlaced {
    pub order_id: OrderId,
    pub status: OrderStatus,
    pub delivery_address: DeliveryAddress,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BillableOrderPlaced {
    pub order_id: OrderId,
    pub amount_to_bill: BillingAmount,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum PlaceOrderEvent {
    AcknowledgmentSent(AcknowledgmentSent),
    OrderPlaced(OrderPlaced),
    BillableOrderPlaced(BillableOrderPlaced),
}

impl From<AcknowledgmentSent> for PlaceOrderEvent {
    fn from(v: AcknowledgmentSent) -> Self {
        Self::AcknowledgmentSent(v)
    }
}

impl From<BillableOrderPlaced> for PlaceOrderEvent {
    fn from(v: BillableOrderPlaced) -> Self {
        Self::BillableOrderPlaced(v)
    }
}

impl From<OrderPlaced> for PlaceOrderEvent {
    fn from(v: OrderPlaced) -> Self {
        Self::OrderPlaced(v)
    }
}

// ---------------------------
// Errors
// ---------------------------

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Checkout form has {} invalid field(s)", .0.len())]
    InvalidFields(Vec<FieldError>),

    #[error("Cannot place an order with an empty cart")]
    EmptyCart,
}

impl CheckoutError {
    pub fn has_field(&self, field: &str) -> bool {
        match self {
            CheckoutError::InvalidFields(errors) => errors.iter().any(|e| e.field == field),
            CheckoutError::EmptyCart => false,
        }
    }
}
