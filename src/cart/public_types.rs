use serde::{Deserialize, Serialize};

use crate::common::errors::DomainError;
use crate::common::simple_types::*;

/// One product entry in a cart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: LineItemId,
    pub unit_price: UnitPrice,
    pub quantity: Quantity,
}

impl LineItem {
    pub fn new(
        id: impl Into<String>,
        unit_price: rust_decimal::Decimal,
        quantity: i64,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id: LineItemId::new(id)?,
            unit_price: UnitPrice::new(unit_price)?,
            quantity: Quantity::new(quantity)?,
        })
    }

    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// Totals derived from a cart. Never stored, always recomputed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Money,
    pub delivery_fee: Money,
    pub tax_amount: Money,
    pub grand_total: Money,
}

/// Result of [`set_quantity`](super::set_quantity). Removal is reported
/// explicitly so the caller can tell the user about it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuantityChange {
    Updated { items: Vec<LineItem> },
    Removed { items: Vec<LineItem>, removed: LineItem },
}

impl QuantityChange {
    pub fn items(&self) -> &[LineItem] {
        match self {
            QuantityChange::Updated { items } => items,
            QuantityChange::Removed { items, .. } => items,
        }
    }

    pub fn into_items(self) -> Vec<LineItem> {
        match self {
            QuantityChange::Updated { items } => items,
            QuantityChange::Removed { items, .. } => items,
        }
    }
}
