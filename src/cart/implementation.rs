use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::public_types::*;
use crate::common::errors::DomainError;
use crate::common::simple_types::*;
use crate::config::PricingConfig;

// ---------------------------
// Mutations
// ---------------------------

/// Merges `line` into `items`: an existing line with the same id grows by
/// `line.quantity` and keeps its original unit price, otherwise `line` is appended.
pub fn add_line(items: &[LineItem], line: LineItem) -> Result<Vec<LineItem>, DomainError> {
    let mut updated = items.to_vec();
    match updated.iter().position(|item| item.id == line.id) {
        Some(index) => {
            let existing = &mut updated[index];
            if existing.unit_price != line.unit_price {
                warn!(id = %line.id, "unit price differs from the cart line, keeping the cart price");
            }
            existing.quantity = existing.quantity.checked_add(line.quantity)?;
            debug!(id = %existing.id, quantity = existing.quantity.value(), "incremented cart line");
        }
        None => {
            debug!(id = %line.id, quantity = line.quantity.value(), "added cart line");
            updated.push(line);
        }
    }
    Ok(updated)
}

pub fn add_or_increment(
    items: &[LineItem],
    id: &str,
    unit_price: Decimal,
    delta: i64,
) -> Result<Vec<LineItem>, DomainError> {
    let line = LineItem::new(id, unit_price, delta)?;
    add_line(items, line)
}

pub fn set_quantity(
    items: &[LineItem],
    id: &str,
    new_quantity: i64,
) -> Result<QuantityChange, DomainError> {
    let id = LineItemId::new(id)?;
    let position = items
        .iter()
        .position(|item| item.id == id)
        .ok_or_else(|| DomainError::not_found(format!("no cart line with id {id}")))?;

    let mut updated = items.to_vec();
    if new_quantity < 1 {
        let removed = updated.remove(position);
        debug!(%id, "quantity dropped below one, removed cart line");
        return Ok(QuantityChange::Removed {
            items: updated,
            removed,
        });
    }

    updated[position].quantity = Quantity::new(new_quantity)?;
    debug!(%id, quantity = new_quantity, "set cart line quantity");
    Ok(QuantityChange::Updated { items: updated })
}

pub fn remove(items: &[LineItem], id: &str) -> Vec<LineItem> {
    items
        .iter()
        .filter(|item| item.id.value() != id)
        .cloned()
        .collect()
}

// ---------------------------
// Derived values
// ---------------------------

pub fn compute_totals(items: &[LineItem], delivery_fee: Money, tax_rate: TaxRate) -> CartTotals {
    let subtotal: Money = items.iter().map(LineItem::line_total).sum();
    let tax_amount = tax_rate.apply(subtotal);

    CartTotals {
        subtotal,
        delivery_fee,
        tax_amount,
        grand_total: subtotal + delivery_fee + tax_amount,
    }
}

pub fn compute_totals_with(items: &[LineItem], config: &PricingConfig) -> CartTotals {
    compute_totals(items, config.delivery_fee, config.tax_rate)
}

/// Total units across all lines, as shown on the cart badge.
pub fn item_count(items: &[LineItem]) -> u64 {
    items
        .iter()
        .map(|item| u64::from(item.quantity.value()))
        .sum()
}
