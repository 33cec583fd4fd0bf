use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::common::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineItemId {
    value: String,
}

impl LineItemId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let value = id.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid("line item id must not be blank"));
        }
        Ok(Self { value })
    }
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl TryFrom<String> for LineItemId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LineItemId> for String {
    fn from(id: LineItemId) -> Self {
        id.value
    }
}

impl fmt::Display for LineItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderId {
    value: String,
}

impl OrderId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let value = id.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid("order id must not be blank"));
        }
        Ok(Self { value })
    }
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl TryFrom<String> for OrderId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.value
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// An exact currency amount. Arithmetic never rounds; only [`Money::display`] does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    value: Decimal,
}

impl Money {
    pub const ZERO: Money = Money {
        value: Decimal::ZERO,
    };

    pub fn new(value: Decimal) -> Self {
        Self { value }
    }
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Two decimal places, half away from zero: `23.3276` shows as `"23.33"`.
    pub fn display(&self) -> String {
        let mut rounded = self
            .value
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        rounded.to_string()
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value + rhs.value,
        }
    }
}

impl Sum<Self> for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |a, b| a + b)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.display())
    }
}

/// Price of a single unit; always strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct UnitPrice {
    value: Money,
}

impl UnitPrice {
    pub fn new(value: Decimal) -> Result<Self, DomainError> {
        if value <= Decimal::ZERO {
            return Err(DomainError::invalid(format!(
                "unit price must be positive, got {value}"
            )));
        }
        Ok(Self {
            value: Money::new(value),
        })
    }
    pub fn value(&self) -> Money {
        self.value
    }
    pub fn times(&self, quantity: Quantity) -> Money {
        Money::new(self.value.value() * Decimal::from(quantity.value()))
    }
}

impl TryFrom<Decimal> for UnitPrice {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UnitPrice> for Decimal {
    fn from(price: UnitPrice) -> Self {
        price.value.value()
    }
}

/// Units of one line item; never below one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Quantity {
    value: u32,
}

impl Quantity {
    pub const ONE: Quantity = Quantity { value: 1 };

    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value < 1 {
            return Err(DomainError::invalid(format!(
                "quantity must be at least 1, got {value}"
            )));
        }
        let value = u32::try_from(value)
            .map_err(|_| DomainError::invalid(format!("quantity {value} is too large")))?;
        Ok(Self { value })
    }
    pub fn value(&self) -> u32 {
        self.value
    }
    pub fn checked_add(self, other: Quantity) -> Result<Quantity, DomainError> {
        self.value
            .checked_add(other.value)
            .map(|value| Quantity { value })
            .ok_or_else(|| DomainError::invalid("quantity overflow"))
    }
}

impl TryFrom<i64> for Quantity {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for i64 {
    fn from(quantity: Quantity) -> Self {
        i64::from(quantity.value)
    }
}

/// Fraction of the subtotal charged as tax, `0.08` for 8%.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct TaxRate {
    value: Decimal,
}

impl TaxRate {
    pub fn new(value: Decimal) -> Result<Self, DomainError> {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(DomainError::invalid(format!(
                "tax rate must be between 0 and 1, got {value}"
            )));
        }
        Ok(Self { value })
    }
    /// `800` is 8%.
    pub fn from_basis_points(basis_points: u32) -> Result<Self, DomainError> {
        Self::new(Decimal::new(i64::from(basis_points), 4))
    }
    pub fn value(&self) -> Decimal {
        self.value
    }
    pub fn apply(&self, amount: Money) -> Money {
        Money::new(amount.value() * self.value)
    }
    /// Whole-number percentage for labels such as "Taxes (8%)".
    pub fn percent_label(&self) -> String {
        let percent = (self.value * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        format!("{}%", percent.normalize())
    }
}

impl TryFrom<Decimal> for TaxRate {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaxRate> for Decimal {
    fn from(rate: TaxRate) -> Self {
        rate.value
    }
}
