use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::errors::DomainError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    OrderPlaced,
    InKitchen,
    RiderAssigned,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::OrderPlaced,
        OrderStatus::InKitchen,
        OrderStatus::RiderAssigned,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }

    pub fn name(self) -> &'static str {
        match self {
            OrderStatus::OrderPlaced => "ORDER_PLACED",
            OrderStatus::InKitchen => "IN_KITCHEN",
            OrderStatus::RiderAssigned => "RIDER_ASSIGNED",
            OrderStatus::OutForDelivery => "OUT_FOR_DELIVERY",
            OrderStatus::Delivered => "DELIVERED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.name() == s)
            .ok_or_else(|| DomainError::invalid(format!("invalid order status {s:?}")))
    }
}

/// Where a stepper step sits relative to the current status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepState {
    Past,
    Current,
    Future,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StepView {
    pub status: OrderStatus,
    pub label: &'static str,
    pub state: StepState,
}
