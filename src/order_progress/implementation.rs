use std::cmp::Ordering;

use super::public_types::*;

const PROGRESS_PERCENT: [u8; 5] = [10, 30, 50, 75, 100];

const ETA: [&str; 5] = [
    "Calculating...",
    "Approx. 25-35 minutes",
    "Approx. 15-25 minutes",
    "Approx. 5-15 minutes",
    "Delivered!",
];

const LABEL: [&str; 5] = [
    "Order Placed",
    "In Kitchen",
    "Rider Assigned",
    "Out for Delivery",
    "Delivered",
];

/// The next status in the sequence. `Delivered` stays `Delivered`.
pub fn advance(current: OrderStatus) -> OrderStatus {
    OrderStatus::ALL
        .get(current.index() + 1)
        .copied()
        .unwrap_or(current)
}

pub fn classify(step: OrderStatus, current: OrderStatus) -> StepState {
    match step.index().cmp(&current.index()) {
        Ordering::Less => StepState::Past,
        Ordering::Equal => StepState::Current,
        Ordering::Greater => StepState::Future,
    }
}

pub fn progress_percent(status: OrderStatus) -> u8 {
    PROGRESS_PERCENT[status.index()]
}

pub fn eta(status: OrderStatus) -> &'static str {
    ETA[status.index()]
}

pub fn label(status: OrderStatus) -> &'static str {
    LABEL[status.index()]
}

/// One view per step, ready for a stepper widget.
pub fn stepper(current: OrderStatus) -> Vec<StepView> {
    OrderStatus::ALL
        .into_iter()
        .map(|status| StepView {
            status,
            label: label(status),
            state: classify(status, current),
        })
        .collect()
}
