//! Timed driver for a live tracking view: advances the order one step per tick
//! until it is delivered.

use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

use super::implementation::{advance, eta, progress_percent};
use super::public_types::OrderStatus;
use crate::common::errors::DomainError;

pub const DEFAULT_TICK: Duration = Duration::from_secs(7);

/// Calls `on_status` with each new status, one per `period`, and returns the
/// terminal status. Starting at `Delivered` returns immediately without a callback.
pub async fn track<F>(
    start: OrderStatus,
    period: Duration,
    mut on_status: F,
) -> Result<OrderStatus, DomainError>
where
    F: FnMut(OrderStatus),
{
    if period.is_zero() {
        return Err(DomainError::invalid("tracking period must be positive"));
    }
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // the first tick completes immediately
    ticker.tick().await;

    let mut current = start;
    while !current.is_terminal() {
        ticker.tick().await;
        current = advance(current);
        info!(
            status = %current,
            progress = progress_percent(current),
            eta = eta(current),
            "order status advanced"
        );
        on_status(current);
    }
    Ok(current)
}
