use anyhow::Result;
use tracing::info;

use crate::catalog::MenuItem;
use crate::common::errors::DomainError;
use crate::common::simple_types::LineItemId;
use crate::config::PricingConfig;

use super::implementation::place_order;
use super::internal_types::{Acknowledgment, SendResult};
use super::public_types::{PlaceOrderEvent, UnvalidatedCheckout};

fn find_item<'a>(menu: &'a [MenuItem], id: &LineItemId) -> Result<&'a MenuItem> {
    menu.iter()
        .find(|item| &item.id == id)
        .ok_or_else(|| DomainError::not_found(format!("{id} is not on the menu")).into())
}

/// Places an order against a restaurant menu held in memory. The
/// acknowledgment is logged rather than delivered.
pub async fn place_menu_order(
    menu: &[MenuItem],
    config: PricingConfig,
    checkout: UnvalidatedCheckout,
) -> Result<Vec<PlaceOrderEvent>> {
    let check_product_exists = move |id: LineItemId| async move { find_item(menu, &id).map(|_| ()) };
    let get_product_price =
        move |id: LineItemId| async move { find_item(menu, &id).map(|item| item.price) };
    let send_order_acknowledgment = |acknowledgment: Acknowledgment| async move {
        info!(
            order_id = %acknowledgment.order_id,
            letter = %acknowledgment.letter.content,
            "order acknowledgment"
        );
        Ok::<_, anyhow::Error>(SendResult::Sent)
    };

    let workflow = place_order(
        check_product_exists,
        get_product_price,
        send_order_acknowledgment,
        config,
    );
    workflow(checkout).await
}
