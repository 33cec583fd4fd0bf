use anyhow::Result;
use async_fn_traits::AsyncFn1;
use futures_util::future::try_join_all;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

use super::internal_types::*;
use super::public_types::*;
use crate::cart::{add_line, compute_totals_with, item_count, LineItem};
use crate::common::simple_types::*;
use crate::config::PricingConfig;
use crate::order_progress::OrderStatus;

// ======================================================
// Section 1 : Define each step in the workflow using types
// ======================================================

pub trait CheckProductExists: AsyncFn1<LineItemId, Output = Result<()>> + Copy {}
impl<T> CheckProductExists for T where T: AsyncFn1<LineItemId, Output = Result<()>> + Copy {}

pub trait GetProductPrice: AsyncFn1<LineItemId, Output = Result<UnitPrice>> + Copy {}
impl<T> GetProductPrice for T where T: AsyncFn1<LineItemId, Output = Result<UnitPrice>> + Copy {}

pub trait SendOrderAcknowledgment:
    AsyncFn1<Acknowledgment, Output = Result<SendResult>> + Copy
{
}
impl<T> SendOrderAcknowledgment for T where
    T: AsyncFn1<Acknowledgment, Output = Result<SendResult>> + Copy
{
}

pub trait PlaceOrder:
    AsyncFn1<UnvalidatedCheckout, Output = Result<Vec<PlaceOrderEvent>>> + Copy
{
}
impl<T> PlaceOrder for T where
    T: AsyncFn1<UnvalidatedCheckout, Output = Result<Vec<PlaceOrderEvent>>> + Copy
{
}

// ======================================================
// Section 2 : Implementation
// ======================================================

// ---------------------------
// ValidateCheckout step
// ---------------------------

static CARD_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{13,19}$").expect("card number pattern"));
static CARD_EXPIRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0[1-9]|1[0-2])/[0-9]{2}$").expect("card expiry pattern"));
static CARD_CVC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,4}$").expect("card cvc pattern"));

fn min_chars(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    min: usize,
    message: &'static str,
) -> String {
    let value = value.trim();
    if value.chars().count() < min {
        errors.push(FieldError { field, message });
    }
    value.to_string()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_address(raw: UnvalidatedAddress, errors: &mut Vec<FieldError>) -> DeliveryAddress {
    let full_name = min_chars(
        errors,
        "full_name",
        &raw.full_name,
        3,
        "Full name must be at least 3 characters.",
    );
    let street = min_chars(
        errors,
        "street",
        &raw.street,
        5,
        "Street address must be at least 5 characters.",
    );
    let city = min_chars(errors, "city", &raw.city, 2, "City must be at least 2 characters.");
    let state = min_chars(
        errors,
        "state",
        &raw.state,
        2,
        "State/Province must be at least 2 characters.",
    );
    let zip = min_chars(
        errors,
        "zip",
        &raw.zip,
        3,
        "ZIP/Postal code must be at least 3 characters.",
    );
    let country = non_blank(raw.country).unwrap_or_else(|| {
        errors.push(FieldError {
            field: "country",
            message: "Please select a country.",
        });
        String::new()
    });

    DeliveryAddress {
        full_name,
        street,
        city,
        state,
        zip,
        country,
        phone: non_blank(raw.phone),
    }
}

fn validate_card(raw: UnvalidatedPayment, errors: &mut Vec<FieldError>) -> CardDetails {
    let holder_name = min_chars(
        errors,
        "card_name",
        raw.card_name.as_deref().unwrap_or_default(),
        2,
        "Please enter the name on the card.",
    );

    let number: String = raw
        .card_number
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if !CARD_NUMBER.is_match(&number) {
        errors.push(FieldError {
            field: "card_number",
            message: "Card number must be 13 to 19 digits.",
        });
    }

    let expiry = raw.card_expiry.unwrap_or_default().trim().to_string();
    if !CARD_EXPIRY.is_match(&expiry) {
        errors.push(FieldError {
            field: "card_expiry",
            message: "Expiry must be in MM/YY format.",
        });
    }

    let cvc = raw.card_cvc.unwrap_or_default();
    if !CARD_CVC.is_match(cvc.trim()) {
        errors.push(FieldError {
            field: "card_cvc",
            message: "CVC must be 3 or 4 digits.",
        });
    }

    CardDetails {
        holder_name,
        number,
        expiry,
    }
}

fn validate_payment(raw: UnvalidatedPayment, errors: &mut Vec<FieldError>) -> Option<PaymentMethod> {
    let method = non_blank(raw.method.clone());
    match method.as_deref() {
        Some("creditCard") => Some(PaymentMethod::CreditCard(validate_card(raw, errors))),
        Some("paypal") => Some(PaymentMethod::PayPal),
        _ => {
            errors.push(FieldError {
                field: "payment_method",
                message: "Please select a payment method.",
            });
            None
        }
    }
}

pub(crate) async fn to_valid_order_line(
    check_product_exists: impl CheckProductExists,
    unvalidated_line: UnvalidatedOrderLine,
) -> Result<ValidatedOrderLine> {
    let product_id = LineItemId::new(unvalidated_line.product_id)?;
    let quantity = Quantity::new(unvalidated_line.quantity)?;

    check_product_exists(product_id.clone()).await?;

    Ok(ValidatedOrderLine {
        product_id,
        quantity,
    })
}

pub(crate) async fn validate_checkout(
    check_product_exists: impl CheckProductExists,
    unvalidated: UnvalidatedCheckout,
) -> Result<ValidatedCheckout> {
    let mut errors = Vec::new();

    let order_id = match OrderId::new(unvalidated.order_id) {
        Ok(order_id) => Some(order_id),
        Err(_) => {
            errors.push(FieldError {
                field: "order_id",
                message: "Order id is missing.",
            });
            None
        }
    };
    let address = validate_address(unvalidated.address, &mut errors);
    let payment = validate_payment(unvalidated.payment, &mut errors);

    let (order_id, payment) = match (order_id, payment) {
        (Some(order_id), Some(payment)) if errors.is_empty() => (order_id, payment),
        _ => {
            warn!(invalid_fields = errors.len(), "rejected checkout form");
            return Err(CheckoutError::InvalidFields(errors).into());
        }
    };

    if unvalidated.lines.is_empty() {
        warn!(%order_id, "rejected checkout with an empty cart");
        return Err(CheckoutError::EmptyCart.into());
    }

    let lines = try_join_all(
        unvalidated
            .lines
            .into_iter()
            .map(|line| to_valid_order_line(check_product_exists, line)),
    )
    .await?;

    Ok(ValidatedCheckout {
        order_id,
        address,
        payment,
        lines,
    })
}

// ---------------------------
// PriceOrder step
// ---------------------------

async fn to_priced_order_line(
    get_product_price: impl GetProductPrice,
    validated_line: ValidatedOrderLine,
) -> Result<LineItem> {
    let unit_price = get_product_price(validated_line.product_id.clone()).await?;

    Ok(LineItem {
        id: validated_line.product_id,
        unit_price,
        quantity: validated_line.quantity,
    })
}

pub(crate) async fn price_order(
    get_product_price: impl GetProductPrice,
    config: PricingConfig,
    validated: ValidatedCheckout,
) -> Result<PricedOrder> {
    let priced_lines = try_join_all(
        validated
            .lines
            .into_iter()
            .map(|line| to_priced_order_line(get_product_price, line)),
    )
    .await?;

    // repeated products collapse into one cart line
    let lines = priced_lines
        .into_iter()
        .try_fold(Vec::new(), |lines, line| add_line(&lines, line))?;
    let totals = compute_totals_with(&lines, &config);

    Ok(PricedOrder {
        order_id: validated.order_id,
        address: validated.address,
        payment: validated.payment,
        lines,
        totals,
    })
}

// ---------------------------
// AcknowledgeOrder step
// ---------------------------

pub(crate) fn create_acknowledgment_letter(priced_order: &PricedOrder) -> Letter {
    let payment = match &priced_order.payment {
        PaymentMethod::CreditCard(card) => format!("card ending {}", card.last_four()),
        PaymentMethod::PayPal => "PayPal".to_string(),
    };
    let address = &priced_order.address;

    Letter {
        content: format!(
            "Thanks for your order {}!\n\
             Delivering {} item(s) to {}, {}, {}.\n\
             Total charged to {}: {}",
            priced_order.order_id,
            item_count(&priced_order.lines),
            address.full_name,
            address.street,
            address.city,
            payment,
            priced_order.totals.grand_total,
        ),
    }
}

async fn acknowledge_order(
    send_order_acknowledgment: impl SendOrderAcknowledgment,
    priced_order: &PricedOrder,
) -> Result<Option<OrderId>> {
    let acknowledgment = Acknowledgment {
        order_id: priced_order.order_id.clone(),
        letter: create_acknowledgment_letter(priced_order),
    };
    match send_order_acknowledgment(acknowledgment).await? {
        SendResult::Sent => Ok(Some(priced_order.order_id.clone())),
        SendResult::NotSent => Ok(None),
    }
}

// ---------------------------
// Create events
// ---------------------------

fn create_placed_event(priced_order: &PricedOrder) -> PlaceOrderEvent {
    OrderPlaced {
        order_id: priced_order.order_id.clone(),
        status: OrderStatus::OrderPlaced,
        delivery_address: priced_order.address.clone(),
    }
    .into()
}
fn create_billing_event(priced_order: &PricedOrder) -> PlaceOrderEvent {
    BillableOrderPlaced {
        order_id: priced_order.order_id.clone(),
        amount_to_bill: BillingAmount::new(priced_order.totals.grand_total),
    }
    .into()
}
fn create_acknowledgment_event(order_id: OrderId) -> PlaceOrderEvent {
    AcknowledgmentSent { order_id }.into()
}

fn create_events(
    priced_order: &PricedOrder,
    acknowledgment_option: Option<OrderId>,
) -> Vec<PlaceOrderEvent> {
    let acknowledgment_events: Vec<PlaceOrderEvent> = acknowledgment_option
        .map(create_acknowledgment_event)
        .into_iter()
        .collect();

    let billing_events = vec![create_billing_event(priced_order)];
    let placed_events = vec![create_placed_event(priced_order)];

    [acknowledgment_events, billing_events, placed_events].concat()
}

// ---------------------------
// overall workflow
// ---------------------------

/// Builds the checkout workflow: validate the form, price the cart, send the
/// acknowledgment and return the resulting events.
pub fn place_order(
    check_product_exists: impl CheckProductExists,
    get_product_price: impl GetProductPrice,
    send_order_acknowledgment: impl SendOrderAcknowledgment,
    config: PricingConfig,
) -> impl PlaceOrder {
    move |unvalidated: UnvalidatedCheckout| async move {
        let validated = validate_checkout(check_product_exists, unvalidated).await?;

        let priced_order = price_order(get_product_price, config, validated).await?;

        let acknowledgment_option =
            acknowledge_order(send_order_acknowledgment, &priced_order).await?;
        if acknowledgment_option.is_none() {
            warn!(order_id = %priced_order.order_id, "order acknowledgment was not sent");
        }

        info!(
            order_id = %priced_order.order_id,
            total = %priced_order.totals.grand_total,
            "order placed"
        );
        let events = create_events(&priced_order, acknowledgment_option);
        Ok::<_, anyhow::Error>(events)
    }
}
