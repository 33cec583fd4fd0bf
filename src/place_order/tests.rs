use std::sync::Arc;

use anyhow::anyhow;
use rust_decimal::Decimal;

use super::api::place_menu_order;
use super::implementation::{
    create_acknowledgment_letter, place_order, price_order, to_valid_order_line, validate_checkout,
};
use super::internal_types::{Acknowledgment, SendResult, ValidatedOrderLine};
use super::public_types::*;
use crate::catalog::fixtures::demo_menu;
use crate::catalog::MenuItem;
use crate::common::errors::DomainError;
use crate::common::simple_types::{LineItemId, Quantity};
use crate::config::PricingConfig;
use crate::order_progress::OrderStatus;

fn line(product_id: &str, quantity: i64) -> UnvalidatedOrderLine {
    UnvalidatedOrderLine {
        product_id: product_id.to_string(),
        quantity,
    }
}

fn checkout(lines: Vec<UnvalidatedOrderLine>) -> UnvalidatedCheckout {
    UnvalidatedCheckout {
        order_id: "FD12345XYZ".to_string(),
        address: UnvalidatedAddress {
            full_name: "Jane Doe".to_string(),
            street: "123 Foodie Lane".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip: "62701".to_string(),
            country: Some("US".to_string()),
            phone: Some("  ".to_string()),
        },
        payment: UnvalidatedPayment {
            method: Some("creditCard".to_string()),
            card_name: Some("Jane Doe".to_string()),
            card_number: Some("4111 1111 1111 1111".to_string()),
            card_expiry: Some("12/27".to_string()),
            card_cvc: Some("123".to_string()),
        },
        lines,
    }
}

fn checkout_error(err: &anyhow::Error) -> &CheckoutError {
    err.downcast_ref::<CheckoutError>()
        .unwrap_or_else(|| panic!("expected a checkout error, got {err}"))
}

#[tokio::test]
async fn converts_to_order_line() {
    let fake_id = LineItemId::new("fake-id").unwrap();
    let ids = Arc::new(vec![fake_id]);
    let ids_ref = &ids;
    let check_product_exists = move |id: LineItemId| async move {
        let ids = ids_ref.clone();
        if ids.contains(&id) {
            return Ok(());
        }
        Err(anyhow!("Arg"))
    };

    let valid_line = to_valid_order_line(check_product_exists, line("fake-id", 2))
        .await
        .unwrap();
    let valid_order_line = ValidatedOrderLine {
        product_id: LineItemId::new("fake-id").unwrap(),
        quantity: Quantity::new(2).unwrap(),
    };
    assert_eq!(valid_line, valid_order_line);

    assert!(to_valid_order_line(check_product_exists, line("other", 1))
        .await
        .is_err());
}

#[tokio::test]
async fn zero_quantity_lines_are_invalid() {
    let check_product_exists = |_id: LineItemId| async { Ok::<_, anyhow::Error>(()) };

    let err = to_valid_order_line(check_product_exists, line("s1", 0))
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DomainError>(),
        Some(DomainError::InvalidArgument(_))
    ));
}

#[tokio::test]
async fn places_an_order_and_emits_events() {
    let menu = demo_menu().unwrap();
    let events = place_menu_order(
        &menu,
        PricingConfig::default(),
        checkout(vec![line("s1", 1), line("dr1", 2), line("s1", 1)]),
    )
    .await
    .unwrap();

    assert_eq!(events.len(), 3);
    assert!(matches!(events[0], PlaceOrderEvent::AcknowledgmentSent(_)));
    match &events[1] {
        PlaceOrderEvent::BillableOrderPlaced(billable) => {
            // 2 x 8.00 + 2 x 4.00, plus 5.00 delivery and 8% tax
            assert_eq!(billable.amount_to_bill.value().value(), Decimal::new(3092, 2));
        }
        other => panic!("expected a billing event, got {other:?}"),
    }
    match &events[2] {
        PlaceOrderEvent::OrderPlaced(placed) => {
            assert_eq!(placed.status, OrderStatus::OrderPlaced);
            assert_eq!(placed.order_id.value(), "FD12345XYZ");
            assert_eq!(placed.delivery_address.phone, None);
        }
        other => panic!("expected a placed event, got {other:?}"),
    }
}

#[tokio::test]
async fn unsent_acknowledgment_emits_no_acknowledgment_event() {
    let menu = demo_menu().unwrap();
    let menu_ref: &[MenuItem] = &menu;
    let check_product_exists = move |id: LineItemId| async move {
        if menu_ref.iter().any(|item| item.id == id) {
            Ok(())
        } else {
            Err(anyhow!("unknown product {id}"))
        }
    };
    let get_product_price = move |id: LineItemId| async move {
        menu_ref
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.price)
            .ok_or_else(|| anyhow!("unknown product {id}"))
    };
    let send_order_acknowledgment =
        |_acknowledgment: Acknowledgment| async { Ok::<_, anyhow::Error>(SendResult::NotSent) };

    let workflow = place_order(
        check_product_exists,
        get_product_price,
        send_order_acknowledgment,
        PricingConfig::default(),
    );
    let events = workflow(checkout(vec![line("m1", 1)])).await.unwrap();

    assert_eq!(events.len(), 2);
    assert!(events
        .iter()
        .all(|e| !matches!(e, PlaceOrderEvent::AcknowledgmentSent(_))));
}

#[tokio::test]
async fn unknown_products_fail_the_order() {
    let menu = demo_menu().unwrap();
    let err = place_menu_order(
        &menu,
        PricingConfig::default(),
        checkout(vec![line("nope", 1)]),
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DomainError>(),
        Some(DomainError::NotFound(_))
    ));
}

#[tokio::test]
async fn reports_every_invalid_field() {
    let mut form = checkout(vec![line("s1", 1)]);
    form.address.street = "Main".to_string();
    form.address.country = None;
    form.payment.card_number = Some("4111 1111 1111".to_string());
    form.payment.card_expiry = Some("13/27".to_string());

    let menu = demo_menu().unwrap();
    let err = place_menu_order(&menu, PricingConfig::default(), form)
        .await
        .unwrap_err();
    let error = checkout_error(&err);

    for field in ["street", "country", "card_number", "card_expiry"] {
        assert!(error.has_field(field), "{field} should be reported");
    }
    assert!(!error.has_field("full_name"));
    assert!(!error.has_field("card_cvc"));
}

#[tokio::test]
async fn paypal_skips_card_checks() {
    let mut form = checkout(vec![line("d1", 1)]);
    form.payment = UnvalidatedPayment {
        method: Some("paypal".to_string()),
        ..Default::default()
    };

    let menu = demo_menu().unwrap();
    assert!(place_menu_order(&menu, PricingConfig::default(), form)
        .await
        .is_ok());
}

#[tokio::test]
async fn missing_payment_method_is_reported() {
    let mut form = checkout(vec![line("d1", 1)]);
    form.payment.method = None;

    let menu = demo_menu().unwrap();
    let err = place_menu_order(&menu, PricingConfig::default(), form)
        .await
        .unwrap_err();

    assert!(checkout_error(&err).has_field("payment_method"));
}

#[tokio::test]
async fn empty_cart_cannot_be_placed() {
    let menu = demo_menu().unwrap();
    let err = place_menu_order(&menu, PricingConfig::default(), checkout(vec![]))
        .await
        .unwrap_err();

    assert_eq!(checkout_error(&err), &CheckoutError::EmptyCart);
}

#[tokio::test]
async fn acknowledgment_letter_summarises_the_order() {
    let menu = demo_menu().unwrap();
    let menu_ref: &[MenuItem] = &menu;
    let check_product_exists = |_id: LineItemId| async { Ok::<_, anyhow::Error>(()) };
    let get_product_price = move |id: LineItemId| async move {
        menu_ref
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.price)
            .ok_or_else(|| anyhow!("unknown product {id}"))
    };

    let validated = validate_checkout(check_product_exists, checkout(vec![line("m2", 2)]))
        .await
        .unwrap();
    let priced = price_order(get_product_price, PricingConfig::default(), validated)
        .await
        .unwrap();
    let letter = create_acknowledgment_letter(&priced);

    assert!(letter.content.contains("FD12345XYZ"));
    assert!(letter.content.contains("2 item(s)"));
    assert!(letter.content.contains("card ending 1111"));
    // 56.00 + 5.00 + 4.48
    assert!(letter.content.contains("$65.48"));
}

#[tokio::test]
async fn non_ascii_digits_are_not_card_digits() {
    let mut form = checkout(vec![line("s1", 1)]);
    form.payment.card_number = Some("४१११४१११४१११४१११".to_string());
    form.payment.card_expiry = Some("١٢/٢٧".to_string());
    form.payment.card_cvc = Some("१२३".to_string());

    let menu = demo_menu().unwrap();
    let err = place_menu_order(&menu, PricingConfig::default(), form)
        .await
        .unwrap_err();
    let error = checkout_error(&err);

    for field in ["card_number", "card_expiry", "card_cvc"] {
        assert!(error.has_field(field), "{field} should be reported");
    }
}

#[test]
fn last_four_counts_characters() {
    let card = |number: &str| CardDetails {
        holder_name: "Jane Doe".to_string(),
        number: number.to_string(),
        expiry: "12/27".to_string(),
    };

    assert_eq!(card("4111111111111234").last_four(), "1234");
    assert_eq!(card("४१११४१११४१११४१२३").last_four(), "४१२३");
    assert_eq!(card("12").last_four(), "12");
}
