use food_delivery::cart::{compute_totals, set_quantity, QuantityChange};
use food_delivery::{LineItem, Money, TaxRate};
use proptest::prelude::*;
use proptest::test_runner::Config;
use rust_decimal::Decimal;

fn line_items() -> impl Strategy<Value = Vec<LineItem>> {
    proptest::collection::vec((1_i64..100_000, 1_i64..50), 0..12).prop_map(|lines| {
        lines
            .into_iter()
            .enumerate()
            .map(|(i, (cents, quantity))| {
                LineItem::new(format!("item{i}"), Decimal::new(cents, 2), quantity).unwrap()
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(Config::with_cases(128))]
    #[test]
    fn grand_total_is_the_sum_of_its_parts(
        items in line_items(),
        fee_cents in 0_i64..2_000,
        rate_bp in 0_u32..=10_000
    ) {
        let fee = Money::new(Decimal::new(fee_cents, 2));
        let rate = TaxRate::from_basis_points(rate_bp).unwrap();
        let totals = compute_totals(&items, fee, rate);

        prop_assert_eq!(totals.grand_total, totals.subtotal + fee + totals.tax_amount);
        prop_assert_eq!(totals.tax_amount.value(), totals.subtotal.value() * rate.value());
    }

    #[test]
    fn dropping_quantity_to_zero_removes_exactly_one_line(
        items in line_items().prop_filter("non-empty", |items| !items.is_empty()),
        pick in any::<prop::sample::Index>()
    ) {
        let target = &items[pick.index(items.len())];
        let change = set_quantity(&items, target.id.value(), 0).unwrap();

        let removed = matches!(change, QuantityChange::Removed { .. });
        prop_assert!(removed);
        prop_assert_eq!(change.items().len(), items.len() - 1);
    }
}
