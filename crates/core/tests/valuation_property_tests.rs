//! Property-based tests for the valuation engine.

use std::collections::BTreeMap;
use std::sync::Arc;

use finstats_core::quotes::QuoteResolver;
use finstats_core::{valuate, HoldingsMap, InvestmentStats, Order};
use finstats_market_data::{InMemoryQuoteSource, RawSnapshot};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

/// Positive amount with two decimals.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_currency() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("USD".to_string())),
        Just(Some("EUR".to_string())),
    ]
}

fn arb_order() -> impl Strategy<Value = Order> {
    (arb_amount(), arb_amount(), arb_currency()).prop_map(|(units, cost_basis, currency)| Order {
        units,
        cost_basis,
        currency,
    })
}

/// Symbol -> (quote price, orders).
fn arb_portfolio() -> impl Strategy<Value = BTreeMap<String, (Decimal, Vec<Order>)>> {
    proptest::collection::btree_map(
        "[A-Z]{1,4}",
        (arb_amount(), proptest::collection::vec(arb_order(), 1..4)),
        0..6,
    )
}

// =============================================================================
// Helpers
// =============================================================================

fn run_valuation(portfolio: &BTreeMap<String, (Decimal, Vec<Order>)>) -> InvestmentStats {
    let source = InMemoryQuoteSource::new()
        .with_snapshot(RawSnapshot::regular("EUR=X", Decimal::new(5, 1), Decimal::ZERO));
    let mut holdings = HoldingsMap::new();
    for (symbol, (price, orders)) in portfolio {
        source.insert(RawSnapshot::regular(symbol, *price, Decimal::ZERO));
        holdings.insert(symbol.clone(), orders.clone());
    }
    let resolver = QuoteResolver::new(Arc::new(source));

    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(valuate(&resolver, &holdings, "USD"))
        .unwrap()
}

fn with_currency(
    portfolio: &BTreeMap<String, (Decimal, Vec<Order>)>,
    currency: Option<&str>,
) -> BTreeMap<String, (Decimal, Vec<Order>)> {
    portfolio
        .iter()
        .map(|(symbol, (price, orders))| {
            let orders = orders
                .iter()
                .map(|order| Order {
                    currency: currency.map(str::to_string),
                    ..order.clone()
                })
                .collect();
            (symbol.clone(), (*price, orders))
        })
        .collect()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// `diff` is always `sum - in`.
    #[test]
    fn prop_diff_is_sum_minus_in(portfolio in arb_portfolio()) {
        let stats = run_valuation(&portfolio);
        prop_assert_eq!(stats.diff, stats.sum - stats.cost_basis);
    }

    /// `loss` is never negative and counts only losing orders.
    #[test]
    fn prop_loss_is_sum_of_shortfalls(portfolio in arb_portfolio()) {
        let stats = run_valuation(&portfolio);

        let shortfalls: Decimal = stats
            .details
            .values()
            .flatten()
            .filter(|detail| detail.diff < Decimal::ZERO)
            .map(|detail| -detail.diff)
            .sum();

        prop_assert!(stats.loss >= Decimal::ZERO);
        prop_assert_eq!(stats.loss, shortfalls);
        prop_assert!(stats.loss >= -stats.diff);
    }

    /// One detail per order, in document order.
    #[test]
    fn prop_details_mirror_orders(portfolio in arb_portfolio()) {
        let stats = run_valuation(&portfolio);

        prop_assert_eq!(stats.details.len(), portfolio.len());
        for (symbol, (_, orders)) in &portfolio {
            let units: Vec<Decimal> = stats.details[symbol].iter().map(|d| d.units).collect();
            let expected: Vec<Decimal> = orders.iter().map(|o| o.units).collect();
            prop_assert_eq!(units, expected);
        }
    }

    /// Tagging orders with the base currency changes nothing.
    #[test]
    fn prop_base_currency_is_identity(portfolio in arb_portfolio()) {
        let plain = run_valuation(&with_currency(&portfolio, None));
        let tagged = run_valuation(&with_currency(&portfolio, Some("USD")));

        prop_assert_eq!(plain.sum, tagged.sum);
        prop_assert_eq!(plain.cost_basis, tagged.cost_basis);
        prop_assert_eq!(plain.diff, tagged.diff);
        prop_assert_eq!(plain.loss, tagged.loss);
    }
}
