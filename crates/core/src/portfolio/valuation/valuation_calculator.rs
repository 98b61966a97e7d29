use log::debug;

use super::valuation_model::{HoldingsMap, InvestmentDetail, InvestmentStats};
use crate::errors::{Error, Result};
use crate::fx::CurrencyConverter;
use crate::quotes::QuoteResolver;

/// Values every order in `holdings` at its current quote, in `base_currency`.
///
/// Symbols are visited in map order and orders in document order, one
/// resolution at a time. The first failure aborts the call; there is no
/// partial result.
///
/// # Arguments
///
/// * `resolver` - Resolver for this pass; quotes and FX rates are memoized in it.
/// * `holdings` - Symbol -> orders.
/// * `base_currency` - Currency that quotes without an explicit order currency are in.
pub async fn valuate(
    resolver: &QuoteResolver,
    holdings: &HoldingsMap,
    base_currency: &str,
) -> Result<InvestmentStats> {
    let converter = CurrencyConverter::new(resolver, base_currency);
    let mut stats = InvestmentStats::default();

    for (symbol, orders) in holdings {
        for order in orders {
            let quote = resolver.resolve(symbol, true).await?;

            let overflow = || Error::Overflow(symbol.clone());

            let mut price = quote.price;
            let mut cost_basis = order.cost_basis;
            if let Some(code) = order.currency.as_deref() {
                if !converter.is_base(code) {
                    let factor = converter.factor(code).await?;
                    price = price.checked_div(factor).ok_or_else(overflow)?;
                    cost_basis = cost_basis.checked_div(factor).ok_or_else(overflow)?;
                }
            }

            let market_value_total = price.checked_mul(order.units).ok_or_else(overflow)?;
            let cost_basis_total = cost_basis.checked_mul(order.units).ok_or_else(overflow)?;
            let diff = market_value_total
                .checked_sub(cost_basis_total)
                .ok_or_else(overflow)?;

            stats.sum = stats.sum.checked_add(market_value_total).ok_or_else(overflow)?;
            stats.cost_basis = stats
                .cost_basis
                .checked_add(cost_basis_total)
                .ok_or_else(overflow)?;
            if cost_basis_total > market_value_total {
                stats.loss = stats.loss.checked_sub(diff).ok_or_else(overflow)?;
            }

            stats
                .details
                .entry(symbol.clone())
                .or_default()
                .push(InvestmentDetail {
                    units: order.units,
                    cost_basis_total,
                    market_value_total,
                    diff,
                    quote,
                });
        }
    }

    stats.diff = stats
        .sum
        .checked_sub(stats.cost_basis)
        .ok_or_else(|| Error::Overflow("portfolio totals".to_string()))?;
    debug!(
        "Valuated {} symbols: sum={} in={} loss={}",
        stats.details.len(),
        stats.sum,
        stats.cost_basis,
        stats.loss
    );

    Ok(stats)
}
