//! Whole-document snapshot: savings, investments and budget in one record.
//!
//! A [`Summary`] is what the `sum` command prints and what the history store
//! persists, one file per run.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::fx::CurrencyConverter;
use crate::portfolio::valuation::{valuate, InvestmentStats};
use crate::quotes::QuoteResolver;
use crate::settings::FinanceConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub savings: Decimal,
    #[serde(default, skip_serializing_if = "InvestmentStats::is_zero")]
    pub stocks: InvestmentStats,
    #[serde(default, skip_serializing_if = "InvestmentStats::is_zero")]
    pub assets: InvestmentStats,
    #[serde(default, skip_serializing_if = "InvestmentStats::is_zero")]
    pub crypto: InvestmentStats,
    #[serde(default)]
    pub investments_sum: Decimal,
    /// Savings plus investments, in the reporting currency.
    #[serde(default)]
    pub total: Decimal,
    #[serde(default)]
    pub income: Decimal,
    #[serde(default)]
    pub expenses: Decimal,
    #[serde(default)]
    pub budget: Decimal,
}

impl Summary {
    pub fn categories(&self) -> [(&'static str, &InvestmentStats); 3] {
        [
            ("Stocks", &self.stocks),
            ("Assets", &self.assets),
            ("Crypto", &self.crypto),
        ]
    }
}

fn total(label: &str, values: &BTreeMap<String, Decimal>) -> Result<Decimal> {
    values.values().try_fold(Decimal::ZERO, |acc, value| {
        acc.checked_add(*value)
            .ok_or_else(|| Error::Overflow(label.to_string()))
    })
}

/// Valuate every category of `config` and fold the result into a [`Summary`].
///
/// Investments are valued in the market currency; `total` converts them into
/// the document's reporting currency before adding savings.
pub async fn summarize(
    resolver: &QuoteResolver,
    config: &FinanceConfig,
    now: DateTime<Utc>,
) -> Result<Summary> {
    let base = config.market_currency.as_str();
    let stocks = valuate(resolver, &config.investments.stocks, base).await?;
    let assets = valuate(resolver, &config.investments.assets, base).await?;
    let crypto = valuate(resolver, &config.investments.crypto, base).await?;

    let factor = CurrencyConverter::new(resolver, base)
        .factor(&config.currency)
        .await?;

    let overflow = || Error::Overflow("summary totals".to_string());
    let savings = total("savings", &config.savings)?;
    let income = total("income", &config.income)?;
    let expenses = total("expenses", &config.expenses)?;
    let investments_sum = stocks
        .sum
        .checked_add(assets.sum)
        .and_then(|sum| sum.checked_add(crypto.sum))
        .ok_or_else(overflow)?;
    let total = investments_sum
        .checked_mul(factor)
        .and_then(|converted| converted.checked_add(savings))
        .ok_or_else(overflow)?;
    let budget = income.checked_sub(expenses).ok_or_else(overflow)?;

    debug!(
        "Summary at {}: savings={} investments={} factor={}",
        now, savings, investments_sum, factor
    );

    Ok(Summary {
        date: now,
        savings,
        stocks,
        assets,
        crypto,
        investments_sum,
        total,
        income,
        expenses,
        budget,
    })
}
