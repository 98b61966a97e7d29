//! Investment valuation domain models.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::quotes::Quote;

/// One purchase lot as written in the finance document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub units: Decimal,
    /// Price paid per unit.
    #[serde(rename = "in")]
    pub cost_basis: Decimal,
    /// Currency of `cost_basis` and of the quote; base currency when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl Order {
    pub fn new(units: Decimal, cost_basis: Decimal) -> Self {
        Self {
            units,
            cost_basis,
            currency: None,
        }
    }

    pub fn in_currency(mut self, code: impl Into<String>) -> Self {
        self.currency = Some(code.into());
        self
    }
}

/// Ticker symbol -> lots, iterated in symbol order.
pub type HoldingsMap = BTreeMap<String, Vec<Order>>;

/// Valuation of a single order.
#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentDetail {
    pub units: Decimal,
    pub cost_basis_total: Decimal,
    pub market_value_total: Decimal,
    pub diff: Decimal,
    pub quote: Quote,
}

/// Aggregate valuation of a holdings map, in the base currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestmentStats {
    pub sum: Decimal,
    #[serde(rename = "in")]
    pub cost_basis: Decimal,
    pub diff: Decimal,
    /// Total shortfall of losing orders only.
    pub loss: Decimal,
    #[serde(skip)]
    pub details: BTreeMap<String, Vec<InvestmentDetail>>,
}

impl InvestmentStats {
    /// No orders were valuated.
    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.sum.is_zero() && self.cost_basis.is_zero() && self.loss.is_zero()
    }
}
