//! Finance document model.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::valuation::HoldingsMap;

pub const DEFAULT_MARKET_CURRENCY: &str = "USD";

fn default_market_currency() -> String {
    DEFAULT_MARKET_CURRENCY.to_string()
}

/// Holdings grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Investments {
    #[serde(default)]
    pub stocks: HoldingsMap,
    #[serde(default)]
    pub assets: HoldingsMap,
    #[serde(default)]
    pub crypto: HoldingsMap,
}

/// The user's finance document (`finances.yaml`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceConfig {
    /// Reporting currency for the summary total; empty means the market currency.
    #[serde(default)]
    pub currency: String,
    /// Currency quotes are denominated in; orders without a currency are in it too.
    #[serde(default = "default_market_currency")]
    pub market_currency: String,
    #[serde(default)]
    pub savings: BTreeMap<String, Decimal>,
    #[serde(default)]
    pub income: BTreeMap<String, Decimal>,
    #[serde(default)]
    pub expenses: BTreeMap<String, Decimal>,
    #[serde(default)]
    pub investments: Investments,
}

impl Default for FinanceConfig {
    fn default() -> Self {
        Self {
            currency: String::new(),
            market_currency: default_market_currency(),
            savings: BTreeMap::new(),
            income: BTreeMap::new(),
            expenses: BTreeMap::new(),
            investments: Investments::default(),
        }
    }
}

impl FinanceConfig {
    /// All holdings categories paired with their display labels.
    pub fn categories(&self) -> [(&'static str, &HoldingsMap); 3] {
        [
            ("Stocks", &self.investments.stocks),
            ("Assets", &self.investments.assets),
            ("Crypto", &self.investments.crypto),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_full_document() {
        let config: FinanceConfig = serde_yaml::from_str(
            r#"
currency: EUR
savings:
  bank: 1000
  cash: 250.5
income:
  salary: 3000
expenses:
  rent: 1200
  food: 400
investments:
  stocks:
    AAPL:
      - units: 2
        in: 150
  crypto:
    BTC-USD:
      - units: 0.5
        in: 20000
"#,
        )
        .unwrap();

        assert_eq!(config.currency, "EUR");
        assert_eq!(config.market_currency, "USD");
        assert_eq!(config.savings["cash"], dec!(250.5));
        assert_eq!(config.expenses.len(), 2);
        assert_eq!(config.investments.stocks["AAPL"][0].units, dec!(2));
        assert!(config.investments.assets.is_empty());
        assert_eq!(config.investments.crypto["BTC-USD"][0].cost_basis, dec!(20000));
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: FinanceConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, FinanceConfig::default());
    }

    #[test]
    fn test_categories_order() {
        let labels: Vec<_> = FinanceConfig::default()
            .categories()
            .iter()
            .map(|(label, _)| *label)
            .collect();
        assert_eq!(labels, vec!["Stocks", "Assets", "Crypto"]);
    }
}
