use log::debug;
use rust_decimal::Decimal;

use crate::errors::{Error, Result};
use crate::quotes::QuoteResolver;

/// Provider ticker for the rate of `code` against the market currency.
pub fn fx_symbol(code: &str) -> String {
    format!("{}=X", code.to_uppercase())
}

/// Turns currency codes into scalar factors relative to a base currency.
///
/// Rates are looked up through the borrowed resolver, so repeated codes in
/// one pass share a single request.
pub struct CurrencyConverter<'a> {
    resolver: &'a QuoteResolver,
    base_currency: String,
}

impl<'a> CurrencyConverter<'a> {
    pub fn new(resolver: &'a QuoteResolver, base_currency: impl Into<String>) -> Self {
        Self {
            resolver,
            base_currency: base_currency.into(),
        }
    }

    /// True for the empty code and for the base currency (any case).
    pub fn is_base(&self, code: &str) -> bool {
        code.is_empty() || code.eq_ignore_ascii_case(&self.base_currency)
    }

    /// Factor to divide amounts in `code` by to express them in the base currency.
    ///
    /// Never defaults to 1 on failure: any lookup problem comes back as
    /// [`Error::QuoteUnavailable`].
    pub async fn factor(&self, code: &str) -> Result<Decimal> {
        if self.is_base(code) {
            return Ok(Decimal::ONE);
        }

        let symbol = fx_symbol(code);
        debug!("Resolving {} rate via {}", code, symbol);

        self.resolver
            .resolve(&symbol, true)
            .await
            .map(|quote| quote.price)
            .map_err(|e| Error::QuoteUnavailable {
                currency: code.to_string(),
                reason: e.to_string(),
            })
    }
}
