//! Currencies, formatting, and exchange rates
//!
//! The progress report itself returns raw numeric fields; everything in this
//! module exists for the presentation layer sitting on top of it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Money;

/// Well-known currencies: (code, name, symbol)
const KNOWN_CURRENCIES: &[(&str, &str, &str)] = &[
    ("USD", "US Dollar", "$"),
    ("EUR", "Euro", "€"),
    ("GBP", "British Pound", "£"),
    ("JPY", "Japanese Yen", "¥"),
    ("CAD", "Canadian Dollar", "CA$"),
    ("AUD", "Australian Dollar", "A$"),
    ("CHF", "Swiss Franc", "CHF "),
    ("INR", "Indian Rupee", "₹"),
];

/// A display currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 code
    pub code: String,

    /// Display name
    pub name: String,

    /// Symbol used when formatting amounts
    pub symbol: String,
}

impl Currency {
    /// Create a currency
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            symbol: symbol.into(),
        }
    }

    /// Look up a well-known currency by code (case-insensitive)
    pub fn known(code: &str) -> Option<Self> {
        let code = code.to_ascii_uppercase();
        KNOWN_CURRENCIES
            .iter()
            .find(|(known_code, _, _)| *known_code == code)
            .map(|(code, name, symbol)| Self::new(*code, *name, *symbol))
    }

    /// The default display currency
    pub fn usd() -> Self {
        Self::new("USD", "US Dollar", "$")
    }
}

/// Formats amounts in a fixed display currency
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    currency: Currency,
}

impl CurrencyFormatter {
    /// Create a formatter for the given currency
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }

    /// The currency this formatter renders
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Format an amount with the currency symbol, e.g. `$120.00`
    pub fn format(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency.symbol)
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new(Currency::usd())
    }
}

/// Exchange rates against a base currency
///
/// Rates are expressed as units of the quoted currency per one unit of the
/// base currency.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExchangeRates {
    base: String,
    rates: HashMap<String, f64>,
}

impl ExchangeRates {
    /// Create an empty rate table for the given base currency
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            rates: HashMap::new(),
        }
    }

    /// The base currency code
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Record a rate for a currency code
    pub fn insert(&mut self, code: impl Into<String>, rate: f64) {
        self.rates.insert(code.into(), rate);
    }

    /// The rate for a code, if known. The base currency is always 1.0.
    pub fn rate(&self, code: &str) -> Option<f64> {
        if code == self.base {
            Some(1.0)
        } else {
            self.rates.get(code).copied()
        }
    }

    /// Convert an amount between two currencies via the base
    pub fn convert(&self, amount: Money, from: &str, to: &str) -> Option<Money> {
        let from_rate = self.rate(from)?;
        let to_rate = self.rate(to)?;
        if from_rate <= 0.0 {
            return None;
        }
        Some(Money::from_major_f64(amount.to_major_f64() / from_rate * to_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_currency_lookup() {
        let eur = Currency::known("eur").unwrap();
        assert_eq!(eur.code, "EUR");
        assert_eq!(eur.symbol, "€");
        assert!(Currency::known("XXX").is_none());
    }

    #[test]
    fn test_formatter() {
        let formatter = CurrencyFormatter::default();
        assert_eq!(formatter.format(Money::from_cents(12000)), "$120.00");
        assert_eq!(formatter.format(Money::from_cents(-5000)), "-$50.00");
        assert_eq!(formatter.currency().code, "USD");
    }

    #[test]
    fn test_formatter_other_currency() {
        let formatter = CurrencyFormatter::new(Currency::known("GBP").unwrap());
        assert_eq!(formatter.format(Money::from_cents(999)), "£9.99");
    }

    #[test]
    fn test_rates_and_conversion() {
        let mut rates = ExchangeRates::new("USD");
        rates.insert("EUR", 0.9);
        rates.insert("GBP", 0.8);

        assert_eq!(rates.rate("USD"), Some(1.0));
        assert_eq!(rates.rate("EUR"), Some(0.9));
        assert_eq!(rates.rate("JPY"), None);

        // 90 EUR -> 100 USD -> 80 GBP
        let converted = rates
            .convert(Money::from_cents(9000), "EUR", "GBP")
            .unwrap();
        assert_eq!(converted.cents(), 8000);
    }

    #[test]
    fn test_conversion_unknown_code_fails() {
        let rates = ExchangeRates::new("USD");
        assert!(rates.convert(Money::from_cents(100), "USD", "EUR").is_none());
    }
}
