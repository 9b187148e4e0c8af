//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are kept exact internally (`rust_decimal`); rounding to two
//! decimal places happens only when formatting for display. Cart subtotals
//! therefore never accumulate float error.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    amount: Decimal,
    /// ISO 4217 currency code.
    currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a USD price (the catalog's only currency).
    #[must_use]
    pub const fn usd(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::USD)
    }

    /// The exact amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency code.
    #[must_use]
    pub const fn currency_code(&self) -> CurrencyCode {
        self.currency_code
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        self.currency_code.format(self.amount)
    }

    /// The pre-discount price implied by a discount percentage.
    ///
    /// Returns `None` unless `0 < discount_percentage < 100`. The result is
    /// rounded to whole currency units, matching how the strikethrough
    /// price is derived on the detail and cart views.
    #[must_use]
    pub fn compare_at(&self, discount_percentage: Decimal) -> Option<Self> {
        if discount_percentage <= Decimal::ZERO || discount_percentage >= Decimal::ONE_HUNDRED {
            return None;
        }
        let factor = Decimal::ONE - discount_percentage / Decimal::ONE_HUNDRED;
        let original = (self.amount / factor)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        Some(Self::new(original, self.currency_code))
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "\u{20ac}",
            Self::GBP => "\u{a3}",
        }
    }

    /// Format an amount in this currency, rounded to two decimal places.
    #[must_use]
    pub fn format(self, amount: Decimal) -> String {
        format!("{}{:.2}", self.symbol(), amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn test_display_rounds_to_two_places() {
        assert_eq!(Price::usd(dec!(19.99)).display(), "$19.99");
        assert_eq!(Price::usd(dec!(10)).display(), "$10.00");
        assert_eq!(Price::usd(dec!(5.5)).display(), "$5.50");
    }

    #[test]
    fn test_internal_amount_stays_exact() {
        let price = Price::usd(dec!(0.1));
        let sum: Decimal = (0..10).map(|_| price.amount()).sum();
        assert_eq!(sum, Decimal::ONE);
    }

    #[test]
    fn test_compare_at_derives_original_price() {
        // $90 at 10% off was $100.
        let price = Price::usd(dec!(90));
        let original = price.compare_at(dec!(10)).map(|p| p.amount());
        assert_eq!(original, Some(dec!(100)));
    }

    #[test]
    fn test_compare_at_rounds_to_whole_units() {
        let price = Price::usd(dec!(549));
        let original = price.compare_at(dec!(12.96)).map(|p| p.amount());
        assert_eq!(original, Some(dec!(631)));
    }

    #[test]
    fn test_compare_at_rejects_out_of_range_discounts() {
        let price = Price::usd(dec!(10));
        assert_eq!(price.compare_at(Decimal::ZERO), None);
        assert_eq!(price.compare_at(dec!(100)), None);
        assert_eq!(price.compare_at(dec!(-5)), None);
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(CurrencyCode::USD.symbol(), "$");
        assert_eq!(CurrencyCode::EUR.symbol(), "\u{20ac}");
        assert_eq!(CurrencyCode::GBP.format(dec!(3)), "\u{a3}3.00");
    }
}
