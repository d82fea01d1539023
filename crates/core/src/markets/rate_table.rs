use super::currency::Currency;
use super::price_format::render_amount;
use crate::errors::{Error, Result};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Static snapshot of exchange rates, in units of currency per 1 USD.
///
/// Built once at startup from the built-in table plus any configured
/// overrides. Every currency always has a rate, so conversions are total.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    rates: HashMap<Currency, Decimal>,
}

impl Default for RateTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RateTable {
    /// Creates a table holding the built-in rates.
    pub fn new() -> Self {
        let rates = Currency::ALL
            .into_iter()
            .map(|c| (c, c.default_rate()))
            .collect();
        Self { rates }
    }

    /// Creates a table from the built-in rates with `overrides` applied.
    ///
    /// Rates must be strictly positive. USD is pinned at 1, an override for it
    /// is ignored.
    pub fn with_overrides(overrides: &HashMap<Currency, Decimal>) -> Result<Self> {
        let mut table = Self::new();
        for (&currency, &rate) in overrides {
            if currency == Currency::Usd {
                if rate != Decimal::ONE {
                    log::warn!("Ignoring USD exchange rate override {}", rate);
                }
                continue;
            }
            if rate <= Decimal::ZERO {
                return Err(Error::InvalidExchangeRate(format!(
                    "{} rate must be positive, got {}",
                    currency, rate
                )));
            }
            table.rates.insert(currency, rate);
        }
        Ok(table)
    }

    /// Units of `currency` per 1 USD.
    pub fn rate(&self, currency: Currency) -> Decimal {
        self.rates
            .get(&currency)
            .copied()
            .unwrap_or_else(|| currency.default_rate())
    }

    pub fn convert_from_usd(&self, amount_usd: Decimal, currency: Currency) -> Decimal {
        amount_usd.saturating_mul(self.rate(currency))
    }

    pub fn convert_to_usd(&self, amount: Decimal, currency: Currency) -> Decimal {
        amount
            .checked_div(self.rate(currency))
            .unwrap_or(if amount.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            })
    }

    /// Formats `amount` for display in `currency`.
    ///
    /// When `convert_from_usd` is set, `amount` is a USD amount and is
    /// converted first; otherwise it is already in `currency`.
    pub fn format_price(
        &self,
        amount: Decimal,
        currency: Currency,
        convert_from_usd: bool,
    ) -> String {
        let display_amount = if convert_from_usd {
            self.convert_from_usd(amount, currency)
        } else {
            amount
        };
        render_amount(display_amount, currency)
    }
}
