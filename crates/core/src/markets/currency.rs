use crate::errors::Error;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the currency symbol is placed relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Before,
    After,
}

/// Display currencies supported by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Aud,
    Eur,
    Aed,
    Sar,
    Qar,
}

impl Currency {
    pub const ALL: [Currency; 6] = [
        Currency::Usd,
        Currency::Aud,
        Currency::Eur,
        Currency::Aed,
        Currency::Sar,
        Currency::Qar,
    ];

    /// ISO 4217 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Aud => "AUD",
            Currency::Eur => "EUR",
            Currency::Aed => "AED",
            Currency::Sar => "SAR",
            Currency::Qar => "QAR",
        }
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Aud => "A$",
            Currency::Eur => "€",
            Currency::Aed => "AED",
            Currency::Sar => "SAR",
            Currency::Qar => "QAR",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Currency::Usd => "US Dollar",
            Currency::Aud => "Australian Dollar",
            Currency::Eur => "Euro",
            Currency::Aed => "UAE Dirham",
            Currency::Sar => "Saudi Riyal",
            Currency::Qar => "Qatari Riyal",
        }
    }

    pub const fn position(&self) -> SymbolPosition {
        match self {
            Currency::Usd | Currency::Aud | Currency::Eur => SymbolPosition::Before,
            Currency::Aed | Currency::Sar | Currency::Qar => SymbolPosition::After,
        }
    }

    /// Built-in exchange rate in units of this currency per 1 USD.
    ///
    /// Manually maintained snapshot, there is no live feed behind it.
    pub fn default_rate(&self) -> Decimal {
        match self {
            Currency::Usd => Decimal::ONE,
            Currency::Aud => dec!(1.44),
            Currency::Eur => dec!(0.92),
            Currency::Aed => dec!(3.67),
            Currency::Sar => dec!(3.75),
            Currency::Qar => dec!(3.64),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Currency::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| Error::UnsupportedCurrency(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("aud".parse::<Currency>().unwrap(), Currency::Aud);
        assert_eq!(" QAR ".parse::<Currency>().unwrap(), Currency::Qar);
    }

    #[test]
    fn test_parse_rejects_unknown_code() {
        let err = "GBP".parse::<Currency>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedCurrency(code) if code == "GBP"));
    }

    #[test]
    fn test_gulf_currencies_place_symbol_after() {
        for currency in [Currency::Aed, Currency::Sar, Currency::Qar] {
            assert_eq!(currency.position(), SymbolPosition::After);
        }
        assert_eq!(Currency::Aud.position(), SymbolPosition::Before);
    }

    #[test]
    fn test_serializes_as_iso_code() {
        assert_eq!(serde_json::to_string(&Currency::Aed).unwrap(), "\"AED\"");
        let parsed: Currency = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(parsed, Currency::Eur);
    }

    #[test]
    fn test_usd_rate_is_identity() {
        assert_eq!(Currency::Usd.default_rate(), Decimal::ONE);
    }
}
