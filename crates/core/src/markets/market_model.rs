use super::currency::Currency;
use crate::errors::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sales region. Drives the display currency and, for `au`, a separate set
/// of stored prices.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Market {
    #[default]
    Lb,
    Au,
    Intl,
    Eu,
    Ae,
    Sa,
    Qa,
}

impl Market {
    pub const ALL: [Market; 7] = [
        Market::Lb,
        Market::Au,
        Market::Intl,
        Market::Eu,
        Market::Ae,
        Market::Sa,
        Market::Qa,
    ];

    pub const fn code(&self) -> &'static str {
        match self {
            Market::Lb => "lb",
            Market::Au => "au",
            Market::Intl => "intl",
            Market::Eu => "eu",
            Market::Ae => "ae",
            Market::Sa => "sa",
            Market::Qa => "qa",
        }
    }

    pub const fn currency(&self) -> Currency {
        match self {
            Market::Lb | Market::Intl => Currency::Usd,
            Market::Au => Currency::Aud,
            Market::Eu => Currency::Eur,
            Market::Ae => Currency::Aed,
            Market::Sa => Currency::Sar,
            Market::Qa => Currency::Qar,
        }
    }

    /// Whether prices for this market are stored in their own columns and
    /// already expressed in the market currency. Every other market reads the
    /// USD columns and converts at display time.
    pub const fn stores_own_prices(&self) -> bool {
        matches!(self, Market::Au)
    }

    /// Lenient parse for the market cookie or request header.
    ///
    /// Missing, empty or unrecognized values degrade to the default market.
    pub fn from_cookie(value: Option<&str>) -> Market {
        Self::from_cookie_or(value, Market::default())
    }

    /// Like [`from_cookie`](Self::from_cookie), degrading to `fallback`.
    pub fn from_cookie_or(value: Option<&str>, fallback: Market) -> Market {
        let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return fallback;
        };
        match raw.parse::<Market>() {
            Ok(market) => market,
            Err(_) => {
                log::warn!(
                    "Unrecognized market '{}', falling back to '{}'",
                    raw,
                    fallback
                );
                fallback
            }
        }
    }
}

/// Resolves the display currency for a raw market signal.
///
/// Total over any input: unknown or missing markets resolve like `lb`.
pub fn currency_for_market(code: Option<&str>) -> Currency {
    Market::from_cookie(code).currency()
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Market {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Market::ALL
            .into_iter()
            .find(|m| m.code() == code)
            .ok_or_else(|| Error::UnknownMarket(s.to_string()))
    }
}
