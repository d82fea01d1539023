use super::currency::{Currency, SymbolPosition};
use super::rate_table::RateTable;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use lazy_static::lazy_static;
use rust_decimal::{Decimal, RoundingStrategy};

lazy_static! {
    static ref DEFAULT_RATES: RateTable = RateTable::new();
}

/// Formats a price using the built-in exchange-rate snapshot.
///
/// Rounds half-up to two decimals, groups thousands with commas and places
/// the currency symbol per the currency's convention:
/// `format_price(dec!(100), Currency::Aud, true)` gives `"A$144.00"`,
/// `format_price(dec!(100), Currency::Aed, true)` gives `"367.00 AED"`.
pub fn format_price(amount: Decimal, currency: Currency, convert_from_usd: bool) -> String {
    DEFAULT_RATES.format_price(amount, currency, convert_from_usd)
}

/// Renders an amount already expressed in `currency`.
pub(crate) fn render_amount(amount: Decimal, currency: Currency) -> String {
    let mut rounded = amount.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    );
    rounded.rescale(DISPLAY_DECIMAL_PRECISION);

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let plain = rounded.abs().to_string();
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
    let number = format!("{}.{}", group_thousands(whole), fraction);
    let sign = if negative { "-" } else { "" };

    match currency.position() {
        SymbolPosition::Before => format!("{}{}{}", sign, currency.symbol(), number),
        SymbolPosition::After => format!("{}{} {}", sign, number, currency.symbol()),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
