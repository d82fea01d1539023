//! Markets module - sales regions, display currencies and conversion.

mod currency;
mod market_model;
mod price_format;
mod rate_table;

pub use currency::{Currency, SymbolPosition};
pub use market_model::{currency_for_market, Market};
pub use price_format::format_price;
pub use rate_table::RateTable;
