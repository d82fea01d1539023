//! Atelier Core - pricing and variant image resolution.
//!
//! This crate is the single source of truth for how the storefront, the
//! transactional email builder and the edge functions derive a displayed
//! price and a product photo from a customer's customization choices.
//! It performs no I/O: price records, settings and catalog data are passed
//! in already fetched.

pub mod constants;
pub mod errors;
pub mod images;
pub mod markets;
pub mod pricing;
pub mod selection;
pub mod settings;
pub mod storefront;

// Re-export the types most callers need
pub use images::{ImageResolver, ProductType, ResolvedImage};
pub use markets::{format_price, Currency, Market, RateTable};
pub use pricing::{PriceVariant, PricedEntity, PricingMode, TotalPriceCalculator};
pub use selection::CustomizationSelection;
pub use storefront::{LineQuote, Storefront};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
