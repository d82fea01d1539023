//! Pricing module - price variant selection, line totals and the admin
//! write surface.

mod price_admin_service;
mod price_columns;
mod price_selector;
mod pricing_model;
mod pricing_traits;
mod total_calculator;

pub use price_admin_service::PriceAdminService;
pub use price_columns::{PriceColumn, PRICING_MODE_COLUMN};
pub use price_selector::resolve_price;
pub use pricing_model::{
    EntityKind, PriceMarket, PriceSlot, PriceTarget, PriceUpdate, PriceVariant, PricedEntity,
    PricingMode,
};
pub use pricing_traits::{PriceAdminServiceTrait, PriceRepositoryTrait};
pub use total_calculator::{LineTotal, OptionCatalog, OptionCharge, TotalPriceCalculator};
