//! Pricing domain models.

use crate::errors::{Error, Result, ValidationError};
use crate::markets::Market;
use crate::selection::{CustomizationSelection, DIAMOND_TYPE_SETTING, METAL_SETTING};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The single override axis an entity is priced along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingMode {
    /// Natural (default) vs lab-grown diamonds.
    #[default]
    DiamondType,
    /// Gold vs silver.
    MetalType,
}

impl PricingMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PricingMode::DiamondType => "diamond_type",
            PricingMode::MetalType => "metal_type",
        }
    }

    /// Variants that may carry a price under this mode, default first.
    pub const fn variants(&self) -> &'static [PriceVariant] {
        match self {
            PricingMode::DiamondType => &[PriceVariant::Default, PriceVariant::LabGrown],
            PricingMode::MetalType => &[
                PriceVariant::Default,
                PriceVariant::Gold,
                PriceVariant::Silver,
            ],
        }
    }

    pub fn allows(&self, variant: PriceVariant) -> bool {
        self.variants().contains(&variant)
    }
}

impl fmt::Display for PricingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested price variant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PriceVariant {
    #[default]
    Default,
    LabGrown,
    Gold,
    Silver,
}

impl PriceVariant {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PriceVariant::Default => "default",
            PriceVariant::LabGrown => "lab_grown",
            PriceVariant::Gold => "gold",
            PriceVariant::Silver => "silver",
        }
    }

    /// Derives the variant a customer's choices select under `mode`.
    ///
    /// Diamond mode looks at the `diamond_type` choice, metal mode at the
    /// `metal` choice. Anything unrecognized prices as the default.
    pub fn from_selection(mode: PricingMode, selection: &CustomizationSelection) -> Self {
        match mode {
            PricingMode::DiamondType => {
                let diamond_type = selection.normalized(DIAMOND_TYPE_SETTING);
                match diamond_type.as_deref() {
                    Some("lab_grown" | "lab-grown" | "lab") => PriceVariant::LabGrown,
                    _ => PriceVariant::Default,
                }
            }
            PricingMode::MetalType => match selection.normalized(METAL_SETTING).as_deref() {
                Some("gold" | "yellow_gold" | "white_gold" | "rose_gold") => PriceVariant::Gold,
                Some("silver" | "sterling_silver") => PriceVariant::Silver,
                _ => PriceVariant::Default,
            },
        }
    }
}

impl fmt::Display for PriceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which set of stored prices a market reads.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PriceMarket {
    /// USD base prices, shared by every market without its own columns.
    #[default]
    Base,
    /// Australian prices, stored in AUD.
    Au,
}

impl PriceMarket {
    pub const ALL: [PriceMarket; 2] = [PriceMarket::Base, PriceMarket::Au];

    pub const fn for_market(market: Market) -> Self {
        match market {
            Market::Au => PriceMarket::Au,
            _ => PriceMarket::Base,
        }
    }
}

/// Whole items and customization options use different column prefixes
/// and different availability rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Item,
    Option,
}

/// Key of a single stored price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSlot {
    pub variant: PriceVariant,
    pub market: PriceMarket,
}

/// A jewelry item or a customization option with its stored prices.
///
/// Prices are kept per `(variant, market)` slot. A slot that is absent is
/// "not set", which is different from a stored price of zero. Storage uses
/// the flat column layout, see [`PriceColumn`](super::PriceColumn).
#[derive(Debug, Clone, PartialEq)]
pub struct PricedEntity {
    pub kind: EntityKind,
    pub mode: PricingMode,
    prices: BTreeMap<PriceSlot, Decimal>,
}

impl PricedEntity {
    pub fn new(kind: EntityKind, mode: PricingMode) -> Self {
        Self {
            kind,
            mode,
            prices: BTreeMap::new(),
        }
    }

    pub fn item(mode: PricingMode) -> Self {
        Self::new(EntityKind::Item, mode)
    }

    pub fn option(mode: PricingMode) -> Self {
        Self::new(EntityKind::Option, mode)
    }

    /// Builder-style variant of [`set_price`](Self::set_price).
    pub fn with_price(
        mut self,
        variant: PriceVariant,
        market: PriceMarket,
        price: Decimal,
    ) -> Result<Self> {
        self.set_price(variant, market, Some(price))?;
        Ok(self)
    }

    /// Stores or clears (`None`) the price of one slot.
    ///
    /// The variant must belong to the entity's pricing mode and prices must
    /// not be negative.
    pub fn set_price(
        &mut self,
        variant: PriceVariant,
        market: PriceMarket,
        price: Option<Decimal>,
    ) -> Result<()> {
        validate_slot(self.mode, variant, price)?;
        let slot = PriceSlot { variant, market };
        match price {
            Some(value) => {
                self.prices.insert(slot, value);
            }
            None => {
                self.prices.remove(&slot);
            }
        }
        Ok(())
    }

    /// The stored price of one slot, without any fallback.
    pub fn price(&self, variant: PriceVariant, market: PriceMarket) -> Option<Decimal> {
        self.prices.get(&PriceSlot { variant, market }).copied()
    }

    /// Iterates over every stored price.
    pub fn prices(&self) -> impl Iterator<Item = (PriceSlot, Decimal)> + '_ {
        self.prices.iter().map(|(slot, price)| (*slot, *price))
    }

    /// Iterates over the stored prices read by `market`.
    pub fn prices_for(&self, market: PriceMarket) -> impl Iterator<Item = Decimal> + '_ {
        self.prices
            .iter()
            .filter(move |(slot, _)| slot.market == market)
            .map(|(_, price)| *price)
    }
}

/// Identifies the stored record a price belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTarget {
    pub entity_id: String,
    pub kind: EntityKind,
    pub mode: PricingMode,
}

/// A single admin price edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceUpdate {
    pub variant: PriceVariant,
    pub market: PriceMarket,
    /// `None` clears the price.
    pub value: Option<Decimal>,
}

pub(crate) fn validate_slot(
    mode: PricingMode,
    variant: PriceVariant,
    price: Option<Decimal>,
) -> Result<()> {
    if !mode.allows(variant) {
        return Err(ValidationError::VariantNotInMode {
            variant: variant.to_string(),
            mode: mode.to_string(),
        }
        .into());
    }
    if let Some(value) = price {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(Error::InvalidPrice(format!(
                "{} price cannot be negative: {}",
                variant, value
            )));
        }
    }
    Ok(())
}
