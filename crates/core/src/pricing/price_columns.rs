//! Legacy flat price columns.
//!
//! Stored records keep one nullable column per slot: `price`,
//! `price_lab_grown`, `price_gold_au`, `base_price_silver`, ... Options use
//! the `price` prefix, whole items `base_price`, and the Australian market
//! appends `_au`. Reads and admin writes both go through [`PriceColumn`] so
//! the two sides cannot disagree on a name.

use super::pricing_model::{EntityKind, PriceMarket, PriceVariant, PricedEntity, PricingMode};
use crate::constants::AU_COLUMN_SUFFIX;
use crate::errors::{Result, ValidationError};
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Record key holding the entity's pricing mode, when present.
pub const PRICING_MODE_COLUMN: &str = "pricing_mode";

const ITEM_PREFIX: &str = "base_price";
const OPTION_PREFIX: &str = "price";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriceColumn {
    pub kind: EntityKind,
    pub variant: PriceVariant,
    pub market: PriceMarket,
}

impl PriceColumn {
    pub const fn new(kind: EntityKind, variant: PriceVariant, market: PriceMarket) -> Self {
        Self {
            kind,
            variant,
            market,
        }
    }

    /// Renders the stored column name.
    pub fn name(&self) -> String {
        let prefix = match self.kind {
            EntityKind::Item => ITEM_PREFIX,
            EntityKind::Option => OPTION_PREFIX,
        };
        let variant = match self.variant {
            PriceVariant::Default => "",
            PriceVariant::LabGrown => "_lab_grown",
            PriceVariant::Gold => "_gold",
            PriceVariant::Silver => "_silver",
        };
        let market = match self.market {
            PriceMarket::Base => "",
            PriceMarket::Au => AU_COLUMN_SUFFIX,
        };
        format!("{}{}{}", prefix, variant, market)
    }

    /// Parses a stored column name. Returns `None` for unrelated columns.
    pub fn parse(name: &str) -> Option<Self> {
        let (kind, rest) = if let Some(rest) = name.strip_prefix(ITEM_PREFIX) {
            (EntityKind::Item, rest)
        } else if let Some(rest) = name.strip_prefix(OPTION_PREFIX) {
            (EntityKind::Option, rest)
        } else {
            return None;
        };

        let (market, rest) = match rest.strip_suffix(AU_COLUMN_SUFFIX) {
            Some(rest) => (PriceMarket::Au, rest),
            None => (PriceMarket::Base, rest),
        };

        let variant = match rest {
            "" => PriceVariant::Default,
            "_lab_grown" => PriceVariant::LabGrown,
            "_gold" => PriceVariant::Gold,
            "_silver" => PriceVariant::Silver,
            _ => return None,
        };

        Some(Self::new(kind, variant, market))
    }

    /// Every column an entity of `kind` priced by `mode` may carry.
    pub fn all_for(kind: EntityKind, mode: PricingMode) -> Vec<PriceColumn> {
        mode.variants()
            .iter()
            .flat_map(|&variant| {
                PriceMarket::ALL
                    .into_iter()
                    .map(move |market| PriceColumn::new(kind, variant, market))
            })
            .collect()
    }
}

impl fmt::Display for PriceColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for PriceColumn {
    type Err = crate::errors::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        PriceColumn::parse(s.trim()).ok_or_else(|| ValidationError::UnknownColumn(s.into()).into())
    }
}

impl PricedEntity {
    /// Builds an entity from a flat storage record.
    ///
    /// The pricing mode comes from the `pricing_mode` key when present,
    /// otherwise it is metal mode if any gold or silver column is set.
    /// Columns for the other kind, for variants outside the mode, and
    /// unrelated keys are ignored. Prices may be JSON numbers or numeric
    /// strings; `null` means not set.
    pub fn from_record(kind: EntityKind, record: &Map<String, Value>) -> Result<Self> {
        let mut columns = Vec::new();
        for (name, value) in record {
            let Some(column) = PriceColumn::parse(name) else {
                continue;
            };
            if column.kind != kind {
                continue;
            }
            columns.push((column, parse_price(name, value)?));
        }

        let mode = match record.get(PRICING_MODE_COLUMN) {
            Some(Value::String(raw)) => parse_mode(raw)?,
            _ => infer_mode(&columns),
        };

        let mut entity = PricedEntity::new(kind, mode);
        for (column, price) in columns {
            let Some(price) = price else {
                continue;
            };
            if !mode.allows(column.variant) {
                log::debug!(
                    "Ignoring column {} on entity priced by {}",
                    column.name(),
                    mode
                );
                continue;
            }
            entity.set_price(column.variant, column.market, Some(price))?;
        }
        Ok(entity)
    }

    /// Renders every column of the entity's mode, `None` where unset.
    pub fn to_columns(&self) -> BTreeMap<String, Option<Decimal>> {
        PriceColumn::all_for(self.kind, self.mode)
            .into_iter()
            .map(|column| (column.name(), self.price(column.variant, column.market)))
            .collect()
    }
}

fn parse_mode(raw: &str) -> Result<PricingMode> {
    match raw.trim() {
        "diamond_type" => Ok(PricingMode::DiamondType),
        "metal_type" => Ok(PricingMode::MetalType),
        other => Err(
            ValidationError::InvalidInput(format!("unknown pricing mode '{}'", other)).into(),
        ),
    }
}

fn infer_mode(columns: &[(PriceColumn, Option<Decimal>)]) -> PricingMode {
    let metal_set = columns.iter().any(|(column, price)| {
        price.is_some() && matches!(column.variant, PriceVariant::Gold | PriceVariant::Silver)
    });
    if metal_set {
        PricingMode::MetalType
    } else {
        PricingMode::DiamondType
    }
}

fn parse_price(column: &str, value: &Value) -> Result<Option<Decimal>> {
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => Ok(Some(Decimal::from_str(&number.to_string())?)),
        Value::String(raw) if raw.trim().is_empty() => Ok(None),
        Value::String(raw) => Ok(Some(Decimal::from_str(raw.trim())?)),
        other => Err(ValidationError::InvalidInput(format!(
            "column {} holds a non-numeric value: {}",
            column, other
        ))
        .into()),
    }
}
