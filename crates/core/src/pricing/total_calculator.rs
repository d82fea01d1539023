use super::price_selector::resolve_price;
use super::pricing_model::{PriceVariant, PricedEntity};
use crate::markets::Market;
use crate::selection::CustomizationSelection;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Priced option definitions, keyed by setting id then option id.
///
/// Option ids are matched trimmed and lowercased, the same way the image
/// resolver and the variant selector read a selection.
#[derive(Debug, Clone, Default)]
pub struct OptionCatalog {
    settings: HashMap<String, BTreeMap<String, PricedEntity>>,
}

impl OptionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        setting_id: impl Into<String>,
        option_id: impl Into<String>,
        option: PricedEntity,
    ) {
        let option_id: String = option_id.into();
        self.settings
            .entry(setting_id.into())
            .or_default()
            .insert(option_key(&option_id), option);
    }

    /// Builder-style insert.
    pub fn with(
        mut self,
        setting_id: impl Into<String>,
        option_id: impl Into<String>,
        option: PricedEntity,
    ) -> Self {
        self.insert(setting_id, option_id, option);
        self
    }

    pub fn get(&self, setting_id: &str, option_id: &str) -> Option<&PricedEntity> {
        self.settings.get(setting_id)?.get(&option_key(option_id))
    }

    /// Option ids of `setting_id` that can be offered in `market`, sorted.
    pub fn available_options(&self, setting_id: &str, market: Market) -> Vec<&str> {
        self.settings
            .get(setting_id)
            .map(|options| {
                options
                    .iter()
                    .filter(|(_, option)| option.is_available_in(market))
                    .map(|(id, _)| id.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn option_key(option_id: &str) -> String {
    option_id.trim().to_ascii_lowercase()
}

/// One selected option's contribution to a line total.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionCharge {
    pub setting_id: String,
    pub option_id: String,
    pub price: Decimal,
}

/// Breakdown of an order line, in the market's stored price currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineTotal {
    pub base: Decimal,
    pub options: Vec<OptionCharge>,
    pub total: Decimal,
}

/// Composes an item's base price with its selected options.
pub struct TotalPriceCalculator<'a> {
    catalog: &'a OptionCatalog,
}

impl<'a> TotalPriceCalculator<'a> {
    pub fn new(catalog: &'a OptionCatalog) -> Self {
        Self { catalog }
    }

    /// Computes the line breakdown.
    ///
    /// Returns `None` when the base item has no price in `market`. Each
    /// selected option is resolved on its own with the same market and
    /// variant, falling back to the option's default. Selections with no
    /// matching option definition, or options with no price in the market,
    /// contribute nothing.
    pub fn calculate(
        &self,
        item: &PricedEntity,
        selection: &CustomizationSelection,
        market: Market,
        variant: PriceVariant,
    ) -> Option<LineTotal> {
        let base = resolve_price(item, market, variant)?;

        let mut options = Vec::new();
        for (setting_id, option_id) in selection.iter() {
            let Some(option) = self.catalog.get(setting_id, option_id) else {
                continue;
            };
            match resolve_price(option, market, variant) {
                Some(price) => options.push(OptionCharge {
                    setting_id: setting_id.to_string(),
                    option_id: option_key(option_id),
                    price,
                }),
                None => log::debug!(
                    "Option {}={} has no price in market {}, skipping",
                    setting_id,
                    option_id,
                    market
                ),
            }
        }

        let total = options
            .iter()
            .fold(base, |acc, charge| acc.saturating_add(charge.price));
        Some(LineTotal {
            base,
            options,
            total,
        })
    }

    /// Total only. See [`calculate`](Self::calculate).
    pub fn total(
        &self,
        item: &PricedEntity,
        selection: &CustomizationSelection,
        market: Market,
        variant: PriceVariant,
    ) -> Option<Decimal> {
        self.calculate(item, selection, market, variant)
            .map(|line| line.total)
    }

    /// Like [`calculate`](Self::calculate), deriving the variant from the
    /// selection and the item's pricing mode.
    pub fn calculate_for_selection(
        &self,
        item: &PricedEntity,
        selection: &CustomizationSelection,
        market: Market,
    ) -> Option<LineTotal> {
        let variant = PriceVariant::from_selection(item.mode, selection);
        self.calculate(item, selection, market, variant)
    }
}
