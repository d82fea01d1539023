use crate::constants::DEFAULT_MARKET_CODE;
use crate::errors::Result;
use crate::images::{ImageResolver, VariantCatalog};
use crate::markets::{Currency, Market, RateTable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Deployment settings for the pricing engine.
///
/// ```json
/// {
///   "defaultMarket": "lb",
///   "exchangeRateOverrides": { "AUD": 1.5 },
///   "assetBaseUrl": "https://cdn.example.com",
///   "variantCatalog": { "ring": [{ "stones": ["ruby"], "metals": ["silver"] }] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorefrontSettings {
    /// Market used when a visitor has no (valid) market cookie.
    pub default_market: String,
    /// Units of currency per 1 USD, replacing the built-in rates.
    pub exchange_rate_overrides: HashMap<Currency, Decimal>,
    /// Prefix for resolved image paths. Empty keeps paths site-relative.
    pub asset_base_url: String,
    /// Replacement for the bundled photographed-combination catalog.
    pub variant_catalog: Option<Value>,
}

impl Default for StorefrontSettings {
    fn default() -> Self {
        Self {
            default_market: DEFAULT_MARKET_CODE.to_string(),
            exchange_rate_overrides: HashMap::new(),
            asset_base_url: String::new(),
            variant_catalog: None,
        }
    }
}

impl StorefrontSettings {
    /// Parses settings and validates them, so a bad deployment fails at
    /// startup instead of on the first request.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: StorefrontSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        self.default_market()?;
        self.rate_table()?;
        self.catalog()?;
        Ok(())
    }

    pub fn default_market(&self) -> Result<Market> {
        self.default_market.parse()
    }

    pub fn rate_table(&self) -> Result<RateTable> {
        RateTable::with_overrides(&self.exchange_rate_overrides)
    }

    pub fn catalog(&self) -> Result<Arc<VariantCatalog>> {
        match &self.variant_catalog {
            Some(value) => {
                let catalog = VariantCatalog::from_json(&value.to_string())?;
                log::debug!("Loaded variant catalog with {} combinations", catalog.len());
                Ok(Arc::new(catalog))
            }
            None => Ok(VariantCatalog::shared()),
        }
    }

    pub fn image_resolver(&self) -> Result<ImageResolver> {
        Ok(ImageResolver::new(self.catalog()?).with_base_url(self.asset_base_url.as_str()))
    }
}
