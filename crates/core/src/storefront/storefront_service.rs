use crate::errors::Result;
use crate::images::{ImageResolver, ProductType, ResolvedImage};
use crate::markets::{Currency, Market, RateTable};
use crate::pricing::{LineTotal, OptionCatalog, PricedEntity, TotalPriceCalculator};
use crate::selection::CustomizationSelection;
use crate::settings::StorefrontSettings;
use rust_decimal::Decimal;
use serde::Serialize;

/// Everything a cart line or product page shows for one configured product.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineQuote {
    pub market: Market,
    pub currency: Currency,
    /// Breakdown in the market's price set. `None` when the item is not
    /// offered in the market.
    pub line: Option<LineTotal>,
    /// Line total expressed in USD.
    pub usd_total: Option<Decimal>,
    /// Line total formatted in the market's currency.
    pub display_total: Option<String>,
    pub image: ResolvedImage,
}

impl LineQuote {
    pub fn is_available(&self) -> bool {
        self.line.is_some()
    }
}

/// Facade over the rate table, the total calculator and the image resolver.
#[derive(Debug, Clone)]
pub struct Storefront {
    rates: RateTable,
    resolver: ImageResolver,
    default_market: Market,
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new(RateTable::new(), ImageResolver::default(), Market::default())
    }
}

impl Storefront {
    pub fn new(rates: RateTable, resolver: ImageResolver, default_market: Market) -> Self {
        Self {
            rates,
            resolver,
            default_market,
        }
    }

    pub fn from_settings(settings: &StorefrontSettings) -> Result<Self> {
        let storefront = Self::new(
            settings.rate_table()?,
            settings.image_resolver()?,
            settings.default_market()?,
        );
        log::debug!(
            "Storefront ready: default market {}, {} photographed variants",
            storefront.default_market,
            storefront.resolver.catalog().len()
        );
        Ok(storefront)
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn resolver(&self) -> &ImageResolver {
        &self.resolver
    }

    pub fn default_market(&self) -> Market {
        self.default_market
    }

    /// Lenient market lookup for the cookie value, degrading to the
    /// configured default market.
    pub fn market_from_cookie(&self, value: Option<&str>) -> Market {
        Market::from_cookie_or(value, self.default_market)
    }

    pub fn format(&self, amount: Decimal, currency: Currency, convert_from_usd: bool) -> String {
        self.rates.format_price(amount, currency, convert_from_usd)
    }

    /// Formats an amount read from `market`'s price set.
    ///
    /// Markets with their own stored prices show the amount as stored. All
    /// other markets read USD prices, which are converted for display.
    pub fn display_price(&self, amount: Decimal, market: Market) -> String {
        self.format(amount, market.currency(), !market.stores_own_prices())
    }

    /// Converts an amount read from `market`'s price set to USD.
    pub fn to_usd(&self, amount: Decimal, market: Market) -> Decimal {
        if market.stores_own_prices() {
            self.rates.convert_to_usd(amount, market.currency())
        } else {
            amount
        }
    }

    /// Prices and pictures one configured product.
    ///
    /// The price variant is derived from the selection and the item's
    /// pricing mode. The image is resolved even when the item is not offered
    /// in the market.
    pub fn quote_line(
        &self,
        item: &PricedEntity,
        options: &OptionCatalog,
        selection: &CustomizationSelection,
        product_type: ProductType,
        market: Market,
    ) -> LineQuote {
        let line =
            TotalPriceCalculator::new(options).calculate_for_selection(item, selection, market);
        let image = self.resolver.resolve(product_type, selection);

        let (usd_total, display_total) = match &line {
            Some(line) => (
                Some(self.to_usd(line.total, market)),
                Some(self.display_price(line.total, market)),
            ),
            None => {
                log::debug!("{} is not offered in market {}", product_type, market);
                (None, None)
            }
        };

        LineQuote {
            market,
            currency: market.currency(),
            line,
            usd_total,
            display_total,
            image,
        }
    }
}
