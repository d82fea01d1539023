use super::pricing_model::{EntityKind, PriceMarket, PriceVariant, PricedEntity};
use crate::markets::Market;
use rust_decimal::Decimal;

/// Resolves the price of `entity` for `market` and `variant`.
///
/// Reads the variant's slot for the market's price set. When that slot is
/// unset, falls back to the default slot of the same price set; it never
/// reads another market's prices. `None` means the entity has no price at
/// all for this market and must not be offered there. A stored zero is a
/// real price and is returned as-is.
pub fn resolve_price(
    entity: &PricedEntity,
    market: Market,
    variant: PriceVariant,
) -> Option<Decimal> {
    let price_market = PriceMarket::for_market(market);

    if let Some(price) = entity.price(variant, price_market) {
        return Some(price);
    }

    let fallback = entity.price(PriceVariant::Default, price_market);
    if variant != PriceVariant::Default {
        log::debug!(
            "No {} price for market {}, using default {:?}",
            variant,
            market,
            fallback
        );
    }
    fallback
}

impl PricedEntity {
    /// See [`resolve_price`].
    pub fn resolve(&self, market: Market, variant: PriceVariant) -> Option<Decimal> {
        resolve_price(self, market, variant)
    }

    /// Whether the entity can be offered in `market`.
    ///
    /// Items need at least one positive price in the market's price set.
    /// Options need at least one set price; zero counts as available.
    pub fn is_available_in(&self, market: Market) -> bool {
        let mut prices = self.prices_for(PriceMarket::for_market(market));
        match self.kind {
            EntityKind::Item => prices.any(|price| price > Decimal::ZERO),
            EntityKind::Option => prices.next().is_some(),
        }
    }
}
