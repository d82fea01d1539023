//! End-to-end scenarios across pricing, formatting and image resolution.

use atelier_core::images::{
    combination_for, resolve_variant_image, ChainSlug, MetalSlug, StoneSlug, VariantCatalog,
};
use atelier_core::markets::{currency_for_market, format_price, Currency, Market};
use atelier_core::pricing::{
    resolve_price, EntityKind, OptionCatalog, PriceVariant, PricedEntity, TotalPriceCalculator,
};
use atelier_core::selection::{
    CARAT_SETTING, CHAIN_SETTING, DIAMOND_TYPE_SETTING, FIRST_STONE_SETTING, METAL_SETTING,
    SECOND_STONE_SETTING,
};
use atelier_core::settings::StorefrontSettings;
use atelier_core::{CustomizationSelection, ProductType, Storefront};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Map, Value};

fn record(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {}", other),
    }
}

fn bracelet_selection(metal: &str, chain: &str) -> CustomizationSelection {
    CustomizationSelection::new()
        .with(METAL_SETTING, metal)
        .with(CHAIN_SETTING, chain)
        .with(FIRST_STONE_SETTING, "diamond")
        .with(SECOND_STONE_SETTING, "ruby")
}

// =============================================================================
// Pricing
// =============================================================================

#[test]
fn test_fallback_to_default_price() {
    let option =
        PricedEntity::from_record(EntityKind::Option, &record(json!({ "price": 10 }))).unwrap();

    assert_eq!(
        resolve_price(&option, Market::Lb, PriceVariant::LabGrown),
        Some(dec!(10))
    );
    assert_eq!(
        resolve_price(&option, Market::Au, PriceVariant::LabGrown),
        resolve_price(&option, Market::Au, PriceVariant::Default)
    );
    assert_eq!(resolve_price(&option, Market::Au, PriceVariant::Default), None);
}

#[test]
fn test_zero_price_is_not_a_fallback() {
    let option = PricedEntity::from_record(
        EntityKind::Option,
        &record(json!({ "price": "25.00", "price_gold": 0, "price_silver": null })),
    )
    .unwrap();

    assert_eq!(
        resolve_price(&option, Market::Lb, PriceVariant::Gold),
        Some(Decimal::ZERO)
    );
    assert_eq!(
        resolve_price(&option, Market::Lb, PriceVariant::Silver),
        Some(dec!(25))
    );
}

#[test]
fn test_lab_grown_ring_total_from_records() {
    let ring = PricedEntity::from_record(
        EntityKind::Item,
        &record(json!({
            "id": "ring-halo",
            "pricing_mode": "diamond_type",
            "base_price": 1200,
            "base_price_lab_grown": 800,
            "base_price_au": 1850,
        })),
    )
    .unwrap();
    let carat = PricedEntity::from_record(
        EntityKind::Option,
        &record(json!({ "price": 500, "price_lab_grown": 300, "price_lab_grown_au": 460 })),
    )
    .unwrap();

    let catalog = OptionCatalog::new().with(CARAT_SETTING, "1ct", carat);
    let calculator = TotalPriceCalculator::new(&catalog);
    let selection = CustomizationSelection::new()
        .with(DIAMOND_TYPE_SETTING, "lab_grown")
        .with(CARAT_SETTING, "1ct");

    let lb = calculator
        .calculate_for_selection(&ring, &selection, Market::Lb)
        .unwrap();
    assert_eq!(lb.total, dec!(1100));

    // au has no lab-grown base column, so the au default is used for the ring
    let au = calculator
        .calculate_for_selection(&ring, &selection, Market::Au)
        .unwrap();
    assert_eq!(au.base, dec!(1850));
    assert_eq!(au.total, dec!(2310));
}

// =============================================================================
// Formatting
// =============================================================================

#[test]
fn test_market_format_scenario() {
    assert_eq!(format_price(dec!(100), Currency::Aed, true), "367.00 AED");
    assert_eq!(format_price(dec!(100), Currency::Aud, true), "A$144.00");
    assert_eq!(format_price(dec!(1234.5), Currency::Usd, false), "$1,234.50");
}

#[test]
fn test_currency_for_unknown_market_is_usd() {
    assert_eq!(currency_for_market(Some("qa")), Currency::Qar);
    assert_eq!(currency_for_market(Some("mars")), Currency::Usd);
    assert_eq!(currency_for_market(None), Currency::Usd);
}

// =============================================================================
// Images
// =============================================================================

#[test]
fn test_bracelet_end_to_end() {
    let leather = resolve_variant_image(
        ProductType::Bracelet,
        &bracelet_selection("yellow_gold", "black_leather"),
    );
    assert!(leather.matched);
    assert_eq!(
        leather.combination_key.as_deref(),
        Some("black-leather-ruby-yellowgold")
    );
    assert_eq!(leather.path, "/bracelets/black-leather-ruby-yellowgold.webp");

    let cord = resolve_variant_image(
        ProductType::Bracelet,
        &bracelet_selection("yellow_gold", "gold_cord"),
    );
    assert!(cord.matched);
    assert_eq!(cord.path, "/bracelets/gold-cord-ruby-yellowgold.webp");
    assert_ne!(cord.path, leather.path);

    let silver_cord =
        resolve_variant_image(ProductType::Bracelet, &bracelet_selection("silver", "gold_cord"));
    assert!(!silver_cord.matched);
    assert_eq!(silver_cord.path, "/bracelets/bracelet-preview.webp");
    assert_eq!(
        silver_cord.combination_key.as_deref(),
        Some("gold-cord-ruby-silver")
    );
}

#[test]
fn test_every_found_image_is_whitelisted() {
    let catalog = VariantCatalog::bundled();
    let mut found = 0;

    for product_type in ProductType::ALL {
        let chains: Vec<Option<ChainSlug>> = if product_type.has_chain() {
            ChainSlug::ALL.into_iter().map(Some).collect()
        } else {
            vec![None]
        };

        for chain in &chains {
            for stone in StoneSlug::ALL {
                for metal in ["yellow_gold", "silver", "rose_gold"] {
                    let mut selection = CustomizationSelection::new()
                        .with(METAL_SETTING, metal)
                        .with(FIRST_STONE_SETTING, stone.slug());
                    if let Some(chain) = chain {
                        selection.insert(CHAIN_SETTING, chain.option_id());
                    }

                    let image = resolve_variant_image(product_type, &selection);
                    match combination_for(product_type, &selection) {
                        Some(combination) if catalog.contains(&combination) => {
                            assert!(image.matched);
                            assert_eq!(image.path, combination.path());
                            found += 1;
                        }
                        _ => {
                            assert!(!image.matched);
                            assert_eq!(image.path, product_type.fallback_path());
                        }
                    }
                }
            }
        }
    }

    assert_eq!(found, catalog.len());
    assert!(MetalSlug::from_option_id("rose_gold").is_none());
}

// =============================================================================
// Facade
// =============================================================================

#[test]
fn test_storefront_from_settings_json() {
    let settings = StorefrontSettings::from_json(
        r#"{
            "defaultMarket": "ae",
            "exchangeRateOverrides": { "AED": 3.7 },
            "assetBaseUrl": "https://cdn.example.com"
        }"#,
    )
    .unwrap();
    let storefront = Storefront::from_settings(&settings).unwrap();
    let market = storefront.market_from_cookie(Some("unknown"));
    assert_eq!(market, Market::Ae);

    let bracelet = PricedEntity::from_record(
        EntityKind::Item,
        &record(json!({
            "pricing_mode": "metal_type",
            "base_price": 100,
            "base_price_gold": 150,
        })),
    )
    .unwrap();
    let chains = OptionCatalog::new().with(
        CHAIN_SETTING,
        "black_leather",
        PricedEntity::from_record(EntityKind::Option, &record(json!({ "price": 20 }))).unwrap(),
    );

    let quote = storefront.quote_line(
        &bracelet,
        &chains,
        &bracelet_selection("yellow_gold", "black_leather"),
        ProductType::Bracelet,
        market,
    );
    assert_eq!(quote.usd_total, Some(dec!(170)));
    assert_eq!(quote.display_total.as_deref(), Some("629.00 AED"));
    assert_eq!(
        quote.image.path,
        "https://cdn.example.com/bracelets/black-leather-ruby-yellowgold.webp"
    );
}

#[test]
fn test_mixed_case_selection_prices_and_pictures_alike() {
    let bracelet = PricedEntity::from_record(
        EntityKind::Item,
        &record(json!({ "base_price": 100, "base_price_gold": 150 })),
    )
    .unwrap();
    let chains = OptionCatalog::new().with(
        CHAIN_SETTING,
        "black_leather",
        PricedEntity::from_record(EntityKind::Option, &record(json!({ "price": 20 }))).unwrap(),
    );
    let selection = CustomizationSelection::new()
        .with(METAL_SETTING, "Yellow_Gold")
        .with(CHAIN_SETTING, "Black_Leather")
        .with(FIRST_STONE_SETTING, "Ruby");

    let quote = Storefront::default().quote_line(
        &bracelet,
        &chains,
        &selection,
        ProductType::Bracelet,
        Market::Lb,
    );
    assert!(quote.image.matched);
    assert_eq!(quote.image.path, "/bracelets/black-leather-ruby-yellowgold.webp");
    assert_eq!(quote.usd_total, Some(dec!(170)));
}
