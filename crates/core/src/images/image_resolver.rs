use super::image_model::{ChainSlug, MetalSlug, ProductType, StoneSlug, VariantCombination};
use super::variant_catalog::VariantCatalog;
use crate::constants::DIAMOND_STONE_ID;
use crate::selection::{
    CustomizationSelection, CHAIN_SETTING, FIRST_STONE_SETTING, METAL_SETTING,
    SECOND_STONE_SETTING,
};
use serde::Serialize;
use std::sync::Arc;

/// Outcome of an image lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedImage {
    /// Path (or URL, when a base URL is configured) to display.
    pub path: String,
    /// Combination key derived from the selection, if one could be built.
    /// Present even when the combination was not photographed.
    pub combination_key: Option<String>,
    /// Whether `path` is the exact photo for the selection.
    pub matched: bool,
}

/// The stone that drives the visual variant.
///
/// Diamond is the implicit first stone, so a non-diamond first stone wins,
/// otherwise the second stone is used.
pub fn variant_stone(selection: &CustomizationSelection) -> Option<String> {
    match selection.normalized(FIRST_STONE_SETTING) {
        Some(first) if first != DIAMOND_STONE_ID => Some(first),
        _ => selection.normalized(SECOND_STONE_SETTING),
    }
}

/// Builds the combination for a selection, or `None` when a required choice
/// is missing or not one of the known options for the product line.
pub fn combination_for(
    product_type: ProductType,
    selection: &CustomizationSelection,
) -> Option<VariantCombination> {
    let metal = MetalSlug::from_option_id(&selection.normalized(METAL_SETTING)?)?;

    let chain = if product_type.has_chain() {
        let option_id = selection.normalized(CHAIN_SETTING)?;
        Some(ChainSlug::from_option_id(product_type, &option_id)?)
    } else {
        None
    };

    let stone = StoneSlug::from_option_id(&variant_stone(selection)?)?;

    Some(VariantCombination {
        product_type,
        chain,
        stone,
        metal,
    })
}

/// Maps a product line and a selection to the photo to display.
///
/// Pure and synchronous: membership is tested against the catalog, the
/// asset store is never probed. Anything that does not resolve to a
/// photographed combination gets the product line's preview image.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    catalog: Arc<VariantCatalog>,
    base_url: String,
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new(VariantCatalog::shared())
    }
}

impl ImageResolver {
    pub fn new(catalog: Arc<VariantCatalog>) -> Self {
        Self {
            catalog,
            base_url: String::new(),
        }
    }

    /// Prefixes every returned path with `base_url`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn catalog(&self) -> &VariantCatalog {
        &self.catalog
    }

    pub fn resolve(
        &self,
        product_type: ProductType,
        selection: &CustomizationSelection,
    ) -> ResolvedImage {
        let Some(combination) = combination_for(product_type, selection) else {
            return self.fallback(product_type, None);
        };

        let key = combination.key();
        if self.catalog.contains(&combination) {
            ResolvedImage {
                path: self.url(&combination.path()),
                combination_key: Some(key),
                matched: true,
            }
        } else {
            log::debug!("No {} photo for combination {}", product_type, key);
            self.fallback(product_type, Some(key))
        }
    }

    /// Path only. See [`resolve`](Self::resolve).
    pub fn resolve_path(
        &self,
        product_type: ProductType,
        selection: &CustomizationSelection,
    ) -> String {
        self.resolve(product_type, selection).path
    }

    fn fallback(&self, product_type: ProductType, key: Option<String>) -> ResolvedImage {
        ResolvedImage {
            path: self.url(product_type.fallback_path()),
            combination_key: key,
            matched: false,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bracelet(metal: &str, chain: &str, first: &str, second: &str) -> CustomizationSelection {
        CustomizationSelection::new()
            .with(METAL_SETTING, metal)
            .with(CHAIN_SETTING, chain)
            .with(FIRST_STONE_SETTING, first)
            .with(SECOND_STONE_SETTING, second)
    }

    #[test]
    fn test_variant_stone_precedence() {
        let diamond_first = CustomizationSelection::new()
            .with(FIRST_STONE_SETTING, "diamond")
            .with(SECOND_STONE_SETTING, "ruby");
        assert_eq!(variant_stone(&diamond_first).as_deref(), Some("ruby"));

        let emerald_first = CustomizationSelection::new()
            .with(FIRST_STONE_SETTING, "emerald")
            .with(SECOND_STONE_SETTING, "ruby");
        assert_eq!(variant_stone(&emerald_first).as_deref(), Some("emerald"));

        let second_only = CustomizationSelection::new().with(SECOND_STONE_SETTING, "sapphire");
        assert_eq!(variant_stone(&second_only).as_deref(), Some("sapphire"));

        let diamond_only = CustomizationSelection::new().with(FIRST_STONE_SETTING, "Diamond");
        assert_eq!(variant_stone(&diamond_only), None);
    }

    #[test]
    fn test_bracelet_match() {
        let resolver = ImageResolver::default();
        let image = resolver.resolve(
            ProductType::Bracelet,
            &bracelet("yellow_gold", "black_leather", "diamond", "ruby"),
        );
        assert!(image.matched);
        assert_eq!(image.path, "/bracelets/black-leather-ruby-yellowgold.webp");
        assert_eq!(
            image.combination_key.as_deref(),
            Some("black-leather-ruby-yellowgold")
        );
    }

    #[test]
    fn test_missing_metal_falls_back_without_key() {
        let resolver = ImageResolver::default();
        let selection = CustomizationSelection::new()
            .with(CHAIN_SETTING, "gold_cord")
            .with(SECOND_STONE_SETTING, "ruby");
        let image = resolver.resolve(ProductType::Bracelet, &selection);
        assert!(!image.matched);
        assert_eq!(image.path, "/bracelets/bracelet-preview.webp");
        assert_eq!(image.combination_key, None);
    }

    #[test]
    fn test_missing_chain_falls_back() {
        let resolver = ImageResolver::default();
        let selection = CustomizationSelection::new()
            .with(METAL_SETTING, "silver")
            .with(FIRST_STONE_SETTING, "ruby");
        assert_eq!(
            resolver.resolve_path(ProductType::Necklace, &selection),
            "/necklaces/necklace-preview.webp"
        );
    }

    #[test]
    fn test_no_variant_stone_falls_back() {
        let resolver = ImageResolver::default();
        let image = resolver.resolve(
            ProductType::Bracelet,
            &bracelet("silver", "black_leather", "diamond", ""),
        );
        assert!(!image.matched);
        assert_eq!(image.path, ProductType::Bracelet.fallback_path());
    }

    #[test]
    fn test_ring_ignores_chain_choice() {
        let resolver = ImageResolver::default();
        let selection = CustomizationSelection::new()
            .with(METAL_SETTING, "Yellow_Gold")
            .with(CHAIN_SETTING, "box_chain")
            .with(FIRST_STONE_SETTING, "sapphire");
        let image = resolver.resolve(ProductType::Ring, &selection);
        assert!(image.matched);
        assert_eq!(image.path, "/rings/Ring Sapphire Yellow Gold.webp");
    }

    #[test]
    fn test_unphotographed_ring_reports_key() {
        let resolver = ImageResolver::default();
        let selection = CustomizationSelection::new()
            .with(METAL_SETTING, "yellow_gold")
            .with(FIRST_STONE_SETTING, "amethyst");
        let image = resolver.resolve(ProductType::Ring, &selection);
        assert!(!image.matched);
        assert_eq!(image.path, "/rings/ring-preview.webp");
        assert_eq!(image.combination_key.as_deref(), Some("amethyst-yellowgold"));
    }

    #[test]
    fn test_base_url_prefix() {
        let resolver = ImageResolver::default().with_base_url("https://cdn.example.com/assets/");
        let image = resolver.resolve(
            ProductType::Bracelet,
            &bracelet("yellow_gold", "gold_cord", "diamond", "emerald"),
        );
        assert_eq!(
            image.path,
            "https://cdn.example.com/assets/bracelets/gold-cord-emerald-yellowgold.webp"
        );
    }

    #[test]
    fn test_default_resolver_shares_bundled_catalog() {
        let resolver = ImageResolver::default();
        assert!(std::ptr::eq(resolver.catalog(), VariantCatalog::bundled()));
    }

    #[test]
    fn test_custom_catalog_replaces_bundled() {
        let json = r#"{ "ring": [{ "stones": ["amethyst"], "metals": ["yellowgold"] }] }"#;
        let catalog = VariantCatalog::from_json(json).unwrap();
        let resolver = ImageResolver::new(Arc::new(catalog));
        let selection = CustomizationSelection::new()
            .with(METAL_SETTING, "yellow_gold")
            .with(FIRST_STONE_SETTING, "amethyst");
        assert!(resolver.resolve(ProductType::Ring, &selection).matched);
        let ruby = CustomizationSelection::new()
            .with(METAL_SETTING, "yellow_gold")
            .with(FIRST_STONE_SETTING, "ruby");
        assert!(!resolver.resolve(ProductType::Ring, &ruby).matched);
    }
}
