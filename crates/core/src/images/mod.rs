//! Images module - maps a product selection to its pre-rendered photo.

mod image_model;
mod image_resolver;
mod variant_catalog;

pub use image_model::{ChainSlug, MetalSlug, ProductType, StoneSlug, VariantCombination};
pub use image_resolver::{combination_for, variant_stone, ImageResolver, ResolvedImage};
pub use variant_catalog::VariantCatalog;

use crate::selection::CustomizationSelection;

/// Resolves against the bundled catalog with no base URL.
pub fn resolve_variant_image(
    product_type: ProductType,
    selection: &CustomizationSelection,
) -> ResolvedImage {
    lazy_static::lazy_static! {
        static ref DEFAULT_RESOLVER: ImageResolver = ImageResolver::default();
    }
    DEFAULT_RESOLVER.resolve(product_type, selection)
}
