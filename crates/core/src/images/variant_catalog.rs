//! Photographed variant combinations.
//!
//! Not every combination of chain, stone and metal has a photo. The set of
//! photographed combinations is content, so it lives in a data file
//! (`data/variant_images.json`) rather than in code. Each entry expands to
//! every `stone x metal` pair for its chain:
//!
//! ```json
//! {
//!   "ring": [{ "stones": ["ruby"], "metals": ["yellowgold", "silver"] }],
//!   "bracelet": [{ "chain": "gold-cord", "stones": ["ruby"], "metals": ["yellowgold"] }]
//! }
//! ```

use super::image_model::{ChainSlug, MetalSlug, ProductType, StoneSlug, VariantCombination};
use crate::errors::{Error, Result};
use lazy_static::lazy_static;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;

const BUNDLED_CATALOG: &str = include_str!("../../data/variant_images.json");

lazy_static! {
    static ref BUNDLED: Arc<VariantCatalog> = Arc::new(
        VariantCatalog::from_json(BUNDLED_CATALOG).expect("Invalid bundled variant catalog")
    );
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    ring: Vec<CatalogEntry>,
    #[serde(default)]
    necklace: Vec<CatalogEntry>,
    #[serde(default)]
    bracelet: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogEntry {
    chain: Option<String>,
    stones: Vec<String>,
    metals: Vec<String>,
}

/// Closed set of combinations known to have a photo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantCatalog {
    combinations: HashSet<VariantCombination>,
}

impl VariantCatalog {
    /// The catalog shipped with the crate.
    pub fn bundled() -> &'static VariantCatalog {
        BUNDLED.as_ref()
    }

    /// Shared handle to the bundled catalog. Parsed once per process.
    pub fn shared() -> Arc<VariantCatalog> {
        Arc::clone(&BUNDLED)
    }

    /// Parses a catalog from its JSON form. Unknown slugs, chains offered on
    /// another product line, and rings with chains are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| Error::Catalog(e.to_string()))?;

        let mut catalog = Self::default();
        for (product_type, entries) in [
            (ProductType::Ring, &file.ring),
            (ProductType::Necklace, &file.necklace),
            (ProductType::Bracelet, &file.bracelet),
        ] {
            for entry in entries {
                catalog.add_entry(product_type, entry)?;
            }
        }
        Ok(catalog)
    }

    fn add_entry(&mut self, product_type: ProductType, entry: &CatalogEntry) -> Result<()> {
        let chain = match (&entry.chain, product_type.has_chain()) {
            (Some(slug), true) => {
                let chain = ChainSlug::from_slug(product_type, slug).ok_or_else(|| {
                    Error::Catalog(format!("unknown {} chain '{}'", product_type, slug))
                })?;
                Some(chain)
            }
            (None, false) => None,
            (Some(slug), false) => {
                return Err(Error::Catalog(format!(
                    "{} entries cannot have a chain, got '{}'",
                    product_type, slug
                )))
            }
            (None, true) => {
                return Err(Error::Catalog(format!(
                    "{} entries need a chain",
                    product_type
                )))
            }
        };

        for stone in &entry.stones {
            let stone = StoneSlug::from_option_id(stone)
                .ok_or_else(|| Error::Catalog(format!("unknown stone '{}'", stone)))?;
            for metal in &entry.metals {
                let metal = MetalSlug::from_slug(metal)
                    .ok_or_else(|| Error::Catalog(format!("unknown metal '{}'", metal)))?;
                self.insert(VariantCombination {
                    product_type,
                    chain,
                    stone,
                    metal,
                });
            }
        }
        Ok(())
    }

    pub fn insert(&mut self, combination: VariantCombination) {
        self.combinations.insert(combination);
    }

    pub fn contains(&self, combination: &VariantCombination) -> bool {
        self.combinations.contains(combination)
    }

    /// Combination keys photographed for `product_type`, sorted.
    pub fn keys(&self, product_type: ProductType) -> Vec<String> {
        let mut keys: Vec<String> = self
            .combinations
            .iter()
            .filter(|c| c.product_type == product_type)
            .map(VariantCombination::key)
            .collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }
}
