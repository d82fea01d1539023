//! Variant image domain models.

use crate::constants::VARIANT_IMAGE_EXTENSION;
use crate::errors::{Error, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Customizable product lines with pre-rendered variant photos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Ring,
    Necklace,
    Bracelet,
}

impl ProductType {
    pub const ALL: [ProductType; 3] = [
        ProductType::Ring,
        ProductType::Necklace,
        ProductType::Bracelet,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ProductType::Ring => "ring",
            ProductType::Necklace => "necklace",
            ProductType::Bracelet => "bracelet",
        }
    }

    /// Storage folder holding this product's photos.
    pub const fn folder(&self) -> &'static str {
        match self {
            ProductType::Ring => "/rings",
            ProductType::Necklace => "/necklaces",
            ProductType::Bracelet => "/bracelets",
        }
    }

    /// Generic preview shown when no photo matches the selection.
    pub const fn fallback_path(&self) -> &'static str {
        match self {
            ProductType::Ring => "/rings/ring-preview.webp",
            ProductType::Necklace => "/necklaces/necklace-preview.webp",
            ProductType::Bracelet => "/bracelets/bracelet-preview.webp",
        }
    }

    pub const fn has_chain(&self) -> bool {
        !matches!(self, ProductType::Ring)
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ring" | "rings" => Ok(ProductType::Ring),
            "necklace" | "necklaces" => Ok(ProductType::Necklace),
            "bracelet" | "bracelets" => Ok(ProductType::Bracelet),
            _ => Err(
                ValidationError::InvalidInput(format!("unknown product type '{}'", s)).into(),
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetalSlug {
    YellowGold,
    Silver,
}

impl MetalSlug {
    pub const ALL: [MetalSlug; 2] = [MetalSlug::YellowGold, MetalSlug::Silver];

    pub fn from_option_id(option_id: &str) -> Option<Self> {
        match option_id {
            "yellow_gold" => Some(MetalSlug::YellowGold),
            "silver" => Some(MetalSlug::Silver),
            _ => None,
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.slug() == slug)
    }

    pub const fn slug(&self) -> &'static str {
        match self {
            MetalSlug::YellowGold => "yellowgold",
            MetalSlug::Silver => "silver",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            MetalSlug::YellowGold => "Yellow Gold",
            MetalSlug::Silver => "Silver",
        }
    }
}

/// Non-diamond stones that drive the visual variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoneSlug {
    Ruby,
    Emerald,
    Sapphire,
    Amethyst,
}

impl StoneSlug {
    pub const ALL: [StoneSlug; 4] = [
        StoneSlug::Ruby,
        StoneSlug::Emerald,
        StoneSlug::Sapphire,
        StoneSlug::Amethyst,
    ];

    /// Option ids and slugs coincide for stones.
    pub fn from_option_id(option_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.slug() == option_id)
    }

    pub const fn slug(&self) -> &'static str {
        match self {
            StoneSlug::Ruby => "ruby",
            StoneSlug::Emerald => "emerald",
            StoneSlug::Sapphire => "sapphire",
            StoneSlug::Amethyst => "amethyst",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            StoneSlug::Ruby => "Ruby",
            StoneSlug::Emerald => "Emerald",
            StoneSlug::Sapphire => "Sapphire",
            StoneSlug::Amethyst => "Amethyst",
        }
    }
}

/// Chains and cords, each offered on exactly one product type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainSlug {
    BlackLeather,
    BrownLeather,
    GoldCord,
    Cable,
    Box,
    SatinCord,
}

impl ChainSlug {
    pub const ALL: [ChainSlug; 6] = [
        ChainSlug::BlackLeather,
        ChainSlug::BrownLeather,
        ChainSlug::GoldCord,
        ChainSlug::Cable,
        ChainSlug::Box,
        ChainSlug::SatinCord,
    ];

    pub const fn option_id(&self) -> &'static str {
        match self {
            ChainSlug::BlackLeather => "black_leather",
            ChainSlug::BrownLeather => "brown_leather",
            ChainSlug::GoldCord => "gold_cord",
            ChainSlug::Cable => "cable_chain",
            ChainSlug::Box => "box_chain",
            ChainSlug::SatinCord => "satin_cord",
        }
    }

    pub const fn slug(&self) -> &'static str {
        match self {
            ChainSlug::BlackLeather => "black-leather",
            ChainSlug::BrownLeather => "brown-leather",
            ChainSlug::GoldCord => "gold-cord",
            ChainSlug::Cable => "cable",
            ChainSlug::Box => "box",
            ChainSlug::SatinCord => "satin-cord",
        }
    }

    pub const fn product_type(&self) -> ProductType {
        match self {
            ChainSlug::BlackLeather | ChainSlug::BrownLeather | ChainSlug::GoldCord => {
                ProductType::Bracelet
            }
            ChainSlug::Cable | ChainSlug::Box | ChainSlug::SatinCord => ProductType::Necklace,
        }
    }

    /// Chain for `option_id` if it is offered on `product_type`.
    pub fn from_option_id(product_type: ProductType, option_id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.option_id() == option_id && c.product_type() == product_type)
    }

    pub fn from_slug(product_type: ProductType, slug: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.slug() == slug && c.product_type() == product_type)
    }
}

/// One fully specified visual variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariantCombination {
    pub product_type: ProductType,
    pub chain: Option<ChainSlug>,
    pub stone: StoneSlug,
    pub metal: MetalSlug,
}

impl VariantCombination {
    /// Hyphen-joined key in `chain-stone-metal` order (`stone-metal` for rings).
    pub fn key(&self) -> String {
        match self.chain {
            Some(chain) => format!(
                "{}-{}-{}",
                chain.slug(),
                self.stone.slug(),
                self.metal.slug()
            ),
            None => format!("{}-{}", self.stone.slug(), self.metal.slug()),
        }
    }

    /// Storage path of the photo. Each product line has its own file naming.
    pub fn path(&self) -> String {
        let folder = self.product_type.folder();
        match self.product_type {
            ProductType::Ring => format!(
                "{}/Ring {} {}.{}",
                folder,
                self.stone.label(),
                self.metal.label(),
                VARIANT_IMAGE_EXTENSION
            ),
            ProductType::Necklace => format!(
                "{}/necklace-{}.{}",
                folder,
                self.key(),
                VARIANT_IMAGE_EXTENSION
            ),
            ProductType::Bracelet => {
                format!("{}/{}.{}", folder, self.key(), VARIANT_IMAGE_EXTENSION)
            }
        }
    }
}
