//! Customer customization choices.
//!
//! A selection maps a setting id (`metal`, `chain_type`, `first_stone`, ...)
//! to the chosen option id. Item-specific settings are carried as-is; each
//! consumer ignores the keys it does not understand.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Setting id for the metal choice.
pub const METAL_SETTING: &str = "metal";
/// Setting id for the chain or cord choice on necklaces and bracelets.
pub const CHAIN_SETTING: &str = "chain_type";
/// Setting id for the first stone, implicitly a diamond.
pub const FIRST_STONE_SETTING: &str = "first_stone";
/// Setting id for the second stone.
pub const SECOND_STONE_SETTING: &str = "second_stone";
/// Setting id for natural vs lab-grown diamonds.
pub const DIAMOND_TYPE_SETTING: &str = "diamond_type";
/// Setting id for the carat weight.
pub const CARAT_SETTING: &str = "carat";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomizationSelection {
    choices: BTreeMap<String, String>,
}

impl CustomizationSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, setting_id: impl Into<String>, option_id: impl Into<String>) -> Self {
        self.insert(setting_id, option_id);
        self
    }

    pub fn insert(&mut self, setting_id: impl Into<String>, option_id: impl Into<String>) {
        self.choices.insert(setting_id.into(), option_id.into());
    }

    pub fn remove(&mut self, setting_id: &str) -> Option<String> {
        self.choices.remove(setting_id)
    }

    /// Returns the chosen option id, trimmed. Blank choices count as absent.
    pub fn get(&self, setting_id: &str) -> Option<&str> {
        self.choices
            .get(setting_id)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Returns the chosen option id lowercased, for matching against
    /// well-known option ids.
    pub fn normalized(&self, setting_id: &str) -> Option<String> {
        self.get(setting_id).map(|v| v.to_ascii_lowercase())
    }

    /// Iterates over `(setting_id, option_id)` pairs in setting-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.choices
            .iter()
            .map(|(k, v)| (k.as_str(), v.trim()))
            .filter(|(_, v)| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> FromIterator<(K, V)> for CustomizationSelection
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let choices = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { choices }
    }
}
