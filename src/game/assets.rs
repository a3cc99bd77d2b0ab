// Declarative asset manifest
//
// World build picks building and character art by id from this table.
// Classification is pure configuration, so it lives here as data instead
// of substring matching on file names.

use std::collections::HashMap;

/// Category of a visual asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetCategory {
    /// Blocky character model (NPCs and the player avatar)
    Character,
    /// Street-level commercial building, checkpoint-eligible
    CommercialBuilding,
    /// Tall backdrop building
    Skyscraper,
    /// Street decoration (trees, benches, lamps)
    Prop,
}

/// Id → category manifest queried during world build
#[derive(Debug)]
pub struct AssetManifest {
    entries: HashMap<&'static str, AssetCategory>,
    /// Ids in insertion order per category, for deterministic selection
    ordered: Vec<(&'static str, AssetCategory)>,
}

impl AssetManifest {
    /// Create an empty manifest
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            ordered: Vec::new(),
        }
    }

    /// Build the standard manifest for the bundled city/character kits
    pub fn standard() -> Self {
        let mut manifest = Self::new();

        for id in [
            "building-a",
            "building-b",
            "building-c",
            "building-d",
            "building-e",
            "building-f",
            "building-g",
            "building-h",
            "building-i",
            "building-j",
            "building-k",
            "building-l",
            "building-m",
            "building-n",
        ] {
            manifest.insert(id, AssetCategory::CommercialBuilding);
        }
        manifest.insert("building-skyscraper", AssetCategory::Skyscraper);

        for id in [
            "character-a",
            "character-b",
            "character-c",
            "character-d",
            "character-e",
            "character-f",
            "character-g",
            "character-h",
            "character-i",
            "character-j",
            "character-k",
            "character-l",
        ] {
            manifest.insert(id, AssetCategory::Character);
        }

        for id in ["tree-large", "tree-small", "bench", "streetlight"] {
            manifest.insert(id, AssetCategory::Prop);
        }

        manifest
    }

    /// Add an entry; the first entry for an id wins
    pub fn insert(&mut self, id: &'static str, category: AssetCategory) {
        if self.entries.contains_key(id) {
            log::warn!("Duplicate asset id '{}' ignored", id);
            return;
        }
        self.entries.insert(id, category);
        self.ordered.push((id, category));
    }

    /// Look up the category of an asset id
    pub fn category(&self, id: &str) -> Option<AssetCategory> {
        let found = self.entries.get(id).copied();
        if found.is_none() {
            log::warn!("Unknown asset id '{}', skipping", id);
        }
        found
    }

    /// All ids of a category, in manifest order
    pub fn ids_in(&self, category: AssetCategory) -> Vec<&'static str> {
        self.ordered
            .iter()
            .filter(|(_, c)| *c == category)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Check if the manifest is empty
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_manifest_categories() {
        let manifest = AssetManifest::standard();
        assert_eq!(
            manifest.category("building-a"),
            Some(AssetCategory::CommercialBuilding)
        );
        assert_eq!(
            manifest.category("building-skyscraper"),
            Some(AssetCategory::Skyscraper)
        );
        assert_eq!(manifest.category("character-a"), Some(AssetCategory::Character));
    }

    #[test]
    fn test_unknown_id_is_none() {
        let manifest = AssetManifest::standard();
        assert_eq!(manifest.category("building-sample"), None);
    }

    #[test]
    fn test_ids_in_category_ordered() {
        let manifest = AssetManifest::standard();
        let buildings = manifest.ids_in(AssetCategory::CommercialBuilding);
        assert_eq!(buildings.len(), 14);
        assert_eq!(buildings[0], "building-a");
        assert_eq!(buildings[13], "building-n");
    }

    #[test]
    fn test_characters_present() {
        let manifest = AssetManifest::standard();
        let characters = manifest.ids_in(AssetCategory::Character);
        assert_eq!(characters.len(), 12);
    }

    #[test]
    fn test_duplicate_insert_keeps_first() {
        let mut manifest = AssetManifest::new();
        manifest.insert("tree-large", AssetCategory::Prop);
        manifest.insert("tree-large", AssetCategory::Character);
        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.category("tree-large"), Some(AssetCategory::Prop));
    }
}
