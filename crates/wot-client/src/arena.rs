//! Response types for the `encyclopedia/arenas` endpoint

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map;

/// A single map record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaRecord {
    /// Localized map name
    #[serde(rename = "name_i18n")]
    pub name: String,
    /// Camouflage type used on the map (summer, winter, desert)
    pub camouflage_type: String,
    pub description: String,
    pub arena_id: String,
}

/// All arenas returned by one call, keyed by arena identifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaCollection {
    data: HashMap<String, ArenaRecord>,
}

impl ArenaCollection {
    pub fn new(data: HashMap<String, ArenaRecord>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Look up an arena by identifier
    pub fn get(&self, arena_id: &str) -> Option<&ArenaRecord> {
        self.data.get(arena_id)
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, ArenaRecord> {
        self.data.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    pub fn into_inner(self) -> HashMap<String, ArenaRecord> {
        self.data
    }
}

impl IntoIterator for ArenaCollection {
    type Item = (String, ArenaRecord);
    type IntoIter = hash_map::IntoIter<String, ArenaRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a ArenaCollection {
    type Item = (&'a String, &'a ArenaRecord);
    type IntoIter = hash_map::Iter<'a, String, ArenaRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl FromIterator<(String, ArenaRecord)> for ArenaCollection {
    fn from_iter<I: IntoIterator<Item = (String, ArenaRecord)>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}
