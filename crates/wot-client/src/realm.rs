//! Realm definitions for the Wargaming API.
//!
//! Every realm runs its own deployment of the API under a separate
//! top-level domain: `https://api.worldoftanks.{tld}/wot/`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic API deployment.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Realm {
    /// North America
    #[default]
    NA,
    /// Europe
    EU,
    /// Russia
    RU,
    /// Asia
    ASIA,
}

impl Realm {
    /// Get all available realms
    pub fn all() -> &'static [Realm] {
        &[Realm::NA, Realm::EU, Realm::RU, Realm::ASIA]
    }

    /// Base API URL for this realm.
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::NA => "https://api.worldoftanks.com/wot/",
            Self::EU => "https://api.worldoftanks.eu/wot/",
            Self::RU => "https://api.worldoftanks.ru/wot/",
            Self::ASIA => "https://api.worldoftanks.asia/wot/",
        }
    }

    /// Convert realm to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NA => "na",
            Self::EU => "eu",
            Self::RU => "ru",
            Self::ASIA => "asia",
        }
    }

    /// Parse realm from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "na" => Some(Self::NA),
            "eu" => Some(Self::EU),
            "ru" => Some(Self::RU),
            "asia" => Some(Self::ASIA),
            _ => None,
        }
    }

    /// Parse realm from string, falling back to [`Realm::NA`] for unknown names.
    pub fn from_name_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }
}

impl fmt::Display for Realm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Realm {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| crate::Error::invalid_realm(s))
    }
}
