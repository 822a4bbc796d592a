//! Alias resolution for parameter names
//!
//! An [`AliasTable`] maps short names (`w`) to canonical names (`width`).
//! Tables are validated on construction so that no canonical name is itself
//! an alias, which keeps resolution a single pass and makes it idempotent.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Parameters;
use crate::error::ConfigError;

/// Built-in aliases used when the configuration does not supply a table.
const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("w", "width"),
    ("h", "height"),
    ("q", "quality"),
    ("fm", "format"),
    ("bg", "background"),
    ("rot", "rotate"),
];

/// Read-only mapping from alias name to canonical name.
///
/// Entries are enumerated in alias-name order, which is also the order
/// resolution runs in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct AliasTable {
    entries: BTreeMap<String, String>,
}

impl AliasTable {
    /// Build a table from `(alias, canonical)` pairs.
    ///
    /// # Errors
    /// Rejects empty names, an alias pointing at itself, and chained aliases
    /// where a canonical name is also an alias.
    pub fn new<I, K, V>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries: BTreeMap<String, String> = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        for (alias, canonical) in &entries {
            if alias.is_empty() || canonical.is_empty() {
                return Err(ConfigError::Invalid(
                    "alias and canonical names must not be empty".to_string(),
                ));
            }
            if alias == canonical {
                return Err(ConfigError::Invalid(format!(
                    "alias '{}' maps to itself",
                    alias
                )));
            }
            if entries.contains_key(canonical) {
                return Err(ConfigError::Invalid(format!(
                    "chained alias: '{}' -> '{}' is itself an alias",
                    alias, canonical
                )));
            }
        }

        Ok(Self { entries })
    }

    /// Rename every alias key in `params` to its canonical name, in place.
    ///
    /// When both an alias and its canonical name are present, the alias value
    /// wins and the canonical key keeps its position.
    pub fn apply(&self, params: &mut Parameters) {
        if params.is_empty() {
            return;
        }

        for (alias, canonical) in &self.entries {
            if let Some(value) = params.remove(alias) {
                log::debug!("Resolved parameter alias: {} -> {}", alias, canonical);
                params.insert(canonical.as_str(), value);
            }
        }
    }

    /// Owning form of [`AliasTable::apply`].
    pub fn resolve(&self, mut params: Parameters) -> Parameters {
        self.apply(&mut params);
        params
    }

    /// Canonical name for `name`, or `name` itself when it is not an alias.
    #[cfg(test)]
    pub fn canonical_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.entries.get(name).map_or(name, String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(a, c)| (a.as_str(), c.as_str()))
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self {
            entries: DEFAULT_ALIASES
                .iter()
                .map(|(a, c)| (a.to_string(), c.to_string()))
                .collect(),
        }
    }
}

impl TryFrom<BTreeMap<String, String>> for AliasTable {
    type Error = ConfigError;

    fn try_from(entries: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<AliasTable> for BTreeMap<String, String> {
    fn from(table: AliasTable) -> Self {
        table.entries
    }
}
