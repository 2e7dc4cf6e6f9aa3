//! Configuration groups and merge semantics.
//!
//! Credentials and other account-level parameters are plain string maps.
//! A [`ConfigRegistry`] holds named groups with a reserved `default` group;
//! resolving a name merges the named group over `default` (the named group
//! wins on key collision). The registry is an explicit object passed to the
//! client builder; there is no hidden process-wide lookup.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::{Error, Result};

/// A string-keyed configuration or parameter map.
///
/// Ordered so that serialized request parameters are deterministic.
pub type ConfigMap = BTreeMap<String, String>;

/// Name of the fallback group merged under every resolved group.
pub const DEFAULT_GROUP: &str = "default";

/// Registry of named configuration groups.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ConfigRegistry {
    groups: HashMap<String, ConfigMap>,
}

impl ConfigRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the given `default` group.
    pub fn with_default(config: ConfigMap) -> Self {
        let mut registry = Self::new();
        registry.groups.insert(DEFAULT_GROUP.to_string(), config);
        registry
    }

    /// Insert or replace a named group.
    pub fn insert_group(&mut self, name: impl Into<String>, config: ConfigMap) -> &mut Self {
        self.groups.insert(name.into(), config);
        self
    }

    /// Parse a registry from a YAML document of the form:
    ///
    /// ```yaml
    /// default:
    ///   username: info@example.com
    ///   api_key: secret
    /// newsletter:
    ///   promotion_name: weekly
    /// ```
    pub fn from_yaml_str(document: &str) -> Result<Self> {
        let registry = serde_yaml::from_str(document)?;
        Ok(registry)
    }

    /// The `default` group, or an empty map when none is registered.
    pub fn default_config(&self) -> ConfigMap {
        self.groups.get(DEFAULT_GROUP).cloned().unwrap_or_default()
    }

    /// Resolve a named group, merged over `default` (the named group wins).
    ///
    /// Fails with [`Error::Configuration`] when the name is not registered.
    /// Resolving `"default"` returns the default group itself.
    pub fn resolve(&self, name: &str) -> Result<ConfigMap> {
        let group = self
            .groups
            .get(name)
            .ok_or_else(|| Error::unknown_group(name))?;
        if name == DEFAULT_GROUP {
            return Ok(group.clone());
        }
        Ok(merged(self.default_config(), group.clone()))
    }
}

/// Merge `overlay` over `base`; overlay entries win on key collision.
pub(crate) fn merged(base: ConfigMap, overlay: ConfigMap) -> ConfigMap {
    let mut out = base;
    out.extend(overlay);
    out
}

/// Build a [`ConfigMap`] from key/value pairs.
pub(crate) fn map_of<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> ConfigMap
where
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_group() -> ConfigMap {
        map_of([("username", "info@example.com"), ("api_key", "secret")])
    }

    #[test]
    fn resolve_merges_named_group_over_default() {
        let mut registry = ConfigRegistry::with_default(default_group());
        registry.insert_group("newsletter", map_of([("username", "news@example.com")]));

        let resolved = registry.resolve("newsletter").unwrap();
        assert_eq!(resolved["username"], "news@example.com");
        assert_eq!(resolved["api_key"], "secret");
    }

    #[test]
    fn resolve_default_returns_default_group() {
        let registry = ConfigRegistry::with_default(default_group());
        assert_eq!(registry.resolve(DEFAULT_GROUP).unwrap(), default_group());
    }

    #[test]
    fn resolve_unknown_group_is_a_configuration_error() {
        let registry = ConfigRegistry::with_default(default_group());
        match registry.resolve("missing") {
            Err(Error::Configuration { name }) => assert_eq!(name, "missing"),
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn from_yaml_parses_groups() {
        let registry = ConfigRegistry::from_yaml_str(
            "default:\n  username: info@example.com\nnewsletter:\n  promotion_name: weekly\n",
        )
        .unwrap();

        let resolved = registry.resolve("newsletter").unwrap();
        assert_eq!(resolved["username"], "info@example.com");
        assert_eq!(resolved["promotion_name"], "weekly");
    }

    #[test]
    fn from_yaml_rejects_malformed_documents() {
        let result = ConfigRegistry::from_yaml_str("default: [not, a, map]");
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn merged_prefers_overlay_and_keeps_base_keys() {
        let out = merged(
            map_of([("a", "1"), ("b", "2")]),
            map_of([("b", "overridden"), ("c", "3")]),
        );
        assert_eq!(out, map_of([("a", "1"), ("b", "overridden"), ("c", "3")]));
    }
}
