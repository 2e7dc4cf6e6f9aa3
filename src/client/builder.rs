use std::time::Duration;

use crate::client::core::Client;
use crate::config::{map_of, merged, ConfigMap, ConfigRegistry};
use crate::transport::HttpTransport;
use crate::Result;

/// Builder for [`Client`].
///
/// Configuration is resolved in three layers, later layers winning on key
/// collision: the registry's `default` group, then an optional named group,
/// then explicit overrides set on the builder. A named group that is absent
/// from the registry fails `build` with
/// [`Error::Configuration`](crate::Error::Configuration).
pub struct ClientBuilder {
    registry: ConfigRegistry,
    group: Option<String>,
    overrides: ConfigMap,
    verify_tls: bool,
    timeout: Duration,
    /// Override scheme and host (primarily for testing with mock servers).
    base_url_override: Option<String>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            registry: ConfigRegistry::new(),
            group: None,
            overrides: ConfigMap::new(),
            verify_tls: true,
            timeout: Duration::from_secs(30),
            base_url_override: None,
        }
    }

    /// Use the given configuration registry.
    pub fn registry(mut self, registry: ConfigRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Resolve this named group from the registry at build time.
    pub fn group(mut self, name: impl Into<String>) -> Self {
        self.group = Some(name.into());
        self
    }

    /// Merge these values over the resolved configuration (they win on
    /// collision).
    pub fn config<K, V>(mut self, overrides: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.overrides.extend(map_of(overrides));
        self
    }

    /// Set one configuration value, winning over the resolved configuration.
    pub fn config_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(key.into(), value.into());
        self
    }

    /// Request timeout for every HTTP call (default 30 s).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Disable TLS certificate and hostname verification for mail
    /// submission.
    ///
    /// The service's historical first-party clients always skipped
    /// verification on the TLS endpoints. This crate verifies by default;
    /// only enable this to talk to an endpoint with a broken certificate
    /// chain, and understand that it removes the transport's authenticity
    /// guarantees.
    pub fn danger_disable_tls_verification(mut self) -> Self {
        self.verify_tls = false;
        self
    }

    /// Override the `scheme://host[:port]` every request targets.
    ///
    /// Primarily for testing with mock servers; the security flag of each
    /// operation is ignored while an override is set.
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client> {
        let base = match &self.group {
            Some(name) => self.registry.resolve(name)?,
            None => self.registry.default_config(),
        };
        let config = merged(base, self.overrides);

        let transport = HttpTransport::new(
            config,
            self.timeout,
            self.verify_tls,
            self.base_url_override,
        )?;
        Ok(Client::from_transport(transport))
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
