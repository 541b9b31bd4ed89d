//! Blocking client for the WoT API

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, trace, warn};

use crate::arena::ArenaCollection;
use crate::config::{ClientConfig, ClientOption};
use crate::error::Result;
use crate::realm::Realm;
use crate::transport;

const ARENAS_ENDPOINT: &str = "encyclopedia/arenas";

/// Client bound to one realm and application key.
///
/// Immutable once built. Clones share the underlying transport, and the
/// client may be used from several threads at once.
#[derive(Debug, Clone)]
pub struct WotClient {
    http: Client,
    config: ClientConfig,
}

impl WotClient {
    /// Create a client from options applied in order over the defaults
    ///
    /// Fails with [`Error::MissingCredential`](crate::Error::MissingCredential)
    /// when no application key remains after all options are applied.
    pub fn new(options: impl IntoIterator<Item = ClientOption>) -> Result<Self> {
        Self::from_config(ClientConfig::default().with_options(options))
    }

    /// Create a client from a complete configuration
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = transport::build_client(config.timeout)?;
        Ok(Self { http, config })
    }

    pub fn builder() -> WotClientBuilder {
        WotClientBuilder::new()
    }

    pub fn application_key(&self) -> &str {
        &self.config.application_key
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    pub fn realm(&self) -> Realm {
        self.config.realm
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Join an endpoint path to the base URL with a single separating slash
    fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// List all maps from `encyclopedia/arenas`
    pub fn list_maps(&self) -> Result<ArenaCollection> {
        self.get_json(ARENAS_ENDPOINT)
    }

    /// GET an endpoint and decode the fully buffered body
    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint_url(path);
        debug!("HTTP request to {}", url);

        // TODO: send application_id once the upstream query parameter is confirmed
        let response = self.http.get(&url).send()?;

        let status = response.status();
        trace!("Response status: {}", status);
        if !status.is_success() {
            warn!("Request to {} returned {}, decoding body anyway", url, status);
        }

        let body = response.bytes()?;
        trace!("Read {} bytes from {}", body.len(), url);

        Ok(serde_json::from_slice(&body)?)
    }
}

/// Builder for [`WotClient`]; each call applies one option in order
#[derive(Debug, Default)]
pub struct WotClientBuilder {
    config: ClientConfig,
    http: Option<Client>,
}

impl WotClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an arbitrary option
    pub fn option(mut self, option: ClientOption) -> Self {
        self.config.apply(option);
        self
    }

    /// Set the application key
    pub fn application_key(self, key: impl Into<String>) -> Self {
        self.option(ClientOption::application_key(key))
    }

    /// Set the base URL irrespective of the realm
    pub fn base_url(self, url: impl Into<String>) -> Self {
        self.option(ClientOption::base_url(url))
    }

    /// Set the realm by name; unknown names select `na`
    pub fn realm(self, realm: impl Into<String>) -> Self {
        self.option(ClientOption::realm(realm))
    }

    /// Set the request timeout
    ///
    /// Ignored when a transport is supplied through [`Self::http_client`].
    pub fn timeout(self, timeout: Duration) -> Self {
        self.option(ClientOption::timeout(timeout))
    }

    /// Use a preconfigured transport instead of building one
    pub fn http_client(mut self, client: Client) -> Self {
        self.http = Some(client);
        self
    }

    pub fn build(self) -> Result<WotClient> {
        self.config.validate()?;

        let http = match self.http {
            Some(http) => http,
            None => transport::build_client(self.config.timeout)?,
        };

        Ok(WotClient {
            http,
            config: self.config,
        })
    }
}
