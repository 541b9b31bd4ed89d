//! Client configuration and construction options

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::trace;

use crate::error::{Error, Result};
use crate::realm::Realm;

/// Default timeout applied to every request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Application key issued by the developer portal
    pub application_key: String,

    /// Explicit API root; when unset the realm's URL is used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    pub realm: Realm,

    /// Request timeout of the underlying transport
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            application_key: String::new(),
            base_url: None,
            realm: Realm::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// API root every endpoint path is joined to
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.realm.base_url())
    }

    /// Apply a single option on top of the current values
    pub fn apply(&mut self, option: ClientOption) {
        trace!("Applying client option {:?}", option);

        match option {
            ClientOption::ApplicationKey(key) => self.application_key = key,
            ClientOption::BaseUrl(url) => self.base_url = Some(url),
            ClientOption::Realm(name) => {
                self.realm = Realm::from_name_or_default(&name);
                self.base_url = None;
            }
            ClientOption::Timeout(timeout) => self.timeout = timeout,
        }
    }

    /// Apply options in order, later options overriding earlier ones
    pub fn with_options(mut self, options: impl IntoIterator<Item = ClientOption>) -> Self {
        for option in options {
            self.apply(option);
        }
        self
    }

    /// Check the invariants a client relies on
    pub fn validate(&self) -> Result<()> {
        if self.application_key.is_empty() {
            return Err(Error::MissingCredential);
        }
        Ok(())
    }
}

/// A single override of the default client configuration
#[derive(Clone, PartialEq, Eq)]
pub enum ClientOption {
    /// Set the application key
    ApplicationKey(String),
    /// Set the base URL irrespective of the realm
    BaseUrl(String),
    /// Set the realm and derive the base URL from it; unknown names select `na`
    Realm(String),
    /// Set the transport timeout
    Timeout(Duration),
}

impl ClientOption {
    pub fn application_key(key: impl Into<String>) -> Self {
        Self::ApplicationKey(key.into())
    }

    pub fn base_url(url: impl Into<String>) -> Self {
        Self::BaseUrl(url.into())
    }

    pub fn realm(realm: impl Into<String>) -> Self {
        Self::Realm(realm.into())
    }

    pub fn timeout(timeout: Duration) -> Self {
        Self::Timeout(timeout)
    }
}

// Debug output keeps the application key out of logs
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("application_key", &"..")
            .field("base_url", &self.base_url())
            .field("realm", &self.realm)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl std::fmt::Debug for ClientOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApplicationKey(_) => f.write_str("ApplicationKey(..)"),
            Self::BaseUrl(url) => f.debug_tuple("BaseUrl").field(url).finish(),
            Self::Realm(realm) => f.debug_tuple("Realm").field(realm).finish(),
            Self::Timeout(timeout) => f.debug_tuple("Timeout").field(timeout).finish(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.realm, Realm::NA);
        assert_eq!(config.base_url(), "https://api.worldoftanks.com/wot/");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.application_key.is_empty());
    }

    #[test]
    fn test_realm_option_sets_base_url() {
        let config = ClientConfig::default().with_options([ClientOption::realm("eu")]);
        assert_eq!(config.realm, Realm::EU);
        assert_eq!(config.base_url(), "https://api.worldoftanks.eu/wot/");
    }

    #[test]
    fn test_unknown_realm_option_selects_na() {
        let config = ClientConfig::default().with_options([
            ClientOption::realm("asia"),
            ClientOption::realm("moon"),
        ]);
        assert_eq!(config.realm, Realm::NA);
        assert_eq!(config.base_url(), "https://api.worldoftanks.com/wot/");
    }

    #[test]
    fn test_later_options_win() {
        let config = ClientConfig::default().with_options([
            ClientOption::realm("ru"),
            ClientOption::base_url("http://localhost:8080/api/"),
        ]);
        assert_eq!(config.base_url(), "http://localhost:8080/api/");

        let config = ClientConfig::default().with_options([
            ClientOption::base_url("http://localhost:8080/api/"),
            ClientOption::realm("ru"),
        ]);
        assert_eq!(config.base_url(), "https://api.worldoftanks.ru/wot/");

        let config = ClientConfig::default().with_options([
            ClientOption::application_key("first"),
            ClientOption::application_key("second"),
        ]);
        assert_eq!(config.application_key, "second");
    }

    #[test]
    fn test_validate() {
        assert!(matches!(
            ClientConfig::default().validate(),
            Err(Error::MissingCredential)
        ));

        let config = ClientConfig::default().with_options([ClientOption::application_key("dummy")]);
        assert!(config.validate().is_ok());

        let config = config.with_options([ClientOption::application_key("")]);
        assert!(matches!(config.validate(), Err(Error::MissingCredential)));
    }

    #[test]
    fn test_debug_hides_application_key() {
        let rendered = format!("{:?}", ClientOption::application_key("secret-key"));
        assert!(!rendered.contains("secret-key"));

        let config = ClientConfig::default().with_options([ClientOption::application_key("secret-key")]);
        assert!(!format!("{config:?}").contains("secret-key"));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"application_key":"dummy","realm":"asia"}"#).unwrap();
        assert_eq!(config.application_key, "dummy");
        assert_eq!(config.realm, Realm::ASIA);
        assert_eq!(config.base_url(), "https://api.worldoftanks.asia/wot/");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }
}
