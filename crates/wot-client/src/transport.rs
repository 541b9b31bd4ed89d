//! HTTP transport construction
//!
//! One blocking `reqwest` client is built per [`WotClient`](crate::WotClient)
//! and shared by all of its clones, so connections are reused across calls.

use reqwest::blocking::Client;
use std::sync::Once;
use std::time::Duration;
use tracing::debug;

use crate::error::Result;

static CRYPTO_PROVIDER: Once = Once::new();

/// Install the `ring` rustls provider for the process if none is installed.
///
/// `reqwest` is built with `rustls-no-provider`, so a default provider must
/// exist before the first client is created.
pub fn ensure_crypto_provider() {
    CRYPTO_PROVIDER.call_once(|| {
        if rustls::crypto::ring::default_provider()
            .install_default()
            .is_err()
        {
            debug!("rustls crypto provider already installed");
        }
    });
}

/// Build the blocking transport with a fixed request timeout
pub fn build_client(timeout: Duration) -> Result<Client> {
    ensure_crypto_provider();

    let client = Client::builder()
        .timeout(timeout)
        .user_agent(concat!("wot-client/", env!("CARGO_PKG_VERSION")))
        .build()?;

    debug!("Created HTTP transport with {:?} timeout", timeout);
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client() {
        assert!(build_client(Duration::from_secs(5)).is_ok());
    }

    #[test]
    fn test_crypto_provider_is_idempotent() {
        ensure_crypto_provider();
        ensure_crypto_provider();
        assert!(rustls::crypto::CryptoProvider::get_default().is_some());
    }
}
