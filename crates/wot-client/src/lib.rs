//! # wot-client - World of Tanks API client
//!
//! Blocking client for the Wargaming World of Tanks web API. A client is
//! bound to one realm (`na`, `eu`, `ru`, `asia`) and one application key,
//! and decodes JSON responses into typed structures.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wot_client::{ClientOption, WotClient};
//!
//! fn main() -> Result<(), wot_client::Error> {
//!     let client = WotClient::new([
//!         ClientOption::application_key("my-application-id"),
//!         ClientOption::realm("eu"),
//!     ])?;
//!
//!     let arenas = client.list_maps()?;
//!     for (id, arena) in &arenas {
//!         println!("{id}: {} ({})", arena.name, arena.camouflage_type);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! The same client can be assembled with [`WotClient::builder`]:
//!
//! ```rust
//! use wot_client::WotClient;
//!
//! let client = WotClient::builder()
//!     .application_key("my-application-id")
//!     .realm("asia")
//!     .build()?;
//! assert_eq!(client.base_url(), "https://api.worldoftanks.asia/wot/");
//! # Ok::<(), wot_client::Error>(())
//! ```
//!
//! Options are applied in order and later options override earlier ones, so a
//! base URL set after a realm replaces the realm's URL and vice versa.
//!
//! ## Errors
//!
//! - [`Error::MissingCredential`] when no application key is configured
//! - [`Error::Transport`] for network failures, including timeouts
//! - [`Error::Decode`] when the response body does not match the expected shape
//!
//! Requests are never retried and HTTP status codes are not inspected beyond
//! logging; callers own their retry policy.

pub mod arena;
pub mod client;
pub mod config;
pub mod error;
pub mod realm;
pub mod transport;

pub use arena::{ArenaCollection, ArenaRecord};
pub use client::{WotClient, WotClientBuilder};
pub use config::{ClientConfig, ClientOption, DEFAULT_TIMEOUT};
pub use error::{Error, Result};
pub use realm::Realm;
