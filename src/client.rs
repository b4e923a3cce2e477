//! High-level client — `TradewatchClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::auth::client::Auth;
use crate::domain::asset::client::Assets;
use crate::domain::chip::client::Chips;
use crate::domain::order::client::Orders;
use crate::error::SdkError;
use crate::http::RestGateway;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::asset::client::Assets as AssetsClient;
pub use crate::domain::chip::client::Chips as ChipsClient;
pub use crate::domain::order::client::Orders as OrdersClient;

/// The primary entry point for the Tradewatch SDK.
///
/// Provides nested sub-client accessors for each resource:
/// `client.assets()`, `client.chips()`, `client.orders()`, `client.auth()`.
#[derive(Clone)]
pub struct TradewatchClient {
    pub(crate) gateway: RestGateway,
}

impl TradewatchClient {
    pub fn builder() -> TradewatchClientBuilder {
        TradewatchClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn assets(&self) -> Assets<'_> {
        Assets { client: self }
    }

    pub fn chips(&self) -> Chips<'_> {
        Chips { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct TradewatchClientBuilder {
    base_url: String,
}

impl Default for TradewatchClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
        }
    }
}

impl TradewatchClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn build(self) -> Result<TradewatchClient, SdkError> {
        Ok(TradewatchClient {
            gateway: RestGateway::new(&self.base_url)?,
        })
    }
}
