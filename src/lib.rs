//! # Tradewatch SDK
//!
//! A Rust SDK for the Tradewatch portfolio backend: typed REST clients for
//! assets, orders and the persisted chip (watch-list) registry, plus the
//! watch-list synchronization workflow that keeps a view's chips and order
//! table consistent.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, paging, domain models
//! 2. **HTTP** — `RestGateway`, a thin request executor with typed errors
//! 3. **High-Level Client** — `TradewatchClient` with nested sub-clients
//! 4. **Watchlist** — The view-facing synchronization workflow with explicit
//!    `start()`/`stop()` lifecycle and cancellation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tradewatch_sdk::prelude::*;
//!
//! let client = TradewatchClient::builder()
//!     .base_url("http://localhost:8080")
//!     .build()?;
//!
//! let view = WatchlistView::new(client.clone());
//! view.start().await;
//! view.add_chip("BTC").await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and paging used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// REST gateway — request execution and status mapping.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// Account signup.
pub mod auth;

/// `TradewatchClient` — the primary entry point.
pub mod client;

// ── Layer 4: Watchlist Workflow ──────────────────────────────────────────────

/// Watch-list synchronization: chip list, available-asset snapshot, order table.
pub mod watchlist;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + paging
    pub use crate::shared::{Page, PageRequest, Symbol};

    // Domain types — asset
    pub use crate::domain::asset::{AssetBalance, AvailableAsset};

    // Domain types — chip
    pub use crate::domain::chip::Chip;

    // Domain types — order
    pub use crate::domain::order::{
        Order, OrderRequest, OrderSide, OrderStatus, OrderType, TimeInForce,
    };

    // Auth types
    pub use crate::auth::{AccessToken, SignupRequest};

    // Errors
    pub use crate::error::{GatewayError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    pub use crate::client::{
        AssetsClient, AuthClient, ChipsClient, OrdersClient, TradewatchClient,
        TradewatchClientBuilder,
    };

    // Watchlist workflow
    pub use crate::watchlist::{WatchlistBackend, WatchlistState, WatchlistView};
}
