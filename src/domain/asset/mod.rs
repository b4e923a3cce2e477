//! Asset domain — the catalog of track-able symbols and per-asset balances.

pub mod client;

use crate::shared::Symbol;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A symbol the backend recognizes as track-able, independent of
/// user-specific tracking state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AvailableAsset {
    /// Trading symbol, e.g. `"BTC"`.
    pub coin: Symbol,
    /// Human-readable display name, e.g. `"Bitcoin"`.
    pub name: String,
    /// Icon catalog id.
    pub icon: u32,
    pub flagged: bool,
}

/// A wallet balance snapshot for a single asset.
///
/// Balances are arbitrary-precision decimals; very small fractional values
/// (the backend emits e.g. `2E-8`) must survive deserialization intact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetBalance {
    pub coin: Symbol,
    pub name: String,
    pub icon: u32,
    pub flagged: bool,
    pub balance: Decimal,
    /// Fiat-converted balance; the backend sends `null` when no conversion
    /// rate is known.
    pub fiat_balance: Option<Decimal>,
}
