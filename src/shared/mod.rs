//! Shared newtypes and paging used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the backend sends, so they can be used
//! directly in wire types without conversion overhead.

pub mod serde_util;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── Symbol ──────────────────────────────────────────────────────────────────

/// Newtype for trading symbols (e.g. `"BTC"`) and derived pairs
/// (e.g. `"BTCUSDT"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive the trading pair for this symbol against a quote currency.
    ///
    /// Format: `{base}{quote}`, e.g. `Symbol("BTC").pair("USDT")` → `"BTCUSDT"`.
    pub fn pair(&self, quote: &str) -> Symbol {
        Symbol(format!("{}{}", self.0, quote))
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for Symbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Symbol(s.to_string()))
    }
}

impl Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Symbol(s))
    }
}

// ─── PageRequest ─────────────────────────────────────────────────────────────

/// Pagination request parameters (`page` is zero-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Query parameters in the form the backend expects.
    pub fn to_query(self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
        ]
    }
}

/// The first page of ten entries, used throughout the watch-list workflow.
impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: 10 }
    }
}

// ─── Page ────────────────────────────────────────────────────────────────────

/// One bounded slice of a larger result set, as the backend serializes it.
///
/// An absent `content` field means "no results", not an error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    /// Zero-based index of this page.
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }
}
