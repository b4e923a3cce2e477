//! Chip domain — entries in the user's persisted watch-list.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::Symbol;
use thiserror::Error;

/// A tracked trading-symbol entry in the user's persisted watch-list.
///
/// Insertion order mirrors the registry response order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub name: Symbol,
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("chip symbol must not be empty")]
    EmptySymbol,
}
