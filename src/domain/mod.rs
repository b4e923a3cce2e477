//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types (serde structs matching backend JSON)
//! - `wire.rs` / `convert.rs` — Raw request structs + validated conversions,
//!   where the domain needs them
//! - `client.rs` — Sub-client with the HTTP methods for that resource

pub mod asset;
pub mod chip;
pub mod order;
