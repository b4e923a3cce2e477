//! HTTP layer — `RestGateway`, the single request executor behind every
//! sub-client.

pub mod client;

pub use client::RestGateway;
