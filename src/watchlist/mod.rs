//! Watch-list synchronization workflow.
//!
//! A view instance owns a chip list, an available-asset snapshot and an
//! order table, and keeps them consistent across dependent fetches:
//!
//! - `start()` loads the snapshot and the persisted chips concurrently,
//!   then fires one independent history fetch per chip. Batches merge in
//!   completion order — the contract is most-recently-completed first,
//!   not chip order.
//! - Add/select/remove update the registry first, then the local state.
//! - `stop()` invalidates a generation token; in-flight completions that
//!   observe a stale generation become no-ops.
//!
//! The state container is pure and the remote side sits behind the
//! [`WatchlistBackend`] port, so both halves test without a network.

pub mod backend;
pub mod state;
pub mod view;

pub use backend::WatchlistBackend;
pub use state::WatchlistState;
pub use view::WatchlistView;

/// Quote currency used to derive trading pairs from chip symbols.
pub const DEFAULT_QUOTE: &str = "USDT";
