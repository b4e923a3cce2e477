//! The watch-list view driver — explicit `start()`/`stop()` lifecycle over
//! the synchronization workflow.

use crate::domain::order::Order;
use crate::error::SdkError;
use crate::shared::{PageRequest, Symbol};
use crate::watchlist::backend::WatchlistBackend;
use crate::watchlist::state::WatchlistState;
use crate::watchlist::DEFAULT_QUOTE;

use async_lock::RwLock;
use futures_util::future;
use futures_util::stream::{FuturesUnordered, StreamExt};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Drives the watch-list synchronization workflow for one view instance.
///
/// The view exclusively owns its [`WatchlistState`]; every remote
/// completion re-checks the generation token before mutating it, so
/// fetches that outlive `stop()` are discarded instead of applied.
pub struct WatchlistView<B> {
    backend: B,
    quote: String,
    state: Arc<RwLock<WatchlistState>>,
    generation: Arc<AtomicU64>,
}

impl<B: WatchlistBackend> WatchlistView<B> {
    pub fn new(backend: B) -> Self {
        Self::with_quote(backend, DEFAULT_QUOTE)
    }

    pub fn with_quote(backend: B, quote: &str) -> Self {
        Self {
            backend,
            quote: quote.to_string(),
            state: Arc::new(RwLock::new(WatchlistState::new())),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Initialize the view: load the available-asset snapshot and the
    /// persisted chips concurrently, then fetch order history for each
    /// chip independently.
    ///
    /// Fail-open: a failed fetch is logged and leaves prior state
    /// untouched; it never aborts the remaining fetches.
    pub async fn start(&self) {
        let gen = self.generation.load(Ordering::SeqCst);
        let page = PageRequest::default();

        let (assets, chips) = future::join(
            self.backend.available_assets(page),
            self.backend.list_chips(page),
        )
        .await;

        match assets {
            Ok(assets) => {
                if self.live(gen) {
                    self.state.write().await.set_available(assets);
                }
            }
            Err(e) => tracing::warn!(op = "available_assets", error = %e, "fetch failed"),
        }

        let symbols: Vec<Symbol> = match chips {
            Ok(chips) => chips.into_iter().map(|c| c.name).collect(),
            Err(e) => {
                tracing::warn!(op = "list_chips", error = %e, "fetch failed");
                Vec::new()
            }
        };

        if !self.live(gen) {
            return;
        }
        self.state.write().await.set_chips(symbols.clone());

        // One independent fetch per chip. Batches apply as they complete,
        // so the final table order is completion order, not chip order.
        let mut fetches: FuturesUnordered<_> = symbols
            .iter()
            .map(|symbol| self.fetch_orders(gen, symbol))
            .collect();
        while fetches.next().await.is_some() {}
    }

    /// Tear the view down. Any still-outstanding fetch observes a stale
    /// generation on completion and discards its result.
    pub fn stop(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Track a symbol entered as free text.
    ///
    /// Guards, in order: non-empty, present in the available-asset
    /// snapshot, not already tracked. A rejected symbol makes no network
    /// call.
    pub async fn add_chip(&self, input: &str) -> Result<(), SdkError> {
        let symbol = input.trim();
        if symbol.is_empty() {
            return Err(SdkError::Validation(
                "chip symbol must not be empty".to_string(),
            ));
        }
        {
            let state = self.state.read().await;
            if !state.is_available(symbol) {
                return Err(SdkError::Validation(format!(
                    "not an available asset: {}",
                    symbol
                )));
            }
            if state.contains_chip(symbol) {
                return Err(SdkError::Validation(format!(
                    "chip already tracked: {}",
                    symbol
                )));
            }
        }
        self.track(Symbol::from(symbol)).await
    }

    /// Track a symbol picked from the autocomplete list.
    ///
    /// The option list is already restricted to the snapshot, so only the
    /// duplicate guard applies.
    pub async fn select_chip(&self, symbol: &str) -> Result<(), SdkError> {
        if self.state.read().await.contains_chip(symbol) {
            return Err(SdkError::Validation(format!(
                "chip already tracked: {}",
                symbol
            )));
        }
        self.track(Symbol::from(symbol)).await
    }

    /// Stop tracking a symbol. Local presence is validated before the
    /// registry call; on success the chip and every order of its derived
    /// pair are dropped.
    pub async fn remove_chip(&self, symbol: &str) -> Result<(), SdkError> {
        let gen = self.generation.load(Ordering::SeqCst);
        if !self.state.read().await.contains_chip(symbol) {
            return Err(SdkError::NotFound(format!("chip not tracked: {}", symbol)));
        }

        self.backend.remove_chip(&Symbol::from(symbol)).await?;

        if self.live(gen) {
            self.state.write().await.remove_chip(symbol, &self.quote);
        }
        Ok(())
    }

    // ── Read accessors ───────────────────────────────────────────────────

    pub async fn chips(&self) -> Vec<Symbol> {
        self.state.read().await.chips().to_vec()
    }

    pub async fn orders(&self) -> Vec<Order> {
        self.state.read().await.orders().to_vec()
    }

    /// Autocomplete suggestions for the current keystroke. Recomputed from
    /// the snapshot on every call; never triggers a fetch.
    pub async fn suggestions(&self, query: &str) -> Vec<String> {
        self.state.read().await.suggestions(query)
    }

    // ── Internal ─────────────────────────────────────────────────────────

    async fn track(&self, symbol: Symbol) -> Result<(), SdkError> {
        let gen = self.generation.load(Ordering::SeqCst);
        let chip = self.backend.add_chip(&symbol).await?;
        if !self.live(gen) {
            return Ok(());
        }
        self.state.write().await.push_chip(chip.name.clone());
        self.fetch_orders(gen, &chip.name).await;
        Ok(())
    }

    async fn fetch_orders(&self, gen: u64, symbol: &Symbol) {
        match self.backend.order_history(symbol, PageRequest::default()).await {
            Ok(page) => {
                if self.live(gen) && !page.content.is_empty() {
                    self.state.write().await.merge_orders(page.content);
                }
            }
            Err(e) => {
                tracing::warn!(op = "order_history", symbol = %symbol, error = %e, "fetch failed")
            }
        }
    }

    fn live(&self, gen: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == gen
    }
}

impl<B: Clone> Clone for WatchlistView<B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            quote: self.quote.clone(),
            state: self.state.clone(),
            generation: self.generation.clone(),
        }
    }
}
