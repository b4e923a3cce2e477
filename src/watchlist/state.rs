//! Watch-list state container — view-owned, mutated only by the view.

use crate::domain::asset::AvailableAsset;
use crate::domain::order::Order;
use crate::shared::Symbol;

/// In-memory state behind a watch-list view: the tracked chips, the
/// available-asset snapshot and the reconciled order table.
///
/// All methods are pure local mutations; the [`super::WatchlistView`]
/// decides when a remote completion is allowed to apply them.
#[derive(Debug, Clone, Default)]
pub struct WatchlistState {
    chips: Vec<Symbol>,
    available: Vec<AvailableAsset>,
    orders: Vec<Order>,
}

impl WatchlistState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chips(&self) -> &[Symbol] {
        &self.chips
    }

    pub fn available(&self) -> &[AvailableAsset] {
        &self.available
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn set_available(&mut self, assets: Vec<AvailableAsset>) {
        self.available = assets;
    }

    pub fn set_chips(&mut self, chips: Vec<Symbol>) {
        self.chips = chips;
    }

    pub fn push_chip(&mut self, chip: Symbol) {
        self.chips.push(chip);
    }

    pub fn contains_chip(&self, symbol: &str) -> bool {
        self.chips.iter().any(|c| c.as_str() == symbol)
    }

    pub fn is_available(&self, symbol: &str) -> bool {
        self.available.iter().any(|a| a.coin.as_str() == symbol)
    }

    /// Merge one fetched batch by pushing each order to the front.
    ///
    /// A batch therefore sits before everything fetched earlier, with its
    /// own entries reversed. Applying batches in completion order yields a
    /// table ordered most-recently-completed first.
    pub fn merge_orders(&mut self, batch: Vec<Order>) {
        for order in batch {
            self.orders.insert(0, order);
        }
    }

    /// Drop a chip and every order whose pair is `chip + quote`.
    pub fn remove_chip(&mut self, symbol: &str, quote: &str) {
        self.chips.retain(|c| c.as_str() != symbol);
        let pair = Symbol::from(symbol).pair(quote);
        self.orders.retain(|o| o.symbol != pair);
    }

    /// Autocomplete filtering: case-insensitive substring match over the
    /// available-asset snapshot. An empty query returns the whole domain.
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        let query = query.trim().to_lowercase();
        self.available
            .iter()
            .map(|a| a.coin.to_string())
            .filter(|name| query.is_empty() || name.to_lowercase().contains(&query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{Order, OrderSide, OrderStatus, OrderType, TimeInForce};
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn make_order(pair: &str, id: i64) -> Order {
        Order {
            symbol: Symbol::from(pair),
            order_id: id,
            client_order_id: format!("c{}", id),
            price: Decimal::new(100, 0),
            orig_qty: Decimal::ONE,
            executed_qty: Decimal::ZERO,
            cummulative_quote_qty: Decimal::ZERO,
            status: OrderStatus::New,
            time_in_force: TimeInForce::Gtc,
            order_type: OrderType::Limit,
            side: OrderSide::Buy,
            time: Utc::now(),
            update_time: Utc::now(),
            is_working: true,
        }
    }

    fn asset(coin: &str) -> AvailableAsset {
        AvailableAsset {
            coin: Symbol::from(coin),
            name: coin.to_string(),
            icon: 0,
            flagged: false,
        }
    }

    #[test]
    fn test_merge_prepends_batch_before_existing() {
        let mut state = WatchlistState::new();
        state.merge_orders(vec![make_order("BTCUSDT", 1), make_order("BTCUSDT", 2)]);
        state.merge_orders(vec![make_order("ETHUSDT", 3)]);
        let ids: Vec<_> = state.orders().iter().map(|o| o.order_id).collect();
        // Each batch entry is pushed to the front in sequence.
        assert_eq!(ids, [3, 2, 1]);
    }

    #[test]
    fn test_merge_order_is_completion_order_not_chip_order() {
        // Chips [A, B, C] = [BTC, ETH, SOL]; fetches complete B, A, C.
        let mut state = WatchlistState::new();
        state.merge_orders(vec![make_order("ETHUSDT", 20), make_order("ETHUSDT", 21)]);
        state.merge_orders(vec![make_order("BTCUSDT", 10), make_order("BTCUSDT", 11)]);
        state.merge_orders(vec![make_order("SOLUSDT", 30)]);
        let pairs: Vec<_> = state
            .orders()
            .iter()
            .map(|o| o.symbol.as_str().to_string())
            .collect();
        assert_eq!(
            pairs,
            ["SOLUSDT", "BTCUSDT", "BTCUSDT", "ETHUSDT", "ETHUSDT"]
        );
    }

    #[test]
    fn test_remove_chip_filters_derived_pair_only() {
        let mut state = WatchlistState::new();
        state.set_chips(vec![Symbol::from("BTC"), Symbol::from("ETH")]);
        state.merge_orders(vec![
            make_order("BTCUSDT", 1),
            make_order("ETHUSDT", 2),
            make_order("ETHUSDT", 3),
        ]);

        state.remove_chip("ETH", "USDT");

        assert_eq!(state.chips(), [Symbol::from("BTC")]);
        let pairs: Vec<_> = state.orders().iter().map(|o| o.symbol.as_str()).collect();
        assert_eq!(pairs, ["BTCUSDT"]);
    }

    #[test]
    fn test_remove_does_not_touch_other_quote_pairs() {
        let mut state = WatchlistState::new();
        state.set_chips(vec![Symbol::from("ETH")]);
        // ETHBTC is not the derived ETH+USDT pair, so it survives.
        state.merge_orders(vec![make_order("ETHBTC", 1), make_order("ETHUSDT", 2)]);

        state.remove_chip("ETH", "USDT");

        let pairs: Vec<_> = state.orders().iter().map(|o| o.symbol.as_str()).collect();
        assert_eq!(pairs, ["ETHBTC"]);
    }

    #[test]
    fn test_suggestions_empty_query_returns_all() {
        let mut state = WatchlistState::new();
        state.set_available(vec![asset("BTC"), asset("ETH"), asset("BNB")]);
        assert_eq!(state.suggestions(""), ["BTC", "ETH", "BNB"]);
    }

    #[test]
    fn test_suggestions_case_insensitive_substring() {
        let mut state = WatchlistState::new();
        state.set_available(vec![asset("BTC"), asset("ETH"), asset("BNB")]);
        assert_eq!(state.suggestions("b"), ["BTC", "BNB"]);
        assert_eq!(state.suggestions("eth"), ["ETH"]);
        assert!(state.suggestions("xrp").is_empty());
    }

    #[test]
    fn test_chip_membership_guards() {
        let mut state = WatchlistState::new();
        state.set_available(vec![asset("BTC")]);
        state.push_chip(Symbol::from("BTC"));
        assert!(state.contains_chip("BTC"));
        assert!(!state.contains_chip("ETH"));
        assert!(state.is_available("BTC"));
        assert!(!state.is_available("DOGE"));
    }
}
