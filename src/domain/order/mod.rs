//! Order domain — exchange order history and placement.

pub mod client;

use crate::shared::{serde_util, Symbol};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── OrderStatus ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    New,
    PartiallyFilled,
    Filled,
    Canceled,
    PendingCancel,
    Rejected,
    Expired,
}

// ─── OrderSide ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "Buy"),
            OrderSide::Sell => write!(f, "Sell"),
        }
    }
}

// ─── OrderType ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Limit,
    Market,
    StopLoss,
    StopLossLimit,
    TakeProfit,
    TakeProfitLimit,
    LimitMaker,
}

// ─── TimeInForce ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeInForce {
    Gtc,
    Ioc,
    Fok,
}

// ─── Order ───────────────────────────────────────────────────────────────────

/// An exchange order, immutable once fetched.
///
/// Identified by the exchange-assigned `order_id` plus the pair symbol.
/// Quantities arrive as decimal strings and must keep full precision;
/// timestamps arrive as epoch milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Trading pair, e.g. `"BTCUSDT"`.
    pub symbol: Symbol,
    pub order_id: i64,
    pub client_order_id: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub orig_qty: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub executed_qty: Decimal,
    // Misspelling is the exchange's, kept for wire compatibility.
    #[serde(with = "rust_decimal::serde::str")]
    pub cummulative_quote_qty: Decimal,
    pub status: OrderStatus,
    pub time_in_force: TimeInForce,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub side: OrderSide,
    #[serde(with = "serde_util::timestamp_ms")]
    pub time: DateTime<Utc>,
    #[serde(with = "serde_util::timestamp_ms")]
    pub update_time: DateTime<Utc>,
    pub is_working: bool,
}

// ─── OrderRequest ────────────────────────────────────────────────────────────

/// Request body for placing an order via `POST /api/orders/{symbol}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub side: OrderSide,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    #[serde(
        default,
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER_JSON: &str = r#"{
        "symbol": "BTCUSDT",
        "orderId": 28457,
        "clientOrderId": "x-R4BD3S82",
        "price": "4000.00000000",
        "origQty": "1.00000000",
        "executedQty": "0.50000000",
        "cummulativeQuoteQty": "2000.00000000",
        "status": "PARTIALLY_FILLED",
        "timeInForce": "GTC",
        "type": "LIMIT",
        "side": "BUY",
        "time": 1499827319559,
        "updateTime": 1499827319559,
        "isWorking": true
    }"#;

    #[test]
    fn test_order_deserializes_exchange_json() {
        let order: Order = serde_json::from_str(ORDER_JSON).unwrap();
        assert_eq!(order.symbol.as_str(), "BTCUSDT");
        assert_eq!(order.order_id, 28457);
        assert_eq!(order.status, OrderStatus::PartiallyFilled);
        assert_eq!(order.side, OrderSide::Buy);
        assert_eq!(order.order_type, OrderType::Limit);
        assert_eq!(order.time_in_force, TimeInForce::Gtc);
        assert!(order.is_working);
        assert_eq!(order.time.timestamp_millis(), 1499827319559);
    }

    #[test]
    fn test_order_quantities_keep_precision() {
        let order: Order = serde_json::from_str(ORDER_JSON).unwrap();
        assert_eq!(order.price.to_string(), "4000.00000000");
        assert_eq!(order.executed_qty.to_string(), "0.50000000");
    }

    #[test]
    fn test_order_request_serializes_quantities_as_strings() {
        let req = OrderRequest {
            side: OrderSide::Sell,
            order_type: OrderType::Limit,
            time_in_force: Some(TimeInForce::Gtc),
            quantity: Decimal::new(1, 1),
            price: Some(Decimal::new(412, 2)),
        };
        let json: serde_json::Value = serde_json::to_value(&req).unwrap();
        assert_eq!(json["side"], "SELL");
        assert_eq!(json["type"], "LIMIT");
        assert_eq!(json["quantity"], "0.1");
        assert_eq!(json["price"], "4.12");
    }

    #[test]
    fn test_order_request_omits_absent_price() {
        let req = OrderRequest {
            side: OrderSide::Buy,
            order_type: OrderType::Market,
            time_in_force: None,
            quantity: Decimal::new(5, 0),
            price: None,
        };
        let json: serde_json::Value = serde_json::to_value(&req).unwrap();
        assert!(json.get("price").is_none());
        assert!(json.get("timeInForce").is_none());
    }
}
