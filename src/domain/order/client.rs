//! Orders sub-client — paginated history, open orders, placement.
//!
//! Failures carry no retry logic; the watch-list workflow logs them and
//! keeps its prior state.

use crate::client::TradewatchClient;
use crate::domain::order::{Order, OrderRequest};
use crate::error::{GatewayError, SdkError};
use crate::shared::{Page, PageRequest, Symbol};

pub struct Orders<'a> {
    pub(crate) client: &'a TradewatchClient,
}

impl<'a> Orders<'a> {
    /// All orders (any status) for a symbol, newest page first.
    pub async fn history(
        &self,
        symbol: &Symbol,
        page: PageRequest,
    ) -> Result<Page<Order>, SdkError> {
        let path = format!("/api/orders/{}", urlencoding::encode(symbol.as_str()));
        self.fetch_page(&path, symbol, page).await
    }

    /// Only currently open orders for a symbol.
    pub async fn open(&self, symbol: &Symbol, page: PageRequest) -> Result<Page<Order>, SdkError> {
        let path = format!("/api/orders/open/{}", urlencoding::encode(symbol.as_str()));
        self.fetch_page(&path, symbol, page).await
    }

    /// Flat listing across all symbols.
    pub async fn list(&self, page: PageRequest) -> Result<Vec<Order>, SdkError> {
        Ok(self.client.gateway.get("/api/orders", &page.to_query()).await?)
    }

    /// Place an order for a symbol, returning the created order.
    pub async fn create(&self, symbol: &Symbol, request: &OrderRequest) -> Result<Order, SdkError> {
        let path = format!("/api/orders/{}", urlencoding::encode(symbol.as_str()));
        Ok(self.client.gateway.post(&path, request).await?)
    }

    async fn fetch_page(
        &self,
        path: &str,
        symbol: &Symbol,
        page: PageRequest,
    ) -> Result<Page<Order>, SdkError> {
        match self.client.gateway.get(path, &page.to_query()).await {
            Ok(page) => Ok(page),
            Err(GatewayError::NotFound(_)) => {
                Err(SdkError::NotFound(format!("unknown symbol: {}", symbol)))
            }
            Err(e) => Err(e.into()),
        }
    }
}
