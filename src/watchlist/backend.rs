//! Port over the remote collaborators the watch-list view drives.

use crate::client::TradewatchClient;
use crate::domain::asset::AvailableAsset;
use crate::domain::chip::Chip;
use crate::domain::order::Order;
use crate::error::SdkError;
use crate::shared::{Page, PageRequest, Symbol};

/// The subset of backend operations the watch-list workflow depends on.
///
/// [`TradewatchClient`] is the production implementation; tests substitute
/// their own to control completion order and inject failures.
#[allow(async_fn_in_trait)]
pub trait WatchlistBackend {
    /// Available-asset catalog page; seeds the autocomplete domain.
    async fn available_assets(&self, page: PageRequest) -> Result<Vec<AvailableAsset>, SdkError>;

    /// The user's persisted chips, in backend order.
    async fn list_chips(&self, page: PageRequest) -> Result<Vec<Chip>, SdkError>;

    async fn add_chip(&self, symbol: &Symbol) -> Result<Chip, SdkError>;

    async fn remove_chip(&self, symbol: &Symbol) -> Result<(), SdkError>;

    /// Order history page for one chip symbol.
    async fn order_history(
        &self,
        symbol: &Symbol,
        page: PageRequest,
    ) -> Result<Page<Order>, SdkError>;
}

impl WatchlistBackend for TradewatchClient {
    async fn available_assets(&self, page: PageRequest) -> Result<Vec<AvailableAsset>, SdkError> {
        self.assets().available(page).await
    }

    async fn list_chips(&self, page: PageRequest) -> Result<Vec<Chip>, SdkError> {
        self.chips().list(page).await
    }

    async fn add_chip(&self, symbol: &Symbol) -> Result<Chip, SdkError> {
        self.chips().add(symbol).await
    }

    async fn remove_chip(&self, symbol: &Symbol) -> Result<(), SdkError> {
        self.chips().remove(symbol).await
    }

    async fn order_history(
        &self,
        symbol: &Symbol,
        page: PageRequest,
    ) -> Result<Page<Order>, SdkError> {
        self.orders().history(symbol, page).await
    }
}
