//! Assets sub-client — available-asset catalog and balance lookups.

use crate::client::TradewatchClient;
use crate::domain::asset::{AssetBalance, AvailableAsset};
use crate::error::{GatewayError, SdkError};
use crate::shared::{PageRequest, Symbol};

pub struct Assets<'a> {
    pub(crate) client: &'a TradewatchClient,
}

impl<'a> Assets<'a> {
    /// List the symbols available for tracking. Used once per view
    /// lifetime to seed the autocomplete domain.
    pub async fn available(&self, page: PageRequest) -> Result<Vec<AvailableAsset>, SdkError> {
        Ok(self
            .client
            .gateway
            .get("/api/assets/available", &page.to_query())
            .await?)
    }

    /// Look up the balance for a single asset.
    pub async fn balance(&self, symbol: &Symbol) -> Result<AssetBalance, SdkError> {
        let path = format!("/api/assets/{}", urlencoding::encode(symbol.as_str()));
        match self.client.gateway.get(&path, &[]).await {
            Ok(balance) => Ok(balance),
            Err(GatewayError::NotFound(_)) => Err(SdkError::NotFound(format!(
                "no balance for asset: {}",
                symbol
            ))),
            Err(e) => Err(e.into()),
        }
    }

    /// Batch balance lookup.
    pub async fn balances(&self, page: PageRequest) -> Result<Vec<AssetBalance>, SdkError> {
        Ok(self.client.gateway.get("/api/assets", &page.to_query()).await?)
    }
}
