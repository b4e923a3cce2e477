//! Chips sub-client — the persisted watch-list registry.
//!
//! Stateless request/response collaborator: the watch-list view owns the
//! local mirror of the chip list and performs duplicate/presence guards
//! before calling in here.

use crate::client::TradewatchClient;
use crate::domain::chip::wire::ChipDto;
use crate::domain::chip::{self, Chip};
use crate::error::{GatewayError, SdkError};
use crate::shared::{PageRequest, Symbol};

pub struct Chips<'a> {
    pub(crate) client: &'a TradewatchClient,
}

impl<'a> Chips<'a> {
    /// List the persisted chips for the current user, in backend order.
    pub async fn list(&self, page: PageRequest) -> Result<Vec<Chip>, SdkError> {
        let dtos: Vec<ChipDto> = self
            .client
            .gateway
            .get("/api/chips", &page.to_query())
            .await?;
        dtos.into_iter()
            .map(|dto| {
                Chip::try_from(dto)
                    .map_err(|e: chip::ValidationError| SdkError::Validation(e.to_string()))
            })
            .collect()
    }

    /// Persist a new chip. The symbol is validated before any network call.
    pub async fn add(&self, symbol: &Symbol) -> Result<Chip, SdkError> {
        if symbol.as_str().trim().is_empty() {
            return Err(SdkError::Validation(
                "chip symbol must not be empty".to_string(),
            ));
        }
        let dto: ChipDto = self
            .client
            .gateway
            .post("/api/chips", &ChipDto::new(symbol.as_str()))
            .await?;
        Chip::try_from(dto).map_err(|e| SdkError::Validation(e.to_string()))
    }

    /// Delete a chip from the registry.
    pub async fn remove(&self, symbol: &Symbol) -> Result<(), SdkError> {
        let path = format!("/api/chips/{}", urlencoding::encode(symbol.as_str()));
        match self.client.gateway.delete(&path).await {
            Ok(()) => Ok(()),
            Err(GatewayError::NotFound(_)) => {
                Err(SdkError::NotFound(format!("chip not tracked: {}", symbol)))
            }
            Err(e) => Err(e.into()),
        }
    }
}
