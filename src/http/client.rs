//! Low-level REST gateway — `RestGateway`.
//!
//! One generic executor shared by all sub-clients: a resource path, a verb
//! and optional query parameters in, a typed JSON body or a `GatewayError`
//! out. No retries, no caching; callers decide how to react to failure.

use crate::error::GatewayError;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Thin request executor over the Tradewatch REST API.
#[derive(Clone)]
pub struct RestGateway {
    base_url: String,
    client: Client,
}

impl RestGateway {
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a typed JSON resource. `query` entries are appended as-is.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, GatewayError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");

        let mut req = self.client.get(&url);
        if !query.is_empty() {
            req = req.query(query);
        }
        Self::decode(req.send().await?).await
    }

    /// POST a JSON body, expecting a typed JSON response.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "POST");

        let resp = self.client.post(&url).json(body).send().await?;
        Self::decode(resp).await
    }

    /// DELETE a resource. The backend responds with an empty body on success.
    pub async fn delete(&self, path: &str) -> Result<(), GatewayError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "DELETE");

        let resp = self.client.delete(&url).send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        Err(Self::status_error(status.as_u16(), resp).await)
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, GatewayError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }
        Err(Self::status_error(status.as_u16(), resp).await)
    }

    async fn status_error(status: u16, resp: reqwest::Response) -> GatewayError {
        let body = resp.text().await.unwrap_or_default();
        match status {
            401 => GatewayError::Unauthorized,
            404 => GatewayError::NotFound(body),
            408 => GatewayError::Timeout,
            400..=499 => GatewayError::BadRequest(body),
            _ => GatewayError::ServerError { status, body },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn response(status: u16, body: &str) -> reqwest::Response {
        let inner = http::Response::builder()
            .status(status)
            .body(body.to_string())
            .unwrap();
        reqwest::Response::from(inner)
    }

    #[derive(Deserialize, Debug)]
    struct Ticker {
        symbol: String,
    }

    #[tokio::test]
    async fn test_status_error_maps_status_classes() {
        assert!(matches!(
            RestGateway::status_error(401, response(401, "")).await,
            GatewayError::Unauthorized
        ));
        assert!(matches!(
            RestGateway::status_error(404, response(404, "no such chip")).await,
            GatewayError::NotFound(body) if body == "no such chip"
        ));
        assert!(matches!(
            RestGateway::status_error(408, response(408, "")).await,
            GatewayError::Timeout
        ));
        assert!(matches!(
            RestGateway::status_error(422, response(422, "bad symbol")).await,
            GatewayError::BadRequest(body) if body == "bad symbol"
        ));
        assert!(matches!(
            RestGateway::status_error(503, response(503, "down")).await,
            GatewayError::ServerError { status: 503, body } if body == "down"
        ));
    }

    #[tokio::test]
    async fn test_decode_parses_success_body() {
        let ticker: Ticker = RestGateway::decode(response(200, r#"{"symbol":"BTCUSDT"}"#))
            .await
            .unwrap();
        assert_eq!(ticker.symbol, "BTCUSDT");
    }

    #[tokio::test]
    async fn test_decode_maps_not_found() {
        let err = RestGateway::decode::<Ticker>(response(404, "no such asset"))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::NotFound(body) if body == "no such asset"));
    }

    #[tokio::test]
    async fn test_decode_maps_server_error() {
        let err = RestGateway::decode::<Ticker>(response(500, "boom"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GatewayError::ServerError { status: 500, body } if body == "boom"
        ));
    }
}
