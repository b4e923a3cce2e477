//! Auth sub-client — signup.

use crate::auth::{AccessToken, SignupRequest};
use crate::client::TradewatchClient;
use crate::error::SdkError;

pub struct Auth<'a> {
    pub(crate) client: &'a TradewatchClient,
}

impl<'a> Auth<'a> {
    /// Register a new account and receive an access token.
    pub async fn signup(&self, request: &SignupRequest) -> Result<AccessToken, SdkError> {
        Ok(self.client.gateway.post("/api/signup", request).await?)
    }
}
