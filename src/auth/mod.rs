//! Account signup types.

pub mod client;

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Access token issued on successful signup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
}
