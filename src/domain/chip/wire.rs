//! Wire types for the chip registry endpoints.

use serde::{Deserialize, Serialize};

/// Raw chip entry, used both as the `POST /api/chips` request body and as
/// the response/list element.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChipDto {
    pub name: String,
}

impl ChipDto {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
