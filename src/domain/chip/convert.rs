//! Conversions: chip wire types → validated domain types.

use super::wire::ChipDto;
use super::{Chip, ValidationError};
use crate::shared::Symbol;

impl TryFrom<ChipDto> for Chip {
    type Error = ValidationError;

    fn try_from(dto: ChipDto) -> Result<Self, Self::Error> {
        let name = dto.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }
        Ok(Chip {
            name: Symbol::from(name),
        })
    }
}
