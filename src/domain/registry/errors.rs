//! Errors raised by registry lookups.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// User-input errors against a registry listing. None of these change state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Index {index} is out of range (1..={len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Registry is empty")]
    Empty,
}

impl From<RegistryError> for DomainError {
    fn from(err: RegistryError) -> Self {
        let code = match err {
            RegistryError::IndexOutOfRange { .. } => ErrorCode::IndexOutOfRange,
            RegistryError::Empty => ErrorCode::EmptyRegistry,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Converts a 1-based display index into a 0-based position.
pub(crate) fn position(display_index: usize, len: usize) -> Result<usize, RegistryError> {
    if len == 0 {
        return Err(RegistryError::Empty);
    }
    if display_index == 0 || display_index > len {
        return Err(RegistryError::IndexOutOfRange {
            index: display_index,
            len,
        });
    }
    Ok(display_index - 1)
}
