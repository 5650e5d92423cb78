//! Request and response DTOs.

pub mod request;
pub mod response;

use carebridge_core::error::AppError;
use validator::Validate;

/// Run `validator` checks on a request body, mapping failures to a 400.
pub fn validate_dto<T: Validate>(dto: &T) -> Result<(), AppError> {
    dto.validate()
        .map_err(|e| AppError::validation(e.to_string()))
}
