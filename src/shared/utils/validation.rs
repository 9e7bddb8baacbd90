use crate::shared::errors::AppError;

/// Column width used by every name-like field in the catalog schema
pub const MAX_NAME_LENGTH: usize = 255;

pub struct Validator;

impl Validator {
    /// Required short text (names, cities)
    pub fn validate_name(field: &str, value: &str) -> Result<(), AppError> {
        if value.trim().is_empty() {
            return Err(AppError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
        if value.chars().count() > MAX_NAME_LENGTH {
            return Err(AppError::ValidationError(format!(
                "{} too long (max {} characters)",
                field, MAX_NAME_LENGTH
            )));
        }
        Ok(())
    }

    /// Required free text (descriptions, preparation steps)
    pub fn validate_text(field: &str, value: &str) -> Result<(), AppError> {
        if value.trim().is_empty() {
            return Err(AppError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
        Ok(())
    }
}
