use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Message carried by the error, without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            AppError::DatabaseError(msg)
            | AppError::NotFound(msg)
            | AppError::PreconditionFailed(msg)
            | AppError::ValidationError(msg)
            | AppError::InternalError(msg) => msg,
        }
    }

    /// HTTP status a transport layer should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::NotFound(_) => 404,
            AppError::PreconditionFailed(_) => 412,
            AppError::ValidationError(_) => 400,
            AppError::DatabaseError(_) | AppError::InternalError(_) => 500,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }

    pub fn is_precondition_failed(&self) -> bool {
        matches!(self, AppError::PreconditionFailed(_))
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => {
                AppError::NotFound("Record not found in database".to_string())
            }
            _ => AppError::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for AppError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        AppError::DatabaseError(format!("Database pool error: {}", err))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(format!("Blocking database task failed: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(AppError::NotFound("x".into()).status_code(), 404);
        assert_eq!(AppError::PreconditionFailed("x".into()).status_code(), 412);
        assert_eq!(AppError::ValidationError("x".into()).status_code(), 400);
        assert_eq!(AppError::DatabaseError("x".into()).status_code(), 500);
    }

    #[test]
    fn serializes_as_tagged_message() {
        let err = AppError::NotFound("The country with the given id was not found".into());
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["type"], "NotFound");
        assert_eq!(json["message"], "The country with the given id was not found");
        assert_eq!(err.message(), "The country with the given id was not found");
    }

    #[test]
    fn diesel_not_found_maps_to_not_found() {
        let err: AppError = diesel::result::Error::NotFound.into();
        assert!(err.is_not_found());
    }
}
