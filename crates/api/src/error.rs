use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use enamorado_core::error::CoreError;
use enamorado_core::types::DbId;
use serde_json::json;

/// Error returned by every handler and extractor.
///
/// Whatever goes wrong, the client sees `{"error": ..., "code": ...}` with a
/// matching status. Internal details are logged and never echoed back.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Nothing is addressable at the requested path.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

const HIDDEN: &str = "An internal error occurred";

impl AppError {
    pub fn submission_not_found(id: DbId) -> Self {
        AppError::Core(CoreError::NotFound {
            entity: "Submission",
            id,
        })
    }

    /// Status, machine-readable code, and client-facing message.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Core(CoreError::Conflict(msg)) => {
                (StatusCode::CONFLICT, "CONFLICT", msg.clone())
            }
            AppError::Core(CoreError::Unauthorized(msg)) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
            }
            AppError::Core(CoreError::Internal(msg)) | AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Request failed internally");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", HIDDEN.into())
            }
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                "Method not allowed".into(),
            ),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::from(errors))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        (status, axum::Json(json!({ "error": message, "code": code }))).into_response()
    }
}

/// Map a sqlx error onto the response envelope.
///
/// `RowNotFound` is 404, named `uq_` unique violations are 409, and CHECK
/// violations (a value outside a stored vocabulary) are 400. Anything else is
/// a sanitized 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    if let sqlx::Error::RowNotFound = err {
        return (StatusCode::NOT_FOUND, "NOT_FOUND", "Resource not found".into());
    }
    if let sqlx::Error::Database(db_err) = err {
        let constraint = db_err.constraint().unwrap_or("unknown");
        match db_err.code().as_deref() {
            Some("23505") if constraint.starts_with("uq_") => {
                return (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                );
            }
            Some("23514") => {
                return (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    format!("Value violates check constraint: {constraint}"),
                );
            }
            _ => {}
        }
    }

    tracing::error!(error = %err, "Database error");
    (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", HIDDEN.into())
}
