//! Path and JSON body extractors that reject with [`AppError`] instead of
//! axum's plain-text rejections, so malformed input gets the same
//! `{error, code}` envelope as every other failure.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use enamorado_core::error::CoreError;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// Like [`axum::extract::Path`], but a segment that does not parse (say
/// `/submissions/abc`) addresses nothing and is a JSON 404.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppPath<T>(pub T);

impl<T, S> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(AppPath(value)),
            Err(PathRejection::FailedToDeserializePathParams(e)) => {
                tracing::debug!(
                    path = %parts.uri.path(),
                    error = %e,
                    "Unparseable path segment",
                );
                Err(AppError::NotFound(format!("No resource at {}", parts.uri.path())))
            }
            Err(other) => Err(AppError::InternalError(other.body_text())),
        }
    }
}

/// Like [`axum::Json`], but a body that fails to parse is a 400
/// `VALIDATION_ERROR` rather than axum's default 415/422.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;
        Ok(AppJson(value))
    }
}

/// [`AppJson`] followed by `validator` rules on the decoded value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let AppJson(value) = AppJson::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    tracing::debug!(error = %rejection, "Rejected request body");
    AppError::Core(CoreError::Validation(rejection.body_text()))
}
