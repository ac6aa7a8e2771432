use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use toolhub_core::error::CoreError;
use toolhub_core::validator::FieldErrors;
use toolhub_db::DbError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`DbError`] for repository
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`] to
/// produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `toolhub_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A repository error from `toolhub_db`.
    #[error(transparent)]
    Database(#[from] DbError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No route or resource matched the request.
    #[error("Not found")]
    NotFound,

    /// The route exists but does not accept the request method.
    #[error("Method not allowed")]
    MethodNotAllowed,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

const NOT_FOUND_MESSAGE: &str = "the requested resource could not be found";
const EDIT_CONFLICT_MESSAGE: &str =
    "unable to update the record due to an edit conflict, please try again";
const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, fields) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                    None,
                ),
                CoreError::EditConflict { .. } => (
                    StatusCode::CONFLICT,
                    "EDIT_CONFLICT",
                    EDIT_CONFLICT_MESSAGE.to_string(),
                    None,
                ),
                CoreError::FailedValidation(errors) => validation_failed(errors),
            },

            // --- Repository errors ---
            AppError::Database(err) => classify_db_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg, None),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                NOT_FOUND_MESSAGE.to_string(),
                None,
            ),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                "the method is not supported for this resource".to_string(),
                None,
            ),
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(fields) = fields {
            body["fields"] = json!(fields);
        }

        (status, axum::Json(body)).into_response()
    }
}

type Classified = (StatusCode, &'static str, String, Option<FieldErrors>);

fn validation_failed(errors: FieldErrors) -> Classified {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        "VALIDATION_FAILED",
        "one or more fields failed validation".to_string(),
        Some(errors),
    )
}

/// Classify a repository error into an HTTP status, error code, and message.
///
/// - `RecordNotFound` maps to 404, `EditConflict` to 409.
/// - `InvalidSort` maps to 422 with a `sort` field error.
/// - Timeouts and sqlx failures are logged and map to 500 with a sanitized message.
fn classify_db_error(err: DbError) -> Classified {
    match err {
        DbError::RecordNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            NOT_FOUND_MESSAGE.to_string(),
            None,
        ),
        DbError::EditConflict => (
            StatusCode::CONFLICT,
            "EDIT_CONFLICT",
            EDIT_CONFLICT_MESSAGE.to_string(),
            None,
        ),
        DbError::InvalidSort(_) => {
            let mut errors = FieldErrors::new();
            errors.insert("sort".into(), "invalid sort value".into());
            validation_failed(errors)
        }
        other @ (DbError::Timeout(_) | DbError::Sqlx(_)) => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                INTERNAL_MESSAGE.to_string(),
                None,
            )
        }
    }
}
