//! Router-level fallbacks so unmatched requests still get JSON bodies.

use crate::error::AppError;

/// Any path no route matches.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// A known path requested with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
