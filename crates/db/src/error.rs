use std::time::Duration;

/// Failures surfaced by the repository layer.
///
/// `RecordNotFound`, `EditConflict` and `InvalidSort` are expected outcomes
/// the HTTP layer reports to the client. `Timeout` and `Sqlx` are opaque
/// store failures.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("record not found")]
    RecordNotFound,

    #[error("unable to update the record due to an edit conflict")]
    EditConflict,

    #[error("invalid sort value: {0}")]
    InvalidSort(String),

    #[error("query did not complete within {}s", .0.as_secs())]
    Timeout(Duration),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
