//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every store call runs under
//! [`QUERY_TIMEOUT`].

use std::future::Future;
use std::time::Duration;

use crate::error::DbError;

pub mod drill_repo;

pub use drill_repo::DrillRepo;

/// Upper bound on a single store round trip.
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(3);

/// Await `query`, failing with [`DbError::Timeout`] once the deadline passes.
pub(crate) async fn with_deadline<T, F>(query: F) -> Result<T, DbError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(QUERY_TIMEOUT, query).await {
        Ok(result) => result.map_err(DbError::from),
        Err(_) => Err(DbError::Timeout(QUERY_TIMEOUT)),
    }
}
