//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. List endpoints add a
//! sibling `metadata` object describing the page.

use serde::Serialize;
use toolhub_core::filters::Metadata;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "data": [...], "metadata": {...} }` envelope for paginated lists.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub data: Vec<T>,
    pub metadata: Metadata,
}

/// A human-readable confirmation, e.g. after a delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
