//! Query-string and path readers for API handlers.
//!
//! List endpoints take every query value as an optional string and convert
//! it here, so a malformed number becomes a field error in the request's
//! [`Validator`] instead of an extractor rejection.

use toolhub_core::types::DbId;
use toolhub_core::validator::Validator;

use crate::error::{AppError, AppResult};

/// Parse a `{id}` path segment. Anything but a positive integer is a 404.
pub fn read_id_param(raw: &str) -> AppResult<DbId> {
    match raw.parse::<DbId>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(AppError::NotFound),
    }
}

/// The value, or `default` when the key is absent or empty.
pub fn read_string(value: Option<&str>, default: &str) -> String {
    match value {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default.to_string(),
    }
}

/// Parse an integer value, recording an error on `key` if it is not one.
pub fn read_int(value: Option<&str>, default: i64, key: &str, v: &mut Validator) -> i64 {
    match value {
        None | Some("") => default,
        Some(s) => s.parse().unwrap_or_else(|_| {
            v.add_error(key, "must be an integer value");
            default
        }),
    }
}

/// Parse a comma-separated list of floats. Absent or empty yields `[]`.
pub fn read_float_csv(value: Option<&str>, key: &str, v: &mut Validator) -> Vec<f32> {
    let Some(raw) = value.filter(|s| !s.is_empty()) else {
        return Vec::new();
    };

    let parsed: Result<Vec<f32>, _> = raw.split(',').map(|s| s.trim().parse::<f32>()).collect();
    match parsed {
        Ok(values) if values.iter().all(|w| w.is_finite()) => values,
        _ => {
            v.add_error(key, "must be a comma-separated list of numbers");
            Vec::new()
        }
    }
}
