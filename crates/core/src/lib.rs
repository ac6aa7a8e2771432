//! Toolhub domain core.
//!
//! Pure logic shared by the repository and HTTP layers: field validation,
//! list filters and pagination metadata, drill constraints and the domain
//! error type. Nothing here touches the database or the network.

pub mod drill;
pub mod error;
pub mod filters;
pub mod types;
pub mod validator;
