pub mod drill;
pub mod fallback;
