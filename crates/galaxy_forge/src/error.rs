//! Error types and result alias for the crate.
//!
//! Generation itself is total: every sampled quantity is clamped or floored
//! before use, so the only recognized failure is a structurally invalid
//! configuration, rejected once before any sampling begins.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
