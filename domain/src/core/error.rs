//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// All variants are validation failures detected before any network call.
/// They are never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Vulnerability cannot be empty")]
    EmptyVulnerability,

    #[error("Invalid prompt technique: {0}")]
    InvalidTechnique(String),

    #[error("Unknown model: {0}")]
    UnknownModel(String),
}
