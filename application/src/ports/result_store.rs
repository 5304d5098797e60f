//! Result store port
//!
//! Persists completed remediation records. Only successful runs reach
//! this port; a failed run produces no record and no store call.

use std::path::PathBuf;
use thiserror::Error;
use vulnmend_domain::RemediationRecord;

/// Errors that can occur while persisting a record
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Durable storage for remediation records
///
/// `save` must be atomic from the operator's point of view: either the
/// whole record lands in storage or an error is returned and nothing
/// partial is left behind to be mistaken for a result.
pub trait ResultStore: Send + Sync {
    /// Persist the record, returning the location it was written to.
    fn save(&self, record: &RemediationRecord) -> Result<PathBuf, StoreError>;
}
