//! Remediation run results

mod record;

pub use record::RemediationRecord;
