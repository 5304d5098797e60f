//! Remediation record: the complete result of one successful run

use crate::core::model::Model;
use crate::core::vulnerability::Vulnerability;
use crate::technique::Technique;
use serde::Serialize;
use std::time::Duration;

/// Result of a completed remediation run (Entity)
///
/// Created once per run after the final model exchange succeeds, handed
/// to the result store, and never mutated afterwards. Runs that fail
/// produce no record.
#[derive(Debug, Clone, Serialize)]
pub struct RemediationRecord {
    /// Model that produced the correction.
    pub model: Model,
    /// Technique requested by the operator (the plan's first step).
    pub technique: Technique,
    /// Vulnerability the correction targets.
    pub vulnerability: Vulnerability,
    /// The generated correction script, from the final model response.
    pub correction: String,
    /// Every prompt actually sent, in issuance order.
    pub prompts: Vec<String>,
    /// Wall-clock time spent in model exchanges, excluding prompt
    /// construction before the first send.
    #[serde(serialize_with = "serialize_secs", rename = "elapsed_seconds")]
    pub elapsed: Duration,
}

impl RemediationRecord {
    pub fn new(
        model: Model,
        technique: Technique,
        vulnerability: Vulnerability,
        correction: impl Into<String>,
        prompts: Vec<String>,
        elapsed: Duration,
    ) -> Self {
        Self {
            model,
            technique,
            vulnerability,
            correction: correction.into(),
            prompts,
            elapsed,
        }
    }

    /// Elapsed network time in seconds
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

fn serialize_secs<S>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64(elapsed.as_secs_f64())
}
