//! Prompt-engineering techniques
//!
//! A technique determines how the vulnerability description is phrased to
//! the model, and whether the run is a single exchange or a two-step
//! verification conversation.

mod plan;

pub use plan::ConversationPlan;

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Prompt-engineering technique (Value Object)
///
/// The set is closed. Dispatch on this enum is exhaustive, so adding a
/// technique forces a compile-time update of every matching site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Technique {
    /// Plain one-shot remediation request.
    ZeroShot,
    /// Two-step plan: initial request, then a verification follow-up.
    CognitiveVerifier,
    /// Second step of the cognitive-verifier plan. Embeds the prior
    /// response as chat context.
    CognitiveVerifierFollowUp,
    /// Frames the model as a senior systems-security engineer.
    RolePrompting,
    /// Requires a structured analysis/plan/script response.
    ChainOfThought,
}

impl Technique {
    /// Get the string identifier for this technique
    pub fn as_str(&self) -> &str {
        match self {
            Technique::ZeroShot => "zero-shot",
            Technique::CognitiveVerifier => "cognitive-verifier",
            Technique::CognitiveVerifierFollowUp => "cognitive-verifier-follow-up",
            Technique::RolePrompting => "role-prompting",
            Technique::ChainOfThought => "chain-of-thought",
        }
    }

    /// All techniques, for help text and exhaustive tests
    pub fn all() -> &'static [Technique] {
        &[
            Technique::ZeroShot,
            Technique::CognitiveVerifier,
            Technique::CognitiveVerifierFollowUp,
            Technique::RolePrompting,
            Technique::ChainOfThought,
        ]
    }

    /// Whether this technique embeds prior chat context into its prompt
    pub fn uses_context(&self) -> bool {
        matches!(self, Technique::CognitiveVerifierFollowUp)
    }
}

impl std::fmt::Display for Technique {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Technique {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zero-shot" => Ok(Technique::ZeroShot),
            "cognitive-verifier" => Ok(Technique::CognitiveVerifier),
            "cognitive-verifier-follow-up" => Ok(Technique::CognitiveVerifierFollowUp),
            "role-prompting" => Ok(Technique::RolePrompting),
            "chain-of-thought" => Ok(Technique::ChainOfThought),
            other => Err(DomainError::InvalidTechnique(other.to_string())),
        }
    }
}

impl Serialize for Technique {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Technique {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
