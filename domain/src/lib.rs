//! Domain layer for vulnmend
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Technique
//!
//! A prompt-engineering technique determines how a vulnerability description
//! is phrased to the model. The set is closed: adding a technique is a
//! compile-time-checked change to the [`Technique`] enum and the matching
//! arm in [`PromptTemplate`].
//!
//! ## Conversation Plan
//!
//! Every run follows a [`ConversationPlan`] — an ordered list of technique
//! steps. Most techniques are a single step; `cognitive-verifier` is two
//! steps, where the second step feeds the first response back to the model
//! for verification.

pub mod core;
pub mod prompt;
pub mod remediation;
pub mod technique;

// Re-export commonly used types
pub use self::core::{error::DomainError, model::Model, vulnerability::Vulnerability};
pub use prompt::PromptTemplate;
pub use remediation::RemediationRecord;
pub use technique::{ConversationPlan, Technique};
