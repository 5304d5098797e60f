//! Conversation plan: the ordered technique steps for one run

use super::Technique;

/// Ordered list of technique steps for a single remediation run.
///
/// Each step's prompt is rendered with the previous step's response as
/// chat context (empty for the first step). `cognitive-verifier` expands
/// to a two-step plan whose second step is the follow-up technique; every
/// other technique is a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationPlan {
    steps: Vec<Technique>,
}

impl ConversationPlan {
    /// Build the plan for the requested technique
    pub fn for_technique(technique: Technique) -> Self {
        let steps = match technique {
            Technique::CognitiveVerifier => vec![
                Technique::CognitiveVerifier,
                Technique::CognitiveVerifierFollowUp,
            ],
            other => vec![other],
        };
        Self { steps }
    }

    /// The technique steps, in issuance order
    pub fn steps(&self) -> &[Technique] {
        &self.steps
    }

    /// Number of model exchanges this plan performs
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the plan has no steps (never true for a built plan)
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
