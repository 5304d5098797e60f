//! Prompt rendering
//!
//! Templates for generating the remediation prompts sent to the model.

mod template;

pub use template::PromptTemplate;
