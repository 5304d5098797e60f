//! Model value object representing an LLM model

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Supported LLM models (Value Object)
///
/// This is a closed set: an unrecognized model id is a validation error,
/// not a passthrough. Each variant maps to a provider route in the
/// infrastructure layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    /// DeepSeek V3.1, served through OpenRouter.
    DeepseekV31,
    /// Gemini Flash 2.5 — recognized but not yet backed by a provider.
    GeminiFlash25,
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::DeepseekV31 => "deepseek-v3.1",
            Model::GeminiFlash25 => "gemini-flash-2.5",
        }
    }

    /// All supported model ids, for help text and error messages
    pub fn all() -> &'static [Model] {
        &[Model::DeepseekV31, Model::GeminiFlash25]
    }
}

impl Default for Model {
    /// Returns the default model (DeepSeek V3.1)
    fn default() -> Self {
        Model::DeepseekV31
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Case-insensitive: earlier releases spelled the id "deepseek-V3.1".
        match s.to_ascii_lowercase().as_str() {
            "deepseek-v3.1" => Ok(Model::DeepseekV31),
            "gemini-flash-2.5" => Ok(Model::GeminiFlash25),
            _ => Err(DomainError::UnknownModel(s.to_string())),
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
