//! Vulnerability value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The vulnerability to be remediated (Value Object)
///
/// Non-empty by construction: [`Vulnerability::new`] rejects empty or
/// whitespace-only input, so any value of this type is safe to embed
/// into a prompt template without further checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Vulnerability {
    content: String,
}

impl Vulnerability {
    /// Create a new vulnerability descriptor
    ///
    /// Fails with [`DomainError::EmptyVulnerability`] if the content is
    /// empty or only whitespace.
    pub fn new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::EmptyVulnerability);
        }
        Ok(Self { content })
    }

    /// Get the vulnerability description
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Vulnerability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Vulnerability {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Vulnerability::new(s)
    }
}

impl TryFrom<&str> for Vulnerability {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Vulnerability::new(s)
    }
}

impl From<Vulnerability> for String {
    fn from(v: Vulnerability) -> Self {
        v.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vulnerability_creation() {
        let v = Vulnerability::new("CVE-2024-1234 world-readable shadow file").unwrap();
        assert_eq!(v.content(), "CVE-2024-1234 world-readable shadow file");
    }

    #[test]
    fn test_empty_vulnerability_rejected() {
        assert_eq!(
            Vulnerability::new("").unwrap_err(),
            DomainError::EmptyVulnerability
        );
        assert_eq!(
            Vulnerability::new("   \n\t ").unwrap_err(),
            DomainError::EmptyVulnerability
        );
    }

    #[test]
    fn test_try_from_str() {
        let v: Vulnerability = "open S3 bucket".try_into().unwrap();
        assert_eq!(v.content(), "open S3 bucket");
    }

    #[test]
    fn test_serde_rejects_empty() {
        let result: Result<Vulnerability, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }
}
