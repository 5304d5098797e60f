//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file
//! and are deserialized directly.

use crate::providers::OPENROUTER_API_URL;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileConfig {
    /// Gateway settings ([gateway] section)
    pub gateway: FileGatewayConfig,
    /// Output settings ([output] section)
    pub output: FileOutputConfig,
}

/// Gateway configuration from TOML (`[gateway]` section)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileGatewayConfig {
    /// Chat-completions endpoint (default: OpenRouter).
    pub base_url: String,
    /// Per-request timeout in seconds (default: 200).
    pub timeout_secs: u64,
}

impl Default for FileGatewayConfig {
    fn default() -> Self {
        Self {
            base_url: OPENROUTER_API_URL.to_string(),
            timeout_secs: 200,
        }
    }
}

/// Output configuration from TOML (`[output]` section)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Directory remediation results are written under (default: "results").
    pub dir: PathBuf,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("results"),
        }
    }
}
