//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for vulnmend
#[derive(Parser, Debug)]
#[command(name = "vulnmend")]
#[command(author, version, about = "Generate LLM remediation scripts for named vulnerabilities")]
#[command(long_about = r#"
vulnmend prompts an LLM provider to generate a BASH remediation script for
a named vulnerability, using a selectable prompt-engineering technique.

Techniques:
  zero-shot                     plain one-shot request
  cognitive-verifier            two-step request + verification follow-up
  cognitive-verifier-follow-up  the follow-up step on its own
  role-prompting                frames the model as a security engineer
  chain-of-thought              structured analysis/plan/script response

Configuration files are loaded from (in priority order):
1. --config <path>    Explicit config file
2. ./vulnmend.toml    Project-level config
3. ~/.config/vulnmend/config.toml   Global config

Example:
  vulnmend "CVE-2024-6387 regreSSHion in OpenSSH"
  vulnmend -t cognitive-verifier "world-writable /etc/shadow"
  vulnmend -m deepseek-v3.1 -t chain-of-thought "open S3 bucket" -o ./patches
"#)]
pub struct Cli {
    /// The vulnerability to generate a correction script for
    pub vulnerability: String,

    /// Model to prompt
    #[arg(short, long, value_name = "MODEL", default_value = "deepseek-v3.1")]
    pub model: String,

    /// Prompt-engineering technique
    #[arg(short, long, value_name = "TECHNIQUE", default_value = "zero-shot")]
    pub technique: String,

    /// Directory to save results under (overrides config)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Request timeout in seconds (overrides config)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["vulnmend", "open S3 bucket"]);
        assert_eq!(cli.vulnerability, "open S3 bucket");
        assert_eq!(cli.model, "deepseek-v3.1");
        assert_eq!(cli.technique, "zero-shot");
        assert!(!cli.quiet);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_technique_and_output_flags() {
        let cli = Cli::parse_from([
            "vulnmend",
            "-t",
            "cognitive-verifier",
            "-o",
            "./patches",
            "CVE-2024-1234",
        ]);
        assert_eq!(cli.technique, "cognitive-verifier");
        assert_eq!(cli.output, Some(PathBuf::from("./patches")));
    }
}
