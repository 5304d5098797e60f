//! Prompt templates for each remediation technique

use crate::core::vulnerability::Vulnerability;
use crate::technique::Technique;

/// Fixed trailing instruction appended to every prompt.
const RESPONSE_FOOTER: &str =
    "Your response should only contain the generated shell script. Nothing else.";

/// Templates for generating remediation prompts
///
/// Rendering is a pure function of its inputs: no I/O, no clock, no
/// randomness. Validation of the vulnerability text happens at
/// construction of [`Vulnerability`], so rendering itself cannot fail.
pub struct PromptTemplate;

impl PromptTemplate {
    /// Render the prompt for a technique.
    ///
    /// `context` is the prior model response and is only embedded by
    /// [`Technique::CognitiveVerifierFollowUp`]; other techniques ignore it.
    pub fn render(technique: Technique, vulnerability: &Vulnerability, context: &str) -> String {
        match technique {
            Technique::ZeroShot | Technique::CognitiveVerifier => {
                Self::remediation(vulnerability)
            }
            Technique::CognitiveVerifierFollowUp => Self::follow_up(vulnerability, context),
            Technique::RolePrompting => Self::role_prompting(vulnerability),
            Technique::ChainOfThought => Self::chain_of_thought(vulnerability),
        }
    }

    /// Initial remediation request, shared by zero-shot and the first
    /// cognitive-verifier step.
    fn remediation(vulnerability: &Vulnerability) -> String {
        format!(
            r#"Generate a safe, idempotent, auditable BASH shell script capable of correcting the following vulnerability: ({vulnerability}) once executed.
{RESPONSE_FOOTER}"#
        )
    }

    /// Verification follow-up embedding the model's prior answer.
    fn follow_up(vulnerability: &Vulnerability, context: &str) -> String {
        format!(
            r#"{context}
---
Check the BASH shell script above. Once executed, is it capable of correcting the vulnerability ({vulnerability})?
If so, return the sent BASH shell script without any additional modifications and/or commentaries.
If not, modify it, correcting it and making it so that it can actually fully correct the vulnerability once executed.
{RESPONSE_FOOTER}"#
        )
    }

    fn role_prompting(vulnerability: &Vulnerability) -> String {
        format!(
            r#"You are a senior linux systems security engineer.
Your job is to produce a safe, idempotent, auditable BASH shell script that remediates the following vulnerability: ({vulnerability}) when executed on the target system.
{RESPONSE_FOOTER}"#
        )
    }

    fn chain_of_thought(vulnerability: &Vulnerability) -> String {
        format!(
            r#"Generate a safe, idempotent, auditable BASH shell script capable of correcting the following vulnerability: ({vulnerability}) once executed.
Your response MUST follow this exact structure, with each section clearly defined:

## 1. Vulnerability Analysis
- **Description:** Explain what the vulnerability is in simple terms.
- **Impact:** Describe the potential risks and impact if the vulnerability is exploited.
- **Detection:** Detail the specific commands or checks that can be used to confirm a system is currently vulnerable.

---

## 2. Remediation Plan
- **Strategy:** Describe the step-by-step plan to fix the vulnerability. Explain why this is the optimal approach.
- **Pre-flight Checks:** List the checks the script will perform before making any changes (e.g., verifying root privileges, checking if the fix is already applied).
- **Safety Measures:** Explain the safety mechanisms that will be included (e.g., backing up configuration files before modifying them).
- **Verification:** Describe how the script will confirm that the fix was successfully applied.

---

## 3. Generated BASH Script
Generate the final BASH script based on the plan above. The script MUST adhere to the following best practices:
- **Shebang:** Start with `#!/bin/bash`.
- **Error Handling:** Use `set -euo pipefail` to ensure the script exits immediately if a command fails.
- **Idempotency:** The script must be safe to run multiple times. If it detects the system is already secure, it should report that and exit gracefully.
- **Auditability & Logging:** Include clear `echo` statements for each major action (e.g., "Checking for vulnerability...", "Creating backup of /etc/ssh/sshd_config...", "Applying remediation...", "Verification complete.").
- **Comments:** Add detailed comments within the code explaining the purpose of each function or command block.

{RESPONSE_FOOTER}"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vuln() -> Vulnerability {
        Vulnerability::new("CVE-2024-6387 regreSSHion in OpenSSH").unwrap()
    }

    #[test]
    fn test_every_technique_embeds_vulnerability_and_footer() {
        let vulnerability = vuln();
        for technique in Technique::all() {
            let prompt = PromptTemplate::render(*technique, &vulnerability, "");
            assert!(!prompt.trim().is_empty(), "{technique}: empty prompt");
            assert!(
                prompt.contains(vulnerability.content()),
                "{technique}: vulnerability missing"
            );
            assert!(prompt.contains(RESPONSE_FOOTER), "{technique}: footer missing");
        }
    }

    #[test]
    fn test_zero_shot_and_cognitive_verifier_share_template() {
        let vulnerability = vuln();
        assert_eq!(
            PromptTemplate::render(Technique::ZeroShot, &vulnerability, ""),
            PromptTemplate::render(Technique::CognitiveVerifier, &vulnerability, "")
        );
    }

    #[test]
    fn test_follow_up_embeds_context_verbatim() {
        let vulnerability = vuln();
        let script = "#!/bin/bash\nset -euo pipefail\necho fixed";
        let prompt =
            PromptTemplate::render(Technique::CognitiveVerifierFollowUp, &vulnerability, script);
        assert!(prompt.starts_with(script));
        assert!(prompt.contains("Check the BASH shell script above"));
    }

    #[test]
    fn test_context_ignored_by_non_follow_up_techniques() {
        let vulnerability = vuln();
        for technique in Technique::all() {
            if technique.uses_context() {
                continue;
            }
            let without = PromptTemplate::render(*technique, &vulnerability, "");
            let with = PromptTemplate::render(*technique, &vulnerability, "SOME CONTEXT");
            assert_eq!(without, with, "{technique}: context leaked into prompt");
        }
    }

    #[test]
    fn test_role_prompting_frames_engineer() {
        let prompt = PromptTemplate::render(Technique::RolePrompting, &vuln(), "");
        assert!(prompt.contains("senior linux systems security engineer"));
    }

    #[test]
    fn test_chain_of_thought_requires_structure() {
        let prompt = PromptTemplate::render(Technique::ChainOfThought, &vuln(), "");
        assert!(prompt.contains("## 1. Vulnerability Analysis"));
        assert!(prompt.contains("## 2. Remediation Plan"));
        assert!(prompt.contains("## 3. Generated BASH Script"));
        assert!(prompt.contains("#!/bin/bash"));
        assert!(prompt.contains("set -euo pipefail"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let vulnerability = vuln();
        let a = PromptTemplate::render(Technique::ZeroShot, &vulnerability, "");
        let b = PromptTemplate::render(Technique::ZeroShot, &vulnerability, "");
        assert_eq!(a, b);
    }
}
