//! Console progress messages

use vulnmend_application::ports::progress::ProgressNotifier;
use vulnmend_domain::Technique;

/// Prints one line per orchestration step to stdout
pub struct ConsoleProgress;

impl ProgressNotifier for ConsoleProgress {
    fn on_prompt_built(&self, step: usize, total: usize, technique: Technique) {
        if total > 1 {
            println!("Generating prompt {step}/{total} ({technique})...");
        } else {
            println!("Generating prompt...");
        }
    }

    fn on_invoke_started(&self, step: usize, total: usize) {
        if total > 1 {
            println!("Fetching LLM response {step}/{total}...");
        } else {
            println!("Fetching LLM response...");
        }
    }
}
