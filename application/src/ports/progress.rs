//! Progress notification port
//!
//! Lets the presentation side show step-by-step progress ("Generating
//! prompt...", "Fetching LLM response...") without coupling the use case
//! to a console.

use vulnmend_domain::Technique;

/// Callbacks emitted by the orchestrator as a run progresses
pub trait ProgressNotifier: Send + Sync {
    /// A prompt for the given step (1-based) is about to be rendered.
    fn on_prompt_built(&self, step: usize, total: usize, technique: Technique);

    /// The prompt for the given step is being sent to the model.
    fn on_invoke_started(&self, step: usize, total: usize);
}

/// No-op notifier for quiet mode and tests
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_prompt_built(&self, _step: usize, _total: usize, _technique: Technique) {}
    fn on_invoke_started(&self, _step: usize, _total: usize) {}
}
