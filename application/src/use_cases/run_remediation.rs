//! Run Remediation use case.
//!
//! Drives one remediation run: render the prompt for each step of the
//! technique's [`ConversationPlan`], send it through the gateway, and on
//! success persist a [`RemediationRecord`].
//!
//! The elapsed time covers only the model exchanges: the timer starts
//! immediately before the first send and stops immediately after the
//! last one, so prompt construction before the first send is excluded.
//! If any step fails, later steps never run, no record is produced, and
//! the store is never called.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::ProgressNotifier;
use crate::ports::result_store::{ResultStore, StoreError};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};
use vulnmend_domain::{
    ConversationPlan, Model, PromptTemplate, RemediationRecord, Technique, Vulnerability,
};

/// Errors that can occur during a remediation run
#[derive(Error, Debug)]
pub enum RunRemediationError {
    #[error("{0}")]
    Gateway(#[from] GatewayError),

    #[error("Failed to save results: {0}")]
    Store(#[from] StoreError),
}

/// Input for the [`RunRemediationUseCase`]
#[derive(Debug, Clone)]
pub struct RunRemediationInput {
    pub model: Model,
    pub technique: Technique,
    pub vulnerability: Vulnerability,
}

impl RunRemediationInput {
    pub fn new(model: Model, technique: Technique, vulnerability: Vulnerability) -> Self {
        Self {
            model,
            technique,
            vulnerability,
        }
    }
}

/// Result of a successful run: the record plus where it was stored
#[derive(Debug)]
pub struct RunRemediationOutput {
    pub record: RemediationRecord,
    pub saved_to: PathBuf,
}

/// Use case for running one remediation generation
pub struct RunRemediationUseCase {
    gateway: Arc<dyn LlmGateway>,
    store: Arc<dyn ResultStore>,
}

impl RunRemediationUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, store: Arc<dyn ResultStore>) -> Self {
        Self { gateway, store }
    }

    /// Execute the remediation run with progress callbacks.
    pub async fn execute(
        &self,
        input: RunRemediationInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<RunRemediationOutput, RunRemediationError> {
        let plan = ConversationPlan::for_technique(input.technique);
        let total = plan.len();

        info!(
            "Starting remediation run: model={}, technique={}, steps={}",
            input.model, input.technique, total
        );

        let mut prompts: Vec<String> = Vec::with_capacity(total);
        let mut context = String::new();
        let mut started: Option<Instant> = None;
        let mut elapsed = Duration::ZERO;

        for (idx, step) in plan.steps().iter().enumerate() {
            let step_no = idx + 1;

            progress.on_prompt_built(step_no, total, *step);
            let prompt = PromptTemplate::render(*step, &input.vulnerability, &context);
            debug!("Step {}/{}: rendered {} prompt", step_no, total, step);

            progress.on_invoke_started(step_no, total);
            // Timer starts just before the first send, never earlier.
            let timer = *started.get_or_insert_with(Instant::now);
            let content = self.gateway.invoke(input.model, &prompt).await?;
            elapsed = timer.elapsed();

            debug!(
                "Step {}/{}: received {} bytes",
                step_no,
                total,
                content.len()
            );
            prompts.push(prompt);
            context = content;
        }

        let record = RemediationRecord::new(
            input.model,
            input.technique,
            input.vulnerability,
            context,
            prompts,
            elapsed,
        );
        let saved_to = self.store.save(&record)?;

        info!(
            "Remediation run completed in {:.2}s, saved to {}",
            record.elapsed_secs(),
            saved_to.display()
        );

        Ok(RunRemediationOutput { record, saved_to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Test Mocks ====================

    struct MockGateway {
        responses: Mutex<VecDeque<Result<String, GatewayError>>>,
        seen_prompts: Mutex<Vec<String>>,
        calls: AtomicUsize,
    }

    impl MockGateway {
        fn new(responses: Vec<Result<String, GatewayError>>) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from(responses)),
                seen_prompts: Mutex::new(Vec::new()),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn seen_prompts(&self) -> Vec<String> {
            self.seen_prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        async fn invoke(&self, _model: Model, prompt: &str) -> Result<String, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen_prompts.lock().unwrap().push(prompt.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string())))
        }
    }

    struct MockStore {
        saves: AtomicUsize,
    }

    impl MockStore {
        fn new() -> Self {
            Self {
                saves: AtomicUsize::new(0),
            }
        }

        fn save_count(&self) -> usize {
            self.saves.load(Ordering::SeqCst)
        }
    }

    impl ResultStore for MockStore {
        fn save(&self, _record: &RemediationRecord) -> Result<PathBuf, StoreError> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            Ok(PathBuf::from("/tmp/mock-results"))
        }
    }

    fn input(technique: Technique) -> RunRemediationInput {
        RunRemediationInput::new(
            Model::DeepseekV31,
            technique,
            Vulnerability::new("CVE-XXXX open S3 bucket").unwrap(),
        )
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_zero_shot_single_prompt_and_record() {
        let gateway = Arc::new(MockGateway::new(vec![Ok(
            "#!/bin/bash\necho done".to_string()
        )]));
        let store = Arc::new(MockStore::new());
        let use_case = RunRemediationUseCase::new(gateway.clone(), store.clone());

        let output = use_case
            .execute(input(Technique::ZeroShot), &NoProgress)
            .await
            .unwrap();

        assert_eq!(gateway.call_count(), 1);
        assert_eq!(store.save_count(), 1);
        assert_eq!(output.record.prompts.len(), 1);
        assert_eq!(output.record.correction, "#!/bin/bash\necho done");
        assert!(output.record.elapsed_secs() >= 0.0);
        assert_eq!(output.saved_to, PathBuf::from("/tmp/mock-results"));
    }

    #[tokio::test]
    async fn test_cognitive_verifier_two_steps_chain_context() {
        let gateway = Arc::new(MockGateway::new(vec![
            Ok("SCRIPT_A".to_string()),
            Ok("SCRIPT_B".to_string()),
        ]));
        let store = Arc::new(MockStore::new());
        let use_case = RunRemediationUseCase::new(gateway.clone(), store.clone());

        let output = use_case
            .execute(input(Technique::CognitiveVerifier), &NoProgress)
            .await
            .unwrap();

        assert_eq!(gateway.call_count(), 2);
        assert_eq!(output.record.prompts.len(), 2);
        // The second prompt embeds the first response verbatim.
        assert!(output.record.prompts[1].contains("SCRIPT_A"));
        // The correction is whatever the second exchange returned.
        assert_eq!(output.record.correction, "SCRIPT_B");
        // The recorded technique is the one the operator asked for.
        assert_eq!(output.record.technique, Technique::CognitiveVerifier);
        // Prompts are recorded in issuance order.
        assert_eq!(output.record.prompts, gateway.seen_prompts());
    }

    #[tokio::test]
    async fn test_cognitive_verifier_first_failure_stops_plan() {
        let gateway = Arc::new(MockGateway::new(vec![Err(GatewayError::HttpStatus(503))]));
        let store = Arc::new(MockStore::new());
        let use_case = RunRemediationUseCase::new(gateway.clone(), store.clone());

        let result = use_case
            .execute(input(Technique::CognitiveVerifier), &NoProgress)
            .await;

        // No second exchange, no record persisted.
        assert_eq!(gateway.call_count(), 1);
        assert_eq!(store.save_count(), 0);
        match result {
            Err(RunRemediationError::Gateway(GatewayError::HttpStatus(503))) => {}
            other => panic!("Expected HttpStatus(503), got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_single_step_failure_skips_store() {
        let gateway = Arc::new(MockGateway::new(vec![Err(GatewayError::Timeout(200))]));
        let store = Arc::new(MockStore::new());
        let use_case = RunRemediationUseCase::new(gateway.clone(), store.clone());

        let result = use_case
            .execute(input(Technique::ChainOfThought), &NoProgress)
            .await;

        assert_eq!(store.save_count(), 0);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("200 seconds"));
    }

    #[tokio::test]
    async fn test_role_prompting_is_single_step() {
        let gateway = Arc::new(MockGateway::new(vec![Ok("SCRIPT".to_string())]));
        let store = Arc::new(MockStore::new());
        let use_case = RunRemediationUseCase::new(gateway.clone(), store.clone());

        let output = use_case
            .execute(input(Technique::RolePrompting), &NoProgress)
            .await
            .unwrap();

        assert_eq!(gateway.call_count(), 1);
        assert_eq!(output.record.prompts.len(), 1);
        assert!(
            output.record.prompts[0].contains("senior linux systems security engineer")
        );
    }

    #[tokio::test]
    async fn test_store_failure_is_reported() {
        struct FailingStore;

        impl ResultStore for FailingStore {
            fn save(&self, _record: &RemediationRecord) -> Result<PathBuf, StoreError> {
                Err(StoreError::Io(std::io::Error::other("disk full")))
            }
        }

        let gateway = Arc::new(MockGateway::new(vec![Ok("SCRIPT".to_string())]));
        let use_case = RunRemediationUseCase::new(gateway, Arc::new(FailingStore));

        let result = use_case
            .execute(input(Technique::ZeroShot), &NoProgress)
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, RunRemediationError::Store(_)));
        assert!(err.to_string().contains("disk full"));
    }
}
