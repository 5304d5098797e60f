//! Application layer for vulnmend
//!
//! Use cases orchestrating the domain, and ports (interfaces) implemented
//! by the infrastructure layer. This crate performs no I/O itself; the
//! gateway, store, and progress ports are injected.

pub mod ports;
pub mod use_cases;

pub use ports::llm_gateway::{GatewayError, LlmGateway};
pub use ports::progress::{NoProgress, ProgressNotifier};
pub use ports::result_store::{ResultStore, StoreError};
pub use use_cases::run_remediation::{
    RunRemediationError, RunRemediationInput, RunRemediationOutput, RunRemediationUseCase,
};
