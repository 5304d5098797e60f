//! Use cases

pub mod run_remediation;

pub use run_remediation::{
    RunRemediationError, RunRemediationInput, RunRemediationOutput, RunRemediationUseCase,
};
