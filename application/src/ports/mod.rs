//! Ports (interfaces) implemented by the infrastructure layer

pub mod llm_gateway;
pub mod progress;
pub mod result_store;
