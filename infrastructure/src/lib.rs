//! Infrastructure layer for vulnmend
//!
//! Adapters implementing the application ports: the OpenRouter HTTP
//! gateway, the filesystem result store, and TOML configuration loading.

pub mod config;
pub mod persistence;
pub mod providers;

pub use config::{ConfigLoader, FileConfig};
pub use persistence::FileResultStore;
pub use providers::OpenRouterGateway;
