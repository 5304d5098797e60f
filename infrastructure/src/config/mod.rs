//! Configuration loading

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileGatewayConfig, FileOutputConfig};
pub use loader::ConfigLoader;
