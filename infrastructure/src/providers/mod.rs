//! LLM provider adapters

mod openrouter;

pub use openrouter::{OPENROUTER_API_URL, OpenRouterGateway};
