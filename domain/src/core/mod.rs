//! Core domain types

pub mod error;
pub mod model;
pub mod vulnerability;

pub use error::DomainError;
pub use model::Model;
pub use vulnerability::Vulnerability;
