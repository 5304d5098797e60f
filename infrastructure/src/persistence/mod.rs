//! Result persistence adapters

mod file_store;

pub use file_store::FileResultStore;
