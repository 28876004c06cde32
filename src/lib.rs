pub mod config;
pub mod core;
pub mod infrastructure;
pub mod web;

pub use crate::core::errors::LedgerError;
pub use crate::core::services::{LedgerService, OwnershipPolicy};
pub use crate::infrastructure::sessions::in_memory::InMemorySessions;
pub use crate::infrastructure::storage::in_memory::InMemoryStorage;

#[cfg(test)]
mod tests;
