use crate::core::errors::LedgerError;
use async_trait::async_trait;

/// Server-side binding from an opaque token to a user id. Expiry is the
/// store's concern; a token past its lifetime resolves as if it never existed.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, token: String, user_id: i64) -> Result<(), LedgerError>;
    async fn resolve(&self, token: &str) -> Result<Option<i64>, LedgerError>;
    /// Removing an unknown token is a no-op, not an error.
    async fn remove(&self, token: &str) -> Result<(), LedgerError>;
}

pub mod in_memory;
