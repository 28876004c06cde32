mod auth_tests;
mod expense_tests;

use crate::core::services::LedgerService;
use crate::infrastructure::sessions::in_memory::InMemorySessions;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

pub fn create_test_service() -> LedgerService<InMemoryStorage, InMemorySessions> {
    LedgerService::new(InMemoryStorage::new(), InMemorySessions::new(3600))
}
