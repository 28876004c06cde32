use crate::core::errors::LedgerError;
use crate::core::models::{Expense, ExpenseChanges, NewExpense, NewUser, User};
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync {
    /// Creates the user, assigning id and timestamp. Email uniqueness is
    /// enforced here, inside the storage layer, so concurrent registrations
    /// cannot both claim the same address.
    async fn create_user(&self, new_user: NewUser) -> Result<User, LedgerError>;
    async fn get_user(&self, user_id: i64) -> Result<Option<User>, LedgerError>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, LedgerError>;

    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense, LedgerError>;
    async fn get_expense(&self, expense_id: i64) -> Result<Option<Expense>, LedgerError>;
    /// Owner's expenses ordered by creation timestamp descending. The order
    /// is part of the contract, not an implementation detail.
    async fn list_expenses_by_owner(&self, owner_id: i64) -> Result<Vec<Expense>, LedgerError>;
    async fn sum_expenses_by_owner(&self, owner_id: i64) -> Result<f64, LedgerError>;
    async fn update_expense(&self, expense_id: i64, changes: ExpenseChanges) -> Result<Expense, LedgerError>;
    async fn delete_expense(&self, expense_id: i64) -> Result<(), LedgerError>;
}

pub mod in_memory;
