use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum LedgerError {
    /// Email is already registered
    #[error("Email is already registered.")]
    DuplicateEmail(String),

    /// Password strength below the registration threshold
    #[error("Password too weak. Try adding more words or symbols.")]
    WeakPassword,

    /// Bad credentials; deliberately silent on which part was wrong
    #[error("Invalid email or password!")]
    AuthFailure,

    /// User with given ID not found
    #[error("User {0} not found")]
    UserNotFound(i64),

    /// Expense with given ID not found
    #[error("Expense {0} not found")]
    ExpenseNotFound(i64),

    /// Expense belongs to a different user than the one acting on it
    #[error("Expense {0} belongs to another user")]
    ExpenseNotOwned(i64),

    /// Amount field did not parse as a number
    #[error("Amount {0:?} is not a valid number.")]
    InvalidAmount(String),

    /// Storage operation failed
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Internal server error (e.g., unexpected failure)
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}
