pub mod expense;
pub mod user;

pub use expense::{Expense, ExpenseChanges, NewExpense};
pub use user::{NewUser, User};
