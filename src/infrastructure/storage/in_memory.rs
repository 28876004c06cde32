use crate::core::errors::LedgerError;
use crate::core::models::{Expense, ExpenseChanges, NewExpense, NewUser, User};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::Mutex;

pub struct InMemoryStorage {
    users: Mutex<HashMap<i64, User>>,
    emails: Mutex<HashMap<String, i64>>, // email -> user id
    expenses: Mutex<HashMap<i64, Expense>>,
    next_user_id: AtomicI64,
    next_expense_id: AtomicI64,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            users: Mutex::new(HashMap::new()),
            emails: Mutex::new(HashMap::new()),
            expenses: Mutex::new(HashMap::new()),
            next_user_id: AtomicI64::new(1),
            next_expense_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn create_user(&self, new_user: NewUser) -> Result<User, LedgerError> {
        // The emails lock is held across both inserts so the uniqueness check
        // and the write are one atomic step.
        let mut emails = self.emails.lock().await;
        if emails.contains_key(&new_user.email) {
            return Err(LedgerError::DuplicateEmail(new_user.email));
        }

        let user = User {
            id: self.next_user_id.fetch_add(1, Ordering::SeqCst),
            email: new_user.email,
            name: new_user.name,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        };
        emails.insert(user.email.clone(), user.id);
        self.users.lock().await.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, user_id: i64) -> Result<Option<User>, LedgerError> {
        Ok(self.users.lock().await.get(&user_id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, LedgerError> {
        // For production: use a database index on email
        let user_id = self.emails.lock().await.get(email).copied();
        Ok(match user_id {
            Some(id) => self.users.lock().await.get(&id).cloned(),
            None => None,
        })
    }

    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense, LedgerError> {
        let expense = Expense {
            id: self.next_expense_id.fetch_add(1, Ordering::SeqCst),
            owner_id: new_expense.owner_id,
            title: new_expense.title,
            amount: new_expense.amount,
            category: new_expense.category,
            description: new_expense.description,
            created_at: Utc::now(),
        };
        self.expenses.lock().await.insert(expense.id, expense.clone());
        Ok(expense)
    }

    async fn get_expense(&self, expense_id: i64) -> Result<Option<Expense>, LedgerError> {
        Ok(self.expenses.lock().await.get(&expense_id).cloned())
    }

    async fn list_expenses_by_owner(&self, owner_id: i64) -> Result<Vec<Expense>, LedgerError> {
        let expenses = self.expenses.lock().await;
        let mut items: Vec<Expense> = expenses.values().filter(|e| e.owner_id == owner_id).cloned().collect();
        // Most recent first; id breaks ties so the order stays strict even
        // when two expenses land on the same timestamp.
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(items)
    }

    async fn sum_expenses_by_owner(&self, owner_id: i64) -> Result<f64, LedgerError> {
        let expenses = self.expenses.lock().await;
        Ok(expenses
            .values()
            .filter(|e| e.owner_id == owner_id)
            .map(|e| e.amount)
            .sum())
    }

    async fn update_expense(&self, expense_id: i64, changes: ExpenseChanges) -> Result<Expense, LedgerError> {
        let mut expenses = self.expenses.lock().await;
        let expense = expenses
            .get_mut(&expense_id)
            .ok_or(LedgerError::ExpenseNotFound(expense_id))?;
        expense.title = changes.title;
        expense.amount = changes.amount;
        expense.category = changes.category;
        expense.description = changes.description;
        Ok(expense.clone())
    }

    async fn delete_expense(&self, expense_id: i64) -> Result<(), LedgerError> {
        self.expenses
            .lock()
            .await
            .remove(&expense_id)
            .map(|_| ())
            .ok_or(LedgerError::ExpenseNotFound(expense_id))
    }
}
