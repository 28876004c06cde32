use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct Expense {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating an expense; the storage layer assigns id and timestamp.
#[derive(Clone, Debug)]
pub struct NewExpense {
    pub owner_id: i64,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub description: Option<String>,
}

/// Editable fields of an expense. Id, owner and creation timestamp never change.
#[derive(Clone, Debug)]
pub struct ExpenseChanges {
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub description: Option<String>,
}
