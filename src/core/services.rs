use crate::core::errors::LedgerError;
use crate::core::models::{Expense, ExpenseChanges, NewExpense, NewUser, User};
use crate::core::password::{self, MIN_STRENGTH_SCORE};
use crate::infrastructure::sessions::SessionStore;
use crate::infrastructure::storage::Storage;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// What happens when a user edits or deletes an expense they do not own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OwnershipPolicy {
    /// Edits and deletes are rejected unless the acting user owns the expense.
    Enforced,
    /// Any authenticated user may edit or delete any expense by id. Kept for
    /// parity with the legacy behavior; do not use outside of comparisons.
    Unchecked,
}

pub struct LedgerService<S: Storage, N: SessionStore> {
    storage: S,
    sessions: N,
    ownership_policy: OwnershipPolicy,
}

impl<S: Storage, N: SessionStore> LedgerService<S, N> {
    pub fn new(storage: S, sessions: N) -> Self {
        info!("Initializing LedgerService");
        LedgerService {
            storage,
            sessions,
            ownership_policy: OwnershipPolicy::Enforced,
        }
    }

    pub fn with_ownership_policy(mut self, policy: OwnershipPolicy) -> Self {
        self.ownership_policy = policy;
        self
    }

    // CREDENTIALS

    /// Registers a new account. The strength gate runs before the uniqueness
    /// check, so a weak password never consumes the email.
    pub async fn register(&self, email: &str, name: &str, password: &str) -> Result<User, LedgerError> {
        info!("Registering user with email: {}", email);
        if password::strength_score(password) < MIN_STRENGTH_SCORE {
            warn!("Rejected registration for {}: password below strength threshold", email);
            return Err(LedgerError::WeakPassword);
        }

        let password_hash = password::hash_password(password)?;
        let created = self
            .storage
            .create_user(NewUser {
                email: email.to_string(),
                name: name.to_string(),
                password_hash,
            })
            .await?;
        debug!("User created with ID: {}", created.id);
        Ok(created)
    }

    /// Checks credentials against the stored hash. Unknown email and wrong
    /// password both come back as the same `AuthFailure` so the outcome never
    /// reveals whether an account exists.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, LedgerError> {
        let user = self
            .storage
            .get_user_by_email(email)
            .await?
            .ok_or(LedgerError::AuthFailure)?;

        if password::verify_password(password, &user.password_hash)? {
            info!("User {} logged in", user.id);
            Ok(user)
        } else {
            warn!("Failed login attempt for {}", email);
            Err(LedgerError::AuthFailure)
        }
    }

    pub async fn get_user(&self, user_id: i64) -> Result<Option<User>, LedgerError> {
        self.storage.get_user(user_id).await
    }

    // SESSIONS

    /// Opens a session for the user and returns the opaque token the client
    /// carries on subsequent requests.
    pub async fn start_session(&self, user_id: i64) -> Result<String, LedgerError> {
        let token = Uuid::new_v4().to_string();
        self.sessions.insert(token.clone(), user_id).await?;
        debug!("Session started for user {}", user_id);
        Ok(token)
    }

    /// Resolves a session token to the user it was issued for. Unknown,
    /// expired and already-ended tokens all resolve to `None`.
    pub async fn current_user(&self, token: &str) -> Result<Option<User>, LedgerError> {
        match self.sessions.resolve(token).await? {
            Some(user_id) => self.storage.get_user(user_id).await,
            None => Ok(None),
        }
    }

    /// Drops the session unconditionally; ending an unknown token is not an
    /// error.
    pub async fn end_session(&self, token: &str) -> Result<(), LedgerError> {
        self.sessions.remove(token).await
    }

    // EXPENSES

    pub async fn add_expense(
        &self,
        owner_id: i64,
        title: &str,
        amount_text: &str,
        category: &str,
        description: Option<String>,
    ) -> Result<Expense, LedgerError> {
        let amount = Self::parse_amount(amount_text)?;
        let created = self
            .storage
            .create_expense(NewExpense {
                owner_id,
                title: title.to_string(),
                amount,
                category: category.to_string(),
                description,
            })
            .await?;
        info!("Expense {} created for user {}", created.id, owner_id);
        Ok(created)
    }

    /// All expenses of the owner, most recent first.
    pub async fn expenses_for(&self, owner_id: i64) -> Result<Vec<Expense>, LedgerError> {
        self.storage.list_expenses_by_owner(owner_id).await
    }

    /// Running total of the owner's expenses; 0 when there are none.
    pub async fn total_for(&self, owner_id: i64) -> Result<f64, LedgerError> {
        self.storage.sum_expenses_by_owner(owner_id).await
    }

    /// Fetches an expense for the edit form, applying the ownership policy.
    pub async fn expense_for_edit(&self, acting_user_id: i64, expense_id: i64) -> Result<Expense, LedgerError> {
        let expense = self
            .storage
            .get_expense(expense_id)
            .await?
            .ok_or(LedgerError::ExpenseNotFound(expense_id))?;
        self.check_ownership(&expense, acting_user_id)?;
        Ok(expense)
    }

    pub async fn update_expense(
        &self,
        acting_user_id: i64,
        expense_id: i64,
        title: &str,
        amount_text: &str,
        category: &str,
        description: Option<String>,
    ) -> Result<Expense, LedgerError> {
        let expense = self
            .storage
            .get_expense(expense_id)
            .await?
            .ok_or(LedgerError::ExpenseNotFound(expense_id))?;
        self.check_ownership(&expense, acting_user_id)?;

        let amount = Self::parse_amount(amount_text)?;
        let updated = self
            .storage
            .update_expense(
                expense_id,
                ExpenseChanges {
                    title: title.to_string(),
                    amount,
                    category: category.to_string(),
                    description,
                },
            )
            .await?;
        info!("Expense {} updated by user {}", expense_id, acting_user_id);
        Ok(updated)
    }

    pub async fn delete_expense(&self, acting_user_id: i64, expense_id: i64) -> Result<(), LedgerError> {
        let expense = self
            .storage
            .get_expense(expense_id)
            .await?
            .ok_or(LedgerError::ExpenseNotFound(expense_id))?;
        self.check_ownership(&expense, acting_user_id)?;

        self.storage.delete_expense(expense_id).await?;
        info!("Expense {} deleted by user {}", expense_id, acting_user_id);
        Ok(())
    }

    fn check_ownership(&self, expense: &Expense, acting_user_id: i64) -> Result<(), LedgerError> {
        if self.ownership_policy == OwnershipPolicy::Enforced && expense.owner_id != acting_user_id {
            warn!(
                "User {} attempted to act on expense {} owned by user {}",
                acting_user_id, expense.id, expense.owner_id
            );
            return Err(LedgerError::ExpenseNotOwned(expense.id));
        }
        Ok(())
    }

    fn parse_amount(text: &str) -> Result<f64, LedgerError> {
        text.trim()
            .parse::<f64>()
            .map_err(|_| LedgerError::InvalidAmount(text.to_string()))
    }
}
