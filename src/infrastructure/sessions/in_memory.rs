use crate::core::errors::LedgerError;
use crate::infrastructure::sessions::SessionStore;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tokio::sync::Mutex;

struct SessionEntry {
    user_id: i64,
    expires_at: DateTime<Utc>,
}

pub struct InMemorySessions {
    ttl: Duration,
    sessions: Mutex<HashMap<String, SessionEntry>>,
}

impl InMemorySessions {
    pub fn new(ttl_secs: u64) -> Self {
        InMemorySessions {
            ttl: Duration::seconds(ttl_secs as i64),
            sessions: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessions {
    async fn insert(&self, token: String, user_id: i64) -> Result<(), LedgerError> {
        let mut sessions = self.sessions.lock().await;
        sessions.insert(
            token,
            SessionEntry {
                user_id,
                expires_at: Utc::now() + self.ttl,
            },
        );
        Ok(())
    }

    async fn resolve(&self, token: &str) -> Result<Option<i64>, LedgerError> {
        let mut sessions = self.sessions.lock().await;
        match sessions.get(token) {
            Some(entry) if entry.expires_at > Utc::now() => Ok(Some(entry.user_id)),
            Some(_) => {
                // Expired entries are dropped on touch.
                sessions.remove(token);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, token: &str) -> Result<(), LedgerError> {
        self.sessions.lock().await.remove(token);
        Ok(())
    }
}
