use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;

/// Key under which the browser client keeps the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Failure to persist a token.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("token storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write token: {0}")]
    Write(String),
}

/// Persistent home of the bearer token.
///
/// Absence of a token means logged out. Implementations must treat
/// `clear` as idempotent.
pub trait TokenStore {
    /// The stored token, `None` when absent or unreadable.
    fn load(&self) -> Option<String>;

    /// Replace the stored token.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the backing storage rejects the write.
    fn save(&self, token: &str) -> Result<(), StoreError>;

    /// Remove the stored token. Removing an absent token is a no-op.
    fn clear(&self);
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.into()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl<T: TokenStore + ?Sized> TokenStore for Arc<T> {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        (**self).save(token)
    }

    fn clear(&self) {
        (**self).clear();
    }
}
