//! Persisted session token

use crate::error::StorageError;
use std::sync::Mutex;

/// Key the token is stored under in browser local storage
pub const TOKEN_KEY: &str = "token";

/// Storage for the opaque authentication token
///
/// The token is written by the login flow, read before every guarded
/// navigation and removed when the server rejects it.
pub trait TokenStore {
    /// Current token, if any. Empty strings count as no token.
    fn token(&self) -> Option<String>;

    fn store_token(&self, token: &str) -> Result<(), StorageError>;

    fn clear_token(&self);

    fn has_token(&self) -> bool {
        self.token().is_some()
    }
}

impl<T: TokenStore + ?Sized> TokenStore for std::rc::Rc<T> {
    fn token(&self) -> Option<String> {
        (**self).token()
    }

    fn store_token(&self, token: &str) -> Result<(), StorageError> {
        (**self).store_token(token)
    }

    fn clear_token(&self) {
        (**self).clear_token()
    }
}

/// In-process token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
            .filter(|t| !t.is_empty())
    }

    fn store_token(&self, token: &str) -> Result<(), StorageError> {
        let mut guard = self
            .token
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_memory_store_lifecycle() {
        let store = MemoryTokenStore::new();
        assert!(!store.has_token());

        store.store_token("abc").unwrap();
        assert_eq!(store.token().as_deref(), Some("abc"));

        store.clear_token();
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_empty_token_is_absent() {
        let store = MemoryTokenStore::with_token("");
        assert!(!store.has_token());
    }

    #[test]
    fn test_rc_store_shares_state() {
        let store = Rc::new(MemoryTokenStore::new());
        let other = Rc::clone(&store);
        other.store_token("shared").unwrap();
        assert_eq!(store.token().as_deref(), Some("shared"));
    }
}
