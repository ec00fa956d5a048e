//! Local storage backed token store

use crate::config::AuthConfig;
use portfolio_core::{StorageError, TokenStore};
use web_sys::Storage;

/// Session token persisted in `window.localStorage`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalTokenStore;

impl LocalTokenStore {
    fn storage() -> Result<Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".into()))?
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".into()))
    }
}

impl TokenStore for LocalTokenStore {
    fn token(&self) -> Option<String> {
        Self::storage()
            .ok()?
            .get_item(AuthConfig::TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }

    fn store_token(&self, token: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(AuthConfig::TOKEN_KEY, token)
            .map_err(|e| StorageError::Write {
                key: AuthConfig::TOKEN_KEY.to_string(),
                message: format!("{e:?}"),
            })
    }

    fn clear_token(&self) {
        match Self::storage() {
            Ok(storage) => {
                let _ = storage.remove_item(AuthConfig::TOKEN_KEY);
            }
            Err(e) => tracing::warn!(error = %e, "Could not clear session token"),
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_token_round_trips_through_local_storage() {
        let store = LocalTokenStore;
        store.clear_token();
        assert_eq!(store.token(), None);

        store.store_token("jwt-abc").unwrap();
        assert_eq!(store.token().as_deref(), Some("jwt-abc"));

        let raw = LocalTokenStore::storage()
            .unwrap()
            .get_item(AuthConfig::TOKEN_KEY)
            .unwrap();
        assert_eq!(raw.as_deref(), Some("jwt-abc"));

        store.clear_token();
        assert!(!store.has_token());
    }
}
