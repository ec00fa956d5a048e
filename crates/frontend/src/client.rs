//! Client configuration and initialization

use crate::auth::error_handler::trigger_unauthorized;
use crate::config::ApiConfig;
use crate::storage::LocalTokenStore;
use portfolio_core::TokenStore;
pub use portfolio_http::ClientError;
use portfolio_http::{ApiClient, SessionInterceptor};
use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    /// Shared client; clones share its default authorization header
    static API_CLIENT: RefCell<Option<ApiClient>> = const { RefCell::new(None) };
}

fn build_client() -> Result<ApiClient, ClientError> {
    let store = LocalTokenStore;
    let mut builder = ApiClient::builder()
        .base_url(ApiConfig::base_url())
        .interceptor(SessionInterceptor::new(Rc::new(store), trigger_unauthorized));

    // Restore the header after a page reload
    if let Some(token) = store.token() {
        builder = builder.bearer_token(token);
    }

    builder.build()
}

/// Get the API client, creating it on first use
pub fn api_client() -> Result<ApiClient, ClientError> {
    API_CLIENT.with(|cell| {
        if let Some(client) = cell.borrow().as_ref() {
            return Ok(client.clone());
        }

        let client = build_client()?;
        *cell.borrow_mut() = Some(client.clone());
        Ok(client)
    })
}

/// Set or clear the default authorization header
pub fn set_auth_token(token: Option<&str>) -> Result<(), ClientError> {
    let client = api_client()?;
    match token {
        Some(token) => client.set_bearer_token(token),
        None => client.clear_bearer_token(),
    }
    Ok(())
}
