//! Response interceptors

use super::{error::ClientError, ApiClient};
use portfolio_core::TokenStore;
use std::rc::Rc;

/// Hook run on every failed request before the error reaches the caller
///
/// Interceptors observe the error; they cannot replace it.
pub trait ResponseInterceptor {
    fn on_error(&self, error: &ClientError, client: &ApiClient);
}

/// Tears the session down when the server answers 401
///
/// Clears the persisted token and the client's default authorization
/// header, then runs `on_logout` (normally a redirect to the login route).
/// Any other error passes through untouched.
pub struct SessionInterceptor {
    store: Rc<dyn TokenStore>,
    on_logout: Rc<dyn Fn()>,
}

impl SessionInterceptor {
    pub fn new(store: Rc<dyn TokenStore>, on_logout: impl Fn() + 'static) -> Self {
        Self {
            store,
            on_logout: Rc::new(on_logout),
        }
    }
}

impl ResponseInterceptor for SessionInterceptor {
    fn on_error(&self, error: &ClientError, client: &ApiClient) {
        if !error.is_unauthorized() {
            return;
        }

        tracing::info!("Session rejected by server, logging out");
        self.store.clear_token();
        client.clear_bearer_token();
        (self.on_logout)();
    }
}
