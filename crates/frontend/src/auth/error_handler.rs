//! Global unauthorized-response handler
//!
//! The HTTP client's session interceptor calls [`trigger_unauthorized`] after
//! it has cleared the token. The application shell registers the callback
//! that updates the session context and navigates to the login route.

use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static UNAUTHORIZED_CALLBACK: RefCell<Option<Rc<dyn Fn()>>> = RefCell::new(None);
}

/// Set the global unauthorized callback
pub fn set_unauthorized_callback(callback: Rc<dyn Fn()>) {
    UNAUTHORIZED_CALLBACK.with(|cb| {
        *cb.borrow_mut() = Some(callback);
    });
}

/// Clear the unauthorized callback
pub fn clear_unauthorized_callback() {
    UNAUTHORIZED_CALLBACK.with(|cb| {
        *cb.borrow_mut() = None;
    });
}

/// Run the unauthorized callback, if one is registered
pub fn trigger_unauthorized() {
    // Clone out so the callback may re-register without a double borrow
    let callback = UNAUTHORIZED_CALLBACK.with(|cb| cb.borrow().clone());
    match callback {
        Some(callback) => callback(),
        None => tracing::warn!("Unauthorized response with no handler registered"),
    }
}
