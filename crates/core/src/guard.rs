//! Global navigation guard

use crate::session::TokenStore;

/// A route table entry the guard can reason about
pub trait ProtectedRoute: Clone {
    /// Whether entering this route needs a session token
    fn requires_auth(&self) -> bool;

    /// Where unauthenticated visitors are sent instead
    fn login() -> Self;
}

/// Result of running the guard for a navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation<R> {
    /// Render the requested route
    Proceed(R),
    /// Replace the navigation with another route
    Redirect(R),
}

impl<R> Navigation<R> {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect(_))
    }

    /// The route that will actually be shown
    pub fn into_route(self) -> R {
        match self {
            Self::Proceed(route) | Self::Redirect(route) => route,
        }
    }
}

/// Decide whether navigating to `to` may proceed
///
/// Routes flagged with [`ProtectedRoute::requires_auth`] need a token in
/// `store`; without one the navigation is redirected to the login route.
pub fn before_each<R, S>(to: R, store: &S) -> Navigation<R>
where
    R: ProtectedRoute,
    S: TokenStore + ?Sized,
{
    if !to.requires_auth() {
        return Navigation::Proceed(to);
    }

    if store.has_token() {
        Navigation::Proceed(to)
    } else {
        tracing::debug!("No session token, redirecting to login");
        Navigation::Redirect(R::login())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryTokenStore;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum TestRoute {
        Home,
        Login,
        Dashboard,
    }

    impl ProtectedRoute for TestRoute {
        fn requires_auth(&self) -> bool {
            matches!(self, Self::Dashboard)
        }

        fn login() -> Self {
            Self::Login
        }
    }

    #[test]
    fn test_protected_route_without_token_redirects() {
        let store = MemoryTokenStore::new();
        let nav = before_each(TestRoute::Dashboard, &store);
        assert_eq!(nav, Navigation::Redirect(TestRoute::Login));
        assert!(nav.is_redirect());
    }

    #[test]
    fn test_protected_route_with_token_proceeds() {
        let store = MemoryTokenStore::with_token("jwt");
        let nav = before_each(TestRoute::Dashboard, &store);
        assert_eq!(nav, Navigation::Proceed(TestRoute::Dashboard));
    }

    #[test]
    fn test_unflagged_routes_always_proceed() {
        let store = MemoryTokenStore::new();
        assert_eq!(
            before_each(TestRoute::Home, &store),
            Navigation::Proceed(TestRoute::Home)
        );
        assert_eq!(
            before_each(TestRoute::Login, &store).into_route(),
            TestRoute::Login
        );
    }

    #[test]
    fn test_cleared_token_redirects_again() {
        let store = MemoryTokenStore::with_token("jwt");
        assert!(!before_each(TestRoute::Dashboard, &store).is_redirect());
        store.clear_token();
        assert!(before_each(TestRoute::Dashboard, &store).is_redirect());
    }
}
