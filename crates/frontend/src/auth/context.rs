//! Global session context and provider

use crate::client::set_auth_token;
use crate::config::AuthConfig;
use crate::storage::LocalTokenStore;
use portfolio_core::TokenStore;
use std::rc::Rc;
use yew::prelude::*;

/// Session context data
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    /// One-off message for the next view (expired session, account created)
    pub notice: Option<String>,
}

/// Session context actions
pub enum SessionAction {
    Login(String),
    Logout,
    /// The server rejected the token
    Expired,
    Notify(String),
    DismissNotice,
}

/// Session context
pub type SessionContext = UseReducerHandle<SessionState>;

impl Default for SessionState {
    fn default() -> Self {
        Self {
            token: LocalTokenStore.token(),
            notice: None,
        }
    }
}

impl SessionState {
    /// Notice to show after the server rejects the token
    ///
    /// A 401 from the login form itself is not an expiry, so the current
    /// notice is kept unless a token was actually held.
    fn expired_notice(&self) -> Option<String> {
        if self.token.is_some() {
            Some(AuthConfig::SESSION_EXPIRED_NOTICE.to_string())
        } else {
            self.notice.clone()
        }
    }
}

fn teardown() {
    LocalTokenStore.clear_token();
    if let Err(e) = set_auth_token(None) {
        tracing::warn!(error = %e, "Failed to clear authorization header");
    }
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::Login(token) => {
                if let Err(e) = LocalTokenStore.store_token(&token) {
                    tracing::error!(error = %e, "Failed to persist session token");
                }
                if let Err(e) = set_auth_token(Some(&token)) {
                    tracing::error!(error = %e, "Failed to set authorization header");
                }
                tracing::info!("Logged in");

                Rc::new(Self {
                    token: Some(token),
                    notice: None,
                })
            }
            SessionAction::Logout => {
                teardown();
                tracing::info!("Logged out");

                Rc::new(Self {
                    token: None,
                    notice: None,
                })
            }
            SessionAction::Expired => {
                teardown();

                Rc::new(Self {
                    token: None,
                    notice: self.expired_notice(),
                })
            }
            SessionAction::Notify(notice) => Rc::new(Self {
                notice: Some(notice),
                ..(*self).clone()
            }),
            SessionAction::DismissNotice => Rc::new(Self {
                notice: None,
                ..(*self).clone()
            }),
        }
    }
}

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Session provider component
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(SessionState::default);

    html! {
        <ContextProvider<SessionContext> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}

/// Hook to check if a token is held
#[hook]
pub fn use_is_authenticated() -> bool {
    let session = use_session();
    session.token.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_with_token_shows_session_notice() {
        let state = SessionState {
            token: Some("jwt".into()),
            notice: None,
        };
        assert_eq!(
            state.expired_notice().as_deref(),
            Some(AuthConfig::SESSION_EXPIRED_NOTICE)
        );
    }

    #[test]
    fn test_rejected_login_keeps_current_notice() {
        let state = SessionState {
            token: None,
            notice: None,
        };
        assert_eq!(state.expired_notice(), None);

        let state = SessionState {
            token: None,
            notice: Some("Account created. Please log in.".into()),
        };
        assert_eq!(
            state.expired_notice().as_deref(),
            Some("Account created. Please log in.")
        );
    }
}
