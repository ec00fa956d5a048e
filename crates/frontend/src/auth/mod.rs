//! Session handling

pub mod context;
pub mod error_handler;

pub use context::{
    use_is_authenticated, use_session, SessionAction, SessionContext, SessionProvider,
    SessionState,
};
