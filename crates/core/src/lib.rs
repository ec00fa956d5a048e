//! Portfolio core: session rules, route guarding and form validation
//!
//! Everything in this crate is target independent so the browser frontend
//! and native tests share the same decision logic.

pub mod error;
pub mod guard;
pub mod session;
pub mod types;
pub mod validation;

pub use error::{FormError, StorageError};
pub use guard::{before_each, Navigation, ProtectedRoute};
pub use session::{MemoryTokenStore, TokenStore, TOKEN_KEY};
pub use types::{
    ApiMessage, DashboardResponse, Holding, LoginRequest, LoginResponse, PortfolioResponse,
    SignupRequest, SignupResponse,
};
pub use validation::{
    validate_email, validate_password, LoginForm, PasswordRequirement, PasswordValidation,
    SignupForm,
};
