//! Error types shared by the frontend crates

use crate::validation::PasswordRequirement;
use thiserror::Error;

/// Failures reading or writing the persisted session token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Browser storage is not reachable (no window, private mode, quota)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The storage backend rejected the write
    #[error("Failed to write {key}: {message}")]
    Write { key: String, message: String },
}

/// Client-side form validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password does not meet requirements: {}", format_unmet(.0))]
    WeakPassword(Vec<PasswordRequirement>),
}

fn format_unmet(unmet: &[PasswordRequirement]) -> String {
    unmet
        .iter()
        .map(|r| r.label())
        .collect::<Vec<_>>()
        .join(", ")
}
