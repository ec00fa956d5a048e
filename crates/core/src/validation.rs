//! Form field validation

use crate::error::FormError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters accepted as the "special" password character
pub const SPECIAL_CHARACTERS: &str = "@$!%*?&";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));
static UPPER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("valid pattern"));
static LOWER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").expect("valid pattern"));
// ASCII only; the `regex` crate's `\d` also matches other Unicode digits
static DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").expect("valid pattern"));
static SPECIAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("[{}]", regex::escape(SPECIAL_CHARACTERS))).expect("valid pattern")
});

/// Check that `email` looks like `local@domain.tld` with no whitespace
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// A single password rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PasswordRequirement {
    MinLength,
    HasUpper,
    HasLower,
    HasNumber,
    HasSpecial,
}

impl PasswordRequirement {
    /// All rules, in the order they are shown to the user
    pub const ALL: [Self; 5] = [
        Self::MinLength,
        Self::HasUpper,
        Self::HasLower,
        Self::HasNumber,
        Self::HasSpecial,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::MinLength => "At least 8 characters",
            Self::HasUpper => "One uppercase letter",
            Self::HasLower => "One lowercase letter",
            Self::HasNumber => "One number",
            Self::HasSpecial => "One special character (@$!%*?&)",
        }
    }
}

/// Outcome of checking a password against every rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordValidation {
    pub min_length: bool,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_number: bool,
    pub has_special: bool,
}

impl PasswordValidation {
    /// True when every rule is satisfied
    pub fn is_valid(&self) -> bool {
        PasswordRequirement::ALL.iter().all(|r| self.is_met(*r))
    }

    pub fn is_met(&self, requirement: PasswordRequirement) -> bool {
        match requirement {
            PasswordRequirement::MinLength => self.min_length,
            PasswordRequirement::HasUpper => self.has_upper,
            PasswordRequirement::HasLower => self.has_lower,
            PasswordRequirement::HasNumber => self.has_number,
            PasswordRequirement::HasSpecial => self.has_special,
        }
    }

    /// Rules the password failed, in display order
    pub fn unmet(&self) -> Vec<PasswordRequirement> {
        PasswordRequirement::ALL
            .into_iter()
            .filter(|r| !self.is_met(*r))
            .collect()
    }
}

/// Check `password` against the length and character-class rules
pub fn validate_password(password: &str) -> PasswordValidation {
    PasswordValidation {
        min_length: password.chars().count() >= MIN_PASSWORD_LENGTH,
        has_upper: UPPER_RE.is_match(password),
        has_lower: LOWER_RE.is_match(password),
        has_number: DIGIT_RE.is_match(password),
        has_special: SPECIAL_RE.is_match(password),
    }
}

/// Login form fields as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        if !validate_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

/// Signup form fields as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), FormError> {
        let required = [&self.first_name, &self.last_name, &self.email, &self.password];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(FormError::MissingFields);
        }
        if !validate_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        let password = validate_password(&self.password);
        if !password.is_valid() {
            return Err(FormError::WeakPassword(password.unmet()));
        }
        Ok(())
    }
}
