use std::fmt;

use thiserror::Error;

/// Author field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorField {
    Id,
    ActivationToken,
    AvatarUrl,
    Email,
    PasswordHash,
    Username,
}

impl fmt::Display for AuthorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Id => "author id",
            Self::ActivationToken => "activation token",
            Self::AvatarUrl => "avatar url",
            Self::Email => "email",
            Self::PasswordHash => "password hash",
            Self::Username => "username",
        };
        f.write_str(name)
    }
}

/// Length bound that a field failed to meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRule {
    AtMost(usize),
    Exactly(usize),
}

impl fmt::Display for LengthRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtMost(max) => write!(f, "at most {max}"),
            Self::Exactly(len) => write!(f, "exactly {len}"),
        }
    }
}

/// Validation failure raised by [`crate::Author`] constructors and setters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorError {
    #[error("{field} is invalid: {reason}")]
    InvalidFormat {
        field: AuthorField,
        reason: &'static str,
    },
    #[error("{field} must be {rule} characters, got {actual}")]
    InvalidLength {
        field: AuthorField,
        rule: LengthRule,
        actual: usize,
    },
    #[error("author id is not a valid uuid: {0:?}")]
    InvalidIdentifier(String),
}

impl AuthorError {
    pub(crate) fn format(field: AuthorField, reason: &'static str) -> Self {
        Self::InvalidFormat { field, reason }
    }

    pub(crate) fn length(field: AuthorField, rule: LengthRule, actual: usize) -> Self {
        Self::InvalidLength {
            field,
            rule,
            actual,
        }
    }

    /// Field the failure refers to.
    pub fn field(&self) -> AuthorField {
        match self {
            Self::InvalidFormat { field, .. } | Self::InvalidLength { field, .. } => *field,
            Self::InvalidIdentifier(_) => AuthorField::Id,
        }
    }
}
