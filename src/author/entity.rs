use tracing::debug;
use uuid::Uuid;

use crate::author::error::AuthorError;
use crate::author::validate::{self, IntoUuid};

/// Author account: identity, pending activation, profile and credential.
///
/// ## Invariants
/// - every required field passed its rule in [`validate`];
/// - `activation_token` is `None` or exactly 32 lowercase hex characters;
/// - `password_hash` is an argon2i PHC string of
///   [`validate::PASSWORD_HASH_LENGTH`] characters.
///
/// Setters validate before assigning, so a rejected value leaves the author
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    id: Uuid,
    activation_token: Option<String>,
    avatar_url: String,
    email: String,
    password_hash: String,
    username: String,
}

impl Author {
    /// Validate all six fields and build the author, failing on the first
    /// rejected field.
    pub fn new(
        id: impl IntoUuid,
        activation_token: Option<&str>,
        avatar_url: &str,
        email: &str,
        password_hash: &str,
        username: &str,
    ) -> Result<Self, AuthorError> {
        Self::try_build(
            id,
            activation_token,
            avatar_url,
            email,
            password_hash,
            username,
        )
        .inspect_err(|e| debug!(field = %e.field(), error = %e, "author rejected"))
    }

    fn try_build(
        id: impl IntoUuid,
        activation_token: Option<&str>,
        avatar_url: &str,
        email: &str,
        password_hash: &str,
        username: &str,
    ) -> Result<Self, AuthorError> {
        Ok(Self {
            id: id.into_uuid()?,
            activation_token: validate::activation_token(activation_token)?,
            avatar_url: validate::avatar_url(avatar_url)?,
            email: validate::email(email)?,
            password_hash: validate::password_hash(password_hash)?,
            username: validate::username(username)?,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn set_id(&mut self, id: impl IntoUuid) -> Result<(), AuthorError> {
        self.id = id.into_uuid()?;
        Ok(())
    }

    /// Pending activation token, `None` once activated or before one is issued.
    pub fn activation_token(&self) -> Option<&str> {
        self.activation_token.as_deref()
    }

    pub fn set_activation_token(&mut self, token: Option<&str>) -> Result<(), AuthorError> {
        self.activation_token = validate::activation_token(token)?;
        Ok(())
    }

    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }

    pub fn set_avatar_url(&mut self, avatar_url: &str) -> Result<(), AuthorError> {
        self.avatar_url = validate::avatar_url(avatar_url)?;
        Ok(())
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: &str) -> Result<(), AuthorError> {
        self.email = validate::email(email)?;
        Ok(())
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn set_password_hash(&mut self, password_hash: &str) -> Result<(), AuthorError> {
        self.password_hash = validate::password_hash(password_hash)?;
        Ok(())
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn set_username(&mut self, username: &str) -> Result<(), AuthorError> {
        self.username = validate::username(username)?;
        Ok(())
    }
}
