//! Field rules shared by [`crate::Author`] construction, setters and deserialization.
//!
//! Every function takes the raw input and returns the normalized value that
//! the entity stores, or the [`AuthorError`] describing the first rule broken.

use argon2::Algorithm;
use lazy_static::lazy_static;
use regex::Regex;
use url::Url;
use uuid::Uuid;

use crate::author::error::{AuthorError, AuthorField, LengthRule};

/// Exact length of an activation token.
pub const ACTIVATION_TOKEN_LENGTH: usize = 32;
/// Longest avatar url the account store accepts.
pub const AVATAR_URL_MAX_LENGTH: usize = 255;
/// Longest email the account store accepts.
pub const EMAIL_MAX_LENGTH: usize = 128;
/// Longest username the account store accepts.
pub const USERNAME_MAX_LENGTH: usize = 32;

/// Encoded length of an argon2i PHC string produced with five-digit memory
/// cost and single-digit time cost and parallelism, e.g.
/// `$argon2i$v=19$m=65536,t=7,p=1$<22 salt chars>$<43 hash chars>`.
///
/// Other cost settings change the encoded length (`t=16` yields 97), and such
/// hashes are rejected.
pub const PASSWORD_HASH_LENGTH: usize = 96;

/// Algorithm tag every accepted password hash must carry.
pub const PASSWORD_HASH_ALGORITHM: Algorithm = Algorithm::Argon2i;

/// Schemes that are valid without a host part.
const HOSTLESS_SCHEMES: [&str; 3] = ["mailto", "news", "file"];

/// Parse `candidate` as a UUID.
pub fn validate_uuid(candidate: &str) -> Result<Uuid, AuthorError> {
    Uuid::parse_str(candidate).map_err(|_| AuthorError::InvalidIdentifier(candidate.to_owned()))
}

/// Values the author id setter accepts: textual UUIDs, typed ones, or raw bytes.
pub trait IntoUuid {
    fn into_uuid(self) -> Result<Uuid, AuthorError>;
}

impl IntoUuid for Uuid {
    fn into_uuid(self) -> Result<Uuid, AuthorError> {
        Ok(self)
    }
}

impl IntoUuid for [u8; 16] {
    fn into_uuid(self) -> Result<Uuid, AuthorError> {
        Ok(Uuid::from_bytes(self))
    }
}

impl IntoUuid for &str {
    fn into_uuid(self) -> Result<Uuid, AuthorError> {
        validate_uuid(self)
    }
}

impl IntoUuid for &String {
    fn into_uuid(self) -> Result<Uuid, AuthorError> {
        validate_uuid(self)
    }
}

impl IntoUuid for String {
    fn into_uuid(self) -> Result<Uuid, AuthorError> {
        validate_uuid(&self)
    }
}

pub fn activation_token(raw: Option<&str>) -> Result<Option<String>, AuthorError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let token = raw.trim().to_lowercase();
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AuthorError::format(
            AuthorField::ActivationToken,
            "token must be hexadecimal",
        ));
    }
    let len = token.chars().count();
    if len != ACTIVATION_TOKEN_LENGTH {
        return Err(AuthorError::length(
            AuthorField::ActivationToken,
            LengthRule::Exactly(ACTIVATION_TOKEN_LENGTH),
            len,
        ));
    }
    Ok(Some(token))
}

pub fn avatar_url(raw: &str) -> Result<String, AuthorError> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(AuthorError::format(AuthorField::AvatarUrl, "url is empty"));
    }
    // Parsed only to check syntax; the trimmed input is what gets stored.
    let parsed = Url::parse(url).map_err(|_| {
        AuthorError::format(AuthorField::AvatarUrl, "not an absolute url")
    })?;
    if !parsed.has_host() && !HOSTLESS_SCHEMES.contains(&parsed.scheme()) {
        return Err(AuthorError::format(
            AuthorField::AvatarUrl,
            "url has no host",
        ));
    }
    check_max(AuthorField::AvatarUrl, url, AVATAR_URL_MAX_LENGTH)?;
    Ok(url.to_owned())
}

pub fn email(raw: &str) -> Result<String, AuthorError> {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").unwrap();
    }
    let email = raw.trim();
    if email.is_empty() {
        return Err(AuthorError::format(AuthorField::Email, "email is empty"));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(AuthorError::format(
            AuthorField::Email,
            "not an email address",
        ));
    }
    check_max(AuthorField::Email, email, EMAIL_MAX_LENGTH)?;
    Ok(email.to_owned())
}

pub fn password_hash(raw: &str) -> Result<String, AuthorError> {
    let hash = raw.trim();
    if hash.is_empty() {
        return Err(AuthorError::format(
            AuthorField::PasswordHash,
            "hash is empty",
        ));
    }
    if algorithm_tag(hash) != Some(PASSWORD_HASH_ALGORITHM.as_str()) {
        return Err(AuthorError::format(
            AuthorField::PasswordHash,
            "hash is not argon2i",
        ));
    }
    let len = hash.chars().count();
    if len != PASSWORD_HASH_LENGTH {
        return Err(AuthorError::length(
            AuthorField::PasswordHash,
            LengthRule::Exactly(PASSWORD_HASH_LENGTH),
            len,
        ));
    }
    Ok(hash.to_owned())
}

/// Algorithm ident of a `$<ident>$...` encoded hash; the rest is not decoded.
fn algorithm_tag(hash: &str) -> Option<&str> {
    let (tag, _) = hash.strip_prefix('$')?.split_once('$')?;
    Some(tag)
}

pub fn username(raw: &str) -> Result<String, AuthorError> {
    let username = sanitize_text(raw.trim());
    if username.is_empty() {
        return Err(AuthorError::format(
            AuthorField::Username,
            "username is empty",
        ));
    }
    check_max(AuthorField::Username, &username, USERNAME_MAX_LENGTH)?;
    Ok(username)
}

/// Strip markup tags and control characters, leaving quotes untouched.
///
/// A `<` followed by a non-space character opens a tag that runs to the next
/// `>`, or to the end of the input when unclosed.
pub fn sanitize_text(input: &str) -> String {
    lazy_static! {
        static ref TAG_RE: Regex = Regex::new(r"<[^\s>][^>]*>?").unwrap();
    }
    TAG_RE
        .replace_all(input, "")
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_owned()
}

fn check_max(field: AuthorField, value: &str, max: usize) -> Result<(), AuthorError> {
    let len = value.chars().count();
    if len > max {
        return Err(AuthorError::length(field, LengthRule::AtMost(max), len));
    }
    Ok(())
}
