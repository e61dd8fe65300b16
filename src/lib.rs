//! Author accounts: a validated user entity and the argon2i hashing that
//! produces the credentials it accepts.

pub mod author;
pub mod config;
pub mod password;

pub use author::{
    validate_uuid, Author, AuthorError, AuthorField, AuthorRecord, IntoUuid, LengthRule,
    PublicAuthor, PASSWORD_HASH_LENGTH,
};
