mod dto;
mod entity;
mod error;
pub mod validate;

pub use dto::{AuthorRecord, PublicAuthor};
pub use entity::Author;
pub use error::{AuthorError, AuthorField, LengthRule};
pub use validate::{validate_uuid, IntoUuid, PASSWORD_HASH_LENGTH};
