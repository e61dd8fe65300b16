use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::author::entity::Author;
use crate::author::error::AuthorError;

/// Raw author document as stored or exchanged; validated on conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AuthorRecord {
    pub id: String,
    #[serde(default)]
    pub activation_token: Option<String>,
    pub avatar_url: String,
    pub email: String,
    pub password_hash: String,
    pub username: String,
}

impl TryFrom<AuthorRecord> for Author {
    type Error = AuthorError;

    fn try_from(r: AuthorRecord) -> Result<Self, Self::Error> {
        Author::new(
            r.id.as_str(),
            r.activation_token.as_deref(),
            &r.avatar_url,
            &r.email,
            &r.password_hash,
            &r.username,
        )
    }
}

impl From<Author> for AuthorRecord {
    fn from(a: Author) -> Self {
        Self {
            id: a.id().to_string(),
            activation_token: a.activation_token().map(str::to_owned),
            avatar_url: a.avatar_url().to_owned(),
            email: a.email().to_owned(),
            password_hash: a.password_hash().to_owned(),
            username: a.username().to_owned(),
        }
    }
}

impl Serialize for Author {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        AuthorRecord::from(self.clone()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Author {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = AuthorRecord::deserialize(deserializer)?;
        Author::try_from(record).map_err(serde::de::Error::custom)
    }
}

/// Public part of the author returned to other users.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicAuthor {
    pub id: Uuid,
    pub avatar_url: String,
    pub username: String,
}

impl From<&Author> for PublicAuthor {
    fn from(a: &Author) -> Self {
        Self {
            id: a.id(),
            avatar_url: a.avatar_url().to_owned(),
            username: a.username().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::author::fixtures::{sample_author, ARGON2I_HASH, ID};
    use serde_json::json;

    #[test]
    fn serializes_camel_case_record() {
        let value = serde_json::to_value(sample_author()).unwrap();
        assert_eq!(value["id"], ID);
        assert_eq!(value["activationToken"], "09090909099999999999999999999999");
        assert_eq!(value["passwordHash"], ARGON2I_HASH);
        assert_eq!(value["avatarUrl"], "https://example.com/avatars/myusername.png");
    }

    #[test]
    fn deserialize_validates_and_normalizes() {
        let author: Author = serde_json::from_value(json!({
            "id": ID,
            "activationToken": "ABCDEF0123456789ABCDEF0123456789",
            "avatarUrl": "https://example.com/a",
            "email": " user@example.com ",
            "passwordHash": ARGON2I_HASH,
            "username": "myusername",
        }))
        .expect("valid document");
        assert_eq!(author.activation_token(), Some("abcdef0123456789abcdef0123456789"));
        assert_eq!(author.email(), "user@example.com");
    }

    #[test]
    fn missing_token_deserializes_as_none() {
        let author: Author = serde_json::from_value(json!({
            "id": ID,
            "avatarUrl": "https://example.com/a",
            "email": "user@example.com",
            "passwordHash": ARGON2I_HASH,
            "username": "myusername",
        }))
        .expect("token is optional");
        assert_eq!(author.activation_token(), None);
    }

    #[test]
    fn deserialize_rejects_invalid_field() {
        let err = serde_json::from_value::<Author>(json!({
            "id": ID,
            "activationToken": null,
            "avatarUrl": "https://example.com/a",
            "email": "not-an-email",
            "passwordHash": ARGON2I_HASH,
            "username": "myusername",
        }))
        .unwrap_err();
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn deserialize_rejects_unknown_keys() {
        let mut value = serde_json::to_value(sample_author()).unwrap();
        value["role"] = json!("admin");
        assert!(serde_json::from_value::<Author>(value).is_err());
    }

    #[test]
    fn serialized_author_deserializes_to_equal_value() {
        let author = sample_author();
        let text = serde_json::to_string(&author).unwrap();
        let back: Author = serde_json::from_str(&text).unwrap();
        assert_eq!(back, author);
    }

    #[test]
    fn public_author_hides_credentials() {
        let json = serde_json::to_string(&PublicAuthor::from(&sample_author())).unwrap();
        assert!(json.contains("myusername"));
        assert!(json.contains("avatarUrl"));
        assert!(!json.contains("passwordHash"));
        assert!(!json.contains("email"));
        assert!(!json.contains("activationToken"));
    }
}
