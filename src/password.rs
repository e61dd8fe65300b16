use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Algorithm, Argon2, Version,
};
use rand::rngs::OsRng;
use tracing::error;

use crate::config::HasherConfig;

/// Hash `plain` with Argon2i into a PHC string accepted by
/// [`crate::Author::set_password_hash`] when `config` keeps the default cost
/// digit counts.
pub fn hash_password(plain: &str, config: &HasherConfig) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::new(Algorithm::Argon2i, Version::V0x13, config.params()?);
    let hash = argon2
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::author::validate;

    fn cheap() -> HasherConfig {
        // Still five digits of memory so the encoded length matches.
        HasherConfig {
            memory_kib: 10240,
            time_cost: 1,
            parallelism: 1,
        }
    }

    #[test]
    fn hash_is_accepted_by_author_rules() {
        let hash = hash_password("password", &cheap()).expect("hashing should succeed");
        assert!(hash.starts_with("$argon2i$v=19$m=10240,t=1,p=1$"));
        assert_eq!(hash.len(), validate::PASSWORD_HASH_LENGTH);
        assert_eq!(hash.len(), cheap().encoded_len());
        assert_eq!(validate::password_hash(&hash).expect("valid hash"), hash);
    }

    #[test]
    fn salts_differ_between_calls() {
        let a = hash_password("password", &cheap()).unwrap();
        let b = hash_password("password", &cheap()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn invalid_params_error() {
        let config = HasherConfig {
            memory_kib: 1,
            ..cheap()
        };
        assert!(hash_password("password", &config).is_err());
    }
}
