use argon2::Params;
use serde::Deserialize;

use crate::author::PASSWORD_HASH_LENGTH;

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub filter: String,
    pub json: bool,
}

/// Argon2i cost settings used when hashing new passwords.
///
/// The defaults encode to [`crate::PASSWORD_HASH_LENGTH`] characters; costs
/// with a different digit count produce hashes `Author` rejects.
#[derive(Debug, Clone, Deserialize)]
pub struct HasherConfig {
    pub memory_kib: u32,
    pub time_cost: u32,
    pub parallelism: u32,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            memory_kib: 65536,
            time_cost: 7,
            parallelism: 1,
        }
    }
}

impl HasherConfig {
    pub fn params(&self) -> anyhow::Result<Params> {
        Params::new(self.memory_kib, self.time_cost, self.parallelism, None)
            .map_err(|e| anyhow::anyhow!("invalid argon2 params: {e}"))
    }

    /// Length of the PHC string these costs encode to, with the default
    /// 16-byte salt and 32-byte output.
    pub fn encoded_len(&self) -> usize {
        let digits = |n: u32| n.to_string().len();
        "$argon2i$v=19$m=".len()
            + digits(self.memory_kib)
            + ",t=".len()
            + digits(self.time_cost)
            + ",p=".len()
            + digits(self.parallelism)
            + "$".len()
            + 22
            + "$".len()
            + 43
    }

    /// Reject costs argon2 refuses or whose hashes `Author` would not accept.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.params()?;
        let len = self.encoded_len();
        if len != PASSWORD_HASH_LENGTH {
            anyhow::bail!(
                "argon2 costs m={},t={},p={} encode to {len} characters, expected {PASSWORD_HASH_LENGTH}",
                self.memory_kib,
                self.time_cost,
                self.parallelism,
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub log: LogConfig,
    pub hasher: HasherConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let log = LogConfig {
            filter: std::env::var("RUST_LOG").unwrap_or_else(|_| "author_accounts=debug".into()),
            json: std::env::var("LOG_FORMAT")
                .map(|v| v == "json")
                .unwrap_or(false),
        };
        let defaults = HasherConfig::default();
        let hasher = HasherConfig {
            memory_kib: env_u32("ARGON2_MEMORY_KIB").unwrap_or(defaults.memory_kib),
            time_cost: env_u32("ARGON2_TIME_COST").unwrap_or(defaults.time_cost),
            parallelism: env_u32("ARGON2_PARALLELISM").unwrap_or(defaults.parallelism),
        };
        hasher.validate()?;
        Ok(Self { log, hasher })
    }
}

fn env_u32(key: &str) -> Option<u32> {
    std::env::var(key).ok().and_then(|v| v.parse::<u32>().ok())
}
