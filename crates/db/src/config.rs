use std::time::Duration;

/// Database connection settings.
///
/// | Env Var                 | Default  |
/// |-------------------------|----------|
/// | `DATABASE_URL`          | required |
/// | `DB_MAX_CONNECTIONS`    | `10`     |
/// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`    |
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
    /// How long a request waits for a pooled connection before failing.
    pub acquire_timeout: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum DbConfigError {
    #[error("DATABASE_URL must be set")]
    MissingUrl,

    #[error("{name} must be a positive integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

impl DbConfig {
    pub fn from_env() -> Result<Self, DbConfigError> {
        let url = std::env::var("DATABASE_URL").map_err(|_| DbConfigError::MissingUrl)?;
        let max_connections = positive_from_env("DB_MAX_CONNECTIONS", 10)?;
        let acquire_timeout_secs = positive_from_env("DB_ACQUIRE_TIMEOUT_SECS", 5)?;

        Ok(Self {
            url,
            max_connections,
            acquire_timeout: Duration::from_secs(u64::from(acquire_timeout_secs)),
        })
    }
}

fn positive_from_env(name: &'static str, default: u32) -> Result<u32, DbConfigError> {
    match std::env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => match raw.trim().parse::<u32>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(DbConfigError::InvalidNumber { name, value: raw }),
        },
    }
}
