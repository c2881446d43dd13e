use std::path::PathBuf;
use std::time::Duration;

use crate::editor::domain::PhotoPolicy;
use crate::notification::adapter::outgoing::DEFAULT_EMAIL_RELAY_ENDPOINT;

const DEFAULT_SESSION_TTL_SECS: i64 = 8 * 60 * 60;
const MAX_SESSION_TTL_SECS: u64 = 365 * 24 * 60 * 60;
const DEFAULT_OUTBOUND_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Process configuration, read once at startup.
#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Root directory of the file-backed key-value store.
    pub data_dir: PathBuf,
    pub admin_username: String,
    /// Argon2id PHC string.
    pub admin_password_hash: String,
    pub session_ttl: chrono::Duration,
    /// Stamped as `source` into outbound contact messages.
    pub public_origin: String,
    pub email_relay_endpoint: String,
    pub outbound_timeout: Duration,
    pub photo_max_bytes: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("data_dir", &self.data_dir)
            .field("admin_username", &self.admin_username)
            .field("admin_password_hash", &"<redacted>")
            .field("session_ttl", &self.session_ttl)
            .field("public_origin", &self.public_origin)
            .field("email_relay_endpoint", &self.email_relay_endpoint)
            .field("outbound_timeout", &self.outbound_timeout)
            .field("photo_max_bytes", &self.photo_max_bytes)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads every setting through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw,
                reason: "expected a port number",
            })?,
            None => 8080,
        };

        let admin_password_hash = require("ADMIN_PASSWORD_HASH")?;
        if !admin_password_hash.starts_with("$argon2") {
            return Err(ConfigError::Invalid {
                key: "ADMIN_PASSWORD_HASH",
                value: "<redacted>".to_string(),
                reason: "expected an Argon2 PHC string",
            });
        }

        let session_ttl_secs = parse_positive(&get, "ADMIN_SESSION_TTL_SECS")?
            .unwrap_or(DEFAULT_SESSION_TTL_SECS as u64);
        if session_ttl_secs > MAX_SESSION_TTL_SECS {
            return Err(ConfigError::Invalid {
                key: "ADMIN_SESSION_TTL_SECS",
                value: session_ttl_secs.to_string(),
                reason: "must not exceed one year",
            });
        }
        let outbound_timeout_secs = parse_positive(&get, "OUTBOUND_TIMEOUT_SECS")?
            .unwrap_or(DEFAULT_OUTBOUND_TIMEOUT_SECS);
        let photo_max_bytes = parse_positive(&get, "PHOTO_MAX_BYTES")?
            .map(|v| v as usize)
            .unwrap_or(PhotoPolicy::DEFAULT_MAX_FILE_SIZE_BYTES);

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            data_dir: get("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data")),
            admin_username: require("ADMIN_USERNAME")?,
            admin_password_hash,
            session_ttl: chrono::Duration::seconds(session_ttl_secs as i64),
            public_origin: get("PUBLIC_ORIGIN").unwrap_or_default(),
            email_relay_endpoint: get("EMAIL_RELAY_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_EMAIL_RELAY_ENDPOINT.to_string()),
            outbound_timeout: Duration::from_secs(outbound_timeout_secs),
            photo_max_bytes,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_positive(
    get: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<u64>, ConfigError> {
    let Some(raw) = get(key) else {
        return Ok(None);
    };

    match raw.parse::<u64>() {
        Ok(value) if value > 0 && value <= i64::MAX as u64 => Ok(Some(value)),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw,
            reason: "expected a positive integer",
        }),
    }
}
