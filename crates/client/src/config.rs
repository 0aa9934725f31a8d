use towerlib_core::error::{TowerError, TowerResult};
use validator::Validate;

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for a single tower instance.
#[derive(Debug, Clone, Validate)]
pub struct TowerConfig {
    /// Hostname, optionally with a port (`tower.example.com:8443`).
    #[validate(length(min = 1, message = "host must not be empty"))]
    pub host: String,
    /// Basic-auth username.
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
    /// Basic-auth password.
    pub password: String,
    /// Use `https` when true, `http` otherwise.
    pub secure: bool,
    /// Verify the server TLS certificate.
    pub ssl_verify: bool,
    /// Per-request timeout in seconds.
    #[validate(range(min = 1, max = 600, message = "timeout must be between 1 and 600 seconds"))]
    pub timeout_secs: u64,
}

impl TowerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable             | Required | Default |
    /// |----------------------|----------|---------|
    /// | `TOWER_HOST`         | yes      | —       |
    /// | `TOWER_USERNAME`     | yes      | —       |
    /// | `TOWER_PASSWORD`     | yes      | —       |
    /// | `TOWER_SECURE`       | no       | `true`  |
    /// | `TOWER_SSL_VERIFY`   | no       | `true`  |
    /// | `TOWER_TIMEOUT_SECS` | no       | `30`    |
    pub fn from_env() -> TowerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// [`from_env`](Self::from_env) is this with `std::env::var`; tests pass
    /// a map instead of mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> TowerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| TowerError::Config(format!("{key} must be set")))
        };

        let host = required("TOWER_HOST")?;
        let username = required("TOWER_USERNAME")?;
        let password = required("TOWER_PASSWORD")?;

        let secure = parse_flag("TOWER_SECURE", lookup("TOWER_SECURE"), true)?;
        let ssl_verify = parse_flag("TOWER_SSL_VERIFY", lookup("TOWER_SSL_VERIFY"), true)?;

        let timeout_secs = match lookup("TOWER_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                TowerError::Config(format!(
                    "TOWER_TIMEOUT_SECS must be a valid u64, got '{raw}'"
                ))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let config = Self {
            host,
            username,
            password,
            secure,
            ssl_verify,
            timeout_secs,
        };
        config.check()?;
        Ok(config)
    }

    /// Run the field validation rules, mapping failures to
    /// [`TowerError::Config`].
    pub fn check(&self) -> TowerResult<()> {
        self.validate().map_err(|e| TowerError::Config(e.to_string()))
    }

    /// URL scheme implied by [`secure`](Self::secure).
    pub fn scheme(&self) -> &'static str {
        if self.secure {
            "https"
        } else {
            "http"
        }
    }
}

fn parse_flag(key: &str, raw: Option<String>, default: bool) -> TowerResult<bool> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(TowerError::Config(format!("{key} must be a boolean, got '{raw}'"))),
    }
}
