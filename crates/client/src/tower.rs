//! The tower instance: base API URL plus the session every entity shares.

use std::fmt;
use std::sync::Arc;

use towerlib_core::error::TowerResult;

use crate::config::TowerConfig;
use crate::session::{HttpSession, Session};

/// Path of the REST API below the host.
const API_PATH: &str = "/api/v2";

/// Handle to one tower installation.
///
/// Entities hold an `Arc<Tower>` and go through [`api`](Self::api) and
/// [`session`](Self::session) for every request.
pub struct Tower {
    host: String,
    api: String,
    session: Arc<dyn Session>,
}

impl Tower {
    /// Connect to a tower using an [`HttpSession`] built from `config`.
    pub fn new(config: TowerConfig) -> TowerResult<Self> {
        config.check()?;
        let session = HttpSession::new(&config)?;
        tracing::info!(host = %config.host, secure = config.secure, "Tower client configured");
        Ok(Self::with_session(
            config.host,
            config.secure,
            Arc::new(session),
        ))
    }

    /// Load a `.env` file if present, then connect using
    /// [`TowerConfig::from_env`].
    pub fn from_env() -> TowerResult<Self> {
        dotenvy::dotenv().ok();
        Self::new(TowerConfig::from_env()?)
    }

    /// Build a tower around an arbitrary session implementation.
    pub fn with_session(host: impl Into<String>, secure: bool, session: Arc<dyn Session>) -> Self {
        let host = host.into();
        let scheme = if secure { "https" } else { "http" };
        let api = format!("{scheme}://{host}{API_PATH}");
        Self { host, api, session }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Base API URL without a trailing slash, e.g. `https://tower/api/v2`.
    pub fn api(&self) -> &str {
        &self.api
    }

    pub fn session(&self) -> &dyn Session {
        self.session.as_ref()
    }
}

impl fmt::Debug for Tower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tower")
            .field("host", &self.host)
            .field("api", &self.api)
            .finish_non_exhaustive()
    }
}
