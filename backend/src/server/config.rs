//! Server settings loaded via OrthoConfig, and the session key they select.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use actix_web::cookie::Key;
use annotation_backend::outbound::persistence::DbPool;
use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::warn;
use zeroize::Zeroize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Shortest key file accepted by `Key::derive_from`.
pub const SESSION_KEY_MIN_LEN: usize = 32;

/// Settings read from CLI flags, `ANNOTATION_*` variables and config files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ANNOTATION")]
pub struct ServerSettings {
    /// Listen address; defaults to `0.0.0.0:8080`.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. Without it the in-memory store is used.
    pub database_url: Option<String>,
    /// File holding the session signing key material.
    pub session_key_file: Option<PathBuf>,
    /// Mark session cookies `Secure`; defaults to `true`.
    pub cookie_secure: Option<bool>,
    /// Accept a generated session key when the key file is unreadable;
    /// defaults to `false`.
    pub allow_ephemeral_session_key: Option<bool>,
}

/// Startup configuration failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid bind address '{value}': {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error("session key file not configured and ephemeral keys are disabled")]
    MissingSessionKey,
    #[error("failed to read session key at {path}: {source}")]
    SessionKeyRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("session key at {path} is {length} bytes; at least {min_len} required")]
    SessionKeyTooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
}

impl ServerSettings {
    /// Parsed listen address.
    ///
    /// # Errors
    /// Returns [`ConfigError::BindAddr`] when the address does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|source| ConfigError::BindAddr {
            value: raw.to_owned(),
            source,
        })
    }

    /// Whether session cookies carry the `Secure` attribute.
    pub fn cookie_secure(&self) -> bool {
        self.cookie_secure.unwrap_or(true)
    }

    /// Whether ephemeral session keys were explicitly enabled.
    pub fn allow_ephemeral_session_key(&self) -> bool {
        self.allow_ephemeral_session_key.unwrap_or(false)
    }

    /// Whether a generated key may replace a missing key file.
    fn ephemeral_allowed(&self) -> bool {
        cfg!(debug_assertions) || self.allow_ephemeral_session_key()
    }

    /// Derive the cookie signing key.
    ///
    /// Key bytes are zeroized once the key is derived.
    ///
    /// # Errors
    /// Fails when no usable key file exists and ephemeral keys are not
    /// allowed, or when the key file is too short.
    pub fn session_key(&self) -> Result<Key, ConfigError> {
        let Some(path) = self.session_key_file.as_deref() else {
            if self.ephemeral_allowed() {
                warn!("no session key file configured; using temporary key (dev only)");
                return Ok(Key::generate());
            }
            return Err(ConfigError::MissingSessionKey);
        };
        match std::fs::read(path) {
            Ok(bytes) => derive_key(path, bytes),
            Err(error) if self.ephemeral_allowed() => {
                warn!(
                    path = %path.display(),
                    %error,
                    "using temporary session key (dev only)"
                );
                Ok(Key::generate())
            }
            Err(source) => Err(ConfigError::SessionKeyRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

fn derive_key(path: &Path, mut bytes: Vec<u8>) -> Result<Key, ConfigError> {
    let length = bytes.len();
    if length < SESSION_KEY_MIN_LEN {
        bytes.zeroize();
        return Err(ConfigError::SessionKeyTooShort {
            path: path.to_path_buf(),
            length,
            min_len: SESSION_KEY_MIN_LEN,
        });
    }
    let key = Key::derive_from(&bytes);
    bytes.zeroize();
    Ok(key)
}

/// Resolved configuration handed to [`super::create_server`].
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            bind_addr,
            db_pool: None,
        }
    }

    /// Use Diesel repositories over this pool instead of the in-memory store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
