//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use arena_content::ContentPack;
use tracing::info;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Startup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind (`HOST`).
    pub host: String,
    /// Port to bind (`PORT`).
    pub port: u16,
    /// Content pack file (`ARENA_CONTENT_PATH`); the bundled pack when unset.
    pub content_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Reads `HOST`, `PORT` and `ARENA_CONTENT_PATH`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` is not a valid `u16`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` is not a valid `u16`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => DEFAULT_PORT,
        };
        let content_path = lookup("ARENA_CONTENT_PATH")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            content_path,
        })
    }

    /// The address to bind.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `HOST:PORT` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }

    /// Loads the configured content pack, or the bundled one.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Content` if the pack cannot be read or is invalid.
    pub fn load_content(&self) -> Result<ContentPack, AppError> {
        match &self.content_path {
            Some(path) => Ok(ContentPack::load(path)?),
            None => {
                info!("ARENA_CONTENT_PATH not set, using bundled content pack");
                Ok(ContentPack::bundled()?)
            }
        }
    }
}
