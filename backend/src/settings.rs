//! Application settings loaded via OrthoConfig.
//!
//! Every value may come from the command line or from a `FILMCLUB_*`
//! environment variable. Optional values fall back to the defaults exposed by
//! the accessor methods.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::domain::{UserId, UserIdValidationError};

const DEFAULT_SERVICE_NAME: &str = "filmclub-api";
const DEFAULT_ENV: &str = "local";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DATABASE_POOL_SIZE: u32 = 10;
const DEFAULT_DATABASE_CONNECT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_DEV_USER_ID: &str = "00000000-0000-4000-8000-000000000001";
const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";
const DEFAULT_TMDB_POSTER_SIZE: &str = "w342";
const DEFAULT_TMDB_BACKDROP_SIZE: &str = "w780";
const DEFAULT_TMDB_LANGUAGE: &str = "en-US";
const DEFAULT_TMDB_TIMEOUT_SECS: u64 = 10;

/// Environment name in which development identities are refused.
pub const PRODUCTION_ENV: &str = "production";

/// Errors raised when settings are individually valid but unusable.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// `bind_addr` is not a socket address.
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
    /// `tmdb_base_url` is not an absolute URL.
    #[error("invalid TMDB base URL {value:?}: {source}")]
    TmdbBaseUrl {
        value: String,
        source: url::ParseError,
    },
    /// `dev_user_id` is not a UUID.
    #[error("invalid dev user id {value:?}: {source}")]
    DevUserId {
        value: String,
        source: UserIdValidationError,
    },
    /// Dev auth was switched on while `env` is `production`.
    #[error("dev auth must not be enabled in production")]
    DevAuthInProduction,
}

/// Configuration for the film club API server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FILMCLUB")]
pub struct AppSettings {
    /// Service name reported by `GET /health`.
    pub service_name: Option<String>,
    /// Deployment environment: `local`, `dev` or `production`.
    pub env: Option<String>,
    /// Socket address to bind, e.g. `0.0.0.0:8080`.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL; in-memory stores are used when absent.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub database_pool_size: Option<u32>,
    /// Seconds to wait for a pooled connection before failing the request.
    pub database_connect_timeout_secs: Option<u64>,
    /// Install a development identity on every request.
    #[ortho_config(default = false)]
    pub dev_auth_enabled: bool,
    /// Identity installed by dev auth when no override header is sent.
    pub dev_user_id: Option<String>,
    /// TMDB API root.
    pub tmdb_base_url: Option<String>,
    /// TMDB v3 API key or v4 read access token; searches return empty pages
    /// when absent.
    pub tmdb_api_key: Option<String>,
    /// Root of TMDB image URLs; sizes and file paths are appended.
    pub tmdb_image_base: Option<String>,
    /// Poster size segment, e.g. `w342`.
    pub tmdb_poster_size: Option<String>,
    /// Backdrop size segment, e.g. `w780`.
    pub tmdb_backdrop_size: Option<String>,
    /// Language used when a search does not name one.
    pub tmdb_language: Option<String>,
    /// Include adult titles when a search does not say.
    #[ortho_config(default = false)]
    pub tmdb_include_adult: bool,
    /// Per-request TMDB timeout in seconds.
    pub tmdb_timeout_secs: Option<u64>,
}

impl AppSettings {
    /// Service name, defaulting to `filmclub-api`.
    pub fn service_name(&self) -> &str {
        self.service_name.as_deref().unwrap_or(DEFAULT_SERVICE_NAME)
    }

    /// Deployment environment, defaulting to `local`.
    pub fn env(&self) -> &str {
        self.env.as_deref().unwrap_or(DEFAULT_ENV)
    }

    /// Whether `env` names the production environment.
    pub fn is_production(&self) -> bool {
        self.env() == PRODUCTION_ENV
    }

    /// Parse the configured bind address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| SettingsError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    /// Database URL, treating an empty value as unset.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref().filter(|url| !url.is_empty())
    }

    /// Pool size, defaulting to ten and never below one.
    pub fn database_pool_size(&self) -> u32 {
        self.database_pool_size
            .unwrap_or(DEFAULT_DATABASE_POOL_SIZE)
            .max(1)
    }

    /// Pool checkout timeout, defaulting to thirty seconds.
    pub fn database_connect_timeout(&self) -> Duration {
        Duration::from_secs(
            self.database_connect_timeout_secs
                .unwrap_or(DEFAULT_DATABASE_CONNECT_TIMEOUT_SECS),
        )
    }

    /// Identity installed by dev auth, or `None` when dev auth is off.
    ///
    /// # Errors
    ///
    /// Refuses dev auth in production and rejects a malformed user id.
    pub fn dev_user(&self) -> Result<Option<UserId>, SettingsError> {
        if !self.dev_auth_enabled {
            return Ok(None);
        }
        if self.is_production() {
            return Err(SettingsError::DevAuthInProduction);
        }
        let value = self.dev_user_id.as_deref().unwrap_or(DEFAULT_DEV_USER_ID);
        UserId::new(value)
            .map(Some)
            .map_err(|source| SettingsError::DevUserId {
                value: value.to_owned(),
                source,
            })
    }

    /// Parse the TMDB API root.
    pub fn tmdb_base_url(&self) -> Result<Url, SettingsError> {
        let value = self.tmdb_base_url.as_deref().unwrap_or(DEFAULT_TMDB_BASE_URL);
        Url::parse(value).map_err(|source| SettingsError::TmdbBaseUrl {
            value: value.to_owned(),
            source,
        })
    }

    /// TMDB credential, treating an empty value as unset.
    pub fn tmdb_api_key(&self) -> Option<&str> {
        self.tmdb_api_key.as_deref().filter(|key| !key.is_empty())
    }

    pub fn tmdb_image_base(&self) -> &str {
        self.tmdb_image_base
            .as_deref()
            .unwrap_or(DEFAULT_TMDB_IMAGE_BASE)
    }

    pub fn tmdb_poster_size(&self) -> &str {
        self.tmdb_poster_size
            .as_deref()
            .unwrap_or(DEFAULT_TMDB_POSTER_SIZE)
    }

    pub fn tmdb_backdrop_size(&self) -> &str {
        self.tmdb_backdrop_size
            .as_deref()
            .unwrap_or(DEFAULT_TMDB_BACKDROP_SIZE)
    }

    /// Default search language, `en-US` unless configured.
    pub fn tmdb_language(&self) -> &str {
        self.tmdb_language.as_deref().unwrap_or(DEFAULT_TMDB_LANGUAGE)
    }

    /// TMDB request timeout, ten seconds unless configured.
    pub fn tmdb_timeout(&self) -> Duration {
        Duration::from_secs(self.tmdb_timeout_secs.unwrap_or(DEFAULT_TMDB_TIMEOUT_SECS))
    }
}
