//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use filmclub::domain::{MovieSearchDefaults, UserId};
use filmclub::inbound::http::health::ServiceInfo;
use filmclub::outbound::persistence::DbPool;
use filmclub::outbound::tmdb::TmdbImageSizes;
use url::Url;

/// Connection details for the TMDB search adapter.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub(crate) base_url: Url,
    pub(crate) api_key: String,
    pub(crate) images: TmdbImageSizes,
    pub(crate) timeout: Duration,
}

impl TmdbConfig {
    #[must_use]
    pub fn new(
        base_url: Url,
        api_key: impl Into<String>,
        images: TmdbImageSizes,
        timeout: Duration,
    ) -> Self {
        Self {
            base_url,
            api_key: api_key.into(),
            images,
            timeout,
        }
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) service_info: ServiceInfo,
    pub(crate) dev_user: Option<UserId>,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) tmdb: Option<TmdbConfig>,
    pub(crate) search_defaults: MovieSearchDefaults,
}

impl ServerConfig {
    /// Construct a configuration with in-memory stores, no dev identity and
    /// no movie catalogue.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, service_info: ServiceInfo) -> Self {
        Self {
            bind_addr,
            service_info,
            dev_user: None,
            db_pool: None,
            tmdb: None,
            search_defaults: MovieSearchDefaults::default(),
        }
    }

    /// Install `user` on every request that does not name another one.
    #[must_use]
    pub fn with_dev_user(mut self, user: Option<UserId>) -> Self {
        self.dev_user = user;
        self
    }

    /// Back the club views and the membership guard with PostgreSQL.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Serve movie searches from TMDB.
    #[must_use]
    pub fn with_tmdb(mut self, tmdb: TmdbConfig) -> Self {
        self.tmdb = Some(tmdb);
        self
    }

    #[must_use]
    pub fn with_search_defaults(mut self, defaults: MovieSearchDefaults) -> Self {
        self.search_defaults = defaults;
        self
    }
}
