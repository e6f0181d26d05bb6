//! Backend entry-point: loads settings, wires adapters and serves the REST API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use filmclub::domain::MovieSearchDefaults;
use filmclub::inbound::http::health::{HealthState, ServiceInfo};
use filmclub::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use filmclub::outbound::tmdb::TmdbImageSizes;
use filmclub::settings::AppSettings;

use server::{ServerConfig, TmdbConfig, create_server};

fn config_error(error: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(format!("invalid configuration: {error}"))
}

async fn connect_database(settings: &AppSettings, database_url: &str) -> std::io::Result<DbPool> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || run_pending_migrations(&url))
        .await
        .map_err(|err| std::io::Error::other(format!("migration task failed: {err}")))?
        .map_err(|err| std::io::Error::other(err.to_string()))?;

    let config = PoolConfig::new(database_url)
        .with_max_size(settings.database_pool_size())
        .with_connection_timeout(settings.database_connect_timeout());
    DbPool::new(config)
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))
}

fn tmdb_config(settings: &AppSettings) -> std::io::Result<Option<TmdbConfig>> {
    let Some(api_key) = settings.tmdb_api_key() else {
        return Ok(None);
    };
    let images = TmdbImageSizes {
        image_base: settings.tmdb_image_base().to_owned(),
        poster: settings.tmdb_poster_size().to_owned(),
        backdrop: settings.tmdb_backdrop_size().to_owned(),
    };
    Ok(Some(TmdbConfig::new(
        settings.tmdb_base_url().map_err(config_error)?,
        api_key,
        images,
        settings.tmdb_timeout(),
    )))
}

async fn build_server_config(settings: &AppSettings) -> std::io::Result<ServerConfig> {
    let bind_addr = settings.bind_addr().map_err(config_error)?;
    let dev_user = settings.dev_user().map_err(config_error)?;
    if let Some(user) = dev_user {
        warn!(user_id = %user, "dev auth enabled");
    }

    let service_info = ServiceInfo::new(
        settings.service_name(),
        settings.env(),
        bind_addr.to_string(),
    );
    let mut config = ServerConfig::new(bind_addr, service_info)
        .with_dev_user(dev_user)
        .with_search_defaults(MovieSearchDefaults {
            language: settings.tmdb_language().to_owned(),
            include_adult: settings.tmdb_include_adult,
        });

    if let Some(database_url) = settings.database_url() {
        let pool = connect_database(settings, database_url).await?;
        config = config.with_db_pool(pool);
    }
    if let Some(tmdb) = tmdb_config(settings)? {
        config = config.with_tmdb(tmdb);
    }
    Ok(config)
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(config_error)?;
    let config = build_server_config(&settings).await?;

    info!(
        service = settings.service_name(),
        env = settings.env(),
        bind_addr = %config.bind_addr,
        "starting server"
    );
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}
