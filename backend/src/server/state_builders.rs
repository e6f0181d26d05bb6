//! Builders for the driving ports behind the HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::{info, warn};

use filmclub::domain::ports::{ClubCommand, FixtureMovieSearcher, MovieSearchQuery};
use filmclub::domain::{
    ClubCreationService, IdGenerator, MovieSearchDefaults, MovieSearchService,
    TimeOrderedIdGenerator,
};
use filmclub::inbound::http::state::HttpState;
use filmclub::outbound::memory::{
    InMemoryClubMemberRepository, InMemoryClubRepository, InMemoryMembershipGuard,
    InMemoryUserClubRepository,
};
use filmclub::outbound::persistence::{
    DbPool, DieselClubMemberRepository, DieselClubRepository, DieselMembershipGuard,
    DieselUserClubRepository,
};
use filmclub::outbound::tmdb::TmdbMovieSearcher;

use super::ServerConfig;
use super::config::TmdbConfig;

fn build_club_command(pool: Option<&DbPool>) -> Arc<dyn ClubCommand> {
    let ids: Arc<dyn IdGenerator> = Arc::new(TimeOrderedIdGenerator);
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    match pool {
        Some(pool) => Arc::new(ClubCreationService::new(
            Arc::new(DieselClubRepository::new(pool.clone())),
            Arc::new(DieselClubMemberRepository::new(pool.clone())),
            Arc::new(DieselUserClubRepository::new(pool.clone())),
            Arc::new(DieselMembershipGuard::new(pool.clone())),
            ids,
            clock,
        )),
        None => {
            warn!("no database configured; club data is held in memory");
            Arc::new(ClubCreationService::new(
                Arc::new(InMemoryClubRepository::new()),
                Arc::new(InMemoryClubMemberRepository::new()),
                Arc::new(InMemoryUserClubRepository::new()),
                Arc::new(InMemoryMembershipGuard::new()),
                ids,
                clock,
            ))
        }
    }
}

fn build_movie_query(
    tmdb: Option<&TmdbConfig>,
    defaults: MovieSearchDefaults,
) -> std::io::Result<Arc<dyn MovieSearchQuery>> {
    match tmdb {
        Some(tmdb) => {
            let searcher = TmdbMovieSearcher::new(
                &tmdb.base_url,
                tmdb.api_key.clone(),
                tmdb.images.clone(),
                tmdb.timeout,
            )
            .map_err(|err| std::io::Error::other(format!("TMDB client setup failed: {err}")))?;
            Ok(Arc::new(MovieSearchService::new(Arc::new(searcher), defaults)))
        }
        None => {
            info!("TMDB API key not configured; movie search returns empty pages");
            Ok(Arc::new(MovieSearchService::new(
                Arc::new(FixtureMovieSearcher),
                defaults,
            )))
        }
    }
}

/// Build the handler state from the configured adapters.
///
/// # Errors
///
/// Returns [`std::io::Error`] when the TMDB client cannot be constructed.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let clubs = build_club_command(config.db_pool.as_ref());
    let movies = build_movie_query(config.tmdb.as_ref(), config.search_defaults.clone())?;
    Ok(web::Data::new(HttpState::new(clubs, movies)))
}
