//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    ClubCommand, FixtureClubCommand, FixtureMovieSearchQuery, MovieSearchQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub clubs: Arc<dyn ClubCommand>,
    pub movies: Arc<dyn MovieSearchQuery>,
}

impl HttpState {
    /// Bundle the driving ports used by the handlers.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use filmclub::domain::ports::{FixtureClubCommand, FixtureMovieSearchQuery};
    /// use filmclub::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureClubCommand), Arc::new(FixtureMovieSearchQuery));
    /// let _clubs = state.clubs.clone();
    /// ```
    pub fn new(clubs: Arc<dyn ClubCommand>, movies: Arc<dyn MovieSearchQuery>) -> Self {
        Self { clubs, movies }
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(Arc::new(FixtureClubCommand), Arc::new(FixtureMovieSearchQuery))
    }
}
