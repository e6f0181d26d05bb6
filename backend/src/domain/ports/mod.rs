//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod club_command;
mod club_member_repository;
mod club_repository;
mod membership_guard;
mod movie_search_query;
mod movie_searcher;
mod user_club_repository;

#[cfg(test)]
pub use club_command::MockClubCommand;
pub use club_command::{ClubCommand, CreateClubRequest, CreateClubResponse, FixtureClubCommand};
#[cfg(test)]
pub use club_member_repository::MockClubMemberRepository;
pub use club_member_repository::{
    ClubMemberRepository, ClubMemberRepositoryError, FixtureClubMemberRepository,
};
#[cfg(test)]
pub use club_repository::MockClubRepository;
pub use club_repository::{ClubRepository, ClubRepositoryError, FixtureClubRepository};
#[cfg(test)]
pub use membership_guard::MockMembershipGuard;
pub use membership_guard::{
    FixtureMembershipGuard, GuardOutcome, MembershipGuard, MembershipGuardError,
};
#[cfg(test)]
pub use movie_search_query::MockMovieSearchQuery;
pub use movie_search_query::{FixtureMovieSearchQuery, MovieSearchQuery, SearchMoviesRequest};
#[cfg(test)]
pub use movie_searcher::MockMovieSearcher;
pub use movie_searcher::{
    FixtureMovieSearcher, MovieSearchParams, MovieSearcher, MovieSearcherError,
};
#[cfg(test)]
pub use user_club_repository::MockUserClubRepository;
pub use user_club_repository::{
    FixtureUserClubRepository, UserClubRepository, UserClubRepositoryError,
};
