//! Domain primitives, services and ports.
//!
//! Purpose: model film clubs and their denormalised membership views, and
//! orchestrate the multi-view write that creates a club. Transport and
//! storage concerns stay behind the traits in [`ports`].
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic failure payload.
//! - Club, ClubMember, UserClub: rows of the three denormalised views.
//! - ClubCreationService: implements the `ClubCommand` driving port.
//! - MovieSearchService: implements the `MovieSearchQuery` driving port.

pub mod club;
mod club_creation_service;
pub mod error;
pub mod ids;
mod movie_search_service;
pub mod movies;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::club::{
    Club, ClubId, ClubMember, ClubName, ClubRole, ClubValidationError, JoinId, UserClub,
};
pub use self::club_creation_service::{ClubCreationService, CreationStep};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::ids::{IdGenerator, TimeOrderedIdGenerator};
pub use self::movie_search_service::{MovieSearchDefaults, MovieSearchService};
pub use self::movies::{Movie, Paged};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{UserId, UserIdValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use filmclub::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::unauthorized("login required"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
