//! Development identity for HTTP handlers.
//!
//! There is no login flow yet. Outside production, [`DevAuth`] installs a
//! configured user id on every request, and callers may switch identity with
//! the `X-Dev-UserID` header. Handlers read the identity through the
//! [`CurrentUser`] extractor, which answers `401` when nothing was installed.

use std::task::{Context, Poll};

use actix_web::dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{Ready, ready};
use tracing::debug;

use crate::domain::{Error, UserId};

/// Header overriding the default development user.
pub const DEV_USER_HEADER: &str = "X-Dev-UserID";

/// Middleware installing a development identity on each request.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use filmclub::domain::UserId;
/// use filmclub::inbound::http::auth::DevAuth;
///
/// let app = App::new().wrap(DevAuth::enabled(UserId::random()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DevAuth {
    default_user: Option<UserId>,
}

impl DevAuth {
    /// Install `default_user` unless the request names another user.
    pub fn enabled(default_user: UserId) -> Self {
        Self {
            default_user: Some(default_user),
        }
    }

    /// Install nothing; every [`CurrentUser`] extraction fails.
    pub fn disabled() -> Self {
        Self { default_user: None }
    }
}

impl<S, B> Transform<S, ServiceRequest> for DevAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = DevAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(DevAuthMiddleware {
            service,
            default_user: self.default_user,
        }))
    }
}

/// Service wrapper produced by [`DevAuth`].
pub struct DevAuthMiddleware<S> {
    service: S,
    default_user: Option<UserId>,
}

fn header_user(req: &ServiceRequest) -> Option<UserId> {
    let raw = req.headers().get(DEV_USER_HEADER)?.to_str().ok()?;
    match UserId::new(raw) {
        Ok(user) => Some(user),
        Err(error) => {
            debug!(%error, "ignoring malformed dev user header");
            None
        }
    }
}

impl<S, B> Service<ServiceRequest> for DevAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = S::Future;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if let Some(default_user) = self.default_user {
            let user = header_user(&req).unwrap_or(default_user);
            req.extensions_mut().insert(CurrentUser(user));
        }
        self.service.call(req)
    }
}

/// Identity of the caller, as installed by [`DevAuth`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub UserId);

impl CurrentUser {
    /// The caller's user id.
    pub fn user_id(&self) -> UserId {
        self.0
    }
}

impl FromRequest for CurrentUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = req.extensions().get::<CurrentUser>().copied();
        ready(user.ok_or_else(|| Error::unauthorized("unauthorized")))
    }
}
