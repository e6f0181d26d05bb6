//! Health endpoints: service summary plus liveness and readiness probes.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::inbound::http::cache_control::no_store_header;

/// Readiness and liveness flags shared between the server and the probes.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    /// Start as live but not yet ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service as ready.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Fail liveness checks, e.g. while draining for shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn probe_response(probe_ok: bool) -> HttpResponse {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };

        response
            .insert_header(no_store_header())
            .finish()
    }
}

/// Static facts about the running service reported by `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "filmclub-api")]
    pub service: String,
    #[schema(example = "local")]
    pub env: String,
    #[schema(example = "0.1.0")]
    pub version: String,
    #[schema(example = "0.0.0.0:8080")]
    pub bind_addr: String,
}

impl ServiceInfo {
    /// Describe this build running as `service` in `env`.
    pub fn new(service: impl Into<String>, env: impl Into<String>, bind_addr: impl Into<String>) -> Self {
        Self {
            status: "ok".to_owned(),
            service: service.into(),
            env: env.into(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            bind_addr: bind_addr.into(),
        }
    }
}

/// Service summary for smoke tests and platform health checks.
#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Service summary", body = ServiceInfo)
    )
)]
#[get("/health")]
pub async fn health(info: web::Data<ServiceInfo>) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(no_store_header())
        .json(info.get_ref())
}

/// Readiness probe: 200 once dependencies are wired, 503 before.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_ready())
}

/// Liveness probe: 200 while the process is marked alive, 503 once draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_alive())
}

#[cfg(test)]
mod tests {
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test};
    use rstest::rstest;

    use super::*;

    fn cache_control(res: &actix_web::dev::ServiceResponse) -> Option<&str> {
        res.headers()
            .get(header::CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
    }

    #[rstest]
    #[actix_web::test]
    async fn readiness_follows_mark_ready() {
        let state = web::Data::new(HealthState::new());
        let app =
            test::init_service(App::new().app_data(state.clone()).service(ready)).await;

        let before =
            test::call_service(&app, test::TestRequest::get().uri("/health/ready").to_request())
                .await;
        assert_eq!(before.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(cache_control(&before), Some("no-store"));

        state.mark_ready();
        let after =
            test::call_service(&app, test::TestRequest::get().uri("/health/ready").to_request())
                .await;
        assert_eq!(after.status(), StatusCode::OK);
    }

    #[rstest]
    #[actix_web::test]
    async fn liveness_fails_once_unhealthy() {
        let state = web::Data::new(HealthState::new());
        let app = test::init_service(App::new().app_data(state.clone()).service(live)).await;

        let alive =
            test::call_service(&app, test::TestRequest::get().uri("/health/live").to_request())
                .await;
        assert_eq!(alive.status(), StatusCode::OK);

        state.mark_unhealthy();
        let draining =
            test::call_service(&app, test::TestRequest::get().uri("/health/live").to_request())
                .await;
        assert_eq!(draining.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(cache_control(&draining), Some("no-store"));
    }

    #[rstest]
    #[actix_web::test]
    async fn summary_reports_service_facts() {
        let info = web::Data::new(ServiceInfo::new("filmclub-api", "local", "127.0.0.1:8080"));
        let app = test::init_service(App::new().app_data(info).service(health)).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/health").to_request())
            .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(res).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "filmclub-api");
        assert_eq!(body["env"], "local");
        assert_eq!(body["bindAddr"], "127.0.0.1:8080");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
