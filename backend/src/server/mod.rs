//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::{ServerConfig, TmdbConfig};

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use filmclub::Trace;
#[cfg(debug_assertions)]
use filmclub::doc::ApiDoc;
use filmclub::inbound::http::auth::DevAuth;
use filmclub::inbound::http::clubs::{create_club, json_config};
use filmclub::inbound::http::health::{HealthState, ServiceInfo, health, live, ready};
use filmclub::inbound::http::movies::search_movies;
use filmclub::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    service_info: web::Data<ServiceInfo>,
    http_state: web::Data<HttpState>,
    dev_auth: DevAuth,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        service_info,
        http_state,
        dev_auth,
    } = deps;

    let api = web::scope("/api/v1")
        .wrap(dev_auth)
        .app_data(json_config())
        .service(create_club)
        .service(search_movies);

    let app = App::new()
        .app_data(health_state)
        .app_data(service_info)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(health)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when an adapter cannot be built or the
/// socket cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config)?;
    let ServerConfig {
        bind_addr,
        service_info,
        dev_user,
        ..
    } = config;
    let service_info = web::Data::new(service_info);
    let dev_auth = dev_user.map_or_else(DevAuth::disabled, DevAuth::enabled);

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            service_info: service_info.clone(),
            http_state: http_state.clone(),
            dev_auth,
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
