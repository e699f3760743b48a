//! HTTP server for the contact intake service.
//!
//! This module wires the submission service into an axum router mounted
//! under `/api`, and runs it with CORS, request tracing and graceful shutdown.

pub mod client_addr;
pub mod handlers;
pub mod response;

pub use client_addr::ClientAddr;
pub use response::ApiError;

use crate::config::Config;
use crate::observability::{MetricsTracker, Timer};
use crate::services::SubmissionService;
use anyhow::Result;
use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, patch, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn SubmissionService>,
    pub metrics: MetricsTracker,
}

impl AppState {
    pub fn new(service: Arc<dyn SubmissionService>) -> Self {
        Self {
            service,
            metrics: MetricsTracker::new(),
        }
    }
}

/// Build the `/api` router with request metrics.
///
/// This is the bare application used by tests; [`app`] adds the
/// transport-level layers.
pub fn router(state: AppState) -> Router {
    let contact = Router::new()
        .route(
            "/",
            post(handlers::create_submission).get(handlers::list_submissions),
        )
        .route("/{id}", get(handlers::get_submission))
        .route("/{id}/status", patch(handlers::update_submission_status));

    let api = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .nest("/contact", contact);

    Router::new()
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(
            state.metrics.clone(),
            track_requests,
        ))
        .with_state(state)
}

/// Build the full application: router plus CORS and HTTP tracing.
pub fn app(state: AppState, config: &Config) -> Router {
    router(state)
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until Ctrl-C is received.
pub async fn run_server(state: AppState, config: &Config) -> Result<()> {
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(
        listener,
        app(state, config).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn track_requests(
    State(metrics): State<MetricsTracker>,
    request: Request,
    next: Next,
) -> Response {
    let timer = Timer::new(format!("{} {}", request.method(), request.uri().path()));
    let response = next.run(request).await;
    let status = response.status();

    let operation = timer.operation().to_string();
    let duration_ms = timer.finish_with_status(!status.is_server_error());
    metrics.track_request(&operation, status.as_u16(), duration_ms);

    response
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let values: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
