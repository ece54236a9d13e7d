use crate::config::Config;
use crate::cors::{Cors, apply_cors};
use crate::logger::Logger;
use crate::mailer::{Mailer, SmtpMailer};
use crate::send_mail::handle_send_mail;
use anyhow::Result;
use axum::Json;
use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::extract::OriginalUri;
use axum::http::StatusCode;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use serde_json::json;
use std::sync::Arc;
use tower::timeout::TimeoutLayer;
use tower::{BoxError, ServiceBuilder};

pub struct AppState {
    pub config: Arc<Config>,
    pub cors: Cors,
    pub logger: Logger,
    pub mailer: Arc<dyn Mailer>,
}

pub fn build_router(config: Arc<Config>, logger: Logger) -> Result<Router> {
    let mailer = Arc::new(SmtpMailer::new(&config.smtp)?) as Arc<dyn Mailer>;
    Ok(build_router_with_mailer(config, logger, mailer))
}

pub fn build_router_with_mailer(
    config: Arc<Config>,
    logger: Logger,
    mailer: Arc<dyn Mailer>,
) -> Router {
    let state = Arc::new(AppState {
        cors: Cors::new(config.allow_origins.clone()),
        config,
        logger,
        mailer,
    });

    let request_timeout = state.config.request_timeout;
    let timeout_logger = state.logger.clone();
    let timeout_layer = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(move |error: BoxError| {
            let timeout_logger = timeout_logger.clone();
            async move {
                if error.is::<tower::timeout::error::Elapsed>() {
                    timeout_logger.warn(
                        "router.request_timeout",
                        json!({ "error": error.to_string() }),
                    );
                    (
                        StatusCode::GATEWAY_TIMEOUT,
                        Json(json!({ "error": "Request timed out" })),
                    )
                } else {
                    timeout_logger.error(
                        "router.unhandled_error",
                        json!({ "error": error.to_string() }),
                    );
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({ "error": "internal error" })),
                    )
                }
            }
        }))
        .layer(TimeoutLayer::new(request_timeout));

    Router::new()
        .route("/send-mail", post(handle_send_mail))
        .route("/healthz", get(handle_healthz))
        .fallback(handle_not_found)
        .layer(timeout_layer)
        .layer(middleware::from_fn_with_state(state.clone(), apply_cors))
        .with_state(state)
}

async fn handle_healthz() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn handle_not_found(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Not found", "path": uri.path() })),
    )
}
