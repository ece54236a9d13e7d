use anyhow::Result;
use mail_service::build_router;
use mail_service::config::Config;
use mail_service::logger::Logger;
use mail_service::mailer::SmtpMailer;
use serde_json::json;
use std::sync::Arc;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<()> {
    let logger = Logger::new("mail-service");
    let config = match Config::load(&logger) {
        Ok(config) => Arc::new(config),
        Err(error) => {
            logger.error("config.invalid", json!({ "error": error.to_string() }));
            return Err(error);
        }
    };

    if matches!(std::env::args().nth(1).as_deref(), Some("check-config")) {
        if let Err(error) = SmtpMailer::new(&config.smtp) {
            logger.error("config.invalid", json!({ "error": error.to_string() }));
            return Err(error);
        }
        logger.info(
            "config.check_passed",
            json!({
                "port": config.port,
                "smtpHost": config.smtp.host,
                "smtpPort": config.smtp.port,
                "starttls": config.smtp.starttls,
                "allowOrigins": config.allow_origins,
                "requestTimeoutMs": config.request_timeout.as_millis() as u64,
            }),
        );
        return Ok(());
    }

    let router = build_router(config.clone(), logger.clone())?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    logger.info(
        "server.started",
        json!({
            "port": config.port,
            "smtpHost": config.smtp.host,
        }),
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal(logger.clone()))
        .await?;

    logger.info("server.stopped", json!({}));
    Ok(())
}

async fn shutdown_signal(logger: Logger) {
    let ctrl_c = async {
        signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(error) => {
                logger.warn("shutdown.sigterm_unavailable", json!({ "error": error.to_string() }));
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            logger.info("shutdown.ctrl_c", json!({ "message": "Received Ctrl+C" }));
        }
        _ = terminate => {
            logger.info("shutdown.terminate", json!({ "message": "Received SIGTERM" }));
        }
    }
}
