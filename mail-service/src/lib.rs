pub mod app;
pub mod config;
pub mod cors;
pub mod logger;
pub mod mailer;
pub mod send_mail;

pub use app::{build_router, build_router_with_mailer};
