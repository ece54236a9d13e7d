mod emailjs;
mod http;

use async_trait::async_trait;
use serde::Serialize;
use std::rc::Rc;
use thiserror::Error;

use crate::config::{MailTransportKind, RuntimeConfig};

pub use emailjs::EmailJsTransport;
pub use http::HttpMailTransport;

pub const FALLBACK_FAILURE: &str = "Mail failed!";

/// Body delivered to either backend. Field names are the wire names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// `Display` is the text shown in the status banner.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MailError {
    #[error("{0}")]
    Rejected(String),
    #[error("Network error. Server not running!")]
    Unreachable(String),
    #[error("Mail failed!")]
    Encode(String),
}

/// Submits one contact payload. Implementations make exactly one attempt.
#[async_trait(?Send)]
pub trait MailTransport {
    fn name(&self) -> &'static str;

    async fn send(&self, payload: &ContactPayload) -> Result<(), MailError>;
}

pub fn build_transport(config: &RuntimeConfig) -> Rc<dyn MailTransport> {
    match config.mail_transport() {
        MailTransportKind::EmailJs => Rc::new(EmailJsTransport::new(
            config.emailjs_service_id.clone(),
            config.emailjs_template_id.clone(),
            config.emailjs_public_key.clone(),
        )),
        MailTransportKind::Http => Rc::new(HttpMailTransport::new(&config.mail_api_base_url)),
    }
}
