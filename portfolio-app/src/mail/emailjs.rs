use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Serialize;

use super::{ContactPayload, MailError, MailTransport, FALLBACK_FAILURE};

const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactPayload,
}

/// Delivers through the EmailJS REST API using the account's public key.
#[derive(Clone, Debug)]
pub struct EmailJsTransport {
    service_id: String,
    template_id: String,
    public_key: String,
}

impl EmailJsTransport {
    pub fn new(service_id: String, template_id: String, public_key: String) -> Self {
        Self {
            service_id,
            template_id,
            public_key,
        }
    }

    fn request_body<'a>(&'a self, payload: &'a ContactPayload) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: payload,
        }
    }
}

/// EmailJS answers 200 "OK" on success and a plain-text reason otherwise.
fn interpret_response(status: u16, body: &str) -> Result<(), MailError> {
    if status == 200 {
        return Ok(());
    }
    let reason = body.trim();
    if reason.is_empty() {
        Err(MailError::Rejected(FALLBACK_FAILURE.to_string()))
    } else {
        Err(MailError::Rejected(reason.to_string()))
    }
}

#[async_trait(?Send)]
impl MailTransport for EmailJsTransport {
    fn name(&self) -> &'static str {
        "emailjs"
    }

    async fn send(&self, payload: &ContactPayload) -> Result<(), MailError> {
        let request = Request::post(EMAILJS_SEND_URL)
            .header("Content-Type", "application/json")
            .json(&self.request_body(payload))
            .map_err(|err| MailError::Encode(format!("request build failed: {err}")))?;
        let response = request
            .send()
            .await
            .map_err(|err| MailError::Unreachable(format!("emailjs unreachable: {err}")))?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        interpret_response(status, &body)
    }
}
