use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;

use super::{ContactPayload, MailError, MailTransport, FALLBACK_FAILURE};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Posts the payload as JSON to the mail service's `/send-mail` route.
#[derive(Clone, Debug)]
pub struct HttpMailTransport {
    endpoint: String,
}

impl HttpMailTransport {
    pub fn new(base_url: &str) -> Self {
        let base = base_url.trim().trim_end_matches('/');
        Self {
            endpoint: format!("{base}/send-mail"),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Success is any 2xx; otherwise the body's `error` field, if present, is the reason.
pub(super) fn interpret_response(status: u16, body: &str) -> Result<(), MailError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let reason = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .map(|message| message.trim().to_string())
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| FALLBACK_FAILURE.to_string());
    Err(MailError::Rejected(reason))
}

#[async_trait(?Send)]
impl MailTransport for HttpMailTransport {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn send(&self, payload: &ContactPayload) -> Result<(), MailError> {
        let request = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(payload)
            .map_err(|err| MailError::Encode(format!("request build failed: {err}")))?;
        let response = request
            .send()
            .await
            .map_err(|err| MailError::Unreachable(format!("request failed: {err}")))?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        interpret_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_without_double_slash() {
        let transport = HttpMailTransport::new("http://localhost:5000/");
        assert_eq!(transport.endpoint(), "http://localhost:5000/send-mail");
    }

    #[test]
    fn success_status_ignores_body() {
        assert_eq!(interpret_response(200, "not json"), Ok(()));
        assert_eq!(interpret_response(204, ""), Ok(()));
    }

    #[test]
    fn error_field_becomes_reason() {
        let result = interpret_response(400, r#"{"error":"invalid email format"}"#);
        assert_eq!(result, Err(MailError::Rejected("invalid email format".to_string())));
    }

    #[test]
    fn unreadable_error_body_falls_back() {
        let result = interpret_response(500, "<html>oops</html>");
        assert_eq!(result.unwrap_err().to_string(), "Mail failed!");
    }
}
