use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::{Arc, LazyLock};
use uuid::Uuid;

use crate::app::AppState;
use crate::mailer::{ContactMail, MailerError};

const NAME_MAX: usize = 80;
const EMAIL_MAX: usize = 120;
const SUBJECT_MAX: usize = 150;
const MESSAGE_MAX: usize = 5000;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$")
        .expect("email regex should compile")
});

#[derive(Debug, Deserialize)]
pub struct SendMailRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    subject: String,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMailResponse {
    status: &'static str,
    request_id: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SendMailError {
    BadBody,
    Validation(String),
    ComposeFailed,
    DeliveryFailed,
}

impl IntoResponse for SendMailError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            SendMailError::BadBody => (StatusCode::BAD_REQUEST, "invalid JSON body".to_string()),
            SendMailError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            SendMailError::ComposeFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "failed to compose email".to_string(),
            ),
            SendMailError::DeliveryFailed => {
                (StatusCode::BAD_GATEWAY, "failed to send email".to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub async fn handle_send_mail(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<SendMailRequest>, JsonRejection>,
) -> Result<Response, SendMailError> {
    let logger = &state.logger;
    let request_id = headers
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(|value| value.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let Json(req) = body.map_err(|rejection| {
        logger.warn(
            "send_mail.bad_body",
            json!({ "requestId": request_id, "error": rejection.body_text() }),
        );
        SendMailError::BadBody
    })?;

    if let Err(err) = validate(&req) {
        if let SendMailError::Validation(reason) = &err {
            logger.info(
                "send_mail.rejected",
                json!({ "requestId": request_id, "reason": reason }),
            );
        }
        return Err(err);
    }

    let mail = compose_mail(&req, &request_id);
    state.mailer.deliver(mail).await.map_err(|err| {
        logger.error(
            "send_mail.delivery_failed",
            json!({ "requestId": request_id, "error": err.to_string() }),
        );
        match err {
            MailerError::Compose(_) => SendMailError::ComposeFailed,
            MailerError::Transport(_) => SendMailError::DeliveryFailed,
        }
    })?;

    logger.info("send_mail.delivered", json!({ "requestId": request_id }));
    Ok(Json(SendMailResponse {
        status: "sent",
        request_id,
    })
    .into_response())
}

fn validate(req: &SendMailRequest) -> Result<(), SendMailError> {
    let invalid = |msg: &str| Err(SendMailError::Validation(msg.to_string()));

    let name = req.name.trim();
    if name.is_empty() {
        return invalid("name cannot be empty");
    }
    if name.chars().count() > NAME_MAX {
        return invalid("name too long (max 80 chars)");
    }
    if contains_control_chars(name) {
        return invalid("name contains invalid characters");
    }

    let email = req.email.trim();
    if email.is_empty() {
        return invalid("email is required");
    }
    if email.chars().count() > EMAIL_MAX {
        return invalid("email too long (max 120 chars)");
    }
    if !EMAIL_REGEX.is_match(email) {
        return invalid("invalid email format");
    }

    let subject = req.subject.trim();
    if subject.chars().count() > SUBJECT_MAX {
        return invalid("subject too long (max 150 chars)");
    }
    if contains_control_chars(subject) {
        return invalid("subject contains invalid characters");
    }

    let message = req.message.trim();
    if message.is_empty() {
        return invalid("message cannot be empty");
    }
    if message.chars().count() > MESSAGE_MAX {
        return invalid("message too long (max 5000 chars)");
    }
    if contains_control_chars(message) {
        return invalid("message contains invalid characters");
    }

    Ok(())
}

fn contains_control_chars(s: &str) -> bool {
    s.chars()
        .any(|c| c.is_control() && c != '\n' && c != '\r' && c != '\t')
}

fn compose_mail(req: &SendMailRequest, request_id: &str) -> ContactMail {
    let name = req.name.trim();
    let email = req.email.trim();
    let subject = match req.subject.trim() {
        "" => format!("[Portfolio] New message from {name}"),
        given => format!("[Portfolio] {given}"),
    };
    let body = format!(
        "New portfolio contact message\n\n\
        Request ID: {request_id}\n\
        Name: {name}\n\
        Email: {email}\n\n\
        Message:\n{}\n",
        req.message.trim(),
    );
    ContactMail {
        request_id: request_id.to_string(),
        sender_name: name.to_string(),
        sender_email: email.to_string(),
        subject,
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, subject: &str, message: &str) -> SendMailRequest {
        SendMailRequest {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    fn reason(req: &SendMailRequest) -> String {
        match validate(req) {
            Err(SendMailError::Validation(reason)) => reason,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn well_formed_request_passes() {
        let req = request("Ada", "ada@example.com", "", "Hello\nthere");
        assert_eq!(validate(&req), Ok(()));
    }

    #[test]
    fn email_is_required_and_checked() {
        assert_eq!(reason(&request("Ada", "  ", "", "hi")), "email is required");
        assert_eq!(
            reason(&request("Ada", "ada@", "", "hi")),
            "invalid email format"
        );
    }

    #[test]
    fn limits_count_characters() {
        let long_name = "é".repeat(80);
        assert_eq!(validate(&request(&long_name, "a@b.co", "", "hi")), Ok(()));
        let too_long = "x".repeat(5001);
        assert_eq!(
            reason(&request("Ada", "a@b.co", "", &too_long)),
            "message too long (max 5000 chars)"
        );
        let long_subject = "s".repeat(151);
        assert_eq!(
            reason(&request("Ada", "a@b.co", &long_subject, "hi")),
            "subject too long (max 150 chars)"
        );
    }

    #[test]
    fn control_characters_are_rejected() {
        assert_eq!(
            reason(&request("Ada\u{0007}", "a@b.co", "", "hi")),
            "name contains invalid characters"
        );
        assert_eq!(validate(&request("Ada", "a@b.co", "", "line\r\n\tnext")), Ok(()));
    }

    #[test]
    fn empty_subject_gets_a_default() {
        let mail = compose_mail(&request(" Ada ", "ada@example.com", "", "hi"), "req-9");
        assert_eq!(mail.subject, "[Portfolio] New message from Ada");
        assert!(mail.body.contains("Request ID: req-9"));
        let titled = compose_mail(&request("Ada", "ada@example.com", "Hire", "hi"), "req-9");
        assert_eq!(titled.subject, "[Portfolio] Hire");
    }
}
