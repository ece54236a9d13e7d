use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use bytes::Bytes;
use http_body_util::BodyExt;
use mail_service::build_router_with_mailer;
use mail_service::config::Config;
use mail_service::logger::Logger;
use mail_service::mailer::{ContactMail, Mailer, MailerError};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

const ORIGIN: &str = "http://portfolio.test";

#[derive(Default)]
struct MockMailer {
    sent: Mutex<Vec<ContactMail>>,
    failure: Option<fn() -> MailerError>,
    delay: Option<Duration>,
}

#[async_trait]
impl Mailer for MockMailer {
    async fn deliver(&self, mail: ContactMail) -> Result<(), MailerError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(failure) = self.failure {
            return Err(failure());
        }
        self.sent.lock().unwrap().push(mail);
        Ok(())
    }
}

fn test_config(extra: &[(&str, &str)]) -> Arc<Config> {
    let mut vars: HashMap<String, String> = [
        ("SMTP_HOST", "smtp.example.com"),
        ("SMTP_USERNAME", "mailer@example.com"),
        ("SMTP_PASSWORD", "secret"),
        ("MAIL_TO", "owner@example.com"),
        ("CORS_ALLOW_ORIGINS", ORIGIN),
    ]
    .iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect();
    for (key, value) in extra {
        vars.insert(key.to_string(), value.to_string());
    }
    let logger = Logger::new("mail-service-test");
    Arc::new(Config::from_lookup(|key| vars.get(key).cloned(), &logger).expect("config load"))
}

fn router_with(mailer: Arc<MockMailer>, extra: &[(&str, &str)]) -> Router {
    build_router_with_mailer(test_config(extra), Logger::new("mail-service-test"), mailer)
}

fn post_mail(body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/send-mail")
        .header("Origin", ORIGIN)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn valid_body() -> Value {
    json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "subject": "Collaboration",
        "message": "Loved the projects page."
    })
}

async fn body_bytes(body: Body) -> Bytes {
    body.collect().await.unwrap().to_bytes()
}

async fn body_json(body: Body) -> Value {
    serde_json::from_slice(&body_bytes(body).await).unwrap()
}

#[tokio::test]
async fn valid_submission_sends_exactly_one_mail() {
    let mailer = Arc::new(MockMailer::default());
    let router = router_with(mailer.clone(), &[]);

    let response = router.oneshot(post_mail(valid_body())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        ORIGIN
    );
    let body = body_json(response.into_body()).await;
    assert_eq!(body["status"], "sent");
    assert!(body["requestId"].as_str().is_some_and(|id| !id.is_empty()));

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "[Portfolio] Collaboration");
    assert_eq!(sent[0].sender_email, "ada@example.com");
    assert!(sent[0].body.contains("Loved the projects page."));
}

#[tokio::test]
async fn request_id_header_is_echoed() {
    let mailer = Arc::new(MockMailer::default());
    let router = router_with(mailer.clone(), &[]);
    let mut request = post_mail(valid_body());
    request
        .headers_mut()
        .insert("x-request-id", "client-42".parse().unwrap());

    let response = router.oneshot(request).await.unwrap();
    let body = body_json(response.into_body()).await;
    assert_eq!(body["requestId"], "client-42");
    assert_eq!(mailer.sent.lock().unwrap()[0].request_id, "client-42");
}

#[tokio::test]
async fn invalid_email_is_rejected_without_sending() {
    let mailer = Arc::new(MockMailer::default());
    let router = router_with(mailer.clone(), &[]);
    let mut body = valid_body();
    body["email"] = json!("not-an-email");

    let response = router.oneshot(post_mail(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["error"], "invalid email format");
    assert!(mailer.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let router = router_with(Arc::new(MockMailer::default()), &[]);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/send-mail")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\":"))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["error"], "invalid JSON body");
}

#[tokio::test]
async fn smtp_failure_maps_to_bad_gateway() {
    let mailer = Arc::new(MockMailer {
        failure: Some(|| MailerError::Transport("connection refused".to_string())),
        ..MockMailer::default()
    });
    let router = router_with(mailer, &[]);

    let response = router.oneshot(post_mail(valid_body())).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["error"], "failed to send email");
}

#[tokio::test]
async fn compose_failure_maps_to_internal_error() {
    let mailer = Arc::new(MockMailer {
        failure: Some(|| MailerError::Compose("bad header".to_string())),
        ..MockMailer::default()
    });
    let router = router_with(mailer, &[]);

    let response = router.oneshot(post_mail(valid_body())).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["error"], "failed to compose email");
}

#[tokio::test]
async fn slow_delivery_times_out() {
    let mailer = Arc::new(MockMailer {
        delay: Some(Duration::from_millis(500)),
        ..MockMailer::default()
    });
    let router = router_with(mailer, &[("REQUEST_TIMEOUT_MS", "20")]);

    let response = router.oneshot(post_mail(valid_body())).await.unwrap();
    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["error"], "Request timed out");
}

#[tokio::test]
async fn preflight_from_allowed_origin_is_no_content() {
    let router = router_with(Arc::new(MockMailer::default()), &[]);
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/send-mail")
        .header("Origin", ORIGIN)
        .header("Access-Control-Request-Method", "POST")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(response.headers()["access-control-allow-origin"], ORIGIN);
    assert_eq!(response.headers()["access-control-max-age"], "600");
}

#[tokio::test]
async fn foreign_origin_is_forbidden() {
    let mailer = Arc::new(MockMailer::default());
    let router = router_with(mailer.clone(), &[]);
    let mut request = post_mail(valid_body());
    request
        .headers_mut()
        .insert("origin", "https://elsewhere.test".parse().unwrap());

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(mailer.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn health_and_unknown_paths_answer_json() {
    let router = router_with(Arc::new(MockMailer::default()), &[]);

    let health = Request::builder()
        .uri("/healthz")
        .body(Body::empty())
        .unwrap();
    let response = router.clone().oneshot(health).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response.into_body()).await, json!({ "status": "ok" }));

    let missing = Request::builder()
        .uri("/nope")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(missing).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response.into_body()).await["error"], "Not found");
}
