use anyhow::Result;
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Tokio1Executor,
    message::{
        Mailbox, Message,
        header::{ContentType, Header, HeaderName, HeaderValue, MessageId},
    },
    transport::smtp::authentication::Credentials,
};
use std::fmt;

use crate::config::SmtpConfig;

/// A validated contact submission ready to be addressed to the site owner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMail {
    pub request_id: String,
    pub sender_name: String,
    pub sender_email: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum MailerError {
    Compose(String),
    Transport(String),
}

impl fmt::Display for MailerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MailerError::Compose(detail) => write!(f, "compose failed: {detail}"),
            MailerError::Transport(detail) => write!(f, "transport failed: {detail}"),
        }
    }
}

impl std::error::Error for MailerError {}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn deliver(&self, mail: ContactMail) -> Result<(), MailerError>;
}

#[derive(Clone)]
struct RequestIdHeader(String);

impl Header for RequestIdHeader {
    fn name() -> HeaderName {
        HeaderName::new_from_ascii_str("X-Contact-Request-Id")
    }

    fn parse(s: &str) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Self(s.to_string()))
    }

    fn display(&self) -> HeaderValue {
        HeaderValue::new(Self::name(), self.0.clone())
    }
}

/// SMTP delivery through one transport built at startup.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self> {
        let builder = if config.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
        };
        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();
        Ok(Self {
            transport,
            from: config.from_address.parse()?,
            to: config.to_address.parse()?,
        })
    }

    fn compose(&self, mail: ContactMail) -> Result<Message, MailerError> {
        let reply_to = Mailbox::new(
            Some(mail.sender_name.clone()),
            mail.sender_email
                .parse()
                .map_err(|err| MailerError::Compose(format!("reply-to: {err}")))?,
        );
        let message_id = MessageId::from(format!("<contact-{}@portfolio.local>", mail.request_id));
        Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .reply_to(reply_to)
            .subject(mail.subject)
            .header(message_id)
            .header(RequestIdHeader(mail.request_id))
            .header(ContentType::TEXT_PLAIN)
            .body(mail.body)
            .map_err(|err| MailerError::Compose(err.to_string()))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn deliver(&self, mail: ContactMail) -> Result<(), MailerError> {
        let message = self.compose(mail)?;
        self.transport
            .send(message)
            .await
            .map(|_| ())
            .map_err(|err| MailerError::Transport(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smtp_config() -> SmtpConfig {
        SmtpConfig {
            host: "smtp.example.com".to_string(),
            port: 587,
            username: "mailer@example.com".to_string(),
            password: "secret".to_string(),
            starttls: true,
            from_address: "Portfolio <mailer@example.com>".to_string(),
            to_address: "owner@example.com".to_string(),
        }
    }

    fn mail() -> ContactMail {
        ContactMail {
            request_id: "req-1".to_string(),
            sender_name: "Ada".to_string(),
            sender_email: "ada@example.com".to_string(),
            subject: "[Portfolio] Hello".to_string(),
            body: "Hi there".to_string(),
        }
    }

    #[tokio::test]
    async fn composed_message_carries_headers() {
        let mailer = SmtpMailer::new(&smtp_config()).unwrap();
        let message = mailer.compose(mail()).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("Subject: [Portfolio] Hello"));
        assert!(raw.contains("Reply-To:"));
        assert!(raw.contains("<ada@example.com>"));
        assert!(raw.contains("X-Contact-Request-Id: req-1"));
    }

    #[tokio::test]
    async fn unparsable_addresses_fail_setup() {
        let mut config = smtp_config();
        config.to_address = "owner at example".to_string();
        assert!(SmtpMailer::new(&config).is_err());

        let mut config = smtp_config();
        config.from_address = "Portfolio <mailer@".to_string();
        assert!(SmtpMailer::new(&config).is_err());
    }

    #[tokio::test]
    async fn unparsable_sender_is_a_compose_error() {
        let mailer = SmtpMailer::new(&smtp_config()).unwrap();
        let mut broken = mail();
        broken.sender_email = "not an address".to_string();
        assert!(matches!(mailer.compose(broken), Err(MailerError::Compose(_))));
    }
}
