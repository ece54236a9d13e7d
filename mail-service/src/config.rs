use crate::logger::Logger;
use anyhow::{Result, anyhow};
use std::{env, time::Duration};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_REQUEST_TIMEOUT_MS: i64 = 10_000;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub request_timeout: Duration,
    pub allow_origins: Vec<String>,
    pub smtp: SmtpConfig,
}

#[derive(Clone, Debug)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub starttls: bool,
    pub from_address: String,
    pub to_address: String,
}

impl Config {
    pub fn load(logger: &Logger) -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok(), logger)
    }

    /// Builds the config from any key lookup; `load` passes the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, logger: &Logger) -> Result<Self> {
        let port = parse_port(lookup("PORT"), DEFAULT_PORT);
        let request_timeout = Duration::from_millis(parse_positive_int(
            lookup("REQUEST_TIMEOUT_MS"),
            DEFAULT_REQUEST_TIMEOUT_MS,
        ) as u64);
        let allow_origins = split_list(lookup("CORS_ALLOW_ORIGINS"));
        if allow_origins.is_empty() {
            logger.warn(
                "config.cors_open",
                serde_json::json!({ "message": "CORS_ALLOW_ORIGINS empty; every origin is allowed" }),
            );
        }

        let username = read_required(&lookup, "SMTP_USERNAME")?;
        let password = read_required(&lookup, "SMTP_PASSWORD")?;
        let from_address = non_empty(lookup("MAIL_FROM")).unwrap_or_else(|| username.clone());
        let smtp = SmtpConfig {
            host: read_required(&lookup, "SMTP_HOST")?,
            port: parse_port(lookup("SMTP_PORT"), DEFAULT_SMTP_PORT),
            username,
            password,
            starttls: parse_bool(lookup("SMTP_STARTTLS"), true),
            from_address,
            to_address: read_required(&lookup, "MAIL_TO")?,
        };

        Ok(Self {
            port,
            request_timeout,
            allow_origins,
            smtp,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn read_required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    non_empty(lookup(key)).ok_or_else(|| anyhow!("{key} must be set and non-empty"))
}

fn parse_port(value: Option<String>, fallback: u16) -> u16 {
    value
        .and_then(|raw| raw.trim().parse::<u16>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(fallback)
}

fn parse_positive_int(value: Option<String>, fallback: i64) -> i64 {
    value
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(fallback)
}

fn parse_bool(value: Option<String>, fallback: bool) -> bool {
    match value.map(|raw| raw.trim().to_lowercase()).as_deref() {
        Some("true" | "1" | "yes" | "y") => true,
        Some("false" | "0" | "no" | "n") => false,
        _ => fallback,
    }
}

fn split_list(value: Option<String>) -> Vec<String> {
    value
        .map(|raw| {
            raw.split(',')
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 4] = [
        ("SMTP_HOST", "smtp.example.com"),
        ("SMTP_USERNAME", "mailer@example.com"),
        ("SMTP_PASSWORD", "app-password"),
        ("MAIL_TO", "owner@example.com"),
    ];

    #[test]
    fn defaults_fill_optional_keys() {
        let config = Config::from_lookup(lookup(&REQUIRED), &Logger::new("test")).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert!(config.allow_origins.is_empty());
        assert_eq!(config.smtp.port, 587);
        assert!(config.smtp.starttls);
        assert_eq!(config.smtp.from_address, "mailer@example.com");
    }

    #[test]
    fn missing_recipient_is_rejected() {
        let pairs: Vec<(&str, &str)> = REQUIRED
            .iter()
            .copied()
            .filter(|(key, _)| *key != "MAIL_TO")
            .collect();
        let err = Config::from_lookup(lookup(&pairs), &Logger::new("test")).unwrap_err();
        assert!(err.to_string().contains("MAIL_TO"));
    }

    #[test]
    fn overrides_are_parsed() {
        let mut pairs = REQUIRED.to_vec();
        pairs.extend([
            ("PORT", "8081"),
            ("SMTP_PORT", "465"),
            ("SMTP_STARTTLS", "no"),
            ("MAIL_FROM", "site@example.com"),
            ("CORS_ALLOW_ORIGINS", "https://a.test, ,https://b.test"),
            ("REQUEST_TIMEOUT_MS", "-4"),
        ]);
        let config = Config::from_lookup(lookup(&pairs), &Logger::new("test")).unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.smtp.port, 465);
        assert!(!config.smtp.starttls);
        assert_eq!(config.smtp.from_address, "site@example.com");
        assert_eq!(config.allow_origins, ["https://a.test", "https://b.test"]);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }
}
