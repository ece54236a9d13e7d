use serde::Serialize;
use serde_json::{Map, Value};
use std::env;
use std::sync::Arc;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Error,
    Warn,
    Info,
    Debug,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "error" => Level::Error,
            "warn" | "warning" => Level::Warn,
            "debug" | "trace" => Level::Debug,
            _ => Level::Info,
        }
    }
}

/// One JSON object per line; warn and error go to stderr.
#[derive(Clone)]
pub struct Logger {
    service: Arc<str>,
    environment: Arc<str>,
    host: Arc<str>,
    threshold: Level,
}

impl Logger {
    pub fn new(service: &'static str) -> Self {
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let host = hostname::get()
            .ok()
            .and_then(|name| name.into_string().ok())
            .or_else(|| env::var("HOSTNAME").ok())
            .unwrap_or_else(|| "unknown".to_string());
        let threshold = env::var("LOG_LEVEL")
            .map(|value| Level::parse(&value))
            .unwrap_or(Level::Info);
        Self {
            service: Arc::from(service),
            environment: Arc::from(environment),
            host: Arc::from(host),
            threshold,
        }
    }

    pub fn enabled(&self, level: Level) -> bool {
        level <= self.threshold
    }

    fn line<T: Serialize>(&self, level: Level, event: &str, context: T) -> String {
        let now = OffsetDateTime::now_utc();
        let timestamp = now.format(&Rfc3339).unwrap_or_else(|_| now.to_string());
        let mut record = Map::new();
        record.insert("timestamp".into(), Value::String(timestamp));
        record.insert("service".into(), Value::String(self.service.to_string()));
        record.insert("env".into(), Value::String(self.environment.to_string()));
        record.insert("host".into(), Value::String(self.host.to_string()));
        record.insert("level".into(), Value::String(level.label().to_string()));
        record.insert("event".into(), Value::String(event.to_string()));
        match serde_json::to_value(context).unwrap_or(Value::Null) {
            Value::Object(fields) => record.extend(fields),
            Value::Null => {}
            other => {
                record.insert("context".into(), other);
            }
        }
        Value::Object(record).to_string()
    }

    fn emit<T: Serialize>(&self, level: Level, event: &str, context: T) {
        if !self.enabled(level) {
            return;
        }
        let line = self.line(level, event, context);
        match level {
            Level::Error | Level::Warn => eprintln!("{line}"),
            Level::Info | Level::Debug => println!("{line}"),
        }
    }

    pub fn debug<T: Serialize>(&self, event: &str, context: T) {
        self.emit(Level::Debug, event, context);
    }

    pub fn info<T: Serialize>(&self, event: &str, context: T) {
        self.emit(Level::Info, event, context);
    }

    pub fn warn<T: Serialize>(&self, event: &str, context: T) {
        self.emit(Level::Warn, event, context);
    }

    pub fn error<T: Serialize>(&self, event: &str, context: T) {
        self.emit(Level::Error, event, context);
    }
}
