use dioxus::prelude::*;
use serde::Deserialize;

const DEFAULT_MAIL_API_BASE_URL: &str = "http://localhost:5000";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailTransportKind {
    #[default]
    Http,
    #[serde(alias = "email-js")]
    EmailJs,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub mail_api_base_url: String,
    pub transport: MailTransportKind,
    pub emailjs_service_id: String,
    pub emailjs_template_id: String,
    pub emailjs_public_key: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            mail_api_base_url: DEFAULT_MAIL_API_BASE_URL.to_string(),
            transport: MailTransportKind::Http,
            emailjs_service_id: String::new(),
            emailjs_template_id: String::new(),
            emailjs_public_key: String::new(),
        }
    }
}

impl RuntimeConfig {
    /// EmailJS is only used when every identifier is present.
    pub fn mail_transport(&self) -> MailTransportKind {
        let emailjs_ready = [
            &self.emailjs_service_id,
            &self.emailjs_template_id,
            &self.emailjs_public_key,
        ]
        .iter()
        .all(|value| !value.trim().is_empty());
        match self.transport {
            MailTransportKind::EmailJs if emailjs_ready => MailTransportKind::EmailJs,
            _ => MailTransportKind::Http,
        }
    }
}

pub fn use_runtime_config() -> Resource<Result<RuntimeConfig, String>> {
    use_resource(|| async move { fetch_runtime_config().await })
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Result<RuntimeConfig, String> {
    match fetch_config_from("/config.json").await {
        Ok(config) => Ok(config),
        Err(_) => fetch_config_from("/assets/config.json").await,
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_config_from(path: &str) -> Result<RuntimeConfig, String> {
    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|err| format!("config fetch failed: {err}"))?;
    if !response.ok() {
        return Err(format!("config fetch failed: status {}", response.status()));
    }
    response
        .json::<RuntimeConfig>()
        .await
        .map_err(|err| format!("config decode failed: {err}"))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Result<RuntimeConfig, String> {
    let env = |key: &str| std::env::var(key).unwrap_or_default();
    let mail_api_base_url = std::env::var("MAIL_API_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_MAIL_API_BASE_URL.to_string());
    let transport = match env("MAIL_TRANSPORT").trim().to_ascii_lowercase().as_str() {
        "emailjs" | "email-js" => MailTransportKind::EmailJs,
        _ => MailTransportKind::Http,
    };
    Ok(RuntimeConfig {
        mail_api_base_url,
        transport,
        emailjs_service_id: env("EMAILJS_SERVICE_ID"),
        emailjs_template_id: env("EMAILJS_TEMPLATE_ID"),
        emailjs_public_key: env("EMAILJS_PUBLIC_KEY"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.mail_transport(), MailTransportKind::Http);
    }

    #[test]
    fn emailjs_requires_all_ids() {
        let partial: RuntimeConfig = serde_json::from_str(
            r#"{"transport":"emailjs","emailjs_service_id":"svc","emailjs_template_id":"tpl"}"#,
        )
        .unwrap();
        assert_eq!(partial.mail_transport(), MailTransportKind::Http);

        let complete = RuntimeConfig {
            emailjs_public_key: "key".to_string(),
            ..partial
        };
        assert_eq!(complete.mail_transport(), MailTransportKind::EmailJs);
    }
}
