use dioxus::prelude::*;
use std::rc::Rc;

use crate::config::RuntimeConfig;
use crate::effects::{random_unit, use_flash, use_window_pointer, FlashOverlay, MouseGlow, Particles};
use crate::hooks::spawn_after;
use crate::mail::{build_transport, ContactPayload, MailError, MailTransport};
use crate::theme::{use_theme, ThemeSwitch};

pub const BANNER_DISMISS_MS: u32 = 3000;
const SUCCESS_MESSAGE: &str = "Message sent successfully!";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }
}

impl ContactForm {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Subject => self.subject = value,
            FormField::Message => self.message = value,
        }
    }

    /// First required field that is missing or malformed.
    pub fn validate(&self) -> Result<(), FormField> {
        if self.name.trim().is_empty() {
            return Err(FormField::Name);
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(FormField::Email);
        }
        if self.message.trim().is_empty() {
            return Err(FormField::Message);
        }
        Ok(())
    }

    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

/// Same acceptance as an `<input type="email">`: `local@domain`, no whitespace.
fn is_plausible_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionStatus {
    pub ok: bool,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BannerTicket(u64);

/// Outcome banner. A dismissal only clears the banner it was issued for.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatusBanner {
    status: Option<SubmissionStatus>,
    shown_at_ms: f64,
    generation: u64,
}

impl StatusBanner {
    pub fn show(&mut self, status: SubmissionStatus, now_ms: f64) -> BannerTicket {
        self.generation += 1;
        self.status = Some(status);
        self.shown_at_ms = now_ms;
        BannerTicket(self.generation)
    }

    pub fn dismiss(&mut self, ticket: BannerTicket) {
        if ticket.0 == self.generation {
            self.status = None;
        }
    }

    /// Hides the banner and invalidates every ticket issued so far.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.status = None;
    }

    pub fn visible_at(&self, now_ms: f64) -> Option<&SubmissionStatus> {
        self.status
            .as_ref()
            .filter(|_| now_ms - self.shown_at_ms < f64::from(BANNER_DISMISS_MS))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    Pending,
    Invalid(FormField),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFlow {
    pub form: ContactForm,
    pending: bool,
    pub banner: StatusBanner,
}

impl ContactFlow {
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Marks the flow pending and hands back the payload to send.
    pub fn begin_submit(&mut self) -> Result<ContactPayload, SubmitBlocked> {
        if self.pending {
            return Err(SubmitBlocked::Pending);
        }
        self.form.validate().map_err(SubmitBlocked::Invalid)?;
        self.banner.clear();
        self.pending = true;
        Ok(self.form.payload())
    }

    pub fn complete(&mut self, result: Result<(), MailError>, now_ms: f64) -> BannerTicket {
        self.pending = false;
        let status = match result {
            Ok(()) => {
                self.form = ContactForm::default();
                SubmissionStatus {
                    ok: true,
                    message: SUCCESS_MESSAGE.to_string(),
                }
            }
            Err(err) => SubmissionStatus {
                ok: false,
                message: err.to_string(),
            },
        };
        self.banner.show(status, now_ms)
    }

    pub fn dismiss(&mut self, ticket: BannerTicket) {
        self.banner.dismiss(ticket);
    }

    pub fn banner_at(&self, now_ms: f64) -> Option<&SubmissionStatus> {
        self.banner.visible_at(now_ms)
    }
}

pub async fn deliver(transport: &dyn MailTransport, payload: &ContactPayload) -> Result<(), MailError> {
    tracing::debug!(transport = transport.name(), "contact: sending");
    let result = transport.send(payload).await;
    if let Err(err) = &result {
        tracing::warn!(transport = transport.name(), error = ?err, "contact: delivery failed");
    }
    result
}

fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

#[component]
pub fn ContactPage() -> Element {
    let config = use_context::<RuntimeConfig>();
    let transport: Rc<dyn MailTransport> = use_hook(|| build_transport(&config));
    let theme = use_theme();
    let palette = theme.palette();
    let mut flow = use_signal(ContactFlow::default);
    let pointer = use_window_pointer();
    let flash_period = use_hook(|| 1500 + (random_unit() * 2000.0) as u32);
    let flash = use_flash(flash_period, 150);

    let pending = flow.read().is_pending();
    let form = flow.read().form.clone();
    let banner = flow.read().banner_at(now_ms()).cloned();
    let banner_class = match &banner {
        Some(status) if status.ok => "status-card ok",
        _ => "status-card failed",
    };
    let main = palette.main;
    let input_style = format!("box-shadow: 0 0 10px {main}66;");

    let mut edit = move |field: FormField, value: String| {
        flow.write().form.set(field, value);
    };

    rsx! {
        document::Title { "Contact | Portfolio" }
        div { class: "page contact-page", style: "color: {main};",
            ThemeSwitch {}
            FlashOverlay { bolt: flash(), veil: true }
            MouseGlow { pointer: pointer(), color: main.to_string(), alpha: "33".to_string() }
            Particles { count: 25, color: main.to_string(), drifting: false }

            section { class: "contact-main",
                h1 { class: "contact-title", "Contact Us" }
                p { class: "contact-subtitle", "We’d love to hear from you 💌" }

                form {
                    class: "contact-form",
                    onsubmit: move |event| {
                        event.prevent_default();
                        let payload = match flow.write().begin_submit() {
                            Ok(payload) => payload,
                            Err(SubmitBlocked::Pending) => return,
                            Err(SubmitBlocked::Invalid(field)) => {
                                tracing::debug!(field = field.label(), "contact: submit blocked");
                                return;
                            }
                        };
                        let transport = transport.clone();
                        let mut flow = flow;
                        spawn(async move {
                            let result = deliver(transport.as_ref(), &payload).await;
                            let ticket = flow.write().complete(result, now_ms());
                            spawn_after(BANNER_DISMISS_MS, move || flow.write().dismiss(ticket));
                        });
                    },
                    input {
                        r#type: "text",
                        name: "name",
                        value: "{form.name}",
                        placeholder: "Your Name",
                        required: true,
                        class: "neon-input",
                        style: "{input_style}",
                        oninput: move |event| edit(FormField::Name, event.value()),
                    }
                    input {
                        r#type: "email",
                        name: "email",
                        value: "{form.email}",
                        placeholder: "Your Email",
                        required: true,
                        class: "neon-input",
                        style: "{input_style}",
                        oninput: move |event| edit(FormField::Email, event.value()),
                    }
                    input {
                        r#type: "text",
                        name: "subject",
                        value: "{form.subject}",
                        placeholder: "Subject",
                        class: "neon-input",
                        style: "{input_style}",
                        oninput: move |event| edit(FormField::Subject, event.value()),
                    }
                    textarea {
                        name: "message",
                        value: "{form.message}",
                        placeholder: "Your Message",
                        rows: "5",
                        required: true,
                        class: "neon-input neon-textarea",
                        style: "{input_style}",
                        oninput: move |event| edit(FormField::Message, event.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "contact-submit",
                        style: "background-color: {main};",
                        disabled: pending,
                        if pending { "Sending..." } else { "Send Message 🚀" }
                    }
                }
            }

            if let Some(status) = banner {
                div { class: "status-popup", role: "status",
                    div { class: "{banner_class}",
                        span { class: "status-icon", if status.ok { "✔" } else { "✖" } }
                        span { class: "status-text", "{status.message}" }
                    }
                }
            }
        }
    }
}
