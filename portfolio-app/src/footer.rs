use dioxus::prelude::*;

use crate::date::{copyright_line, current_year};
use crate::profile::{FOOTER_LINKS, OWNER_NAME, PROFILE_IMAGE};
use crate::text_fx::TypingText;
use crate::theme::{use_theme, ThemeSwitch};

const COPYRIGHT_SPEED_MS: u32 = 50;

#[cfg(target_arch = "wasm32")]
fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(not(target_arch = "wasm32"))]
fn scroll_to_top() {}

#[component]
pub fn Footer() -> Element {
    let theme = use_theme();
    let palette = theme.palette();
    let copyright = copyright_line(current_year());

    rsx! {
        footer { class: "site-footer",
            div { class: "footer-glow", style: "background: {palette.glow};" }
            div { class: "footer-inner",
                div { class: "footer-social",
                    for link in FOOTER_LINKS {
                        a {
                            key: "{link.label}",
                            href: link.url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "footer-social-link",
                            aria_label: link.label,
                            style: "color: {palette.main}; border-color: {palette.main};",
                            "{link.icon}"
                        }
                    }
                }

                p { class: "footer-copyright",
                    TypingText { text: copyright, speed_ms: COPYRIGHT_SPEED_MS, color: palette.main.to_string() }
                }

                div { class: "footer-credit",
                    img { class: "footer-avatar", src: PROFILE_IMAGE, alt: "{OWNER_NAME}", style: "border-color: {palette.main};" }
                    span { "Designed & Developed by " }
                    span { class: "footer-name", style: "background-image: {palette.soft_gradient};", "{OWNER_NAME}" }
                }

                div { class: "footer-actions",
                    ThemeSwitch { class: "footer-theme-switch".to_string() }
                    button {
                        r#type: "button",
                        class: "back-to-top",
                        aria_label: "Back to top",
                        style: "background-color: {palette.main};",
                        onclick: move |_| scroll_to_top(),
                        "↑"
                    }
                }
            }
        }
    }
}
