use dioxus::prelude::*;

use crate::effects::{
    prefers_reduced_motion, reduced_motion, use_flash, use_window_pointer, viewport_is_mobile,
    FlashOverlay, MouseGlow, Particles,
};
use crate::profile::{ABOUT_LINKS, ROBOT_IMAGE};
use crate::text_fx::{SplitText, TypingText};
use crate::theme::{use_theme, ThemeSwitch};

const HEADING: &str = "👋 About Me";
const LINES: [&str; 3] = [
    "I Specialize in React, Frameworks, and Front-end Development.",
    "Outside of coding, ❤️ I Enjoy Continuous Learning and",
    "Knowledge to Inspire Others.",
];

/// Typing speed for the heading: faster on narrow screens.
pub fn heading_speed_ms(mobile: bool) -> u32 {
    if mobile {
        40
    } else {
        80
    }
}

#[component]
pub fn AboutPage() -> Element {
    let palette = use_theme().palette();
    let main = palette.main.to_string();
    let pointer = use_window_pointer();
    let flash = use_flash(1200, 100);
    let mobile = use_hook(viewport_is_mobile);
    let speed_ms = heading_speed_ms(mobile);
    let reduced = use_hook(|| reduced_motion(prefers_reduced_motion(), mobile));
    let robot_class = if flash().is_some() { "about-robot beat" } else { "about-robot" };

    rsx! {
        document::Title { "About | Portfolio" }
        div { class: "page about-page",
            ThemeSwitch {}
            FlashOverlay { bolt: flash() }
            MouseGlow { pointer: pointer(), color: main.clone() }
            Particles { count: 20, color: main.clone() }

            section { class: "about-main",
                div { class: "about-text",
                    h1 { class: "about-heading",
                        TypingText { text: HEADING.to_string(), speed_ms, color: main.clone() }
                    }
                    for (index, line) in LINES.iter().enumerate() {
                        p { key: "{index}", class: "about-line",
                            SplitText {
                                text: line.to_string(),
                                delay_s: index as f64 * 0.4,
                                reduced,
                                color: main.clone(),
                            }
                        }
                    }
                    div { class: "about-links",
                        for link in ABOUT_LINKS {
                            a {
                                key: "{link.label}",
                                href: link.url,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                class: "about-link",
                                style: "border-color: {palette.main}; color: {palette.main};",
                                span { class: "about-link-icon", "{link.icon}" }
                                "{link.label}"
                            }
                        }
                    }
                }
                img {
                    class: "{robot_class}",
                    src: ROBOT_IMAGE,
                    alt: "Robot illustration",
                    style: "filter: drop-shadow(0 0 25px {palette.main});",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_types_twice_as_fast() {
        assert_eq!(heading_speed_ms(true), 40);
        assert_eq!(heading_speed_ms(false), 80);
    }
}
