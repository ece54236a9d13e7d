use dioxus::prelude::*;

use crate::effects::{
    parallax_offset, prefers_reduced_motion, reduced_motion, tilt_from_pointer, use_flash,
    use_window_pointer, viewport_is_mobile, viewport_size, FlashOverlay, MouseGlow, Particles,
    Tilt,
};
use crate::profile::{
    EDUCATION, GREETING, INSTITUTE, OWNER_NAME, OWNER_ROLE, PROFILE_IMAGE, RESUME_FILENAME,
    RESUME_PATH,
};
use crate::text_fx::{SplitText, TypingText};
use crate::theme::use_theme;

const BEAT_PERIOD_MS: u32 = 1200;
const BEAT_FLASH_MS: u32 = 100;
const HERO_PARTICLES: usize = 25;

#[component]
pub fn HeroSlider() -> Element {
    let palette = use_theme().palette();
    let main = palette.main.to_string();
    let pointer = use_window_pointer();
    let flash = use_flash(BEAT_PERIOD_MS, BEAT_FLASH_MS);
    let mobile = use_hook(viewport_is_mobile);
    let reduced = use_hook(|| reduced_motion(prefers_reduced_motion(), mobile));
    let mut tilt = use_signal(Tilt::default);
    let mut card_size = use_signal(|| (0.0f64, 0.0f64));

    let (viewport_width, viewport_height) = viewport_size();
    let shift = parallax_offset(pointer(), viewport_width, viewport_height, mobile);
    let current_tilt = tilt();
    let beat_class = if flash().is_some() { "hero-avatar beat" } else { "hero-avatar" };

    rsx! {
        section { class: "hero",
            div {
                class: "hero-parallax",
                aria_hidden: "true",
                style: "transform: translate({shift.x}px, {shift.y}px); background: {palette.soft_gradient};",
            }
            FlashOverlay { bolt: flash() }
            MouseGlow { pointer: pointer(), color: main.clone() }
            Particles { count: HERO_PARTICLES, color: main.clone() }

            div { class: "hero-content",
                div { class: "hero-text",
                    h2 { class: "hero-greeting",
                        TypingText { text: GREETING.to_string(), color: main.clone() }
                    }
                    h1 { class: "hero-name",
                        SplitText { text: OWNER_NAME.to_string(), delay_s: 0.0, reduced, color: main.clone() }
                    }
                    h3 { class: "hero-role",
                        SplitText { text: OWNER_ROLE.to_string(), delay_s: 0.3, reduced, color: main.clone() }
                    }
                    p { class: "hero-education",
                        SplitText { text: EDUCATION.to_string(), delay_s: 0.6, reduced, color: main.clone() }
                    }
                    p { class: "hero-institute",
                        SplitText { text: INSTITUTE.to_string(), delay_s: 0.9, reduced, color: main.clone() }
                    }
                    a {
                        class: "hero-cv",
                        href: RESUME_PATH,
                        download: RESUME_FILENAME,
                        style: "background-color: {palette.main};",
                        "Download CV"
                    }
                }

                div {
                    class: "hero-visual",
                    onmounted: move |event: MountedEvent| async move {
                        if let Ok(rect) = event.get_client_rect().await {
                            card_size.set((rect.width(), rect.height()));
                        }
                    },
                    onmousemove: move |event: MouseEvent| {
                        let point = event.element_coordinates();
                        let (width, height) = card_size();
                        tilt.set(tilt_from_pointer(point.x, point.y, width, height));
                    },
                    onmouseleave: move |_| tilt.set(Tilt::default()),
                    style: "transform: perspective(800px) rotateX({current_tilt.rotate_x}deg) rotateY({current_tilt.rotate_y}deg);",

                    span { class: "hero-ring pulse", style: "border-color: {palette.main};" }
                    span { class: "hero-ring pulse delayed", style: "border-color: {palette.hover};" }
                    span { class: "hero-ring rotating", style: "border-top-color: {palette.main};" }
                    img {
                        class: "{beat_class}",
                        src: PROFILE_IMAGE,
                        alt: "{OWNER_NAME}",
                        style: "box-shadow: 0 0 40px {palette.main};",
                    }
                }
            }
        }
    }
}
