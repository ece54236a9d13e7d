use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

use crate::hooks::{spawn_after, use_interval};

const MOBILE_BREAKPOINT_PX: f64 = 768.0;
const TILT_DEGREES: f64 = 15.0;
const PARALLAX_PX: f64 = 15.0;
const PARALLAX_DEPTH: f64 = 1.5;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub top_pct: f64,
    pub left_pct: f64,
    pub opacity: f64,
    pub drift_s: f64,
}

/// One lightning bolt, as horizontal start and end positions in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bolt {
    pub x1_pct: f64,
    pub x2_pct: f64,
}

pub fn scatter_particles(count: usize, mut random: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            top_pct: random() * 100.0,
            left_pct: random() * 100.0,
            opacity: 0.3 + random() * 0.5,
            drift_s: 6.0 + random() * 4.0,
        })
        .collect()
}

pub fn glow_background(color: &str, pointer: Pointer, alpha_hex: &str) -> String {
    format!(
        "radial-gradient(600px at {}px {}px, {color}{alpha_hex}, transparent 70%)",
        pointer.x, pointer.y
    )
}

pub fn tilt_from_pointer(x: f64, y: f64, width: f64, height: f64) -> Tilt {
    if width <= 0.0 || height <= 0.0 {
        return Tilt::default();
    }
    Tilt {
        rotate_x: (y / height - 0.5) * TILT_DEGREES,
        rotate_y: (x / width - 0.5) * -TILT_DEGREES,
    }
}

/// Backdrop shift for the cursor position. Zero on mobile.
pub fn parallax_offset(
    pointer: Pointer,
    viewport_width: f64,
    viewport_height: f64,
    mobile: bool,
) -> Pointer {
    if mobile || viewport_width <= 0.0 || viewport_height <= 0.0 {
        return Pointer::default();
    }
    Pointer {
        x: (pointer.x / viewport_width - 0.5) * PARALLAX_PX * PARALLAX_DEPTH,
        y: (pointer.y / viewport_height - 0.5) * PARALLAX_PX * PARALLAX_DEPTH,
    }
}

/// Narrow screens get the short animation schedule too.
pub fn reduced_motion(prefers_reduced: bool, mobile: bool) -> bool {
    prefers_reduced || mobile
}

#[cfg(target_arch = "wasm32")]
pub fn random_unit() -> f64 {
    js_sys::Math::random()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn random_unit() -> f64 {
    0.5
}

#[cfg(target_arch = "wasm32")]
pub fn viewport_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn viewport_size() -> (f64, f64) {
    (1280.0, 800.0)
}

pub fn viewport_is_mobile() -> bool {
    let (width, _) = viewport_size();
    width > 0.0 && width < MOBILE_BREAKPOINT_PX
}

#[cfg(target_arch = "wasm32")]
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn prefers_reduced_motion() -> bool {
    false
}

#[cfg(target_arch = "wasm32")]
struct PointerListener {
    closure: Rc<wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MouseEvent)>>,
}

/// Latest cursor position in viewport coordinates.
pub fn use_window_pointer() -> Signal<Pointer> {
    let pointer = use_signal(Pointer::default);
    #[cfg(target_arch = "wasm32")]
    let mut listener = use_signal(|| None::<PointerListener>);

    #[cfg(target_arch = "wasm32")]
    {
        use_effect(move || {
            use wasm_bindgen::closure::Closure;
            use wasm_bindgen::JsCast;

            if listener.peek().is_some() {
                return;
            }
            let Some(window) = web_sys::window() else {
                return;
            };
            let mut on_move_pointer = pointer;
            let closure = Rc::new(Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
                on_move_pointer.set(Pointer {
                    x: f64::from(event.client_x()),
                    y: f64::from(event.client_y()),
                });
            }) as Box<dyn FnMut(_)>));
            let _ = window.add_event_listener_with_callback(
                "mousemove",
                closure.as_ref().as_ref().unchecked_ref(),
            );
            tracing::debug!("effects: pointer listener attached");
            listener.set(Some(PointerListener { closure }));
        });

        use_drop(move || {
            use wasm_bindgen::JsCast;

            let binding = listener.read();
            let Some(handle) = binding.as_ref() else {
                return;
            };
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "mousemove",
                    handle.closure.as_ref().as_ref().unchecked_ref(),
                );
            }
        });
    }

    pointer
}

/// Periodic flash: `Some(bolt)` for `flash_ms` out of every `period_ms`.
pub fn use_flash(period_ms: u32, flash_ms: u32) -> Signal<Option<Bolt>> {
    let mut flash = use_signal(|| None::<Bolt>);
    use_interval(period_ms, move || {
        flash.set(Some(Bolt {
            x1_pct: random_unit() * 100.0,
            x2_pct: random_unit() * 100.0,
        }));
        spawn_after(flash_ms, move || flash.set(None));
    });
    flash
}

#[component]
pub fn FlashOverlay(bolt: Option<Bolt>, #[props(default = false)] veil: bool) -> Element {
    let Some(bolt) = bolt else {
        return rsx! {};
    };
    rsx! {
        div { class: "flash-overlay", aria_hidden: "true",
            if veil {
                div { class: "flash-veil" }
            }
            svg { class: "flash-bolt",
                line {
                    x1: "{bolt.x1_pct}%",
                    y1: "0",
                    x2: "{bolt.x2_pct}%",
                    y2: "100%",
                    stroke: "#ffffff",
                    stroke_width: "2",
                    stroke_linecap: "round",
                }
            }
        }
    }
}

#[component]
pub fn MouseGlow(pointer: Pointer, color: String, #[props(default = "22".to_string())] alpha: String) -> Element {
    if viewport_is_mobile() {
        return rsx! {};
    }
    let background = glow_background(&color, pointer, &alpha);
    rsx! {
        div { class: "mouse-glow", aria_hidden: "true", style: "background: {background};" }
    }
}

/// Decorative dots; positions are drawn once per mount.
#[component]
pub fn Particles(count: usize, color: String, #[props(default = true)] drifting: bool) -> Element {
    let particles = use_hook(|| scatter_particles(count, random_unit));
    let class = if drifting { "particle drifting" } else { "particle" };
    rsx! {
        div { class: "particles", aria_hidden: "true",
            for (index, particle) in particles.iter().enumerate() {
                span {
                    key: "{index}",
                    class: "{class}",
                    style: "background-color: {color}; top: {particle.top_pct}%; left: {particle.left_pct}%; opacity: {particle.opacity}; animation-duration: {particle.drift_s}s;",
                }
            }
        }
    }
}
