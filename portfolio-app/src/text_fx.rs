use dioxus::prelude::*;
use std::ops::ControlFlow;

use crate::hooks::use_interval_until;

const NBSP: char = '\u{00A0}';

/// First `count` characters of `text`.
pub fn typed_prefix(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

/// Next caret position. Breaks once the whole text is shown.
pub fn typing_step(shown: usize, total: usize) -> ControlFlow<usize, usize> {
    let next = (shown + 1).min(total);
    if next >= total {
        ControlFlow::Break(next)
    } else {
        ControlFlow::Continue(next)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SplitChar {
    pub ch: char,
    pub delay_s: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitTiming {
    pub stagger_s: f64,
    pub duration_s: f64,
    pub rise_px: f64,
}

impl SplitTiming {
    pub fn new(reduced: bool) -> Self {
        if reduced {
            Self {
                stagger_s: 0.01,
                duration_s: 0.2,
                rise_px: 0.0,
            }
        } else {
            Self {
                stagger_s: 0.05,
                duration_s: 0.5,
                rise_px: 30.0,
            }
        }
    }
}

pub fn split_chars(text: &str, delay_s: f64, timing: SplitTiming) -> Vec<SplitChar> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| SplitChar {
            ch: if ch == ' ' { NBSP } else { ch },
            delay_s: delay_s + timing.stagger_s * index as f64,
        })
        .collect()
}

/// Character-by-character reveal with a trailing caret.
#[component]
pub fn TypingText(text: String, #[props(default = 80)] speed_ms: u32, color: String) -> Element {
    let mut shown = use_signal(|| 0usize);
    let total = text.chars().count();

    use_interval_until(speed_ms, move || {
        let current = *shown.peek();
        let step = typing_step(current, total);
        let (ControlFlow::Continue(next) | ControlFlow::Break(next)) = step;
        if next != current {
            shown.set(next);
        }
        match step {
            ControlFlow::Continue(_) => ControlFlow::Continue(()),
            ControlFlow::Break(_) => ControlFlow::Break(()),
        }
    });

    let visible = typed_prefix(&text, shown()).to_string();
    rsx! {
        span {
            class: "typing-text",
            style: "color: {color}; text-shadow: 0 0 10px {color};",
            "{visible}|"
        }
    }
}

/// Staggered per-character fade and slide-in.
#[component]
pub fn SplitText(
    text: String,
    #[props(default = 0.0)] delay_s: f64,
    #[props(default = false)] reduced: bool,
    color: String,
) -> Element {
    let timing = SplitTiming::new(reduced);
    let chars: Vec<(char, String)> = split_chars(&text, delay_s, timing)
        .into_iter()
        .map(|part| {
            let style = format!(
                "color: {color}; text-shadow: 0 0 12px {color}; --rise: {}px; animation-duration: {}s; animation-delay: {:.2}s;",
                timing.rise_px, timing.duration_s, part.delay_s
            );
            (part.ch, style)
        })
        .collect();
    rsx! {
        span { class: "split-text", aria_label: "{text}",
            for (index, (ch, style)) in chars.into_iter().enumerate() {
                span { key: "{index}", class: "split-char", aria_hidden: "true", style: "{style}", "{ch}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_respects_char_boundaries() {
        let text = "👋 Hi";
        assert_eq!(typed_prefix(text, 0), "");
        assert_eq!(typed_prefix(text, 1), "👋");
        assert_eq!(typed_prefix(text, 3), "👋 H");
        assert_eq!(typed_prefix(text, 40), text);
    }

    #[test]
    fn typing_stops_on_last_character() {
        assert_eq!(typing_step(0, 3), ControlFlow::Continue(1));
        assert_eq!(typing_step(2, 3), ControlFlow::Break(3));
        assert_eq!(typing_step(3, 3), ControlFlow::Break(3));
        assert_eq!(typing_step(0, 0), ControlFlow::Break(0));
    }

    #[test]
    fn split_swaps_spaces_and_staggers() {
        let parts = split_chars("a b", 0.3, SplitTiming::new(false));
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1].ch, '\u{00A0}');
        assert!((parts[0].delay_s - 0.3).abs() < 1e-9);
        assert!((parts[2].delay_s - 0.4).abs() < 1e-9);
    }

    #[test]
    fn reduced_motion_shortens_schedule() {
        let timing = SplitTiming::new(true);
        assert_eq!(timing.rise_px, 0.0);
        let parts = split_chars("abc", 0.0, timing);
        assert!((parts[2].delay_s - 0.02).abs() < 1e-9);
    }
}
