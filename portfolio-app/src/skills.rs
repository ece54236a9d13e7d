use dioxus::prelude::*;

use crate::hooks::use_timeout;
use crate::theme::use_theme;

const CARD_STAGGER_S: f64 = 0.15;
const BAR_STAGGER_S: f64 = 0.2;
const FILL_START_MS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub icon: &'static str,
}

pub const SKILLS: [Skill; 9] = [
    Skill { name: "HTML", level: 95, icon: "🌐" },
    Skill { name: "CSS", level: 90, icon: "🎨" },
    Skill { name: "JavaScript", level: 75, icon: "💻" },
    Skill { name: "Tailwind CSS", level: 90, icon: "🖌️" },
    Skill { name: "Java", level: 60, icon: "☕" },
    Skill { name: "Node.js", level: 50, icon: "🟢" },
    Skill { name: "PHP", level: 70, icon: "🐘" },
    Skill { name: "SQL & MySQL", level: 75, icon: "🗄️" },
    Skill { name: "React.js", level: 70, icon: "⚛️" },
];

/// Bar fill in percent.
pub fn bar_width(level: u8) -> u8 {
    level.min(100)
}

fn card_delay_s(index: usize) -> f64 {
    index as f64 * CARD_STAGGER_S
}

fn bar_delay_s(index: usize) -> f64 {
    index as f64 * BAR_STAGGER_S
}

#[component]
pub fn SkillSection() -> Element {
    let palette = use_theme().palette();
    let mut filled = use_signal(|| false);
    use_timeout(FILL_START_MS, move || filled.set(true));

    rsx! {
        section { class: "skills",
            h2 { class: "skills-title", style: "color: {palette.main};", "My Skills" }
            div { class: "skills-grid",
                for (index, skill) in SKILLS.iter().enumerate() {
                    {
                        let width = if filled() { bar_width(skill.level) } else { 0 };
                        let card_style = format!(
                            "border-color: {}; animation-delay: {:.2}s;",
                            palette.main,
                            card_delay_s(index)
                        );
                        let fill_style = format!(
                            "width: {width}%; background: {}; transition-delay: {:.2}s;",
                            palette.gradient,
                            bar_delay_s(index)
                        );
                        rsx! {
                            div {
                                key: "{skill.name}",
                                class: "skill-card",
                                style: "{card_style}",
                                div { class: "skill-head",
                                    span { class: "skill-icon", "{skill.icon}" }
                                    span { class: "skill-name", "{skill.name}" }
                                    span { class: "skill-level", style: "color: {palette.main};", "{skill.level}%" }
                                }
                                div { class: "skill-track",
                                    div {
                                        class: "skill-fill",
                                        style: "{fill_style}",
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_width_is_clamped() {
        assert_eq!(bar_width(0), 0);
        assert_eq!(bar_width(75), 75);
        assert_eq!(bar_width(140), 100);
    }

    #[test]
    fn every_skill_level_is_a_percentage() {
        assert_eq!(SKILLS.len(), 9);
        assert!(SKILLS.iter().all(|skill| skill.level <= 100));
        assert_eq!(SKILLS[0].name, "HTML");
        assert_eq!(SKILLS[8].level, 70);
    }

    #[test]
    fn staggers_grow_with_index() {
        assert_eq!(card_delay_s(0), 0.0);
        assert!((card_delay_s(2) - 0.3).abs() < 1e-9);
        assert!((bar_delay_s(3) - 0.6).abs() < 1e-9);
    }
}
