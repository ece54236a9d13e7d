use dioxus::prelude::*;

use crate::hero::HeroSlider;
use crate::skills::SkillSection;
use crate::theme::ThemeSwitch;

#[component]
pub fn HomePage() -> Element {
    rsx! {
        document::Title { "Portfolio" }
        div { class: "page home-page",
            ThemeSwitch {}
            HeroSlider {}
            SkillSection {}
        }
    }
}
