use dioxus::prelude::*;
use dioxus_router::{use_route, Link};

use crate::routes::Route;
use crate::theme::use_theme;

#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub name: &'static str,
    pub icon: &'static str,
    pub route: Route,
}

pub fn menu_items() -> [MenuItem; 4] {
    [
        MenuItem { name: "Home", icon: "⌂", route: Route::Home {} },
        MenuItem { name: "About", icon: "ℹ", route: Route::About {} },
        MenuItem { name: "Projects", icon: "▣", route: Route::Projects {} },
        MenuItem { name: "ContactUs", icon: "✉", route: Route::Contact {} },
    ]
}

/// Highlight rule: exact path equality, so `/` is not active on `/about`.
pub fn is_active(current_path: &str, item_path: &str) -> bool {
    current_path == item_path
}

#[component]
pub fn Navbar() -> Element {
    let current = use_route::<Route>().to_string();
    let mut theme = use_theme();
    let palette = theme.palette();
    let mut menu_open = use_signal(|| false);
    let items = menu_items();
    let mobile_class = if menu_open() { "nav-mobile open" } else { "nav-mobile" };

    rsx! {
        nav { class: "navbar", style: "border-color: {palette.main}80; color: {palette.main};",
            div { class: "nav-inner",
                h1 { class: "nav-logo", style: "color: {palette.main};", "Portfolio" }

                div { class: "nav-desktop",
                    ul { class: "nav-links",
                        for item in items.iter().cloned() {
                            {
                                let active = is_active(&current, &item.route.to_string());
                                let color = if active { palette.hover } else { palette.main };
                                let underline = if active { "nav-underline active" } else { "nav-underline" };
                                rsx! {
                                    li { key: "{item.name}", class: "nav-item",
                                        span { class: "nav-icon", style: "color: {color};", "{item.icon}" }
                                        Link { to: item.route.clone(), class: "nav-link", style: "color: {color};", "{item.name}" }
                                        span { class: "{underline}", style: "background-color: {palette.hover};" }
                                    }
                                }
                            }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "nav-theme-toggle",
                        title: "Switch Theme",
                        style: "border-color: {palette.main}; color: {palette.main};",
                        onclick: move |_| theme.toggle(),
                        "🎨"
                    }
                }

                button {
                    r#type: "button",
                    class: "nav-hamburger",
                    aria_label: "Toggle menu",
                    style: "color: {palette.main};",
                    onclick: move |_| menu_open.set(!menu_open()),
                    if menu_open() { "✕" } else { "☰" }
                }
            }

            div { class: "{mobile_class}",
                ul { class: "nav-mobile-links",
                    for item in items.iter().cloned() {
                        {
                            let active = is_active(&current, &item.route.to_string());
                            let color = if active { palette.hover } else { palette.main };
                            rsx! {
                                li { key: "{item.name}", class: "nav-mobile-item",
                                    span { style: "color: {color};", "{item.icon}" }
                                    Link {
                                        to: item.route.clone(),
                                        style: "color: {color};",
                                        onclick: move |_| menu_open.set(false),
                                        "{item.name}"
                                    }
                                }
                            }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "nav-mobile-theme",
                        style: "border-color: {palette.main}; color: {palette.main};",
                        onclick: move |_| theme.toggle(),
                        "Switch Theme"
                    }
                }
            }

            div { class: "nav-glow-line", style: "background: {palette.gradient};" }
        }
    }
}
