use dioxus::prelude::*;

use crate::carousel::ProjectBrowser;
use crate::catalog::{all_projects, CategoryFilter, Project};
use crate::effects::{use_window_pointer, MouseGlow, Particles};
use crate::theme::{use_theme, Palette, ThemeSwitch};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectView {
    #[default]
    Grid,
    Carousel,
}

impl ProjectView {
    pub fn label(self) -> &'static str {
        match self {
            ProjectView::Grid => "Grid",
            ProjectView::Carousel => "Carousel",
        }
    }
}

#[component]
pub fn ProjectsPage() -> Element {
    let palette = use_theme().palette();
    let main = palette.main.to_string();
    let pointer = use_window_pointer();
    let mut browser = use_signal(|| ProjectBrowser::new(all_projects()));
    let mut view = use_signal(ProjectView::default);

    let active_filter = browser.read().filter();
    let visible: Vec<&'static Project> = browser.read().visible().to_vec();
    let cursor = browser.read().cursor();
    let current = browser.read().current();

    rsx! {
        document::Title { "Projects | Portfolio" }
        div { class: "page projects-page",
            ThemeSwitch {}
            MouseGlow { pointer: pointer(), color: main.clone() }
            Particles { count: 20, color: main.clone() }

            h1 { class: "projects-title", style: "color: {palette.main};", "My Projects" }

            div { class: "category-bar",
                for choice in CategoryFilter::CHOICES {
                    {
                        let label = choice.label();
                        let style = if choice == active_filter {
                            format!("background: {}; color: #000;", palette.soft_gradient)
                        } else {
                            format!("border-color: {}; color: {};", palette.main, palette.main)
                        };
                        rsx! {
                            button {
                                key: "{label}",
                                r#type: "button",
                                class: "category-button",
                                style: "{style}",
                                onclick: move |_| {
                                    tracing::debug!(filter = label, "projects: filter");
                                    browser.write().set_filter(choice);
                                },
                                "{label}"
                            }
                        }
                    }
                }
            }

            div { class: "view-toggle",
                for option in [ProjectView::Grid, ProjectView::Carousel] {
                    {
                        let label = option.label();
                        let class = if view() == option { "view-button active" } else { "view-button" };
                        rsx! {
                            button {
                                key: "{label}",
                                r#type: "button",
                                class: "{class}",
                                style: "border-color: {palette.main};",
                                onclick: move |_| view.set(option),
                                "{label}"
                            }
                        }
                    }
                }
            }

            if visible.is_empty() {
                p { class: "projects-empty", "No projects in this category yet." }
            } else if view() == ProjectView::Grid {
                div { class: "projects-grid",
                    for project in visible.iter().copied() {
                        ProjectCard { key: "{project.title}", project: project.clone(), palette }
                    }
                }
            } else {
                div { class: "projects-carousel",
                    button {
                        r#type: "button",
                        class: "carousel-arrow prev",
                        aria_label: "Previous project",
                        style: "color: {palette.main};",
                        onclick: move |_| browser.write().previous(),
                        "‹"
                    }
                    if let Some(project) = current {
                        ProjectCard { project: project.clone(), palette }
                    }
                    button {
                        r#type: "button",
                        class: "carousel-arrow next",
                        aria_label: "Next project",
                        style: "color: {palette.main};",
                        onclick: move |_| browser.write().next(),
                        "›"
                    }
                    div { class: "carousel-dots",
                        for index in 0..cursor.len() {
                            {
                                let class = if index == cursor.index() { "carousel-dot active" } else { "carousel-dot" };
                                let label = format!("Show project {}", index + 1);
                                rsx! {
                                    button {
                                        key: "{index}",
                                        r#type: "button",
                                        class: "{class}",
                                        aria_label: "{label}",
                                        style: "background-color: {palette.main};",
                                        onclick: move |_| browser.write().select(index),
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

#[component]
fn ProjectCard(project: Project, palette: Palette) -> Element {
    let category = project.category.label();
    rsx! {
        article { class: "project-card", style: "border-color: {palette.main}; box-shadow: 0 0 18px {palette.main}55;",
            img { class: "project-image", src: project.image, alt: project.title }
            div { class: "project-body",
                span { class: "project-category", style: "color: {palette.hover};", "{category}" }
                h2 { class: "project-title", style: "color: {palette.main};", "{project.title}" }
                p { class: "project-description", "{project.description}" }
                ul { class: "project-tech",
                    for tech in project.tech.iter() {
                        li { key: "{tech}", style: "border-color: {palette.main};", "{tech}" }
                    }
                }
                div { class: "project-links",
                    a { href: project.github, target: "_blank", rel: "noopener noreferrer", "GitHub" }
                    if let Some(demo) = project.demo {
                        a { href: demo, target: "_blank", rel: "noopener noreferrer", "Live Demo" }
                    }
                }
            }
        }
    }
}
