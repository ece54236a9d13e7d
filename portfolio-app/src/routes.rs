use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, Router};

use crate::about::AboutPage;
use crate::config::{use_runtime_config, RuntimeConfig};
use crate::contact::ContactPage;
use crate::footer::Footer;
use crate::home::HomePage;
use crate::nav::Navbar;
use crate::projects::ProjectsPage;
use crate::theme::{use_theme, use_theme_provider};

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let theme = use_theme_provider();
    let config_resource = use_runtime_config();
    let config = match config_resource() {
        None => {
            return rsx! {
                document::Title { "Portfolio" }
                document::Link { rel: "stylesheet", href: MAIN_CSS }
                div { class: "page loading",
                    div { class: "loading-spinner" }
                }
            }
        }
        Some(Ok(config)) => config,
        Some(Err(message)) => {
            tracing::warn!(error = %message, "config: load failed, using defaults");
            RuntimeConfig::default()
        }
    };

    use_context_provider(|| config);
    let palette = theme.palette();
    let vars = palette.css_vars();

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "theme-color", content: palette.main }
        div { class: "app-root", "data-theme": theme.get().name(), style: "{vars}",
            Router::<Route> {}
        }
    }
}

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/projects")]
        Projects {},
        #[route("/contact")]
        Contact {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {}
        main { class: "shell-main",
            Outlet::<Route> {}
        }
        Footer {}
    }
}

#[component]
fn Home() -> Element {
    rsx! { HomePage {} }
}

#[component]
fn About() -> Element {
    rsx! { AboutPage {} }
}

#[component]
fn Projects() -> Element {
    rsx! { ProjectsPage {} }
}

#[component]
fn Contact() -> Element {
    rsx! { ContactPage {} }
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    let palette = use_theme().palette();
    rsx! {
        document::Title { "Not Found | Portfolio" }
        div { class: "page not-found",
            h1 { style: "color: {palette.main};", "404" }
            p { "Nothing lives at /{path}" }
            Link { to: Route::Home {}, class: "not-found-home", style: "border-color: {palette.main}; color: {palette.main};", "Back home" }
        }
    }
}
