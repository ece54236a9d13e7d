use dioxus::prelude::*;

/// Accent palette applied to every decorative element on the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Green,
    Blue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub main: &'static str,
    pub hover: &'static str,
    /// Navbar glow line and active-link underline.
    pub gradient: &'static str,
    /// Category buttons and footer name.
    pub soft_gradient: &'static str,
    /// Blurred footer background.
    pub glow: &'static str,
}

const GREEN: Palette = Palette {
    main: "#4ADE80",
    hover: "#7EFF3D",
    gradient: "linear-gradient(90deg, #41C715, #7EFF3D, #41C715)",
    soft_gradient: "linear-gradient(90deg, #86EFAC, #A3E635, #22C55E)",
    glow: "linear-gradient(90deg, #4ADE80, #A3E635, #22C55E)",
};

const BLUE: Palette = Palette {
    main: "#38BDF8",
    hover: "#0EA5E9",
    gradient: "linear-gradient(90deg, #38BDF8, #0EA5E9, #38BDF8)",
    soft_gradient: "linear-gradient(90deg, #60A5FA, #22D3EE, #2563EB)",
    glow: "linear-gradient(90deg, #60A5FA, #22D3EE, #2563EB)",
};

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Green => Theme::Blue,
            Theme::Blue => Theme::Green,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Green => GREEN,
            Theme::Blue => BLUE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Green => "green",
            Theme::Blue => "blue",
        }
    }
}

impl Palette {
    /// Custom properties consumed by `main.css`.
    pub fn css_vars(&self) -> String {
        format!(
            "--accent: {}; --accent-hover: {}; --accent-gradient: {}; --accent-soft: {}; --accent-glow: {};",
            self.main, self.hover, self.gradient, self.soft_gradient, self.glow
        )
    }
}

/// Session-wide theme handle shared through context.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeState(Signal<Theme>);

impl ThemeState {
    pub fn get(&self) -> Theme {
        *self.0.read()
    }

    pub fn palette(&self) -> Palette {
        self.get().palette()
    }

    pub fn toggle(&mut self) {
        let next = self.0.peek().toggled();
        tracing::debug!(theme = next.name(), "theme: toggle");
        self.0.set(next);
    }
}

pub fn use_theme_provider() -> ThemeState {
    use_context_provider(|| ThemeState(Signal::new(Theme::default())))
}

pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>()
}

/// Floating "Switch Theme" pill used by the pages and the footer.
#[component]
pub fn ThemeSwitch(#[props(default = "theme-switch".to_string())] class: String) -> Element {
    let mut theme = use_theme();
    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            title: "Switch Theme",
            onclick: move |_| theme.toggle(),
            "Switch Theme"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_returns_to_start() {
        assert_eq!(Theme::Green.toggled(), Theme::Blue);
        assert_eq!(Theme::Green.toggled().toggled(), Theme::Green);
    }

    #[test]
    fn palettes_use_distinct_accents() {
        assert_eq!(Theme::Green.palette().main, "#4ADE80");
        assert_eq!(Theme::Blue.palette().main, "#38BDF8");
        assert_ne!(Theme::Green.palette(), Theme::Blue.palette());
    }

    #[test]
    fn css_vars_expose_accent() {
        let vars = Theme::Blue.palette().css_vars();
        assert!(vars.starts_with("--accent: #38BDF8;"));
        assert!(vars.contains("--accent-hover: #0EA5E9;"));
    }
}
