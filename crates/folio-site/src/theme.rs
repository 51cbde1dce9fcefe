//! Theme selection for the site.

use dioxus::prelude::*;

/// Available colour schemes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Slate background with cyan accents
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Returns the `data-theme` attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Glyph shown on the toggle button.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Dark => "☀",
            Theme::Light => "☾",
        }
    }
}

/// Global signal for the current theme.
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(|| Theme::default());

/// Root component that applies the current theme.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();
    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}

/// Button flipping between the dark and light themes.
#[component]
pub fn ThemeToggle() -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        button {
            class: "nav-button theme-toggle",
            "aria-label": "Toggle theme",
            onclick: move |_| {
                *CURRENT_THEME.write() = theme.toggled();
            },
            "{theme.toggle_icon()}"
        }
    }
}
