//! Compact navigation: brand button, menu toggle and dropdown.

use dioxus::prelude::*;
use folio_core::format::initials;

use crate::hooks::{use_scroll_spy, use_site};
use crate::interop::nav_action_js;
use crate::theme::ThemeToggle;

#[component]
pub fn CompactNavigation() -> Element {
    let site = use_site();
    let mut menu = use_signal(|| site.nav_menu());
    use_scroll_spy(menu);

    let brand = initials(&site.portfolio.personal.name);
    let home_href = site
        .portfolio
        .navigation
        .first()
        .map(|item| item.href.clone())
        .unwrap_or_default();

    let (is_open, entries): (bool, Vec<(String, String, String, bool)>) = {
        let menu = menu.read();
        let entries = menu
            .items()
            .iter()
            .map(|item| {
                (
                    item.id.clone(),
                    item.label.clone(),
                    item.href.clone(),
                    menu.is_active(item),
                )
            })
            .collect();
        (menu.is_open(), entries)
    };

    let mut navigate = move |href: &str| match menu.write().click(href) {
        Ok(action) => {
            document::eval(&nav_action_js(&action));
        }
        Err(err) => tracing::warn!(%href, error = %err, "Ignoring navigation"),
    };

    rsx! {
        nav {
            class: "compact-nav",
            div {
                class: "nav-buttons",
                button {
                    class: "nav-button nav-brand",
                    onclick: move |_| navigate(&home_href),
                    "{brand}"
                }
                ThemeToggle {}
                button {
                    class: "nav-button nav-toggle",
                    "aria-label": "Open menu",
                    onclick: move |_| menu.write().toggle(),
                    if is_open { "✕" } else { "☰" }
                }
            }

            if is_open {
                div {
                    class: "nav-dropdown",
                    for (id, label, href, active) in entries {
                        button {
                            key: "{id}",
                            class: if active { "nav-item active" } else { "nav-item" },
                            onclick: move |_| navigate(&href),
                            "{label}"
                        }
                    }
                    div { class: "nav-divider" }
                    button {
                        class: "nav-item nav-resume",
                        onclick: move |_| {
                            let action = menu.write().download_resume();
                            document::eval(&nav_action_js(&action));
                        },
                        "⤓ Download Resume"
                    }
                }
            }
        }
    }
}
