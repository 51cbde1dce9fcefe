//! Page section that reveals itself the first time it is scrolled into view.

use dioxus::prelude::*;
use folio_core::VisibilityOptions;

use crate::hooks::use_visibility;

/// Class list of a section; `revealed` starts the entrance animations.
pub fn section_class(extra: &str, revealed: bool) -> String {
    let mut class = String::from("section");
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    if revealed {
        class.push_str(" revealed");
    }
    class
}

#[component]
pub fn Section(id: String, #[props(default)] class: String, children: Element) -> Element {
    let trigger = use_visibility(&id, VisibilityOptions::once());
    let class = section_class(&class, trigger.read().is_active());

    rsx! {
        section {
            id: "{id}",
            class: "{class}",
            {children}
        }
    }
}
