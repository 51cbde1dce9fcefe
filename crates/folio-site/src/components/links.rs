//! Contact and profile link buttons.

use dioxus::prelude::*;
use folio_core::SocialLink;

use crate::interop::open_link_js;

/// Pairs each link with its render key.
pub(crate) fn keyed(links: Vec<SocialLink>) -> Vec<(String, SocialLink)> {
    links
        .into_iter()
        .map(|link| (link.label.clone(), link))
        .collect()
}

#[component]
pub fn SocialLinkButton(link: SocialLink, #[props(default)] show_label: bool) -> Element {
    let script = open_link_js(&link);

    rsx! {
        button {
            class: if show_label { "social-link social-link-labeled" } else { "social-link" },
            title: "{link.label}",
            "aria-label": "{link.label}",
            onclick: move |_| {
                document::eval(&script);
            },
            span { class: "social-glyph", "{link.glyph()}" }
            if show_label {
                span { class: "social-label", "{link.label}" }
            }
        }
    }
}
