//! Hero section with the typewriter line.

use dioxus::prelude::*;
use folio_core::{Clock, SocialKind, VisibilityOptions};

use crate::hooks::{use_site, use_timed_machine, use_visibility};
use crate::interop::{download_js, scroll_to_js};

use super::SocialLinkButton;
use super::links::keyed;

#[component]
pub fn Hero() -> Element {
    let site = use_site();
    let clock = site.clock;
    let trigger = use_visibility("home", VisibilityOptions::once());
    let prototype = site.typewriter();
    let mut typewriter = use_timed_machine(clock, move |_| prototype);

    // Typing starts the first time the hero is seen.
    use_effect(move || {
        let armed = trigger.read().is_active();
        typewriter.write().set_armed(armed, clock.now());
    });

    let portfolio = site.portfolio.clone();
    let personal = &portfolio.personal;
    let displayed = typewriter.read().displayed().to_string();
    let links: Vec<_> = portfolio
        .social_links()
        .into_iter()
        .filter(|link| link.kind != SocialKind::Location)
        .collect();
    let resume = portfolio.resume_file_name.clone();

    rsx! {
        section {
            id: "home",
            class: "hero",
            div { class: "hero-lamp" }
            p { class: "hero-greeting", "Hi, I'm" }
            h1 { class: "hero-name", "{personal.name}" }
            h2 {
                class: "hero-role",
                "I'm a "
                span {
                    class: "typewriter",
                    "{displayed}"
                    span { class: "typewriter-cursor", "|" }
                }
            }

            div {
                class: "hero-actions",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        document::eval(&download_js(&resume));
                    },
                    "⤓ Download Resume"
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| {
                        document::eval(&scroll_to_js("contact"));
                    },
                    "Get In Touch"
                }
            }

            div {
                class: "hero-social",
                for (key, link) in keyed(links) {
                    SocialLinkButton { key: "{key}", link }
                }
            }

            div { class: "hero-location", "⌖ {personal.location}" }
        }
    }
}
