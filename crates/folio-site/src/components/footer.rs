//! Page footer. Also the target of the "contact" anchor.

use dioxus::prelude::*;
use folio_core::{SocialKind, SocialLink};

use crate::hooks::use_site;
use crate::interop::scroll_to_js;

use super::SocialLinkButton;
use super::links::keyed;

#[component]
pub fn Footer() -> Element {
    let site = use_site();
    let portfolio = site.portfolio.clone();
    let name = portfolio.personal.name.clone();

    // Every section except the hero.
    let quick_links: Vec<(String, String, String)> = portfolio
        .navigation
        .iter()
        .skip(1)
        .map(|item| (item.id.clone(), item.id.clone(), item.label.clone()))
        .collect();

    let links = portfolio.social_links();
    let email = links
        .iter()
        .find(|link| link.kind == SocialKind::Email)
        .map(|link| SocialLink {
            label: portfolio.personal.email.clone(),
            ..link.clone()
        });
    let profiles: Vec<SocialLink> = links
        .into_iter()
        .filter(|link| matches!(link.kind, SocialKind::GitHub | SocialKind::LinkedIn))
        .collect();

    rsx! {
        footer {
            id: "contact",
            class: "footer",
            div {
                class: "footer-grid",
                div {
                    class: "footer-brand",
                    div {
                        class: "brand-row",
                        span { class: "brand-mark", "</>" }
                        span { class: "brand-name", "{name}" }
                    }
                    p { class: "footer-blurb", "{portfolio.summary}" }
                }

                div {
                    class: "footer-links",
                    h3 { "Quick Links" }
                    div {
                        class: "quick-links",
                        for (key, target, label) in quick_links {
                            button {
                                key: "{key}",
                                class: "quick-link",
                                onclick: move |_| {
                                    document::eval(&scroll_to_js(&target));
                                },
                                "{label}"
                            }
                        }
                    }
                }

                div {
                    class: "footer-connect",
                    h3 { "Connect" }
                    if let Some(link) = email {
                        SocialLinkButton { link, show_label: true }
                    }
                    div {
                        class: "footer-profiles",
                        for (key, link) in keyed(profiles) {
                            SocialLinkButton { key: "{key}", link }
                        }
                    }
                }
            }
            p { class: "footer-copyright", "© {name}. Built with Rust and Dioxus." }
        }
    }
}
