//! Skills section: four marquee rows of skill badges.

use dioxus::prelude::*;
use folio_core::format::{MARQUEE_ROWS, initials};

use crate::hooks::use_site;

use super::Section;

#[component]
pub fn Skills() -> Element {
    let site = use_site();
    let skills: Vec<String> = site
        .portfolio
        .marquee_skills()
        .into_iter()
        .map(str::to_string)
        .collect();

    rsx! {
        Section {
            id: "skills",
            class: "skills",
            div {
                class: "section-header",
                h2 { class: "section-title", "Technical Skills" }
                p {
                    class: "section-subtitle",
                    "Technologies and tools I work with to build amazing digital experiences"
                }
            }

            div {
                class: "marquee-stack",
                for (row_index, row) in MARQUEE_ROWS.iter().enumerate() {
                    div {
                        key: "{row_index}",
                        class: "{row.css_class()}",
                        // Two copies so the track loops without a gap.
                        for copy in 0..2 {
                            div {
                                key: "{copy}",
                                class: "marquee-track",
                                for (index, skill) in skills.iter().enumerate() {
                                    SkillBadge { key: "{index}", name: skill.clone() }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "section-ornament",
                span { class: "ornament-line" }
                span { class: "ornament-dot" }
                span { class: "ornament-line ornament-line-reverse" }
            }
        }
    }
}

/// A skill with its initials badge.
#[component]
fn SkillBadge(name: String) -> Element {
    let badge = initials(&name);

    rsx! {
        div {
            class: "skill-badge",
            span { class: "skill-initials", "{badge}" }
            span { class: "skill-name", "{name}" }
        }
    }
}
