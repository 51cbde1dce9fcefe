//! Experience carousel and the contact modal.

use dioxus::prelude::*;
use folio_core::format::{format_phone, is_valid_email, is_valid_phone};
use folio_core::{Carousel, ModalClick, PersonalInfo, Side, Slide, SlideTransition, SocialKind};

use crate::hooks::use_site;

use super::links::keyed;
use super::{Section, SocialLinkButton};

fn side_name(side: Side) -> &'static str {
    match side {
        Side::Left => "left",
        Side::Right => "right",
    }
}

/// Animation classes of a slide. The same for next, previous and jumps.
pub fn transition_class(transition: SlideTransition) -> String {
    format!(
        "slide enter-from-{} exit-to-{}",
        side_name(transition.enter_from),
        side_name(transition.exit_to)
    )
}

#[component]
pub fn Experience() -> Element {
    let site = use_site();
    let mut carousel = use_signal(|| site.carousel());

    let (index, key, slide, count, modal_open, transition) = {
        let carousel = carousel.read();
        (
            carousel.current_index(),
            carousel.render_key(),
            carousel.current().clone(),
            carousel.len(),
            carousel.is_modal_open(),
            carousel.transition(),
        )
    };
    let slide_class = transition_class(transition);
    let indicators: Vec<(usize, String)> = (0..count)
        .map(|i| (i, format!("Go to slide {}", i + 1)))
        .collect();
    let personal = site.portfolio.personal.clone();

    rsx! {
        Section {
            id: "experience",
            class: "experience",
            div {
                class: "section-header",
                h2 { class: "section-title", "Experience Showcase" }
            }

            div {
                class: "carousel",
                div {
                    class: "carousel-indicators",
                    for (i, label) in indicators {
                        button {
                            key: "{i}",
                            class: if i == index { "indicator active" } else { "indicator" },
                            "aria-label": "{label}",
                            onclick: move |_| carousel.write().jump_to(i),
                        }
                    }
                }

                div {
                    class: "carousel-viewport",
                    div {
                        key: "{key}",
                        class: "{slide_class}",
                        SlideCard {
                            slide,
                            on_hire: move |_| carousel.write().open_modal(),
                        }
                    }
                }

                button {
                    class: "carousel-nav carousel-prev",
                    "aria-label": "Previous slide",
                    onclick: move |_| carousel.write().previous(),
                    "‹"
                }
                button {
                    class: "carousel-nav carousel-next",
                    "aria-label": "Next slide",
                    onclick: move |_| carousel.write().next(),
                    "›"
                }
            }

            if modal_open {
                ContactModal { carousel, personal }
            }
        }
    }
}

/// Renders either slide kind.
#[component]
fn SlideCard(slide: Slide, on_hire: EventHandler<()>) -> Element {
    match slide {
        Slide::Experience(exp) => rsx! {
            div {
                class: "card experience-card",
                div {
                    class: "experience-aside",
                    div { class: "company-mark", "{exp.company}" }
                }
                div {
                    class: "experience-body",
                    h3 { class: "card-title", "{exp.position}" }
                    div {
                        class: "card-meta",
                        span { "◷ {exp.duration}" }
                        span { "⌖ {exp.location}" }
                    }
                    p { class: "card-description", "{exp.description}" }

                    h4 { "Key Technologies" }
                    div {
                        class: "badge-row",
                        for tech in exp.technologies {
                            span { key: "{tech}", class: "badge", "{tech}" }
                        }
                    }

                    h4 { "Highlights" }
                    ul {
                        class: "highlights",
                        for highlight in exp.highlights {
                            li { key: "{highlight}", "{highlight}" }
                        }
                    }
                }
            }
        },
        Slide::Hiring(cta) => rsx! {
            div {
                class: "card hiring-card",
                div { class: "hiring-icon", "↗" }
                h3 { class: "hiring-title", "{cta.title}" }
                p { class: "hiring-subtitle", "{cta.subtitle}" }
                p { class: "card-description", "{cta.description}" }
                div {
                    class: "badge-row",
                    for skill in cta.skills {
                        span { key: "{skill}", class: "badge", "{skill}" }
                    }
                }
                p { class: "hiring-availability", "{cta.availability}" }
                button {
                    class: "btn btn-gradient",
                    onclick: move |_| on_hire.call(()),
                    "Hire Me"
                }
            }
        },
    }
}

/// Overlay with contact details. Backdrop clicks close it; clicks inside
/// the dialog stop before reaching the backdrop.
#[component]
fn ContactModal(carousel: Signal<Carousel<Slide>>, personal: PersonalInfo) -> Element {
    let mut carousel = carousel;
    let phone = format_phone(&personal.phone);
    let profiles: Vec<_> = use_site()
        .portfolio
        .social_links()
        .into_iter()
        .filter(|link| matches!(link.kind, SocialKind::LinkedIn | SocialKind::GitHub))
        .collect();

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| carousel.write().handle_modal_click(ModalClick::Backdrop),
            div {
                class: "modal",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    carousel.write().handle_modal_click(ModalClick::Body);
                },
                div {
                    class: "modal-header",
                    h3 { "Let's Connect!" }
                    p { "Ready to discuss opportunities" }
                }

                div {
                    class: "contact-rows",
                    if is_valid_email(&personal.email) {
                        ContactRow { glyph: "✉", label: "Email", value: personal.email.clone() }
                    }
                    if is_valid_phone(&personal.phone.replace('-', "")) {
                        ContactRow { glyph: "☎", label: "Phone", value: phone }
                    }
                    ContactRow { glyph: "⌖", label: "Location", value: personal.location.clone() }
                }

                div {
                    class: "modal-profiles",
                    for (key, link) in keyed(profiles) {
                        SocialLinkButton { key: "{key}", link, show_label: true }
                    }
                }

                button {
                    class: "btn btn-outline modal-close",
                    onclick: move |_| carousel.write().close_modal(),
                    "Close"
                }
            }
        }
    }
}

#[component]
fn ContactRow(glyph: &'static str, label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "contact-row",
            span { class: "contact-glyph", "{glyph}" }
            div {
                p { class: "contact-label", "{label}" }
                p { class: "contact-value", "{value}" }
            }
        }
    }
}
