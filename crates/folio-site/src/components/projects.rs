//! Projects section with the radial orbital timeline.

use dioxus::prelude::*;
use folio_core::format::truncate;
use folio_core::{Clock, NodeLayout, OrbitalTimeline, Project};

use crate::hooks::{use_site, use_timed_machine};
use crate::interop::open_external_js;

use super::Section;

#[component]
pub fn Projects() -> Element {
    rsx! {
        Section {
            id: "projects",
            class: "projects",
            div {
                class: "projects-intro",
                h2 { class: "section-title", "My Projects" }
                p {
                    class: "section-subtitle",
                    "Innovative solutions spanning machine learning, blockchain, mobile development, and web technologies."
                }
                div {
                    class: "projects-hint",
                    span { class: "hint-line" }
                    span { "Click on any project to explore" }
                }
            }
            OrbitalTimelineView {}
        }
    }
}

/// Render data of one node.
#[derive(Clone, PartialEq)]
struct NodeView {
    project: Project,
    layout: NodeLayout,
    expanded: bool,
    pulsing: bool,
    related: bool,
}

impl NodeView {
    fn collect(orbit: &OrbitalTimeline, projects: &[Project]) -> Vec<Self> {
        projects
            .iter()
            .enumerate()
            .map(|(index, project)| Self {
                project: project.clone(),
                layout: orbit.layout(index),
                expanded: orbit.is_expanded(project.id),
                pulsing: orbit.is_pulsing(project.id),
                related: orbit.is_related_to_expanded(project.id),
            })
            .collect()
    }

    fn style(&self) -> String {
        let (z_index, opacity) = if self.expanded {
            (200, 1.0)
        } else {
            (self.layout.z_index, self.layout.opacity)
        };
        format!(
            "transform: translate({:.2}px, {:.2}px); z-index: {z_index}; opacity: {opacity:.3};",
            self.layout.x, self.layout.y
        )
    }

    fn class(&self) -> String {
        let mut class = String::from("orbit-node");
        if self.expanded {
            class.push_str(" expanded");
        }
        if self.related {
            class.push_str(" related");
        }
        if self.pulsing {
            class.push_str(" pulsing");
        }
        class
    }
}

#[component]
fn OrbitalTimelineView() -> Element {
    let site = use_site();
    let clock = site.clock;
    let prototype = site.orbital_timeline();
    let mut orbit = use_timed_machine(clock, move |now| {
        let mut orbit = prototype;
        orbit.mount(now);
        orbit
    });

    let nodes = NodeView::collect(&orbit.read(), &site.portfolio.projects);
    let titles: Vec<(u32, String)> = site
        .portfolio
        .projects
        .iter()
        .map(|project| (project.id, project.title.clone()))
        .collect();

    rsx! {
        div {
            class: "orbital-timeline",
            // Background click collapses the expanded node.
            onclick: move |_| orbit.write().resume(clock.now()),
            div {
                class: "orbit-center",
                div { class: "orbit-core" }
                div { class: "orbit-ring" }
                for (id, node) in nodes.into_iter().map(|node| (node.project.id, node)) {
                    OrbitNode {
                        key: "{id}",
                        node,
                        titles: titles.clone(),
                        on_toggle: move |id| orbit.write().toggle(id, clock.now()),
                    }
                }
            }
        }
    }
}

#[component]
fn OrbitNode(node: NodeView, titles: Vec<(u32, String)>, on_toggle: EventHandler<u32>) -> Element {
    let project = node.project.clone();
    let id = project.id;
    let label = truncate(&project.title, 18);
    let related: Vec<(u32, String)> = titles
        .into_iter()
        .filter(|(other, _)| project.related_ids.contains(other))
        .collect();

    rsx! {
        div {
            class: "{node.class()}",
            style: "{node.style()}",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                on_toggle.call(id);
            },
            div { class: "orbit-node-icon", "{project.icon.glyph()}" }
            div { class: "orbit-node-label", "{label}" }

            if node.expanded {
                div {
                    class: "orbit-card",
                    div {
                        class: "orbit-card-header",
                        span {
                            class: "status-badge {project.status.css_class()}",
                            "{project.status.label()}"
                        }
                        span { class: "orbit-card-date", "{project.date}" }
                    }
                    h3 { class: "orbit-card-title", "{project.title}" }
                    p { class: "orbit-card-category", "{project.category}" }
                    p { class: "orbit-card-content", "{project.content}" }

                    div {
                        class: "energy",
                        div {
                            class: "energy-header",
                            span { "Energy Level" }
                            span { "{project.energy}%" }
                        }
                        div {
                            class: "energy-bar",
                            div { class: "energy-fill", style: "width: {project.energy}%;" }
                        }
                    }

                    if !related.is_empty() {
                        div {
                            class: "orbit-card-related",
                            h4 { "Connected Nodes" }
                            for (other, title) in related {
                                button {
                                    key: "{other}",
                                    class: "related-button",
                                    onclick: move |evt: MouseEvent| {
                                        evt.stop_propagation();
                                        on_toggle.call(other);
                                    },
                                    "{title} →"
                                }
                            }
                        }
                    }

                    div {
                        class: "orbit-card-links",
                        if let Some(url) = project.github_url.clone() {
                            button {
                                class: "btn btn-outline btn-small",
                                onclick: move |evt: MouseEvent| {
                                    evt.stop_propagation();
                                    document::eval(&open_external_js(&url));
                                },
                                "GitHub"
                            }
                        }
                        if let Some(url) = project.live_url.clone() {
                            button {
                                class: "btn btn-primary btn-small",
                                onclick: move |evt: MouseEvent| {
                                    evt.stop_propagation();
                                    document::eval(&open_external_js(&url));
                                },
                                "Live Demo"
                            }
                        }
                    }
                }
            }
        }
    }
}
