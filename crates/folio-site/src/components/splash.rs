//! Welcome splash shown before the main view.

use dioxus::prelude::*;
use folio_core::{RevealPhase, RevealSequencer};

use crate::hooks::{use_site, use_timed_machine};

/// Plays the greeting, fades out and reports completion once.
#[component]
pub fn WelcomeSplash(on_complete: EventHandler<()>) -> Element {
    let site = use_site();
    let visited = site.visited.clone();
    let sequencer = use_timed_machine(site.clock, move |now| {
        let mut sequencer = RevealSequencer::new(visited).on_complete(move || on_complete.call(()));
        sequencer.mount(now);
        sequencer
    });

    let class = match sequencer.read().phase() {
        RevealPhase::FadingOut | RevealPhase::Done => "splash splash-exit",
        _ => "splash",
    };
    let name = site.portfolio.personal.name.clone();

    rsx! {
        div {
            class: "{class}",
            div {
                class: "splash-content",
                div { class: "splash-hello", "hello" }
                div { class: "splash-name", "{name}" }
            }
        }
    }
}
