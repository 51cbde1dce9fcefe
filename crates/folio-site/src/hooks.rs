//! Hooks binding the core machines to a component's lifetime.
//!
//! Timers and watchers run in `use_future` tasks, which Dioxus cancels when
//! the owning component unmounts. `use_drop` additionally tears the machine
//! down and removes the webview-side watcher.

use dioxus::prelude::*;
use folio_core::{
    Clock, NavMenu, OrbitalTimeline, RevealSequencer, TimedMachine, Typewriter, VisibilityOptions,
    VisibilityTrigger,
};

use crate::driver::{TokioClock, drive};
use crate::interop::{
    ScrollSample, SubscriptionToken, scroll_watch_js, unsubscribe_js, visibility_watch_js,
};
use crate::state::SiteContext;

/// Machines that can be stopped when their view goes away.
pub trait Teardown: TimedMachine {
    fn teardown(&mut self);
}

impl Teardown for RevealSequencer {
    fn teardown(&mut self) {
        RevealSequencer::teardown(self);
    }
}

impl Teardown for Typewriter {
    fn teardown(&mut self) {
        Typewriter::teardown(self);
    }
}

impl Teardown for OrbitalTimeline {
    fn teardown(&mut self) {
        OrbitalTimeline::teardown(self);
    }
}

pub fn use_site() -> SiteContext {
    use_context::<SiteContext>()
}

/// Creates a machine and drives its deadlines on the site clock.
///
/// `init` receives the current instant so the machine can be mounted.
pub fn use_timed_machine<M: Teardown + 'static>(
    clock: TokioClock,
    init: impl FnOnce(std::time::Duration) -> M,
) -> Signal<M> {
    let mut machine = use_signal(move || init(clock.now()));

    use_future(move || drive(machine, clock));

    use_drop(move || {
        if let Ok(mut machine) = machine.try_write() {
            machine.teardown();
        }
    });

    machine
}

/// Tracks whether the element with `element_id` is in the viewport.
pub fn use_visibility(element_id: &str, options: VisibilityOptions) -> Signal<VisibilityTrigger> {
    let mut trigger = use_signal(|| VisibilityTrigger::new(options));
    let token = use_hook(SubscriptionToken::next);
    let element_id = use_hook(|| element_id.to_string());

    use_future(move || {
        let element_id = element_id.clone();
        async move {
            trigger.write().attach();
            let mut watcher = document::eval(&visibility_watch_js(token, &element_id, &options));
            while let Ok(intersecting) = watcher.recv::<bool>().await {
                trigger.write().observe(intersecting);
                if !trigger.peek().is_attached() {
                    break;
                }
            }
            document::eval(&unsubscribe_js(token));
        }
    });

    use_drop(move || {
        document::eval(&unsubscribe_js(token));
    });

    trigger
}

/// Feeds window scroll events into the menu's active-section tracker.
pub fn use_scroll_spy(mut menu: Signal<NavMenu>) {
    let token = use_hook(SubscriptionToken::next);

    use_future(move || async move {
        let sections = start_spy(&mut menu.write());
        let mut watcher = document::eval(&scroll_watch_js(token, &sections));
        while let Ok(sample) = watcher.recv::<ScrollSample>().await {
            // Only write when the active section changes, to avoid a render per scroll event.
            let changed = {
                let mut preview = menu.peek().tracker().clone();
                preview.on_scroll(sample.y, &sample.offsets).is_some()
            };
            if changed {
                menu.write().tracker_mut().on_scroll(sample.y, &sample.offsets);
            }
        }
    });

    use_drop(move || {
        if let Ok(mut menu) = menu.try_write() {
            stop_spy(&mut menu);
        }
        document::eval(&unsubscribe_js(token));
    });
}

/// Attaches the tracker and returns the section ids to watch.
fn start_spy(menu: &mut NavMenu) -> Vec<String> {
    menu.tracker_mut().attach();
    menu.tracker().sections().to_vec()
}

fn stop_spy(menu: &mut NavMenu) {
    menu.tracker_mut().detach();
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use folio_core::Portfolio;

    fn menu() -> NavMenu {
        let portfolio = Portfolio::builtin();
        NavMenu::new(portfolio.navigation, portfolio.resume_file_name).unwrap()
    }

    #[test]
    fn test_spy_watches_every_section() {
        let mut menu = menu();
        let sections = start_spy(&mut menu);

        assert!(menu.tracker().is_attached());
        assert_eq!(sections, Portfolio::builtin().section_ids());
    }

    #[test]
    fn test_stopped_spy_ignores_scroll() {
        let mut menu = menu();
        start_spy(&mut menu);
        stop_spy(&mut menu);

        let page: HashMap<String, f64> = [("home".to_string(), 0.0), ("skills".to_string(), 900.0)]
            .into_iter()
            .collect();
        assert!(!menu.tracker().is_attached());
        assert_eq!(menu.tracker_mut().on_scroll(850.0, &page), None);
        assert_eq!(menu.tracker().active(), "home");
    }
}
