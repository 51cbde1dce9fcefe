//! Root application component.

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::StartupView;

use crate::hooks::use_site;
use crate::interop::scroll_top_js;
use crate::theme::ThemedRoot;

use super::{CompactNavigation, Experience, Footer, Hero, Projects, Skills, WelcomeSplash};

/// Shows the welcome splash once per session, then the page.
#[component]
pub fn App() -> Element {
    let site = use_site();
    let mut view = use_signal(|| site.startup_view());
    let current = *view.read();

    rsx! {
        ThemedRoot {
            div {
                class: "app",
                match current {
                    StartupView::Splash => rsx! {
                        WelcomeSplash {
                            on_complete: move |_| view.set(StartupView::Main),
                        }
                    },
                    StartupView::Main => rsx! {
                        MainView {}
                    },
                }
            }
        }
    }
}

/// Navigation, the four sections and the footer.
#[component]
fn MainView() -> Element {
    // Start at the hero, also after a reload that kept the scroll offset.
    use_future(|| async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        document::eval(scroll_top_js());
    });

    rsx! {
        div {
            class: "main-view",
            CompactNavigation {}
            main {
                Hero {}
                Skills {}
                Projects {}
                Experience {}
            }
            Footer {}
        }
    }
}
