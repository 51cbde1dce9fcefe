//! Site-wide state shared through the Dioxus context.

use std::sync::Arc;

use folio_core::{
    Carousel, FolioError, NavMenu, OrbitalTimeline, Portfolio, SessionStore, Slide, StartupView,
    Typewriter, VisitedFlag, startup_view,
};

use crate::driver::TokioClock;

/// Validated content plus the prototypes of every view machine.
///
/// Building the machines up front means invalid content is reported once at
/// startup; components clone a fresh machine when they mount.
#[derive(Clone)]
pub struct SiteContext {
    pub portfolio: Arc<Portfolio>,
    pub visited: VisitedFlag,
    pub clock: TokioClock,
    skip_splash: bool,
    menu: NavMenu,
    typewriter: Typewriter,
    carousel: Carousel<Slide>,
}

impl SiteContext {
    pub fn new(
        portfolio: Portfolio,
        store: Arc<dyn SessionStore>,
        skip_splash: bool,
    ) -> Result<Self, FolioError> {
        portfolio.validate()?;
        let menu = NavMenu::new(portfolio.navigation.clone(), portfolio.resume_file_name.clone())?;
        let typewriter = Typewriter::new(portfolio.phrases.clone())?;
        let carousel = Carousel::new(portfolio.slides.clone())?;
        let visited = VisitedFlag::new(&portfolio.app_id, store);

        Ok(Self {
            portfolio: Arc::new(portfolio),
            visited,
            clock: TokioClock::new(),
            skip_splash,
            menu,
            typewriter,
            carousel,
        })
    }

    /// Splash or main view, decided once when the root mounts.
    pub fn startup_view(&self) -> StartupView {
        startup_view(&self.visited, self.skip_splash)
    }

    pub fn nav_menu(&self) -> NavMenu {
        self.menu.clone()
    }

    pub fn typewriter(&self) -> Typewriter {
        self.typewriter.clone()
    }

    pub fn carousel(&self) -> Carousel<Slide> {
        self.carousel.clone()
    }

    pub fn orbital_timeline(&self) -> OrbitalTimeline {
        OrbitalTimeline::new(&self.portfolio.projects)
    }
}

impl PartialEq for SiteContext {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.portfolio, &other.portfolio)
    }
}

impl std::fmt::Debug for SiteContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteContext")
            .field("app_id", &self.portfolio.app_id)
            .field("visited", &self.visited)
            .field("skip_splash", &self.skip_splash)
            .finish()
    }
}
