//! Startup, splash and remount behaviour across one session.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use folio_core::{
    Clock, FallbackStore, JsonFileStore, ManualClock, MemorySessionStore, Portfolio,
    RevealPhase, RevealSequencer, SessionStore, StartupView, TimedMachine, Typewriter,
    VisibilityOptions, VisibilityTrigger, VisitedFlag, drive_until, ms, startup_view,
};

fn run_splash(flag: &VisitedFlag, clock: &ManualClock) -> u32 {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let mut seq =
        RevealSequencer::new(flag.clone()).on_complete(move || counter.set(counter.get() + 1));
    seq.mount(clock.now());
    let end = clock.advance(ms(5_000));
    drive_until(&mut seq, end);
    calls.get()
}

#[test]
fn test_fresh_session_shows_splash_then_skips() {
    let portfolio = Portfolio::builtin();
    let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
    let clock = ManualClock::new();

    let flag = VisitedFlag::new(&portfolio.app_id, store.clone());
    assert_eq!(startup_view(&flag, false), StartupView::Splash);
    assert_eq!(run_splash(&flag, &clock), 1);

    // Second mount in the same session.
    let remount = VisitedFlag::new(&portfolio.app_id, store.clone());
    assert_eq!(startup_view(&remount, false), StartupView::Main);
    assert_eq!(
        store.get("arnav-portfolio-visited").unwrap(),
        Some("true".to_string())
    );
}

#[test]
fn test_new_session_shows_splash_again() {
    let clock = ManualClock::new();
    let first: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
    let flag = VisitedFlag::new("app", first);
    run_splash(&flag, &clock);

    let second: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
    assert_eq!(
        startup_view(&VisitedFlag::new("app", second), false),
        StartupView::Splash
    );
}

#[test]
fn test_file_backed_session_shared_between_mounts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let clock = ManualClock::new();

    let flag = VisitedFlag::new("app", Arc::new(FallbackStore::new(JsonFileStore::new(&path))));
    assert_eq!(run_splash(&flag, &clock), 1);

    let reopened = VisitedFlag::new("app", Arc::new(FallbackStore::new(JsonFileStore::new(&path))));
    assert_eq!(startup_view(&reopened, false), StartupView::Main);
}

#[test]
fn test_unwritable_store_still_completes() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be read as a file.
    let store = FallbackStore::new(JsonFileStore::new(dir.path()));
    let flag = VisitedFlag::new("app", Arc::new(store));
    let clock = ManualClock::new();

    assert_eq!(startup_view(&flag, false), StartupView::Splash);
    assert_eq!(run_splash(&flag, &clock), 1);
    assert_eq!(startup_view(&flag, false), StartupView::Main);
}

#[test]
fn test_unmount_during_splash_is_silent() {
    let flag = VisitedFlag::new("app", Arc::new(MemorySessionStore::new()));
    let fired = Rc::new(Cell::new(false));
    let marker = fired.clone();
    let mut seq = RevealSequencer::new(flag.clone()).on_complete(move || marker.set(true));

    seq.mount(ms(0));
    drive_until(&mut seq, ms(1_000));
    seq.teardown();
    drive_until(&mut seq, ms(10_000));

    assert_eq!(seq.phase(), RevealPhase::Cancelled);
    assert!(!fired.get());
    assert_eq!(startup_view(&flag, false), StartupView::Splash);
}

#[test]
fn test_hero_typing_waits_for_visibility() {
    let portfolio = Portfolio::builtin();
    let mut trigger = VisibilityTrigger::new(VisibilityOptions::once());
    let mut typewriter = Typewriter::new(portfolio.phrases.clone()).unwrap();
    trigger.attach();

    typewriter.set_armed(trigger.is_active(), ms(0));
    assert_eq!(typewriter.next_deadline(), None);

    trigger.observe(true);
    typewriter.set_armed(trigger.is_active(), ms(500));
    drive_until(&mut typewriter, ms(1_300));

    assert_eq!(typewriter.displayed(), "Software");
}
