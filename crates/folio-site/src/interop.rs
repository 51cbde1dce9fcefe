//! Scripts evaluated in the webview.
//!
//! Every value spliced into a script goes through `serde_json`, which
//! produces a valid JS literal. Watchers register an unsubscribe function
//! under a token in `window.__folioSubs` and stay alive until
//! [`unsubscribe_js`] runs for that token.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use folio_core::{NavAction, SocialLink, VisibilityOptions};
use serde::{Deserialize, Serialize};

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Identifies one watcher registered in the webview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionToken(u64);

impl SubscriptionToken {
    pub fn next() -> Self {
        Self(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed))
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// One report from the scroll watcher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollSample {
    /// Vertical scroll offset of the window.
    pub y: f64,
    /// `offsetTop` of every watched section present in the document.
    pub offsets: HashMap<String, f64>,
}

fn literal<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

/// Smooth-scrolls to an element; nothing happens if it does not exist.
pub fn scroll_to_js(id: &str) -> String {
    format!(
        "document.getElementById({})?.scrollIntoView({{ behavior: 'smooth' }});",
        literal(id)
    )
}

pub fn scroll_top_js() -> &'static str {
    "window.scrollTo({ top: 0, behavior: 'smooth' });"
}

/// Downloads a file through a transient anchor element.
pub fn download_js(file_name: &str) -> String {
    let name = literal(file_name);
    format!(
        r#"(() => {{
    const link = document.createElement('a');
    link.href = {name};
    link.download = {name};
    document.body.appendChild(link);
    link.click();
    document.body.removeChild(link);
}})();"#
    )
}

/// Opens a URL in a new browsing context.
pub fn open_external_js(href: &str) -> String {
    format!("window.open({}, '_blank', 'noopener,noreferrer');", literal(href))
}

/// Follows a contact link: web profiles open in a new context, mail and
/// phone links are handed to the current one.
pub fn open_link_js(link: &SocialLink) -> String {
    if link.opens_new_context() {
        open_external_js(&link.href)
    } else {
        format!("window.location.href = {};", literal(&link.href))
    }
}

/// Script for a navigation action.
pub fn nav_action_js(action: &NavAction) -> String {
    match action {
        NavAction::ScrollTo(id) => scroll_to_js(id),
        NavAction::DownloadResume(file_name) => download_js(file_name),
    }
}

fn subscribe_prelude(token: SubscriptionToken) -> String {
    format!(
        "window.__folioSubs = window.__folioSubs || {{}};\nconst token = {};",
        token.id()
    )
}

/// Reports a [`ScrollSample`] on every scroll event, and once on start.
pub fn scroll_watch_js(token: SubscriptionToken, section_ids: &[String]) -> String {
    format!(
        r#"{prelude}
const ids = {ids};
const report = () => {{
    const offsets = {{}};
    for (const id of ids) {{
        const el = document.getElementById(id);
        if (el) offsets[id] = el.offsetTop;
    }}
    dioxus.send({{ y: window.scrollY, offsets }});
}};
window.addEventListener('scroll', report, {{ passive: true }});
report();
await new Promise((resolve) => {{
    window.__folioSubs[token] = () => {{
        window.removeEventListener('scroll', report);
        resolve();
    }};
}});"#,
        prelude = subscribe_prelude(token),
        ids = literal(section_ids),
    )
}

/// Reports `true`/`false` as the element enters and leaves the viewport.
///
/// Waits for the element to appear in the document before observing it.
pub fn visibility_watch_js(
    token: SubscriptionToken,
    element_id: &str,
    options: &VisibilityOptions,
) -> String {
    format!(
        r#"{prelude}
const id = {id};
const live = () => window.__folioSubs[token] !== null;
let el = document.getElementById(id);
while (!el && live()) {{
    await new Promise((resolve) => requestAnimationFrame(resolve));
    el = document.getElementById(id);
}}
if (el && live()) {{
    const observer = new IntersectionObserver((entries) => {{
        for (const entry of entries) dioxus.send(entry.isIntersecting);
    }}, {{ threshold: {threshold}, rootMargin: '0px 0px {margin}px 0px' }});
    observer.observe(el);
    await new Promise((resolve) => {{
        window.__folioSubs[token] = () => {{
            observer.disconnect();
            resolve();
        }};
    }});
}}"#,
        prelude = subscribe_prelude(token),
        id = literal(element_id),
        threshold = options.threshold,
        margin = options.root_margin_bottom,
    )
}

/// Removes a watcher. A watcher still waiting for its element sees the
/// `null` marker and gives up.
pub fn unsubscribe_js(token: SubscriptionToken) -> String {
    format!(
        r#"(() => {{
    const subs = (window.__folioSubs = window.__folioSubs || {{}});
    const stop = subs[{id}];
    subs[{id}] = null;
    if (typeof stop === 'function') stop();
}})();"#,
        id = token.id()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::SocialKind;

    fn link(kind: SocialKind, href: &str) -> SocialLink {
        SocialLink {
            kind,
            label: "x".to_string(),
            href: href.to_string(),
        }
    }

    #[test]
    fn test_tokens_are_unique() {
        let a = SubscriptionToken::next();
        let b = SubscriptionToken::next();
        assert_ne!(a, b);
    }

    #[test]
    fn test_scroll_to_escapes_id() {
        let js = scroll_to_js("skills");
        assert!(js.contains("getElementById(\"skills\")?."));
        assert!(js.contains("behavior: 'smooth'"));

        let hostile = scroll_to_js("a\"); alert(1); (\"");
        assert!(hostile.contains(r#"getElementById("a\"); alert(1); (\"")"#));
    }

    #[test]
    fn test_scroll_top_is_smooth() {
        assert!(scroll_top_js().contains("top: 0, behavior: 'smooth'"));
    }

    #[test]
    fn test_download_uses_file_name() {
        let js = download_js("arnavresumeLatest.pdf");
        assert!(js.contains("link.download = \"arnavresumeLatest.pdf\";"));
        assert!(js.contains("removeChild(link)"));
    }

    #[test]
    fn test_open_link_context() {
        let github = open_link_js(&link(SocialKind::GitHub, "https://github.com/x"));
        assert!(github.starts_with("window.open(\"https://github.com/x\", '_blank'"));

        let mail = open_link_js(&link(SocialKind::Email, "mailto:a@b.c"));
        assert_eq!(mail, "window.location.href = \"mailto:a@b.c\";");
    }

    #[test]
    fn test_nav_action_dispatch() {
        assert_eq!(
            nav_action_js(&NavAction::ScrollTo("home".to_string())),
            scroll_to_js("home")
        );
        assert!(nav_action_js(&NavAction::DownloadResume("cv.pdf".to_string())).contains("cv.pdf"));
    }

    #[test]
    fn test_visibility_watch_uses_options() {
        let token = SubscriptionToken::next();
        let js = visibility_watch_js(token, "hero", &VisibilityOptions::default());
        assert!(js.contains("threshold: 0.1"));
        assert!(js.contains("rootMargin: '0px 0px -50px 0px'"));
        assert!(js.contains(&format!("const token = {};", token.id())));
    }

    #[test]
    fn test_scroll_watch_lists_sections() {
        let ids = vec!["home".to_string(), "skills".to_string()];
        let js = scroll_watch_js(SubscriptionToken(7), &ids);
        assert!(js.contains(r#"const ids = ["home","skills"];"#));
        assert!(js.contains("dioxus.send({ y: window.scrollY, offsets })"));
    }

    #[test]
    fn test_unsubscribe_targets_token() {
        let js = unsubscribe_js(SubscriptionToken(42));
        assert!(js.contains("subs[42] = null;"));
    }

    #[test]
    fn test_scroll_sample_parses() {
        let sample: ScrollSample =
            serde_json::from_str(r#"{"y": 720.5, "offsets": {"home": 0, "skills": 800}}"#).unwrap();
        assert_eq!(sample.y, 720.5);
        assert_eq!(sample.offsets["skills"], 800.0);
    }
}
