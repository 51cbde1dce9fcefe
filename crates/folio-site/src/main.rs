//! Entry point for the portfolio site.
//!
//! Parses the command line, sets up logging, validates the content and
//! launches the Dioxus desktop window.

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use folio_site::components::App;
use folio_site::config::SiteConfig;
use folio_site::logging::{FileConfig, LogConfig, init_logging};
use folio_site::state::SiteContext;

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Site context built before launch and handed to the root component.
static SITE: OnceLock<SiteContext> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "folio-site")]
#[command(about = "Personal portfolio rendered as a desktop app")]
struct Args {
    /// JSON content file replacing the built-in portfolio
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Back session storage with this JSON file instead of process memory
    #[arg(long)]
    session_file: Option<PathBuf>,

    /// Skip the welcome splash
    #[arg(long)]
    skip_splash: bool,

    /// Default log level (RUST_LOG overrides it)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Also write logs to daily files in this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Multi-line console logs
    #[arg(long)]
    pretty_logs: bool,
}

impl Args {
    fn into_config(self) -> SiteConfig {
        let mut logging = if self.pretty_logs {
            LogConfig::development()
        } else {
            LogConfig::default()
        };
        logging.default_level = self.log_level;
        logging.file = self.log_dir.map(FileConfig::daily);

        SiteConfig {
            content: self.content,
            session_file: self.session_file,
            skip_splash: self.skip_splash,
            logging,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = Args::parse().into_config();

    // Flushes file logs on exit.
    let _guard = init_logging(&config.logging)?;

    tracing::info!("Starting portfolio site");

    let portfolio = config.load_portfolio()?;
    let site = SiteContext::new(portfolio, config.session_store(), config.skip_splash)
        .context("invalid portfolio content")?;
    tracing::debug!(?site, "Site context ready");
    SITE.set(site).ok();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Portfolio")
                        .with_inner_size(LogicalSize::new(1280, 860))
                        .with_resizable(true),
                )
                .with_custom_head(format!(r#"<style>{}</style>"#, STYLES_CSS)),
        )
        .launch(RootApp);

    Ok(())
}

/// Provides the site context and logs shutdown.
#[component]
fn RootApp() -> Element {
    use_drop(|| {
        tracing::info!("Shutting down portfolio site");
    });

    let Some(site) = SITE.get() else {
        return rsx! {
            div { class: "startup-error", "Site context missing" }
        };
    };
    use_context_provider(|| site.clone());

    rsx! {
        App {}
    }
}
