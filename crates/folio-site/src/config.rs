//! Runtime configuration resolved from the command line.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use folio_core::{FallbackStore, JsonFileStore, MemorySessionStore, Portfolio, SessionStore};
use serde::{Deserialize, Serialize};

use crate::logging::LogConfig;

/// Everything the root component needs before the first render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// JSON content file replacing the built-in portfolio
    pub content: Option<PathBuf>,

    /// File backing session storage; process memory when absent
    pub session_file: Option<PathBuf>,

    /// Go straight to the main view
    pub skip_splash: bool,

    pub logging: LogConfig,
}

impl SiteConfig {
    /// Loads the portfolio, falling back to the built-in content.
    pub fn load_portfolio(&self) -> anyhow::Result<Portfolio> {
        let Some(path) = &self.content else {
            return Ok(Portfolio::builtin());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading content file {}", path.display()))?;
        let portfolio = Portfolio::from_json(&text)
            .with_context(|| format!("parsing content file {}", path.display()))?;
        tracing::info!(path = %path.display(), "Loaded portfolio content");
        Ok(portfolio)
    }

    /// Session storage for the visited flag.
    ///
    /// A file store degrades to memory on its first failure.
    pub fn session_store(&self) -> Arc<dyn SessionStore> {
        match &self.session_file {
            Some(path) => Arc::new(FallbackStore::new(JsonFileStore::new(path))),
            None => Arc::new(MemorySessionStore::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_builtin_content() {
        let portfolio = SiteConfig::default().load_portfolio().unwrap();
        assert_eq!(portfolio.app_id, "arnav-portfolio");
    }

    #[test]
    fn test_missing_content_file_reports_path() {
        let config = SiteConfig {
            content: Some(PathBuf::from("/nonexistent/folio.json")),
            ..Default::default()
        };
        let err = config.load_portfolio().unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/folio.json"));
    }

    #[test]
    fn test_content_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.json");
        let mut portfolio = Portfolio::builtin();
        portfolio.app_id = "custom".to_string();
        std::fs::write(&path, portfolio.to_json().unwrap()).unwrap();

        let config = SiteConfig {
            content: Some(path),
            ..Default::default()
        };
        assert_eq!(config.load_portfolio().unwrap().app_id, "custom");
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.json");
        std::fs::write(&path, "{\"app_id\": 3}").unwrap();

        let config = SiteConfig {
            content: Some(path),
            ..Default::default()
        };
        assert!(config.load_portfolio().is_err());
    }

    #[test]
    fn test_session_file_store_is_shared() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig {
            session_file: Some(dir.path().join("session.json")),
            ..Default::default()
        };

        config.session_store().set("k", "v").unwrap();
        assert_eq!(config.session_store().get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn test_memory_store_is_per_instance() {
        let config = SiteConfig::default();
        config.session_store().set("k", "v").unwrap();
        assert_eq!(config.session_store().get("k").unwrap(), None);
    }
}
