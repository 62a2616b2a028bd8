use anyhow::Context;
use pn_domain::{EnumeratorConfig, PathScope};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Upper bound on the number of enumerated paths. `None` disables it.
    pub max_paths: Option<usize>,
    pub scope: PathScope,
    /// Used when `RUST_LOG` is not set.
    pub log_filter: String,
    /// Check the formulas of one run in parallel.
    pub parallel: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        CheckerConfig {
            max_paths: Some(100_000),
            scope: PathScope::All,
            log_filter: "info".to_string(),
            parallel: true,
        }
    }
}

impl CheckerConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn enumerator(&self) -> EnumeratorConfig {
        EnumeratorConfig {
            max_paths: self.max_paths,
            scope: self.scope,
        }
    }
}

#[cfg(test)]
mod config_test {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let c = CheckerConfig::from_json(r#"{"scope": "from_start"}"#).unwrap();
        assert_eq!(c.scope, PathScope::FromStart);
        assert_eq!(c.max_paths, Some(100_000));
        assert_eq!(c.log_filter, "info");
        assert!(c.parallel);

        let c = CheckerConfig::from_json(r#"{"max_paths": null, "parallel": false}"#).unwrap();
        assert_eq!(c.enumerator().max_paths, None);
        assert!(!c.parallel);
    }

    #[test]
    fn bad_config() {
        assert!(CheckerConfig::from_json(r#"{"scope": "sideways"}"#).is_err());
        assert!(CheckerConfig::from_file(Path::new("/does/not/exist.json")).is_err());
    }
}
