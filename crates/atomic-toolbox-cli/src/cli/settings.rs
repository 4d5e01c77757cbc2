//! Locate and load the toolbox configuration.

use anyhow::{Context, Result};
use atomic_toolbox::ToolboxConfig;
use std::path::{Path, PathBuf};

/// Toolbox home: `$ATOMIC_TOOLBOX_HOME`, else `~/.atomic-toolbox`.
pub fn toolbox_home() -> PathBuf {
    if let Ok(p) = std::env::var("ATOMIC_TOOLBOX_HOME") {
        return PathBuf::from(p);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join(".atomic-toolbox")
}

/// Default config file path.
pub fn default_config_path() -> PathBuf {
    toolbox_home().join("config.json")
}

/// Defaults, then the config file, then `ATOMIC_TOOLBOX_*` env overrides.
///
/// An explicit `--config` path must exist; the default one may be absent.
pub fn load_config(explicit: Option<&Path>) -> Result<ToolboxConfig> {
    let mut config = match explicit {
        Some(path) => ToolboxConfig::load(path)
            .with_context(|| format!("failed to load config: {}", path.display()))?,
        None => {
            let path = default_config_path();
            ToolboxConfig::load_or_default(&path)
                .with_context(|| format!("failed to load config: {}", path.display()))?
        }
    };
    config.apply_env();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_explicit_config_loaded() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, r#"{{"sitemap": {{"subject": "emoji"}}}}"#).unwrap();

        let config = load_config(Some(tmp.path())).unwrap();
        assert_eq!(config.sitemap.subject, "emoji");
    }

    #[test]
    fn test_explicit_config_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(err.to_string().contains("failed to load config"));
    }
}
