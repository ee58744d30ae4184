//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::locale::Locale;

/// Default chrono pattern for date columns
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// invx configuration with layered hierarchy
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display language for column headers and labels
    pub locale: Option<Locale>,

    /// chrono format string for date columns
    pub date_format: Option<String>,

    /// Prefix exported files with a UTF-8 byte-order mark
    pub bom: Option<bool>,

    /// Directory exported files are written to
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/invx/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::read_file(&global_path) {
                config.merge(global);
            }
        }

        // 3. Workspace config (.invx/config.yaml in cwd or a parent)
        if let Ok(cwd) = std::env::current_dir() {
            if let Some(local_path) = Self::find_workspace_config(&cwd) {
                if let Some(local) = Self::read_file(&local_path) {
                    config.merge(local);
                }
            }
        }

        // 4. Environment variables
        config.merge(Self::from_env());

        config
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "invx")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Walk up from `start` looking for `.invx/config.yaml`
    pub fn find_workspace_config(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(".invx").join("config.yaml"))
            .find(|path| path.is_file())
    }

    fn read_file(path: &Path) -> Option<Config> {
        let contents = std::fs::read_to_string(path).ok()?;
        match serde_yml::from_str::<Config>(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("ignoring malformed config {}: {}", path.display(), e);
                None
            }
        }
    }

    fn from_env() -> Config {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the environment layer from a variable lookup
    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Config {
        let mut config = Config::default();
        if let Some(locale) = var("INVX_LOCALE") {
            match locale.parse() {
                Ok(l) => config.locale = Some(l),
                Err(e) => tracing::warn!("ignoring INVX_LOCALE: {}", e),
            }
        }
        if let Some(format) = var("INVX_DATE_FORMAT") {
            config.date_format = Some(format);
        }
        if let Some(bom) = var("INVX_BOM") {
            match parse_flag(&bom) {
                Some(flag) => config.bom = Some(flag),
                None => tracing::warn!("ignoring INVX_BOM: expected true/false, got '{}'", bom),
            }
        }
        config
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(&mut self, other: Config) {
        if other.locale.is_some() {
            self.locale = other.locale;
        }
        if other.date_format.is_some() {
            self.date_format = other.date_format;
        }
        if other.bom.is_some() {
            self.bom = other.bom;
        }
        if other.output_dir.is_some() {
            self.output_dir = other.output_dir;
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale.unwrap_or_default()
    }

    pub fn date_format(&self) -> &str {
        self.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT)
    }

    pub fn bom(&self) -> bool {
        self.bom.unwrap_or(true)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.locale(), Locale::En);
        assert_eq!(config.date_format(), "%Y-%m-%d");
        assert!(config.bom());
        assert_eq!(config.output_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_merge_prefers_other() {
        let mut base = Config {
            locale: Some(Locale::En),
            bom: Some(true),
            ..Default::default()
        };
        base.merge(Config {
            locale: Some(Locale::Ar),
            date_format: Some("%d/%m/%Y".to_string()),
            ..Default::default()
        });
        assert_eq!(base.locale(), Locale::Ar);
        assert_eq!(base.date_format(), "%d/%m/%Y");
        assert!(base.bom());
    }

    #[test]
    fn test_yaml_parse() {
        let config: Config = serde_yml::from_str("locale: ar\nbom: false\n").unwrap();
        assert_eq!(config.locale(), Locale::Ar);
        assert!(!config.bom());
    }

    #[test]
    fn test_find_workspace_config_walks_up() {
        let tmp = tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::create_dir_all(tmp.path().join(".invx")).unwrap();
        std::fs::write(tmp.path().join(".invx/config.yaml"), "locale: ar\n").unwrap();

        let found = Config::find_workspace_config(&nested).unwrap();
        assert!(found.ends_with(".invx/config.yaml"));
        assert_eq!(Config::read_file(&found).unwrap().locale(), Locale::Ar);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("Yes"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_env_layer() {
        let config = Config::from_vars(|key| match key {
            "INVX_LOCALE" => Some("ar".to_string()),
            "INVX_BOM" => Some("off".to_string()),
            _ => None,
        });
        assert_eq!(config.locale(), Locale::Ar);
        assert!(!config.bom());
        assert!(config.date_format.is_none());
    }

    #[test]
    fn test_env_layer_ignores_bad_values() {
        let config = Config::from_vars(|key| match key {
            "INVX_LOCALE" => Some("fr".to_string()),
            "INVX_BOM" => Some("maybe".to_string()),
            _ => None,
        });
        assert!(config.locale.is_none());
        assert!(config.bom.is_none());
        assert!(config.bom());
    }
}
