//! Command-line configuration: defaults, config file, environment, flags.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clientbook_core::{FileStorage, RecordStore, SlotCriteriaStore};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Directory name under the platform config dir.
pub const APP_DIR: &str = "clientbook";
const CONFIG_FILE: &str = "config.json";

pub const ENV_STATE_DIR: &str = "CLIENTBOOK_STATE_DIR";
pub const ENV_RECORDS: &str = "CLIENTBOOK_RECORDS";
pub const ENV_NO_STORAGE: &str = "CLIENTBOOK_NO_STORAGE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Where persisted preferences live. `None` when the platform has no
    /// config dir and nothing else was configured.
    pub state_dir: Option<PathBuf>,
    /// Record file to browse; the demo clients when unset.
    pub records_path: Option<PathBuf>,
    pub storage_enabled: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            state_dir: FileStorage::default_location()
                .map(|storage| storage.dir().to_path_buf()),
            records_path: None,
            storage_enabled: true,
        }
    }
}

impl CliConfig {
    /// Resolve from the config file in the platform config dir, then the
    /// process environment.
    pub fn load() -> Self {
        let mut config = Self::config_path()
            .map(|path| Self::from_file(&path))
            .unwrap_or_default();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Read a config file. A missing or unreadable file yields the defaults.
    pub fn from_file(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Self::default();
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read config file, using defaults");
                return Self::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(config) => {
                debug!(path = %path.display(), "loaded config file");
                config
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "invalid config file, using defaults");
                Self::default()
            }
        }
    }

    /// Apply `CLIENTBOOK_*` overrides read through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(dir) = non_empty(ENV_STATE_DIR) {
            self.state_dir = Some(PathBuf::from(dir));
        }
        if let Some(path) = non_empty(ENV_RECORDS) {
            self.records_path = Some(PathBuf::from(path));
        }
        if let Some(flag) = non_empty(ENV_NO_STORAGE) {
            self.storage_enabled = !is_truthy(&flag);
        }
    }

    /// Apply command-line flags, which win over everything else.
    pub fn apply_flags(
        &mut self,
        state_dir: Option<PathBuf>,
        records: Option<PathBuf>,
        no_storage: bool,
    ) {
        if state_dir.is_some() {
            self.state_dir = state_dir;
        }
        if records.is_some() {
            self.records_path = records;
        }
        if no_storage {
            self.storage_enabled = false;
        }
    }

    /// Criteria store for this configuration.
    pub fn criteria_store(&self) -> SlotCriteriaStore {
        if !self.storage_enabled {
            debug!("preference storage disabled");
            return SlotCriteriaStore::unavailable();
        }
        match &self.state_dir {
            Some(dir) => {
                SlotCriteriaStore::new(Arc::new(FileStorage::new(dir.clone())))
            }
            None => {
                warn!("no state directory available, sort changes will not be kept");
                SlotCriteriaStore::unavailable()
            }
        }
    }

    /// Records to browse.
    pub fn record_store(&self) -> Result<RecordStore> {
        match &self.records_path {
            Some(path) => RecordStore::from_path(path).with_context(|| {
                format!("failed to load client records from {}", path.display())
            }),
            None => Ok(RecordStore::demo()),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().expect("tempdir");

        let config = CliConfig::from_file(&dir.path().join("config.json"));

        assert_eq!(config, CliConfig::default());
        assert!(config.storage_enabled);
    }

    #[test]
    fn file_fields_override_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"records_path":"/data/clients.json","storage_enabled":false}"#,
        )
        .unwrap();

        let config = CliConfig::from_file(&path);

        assert_eq!(
            config.records_path.as_deref(),
            Some(Path::new("/data/clients.json"))
        );
        assert!(!config.storage_enabled);
        assert_eq!(config.state_dir, CliConfig::default().state_dir);
    }

    #[test]
    fn invalid_file_gives_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ nope").unwrap();

        assert_eq!(CliConfig::from_file(&path), CliConfig::default());
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config = CliConfig {
            state_dir: Some(PathBuf::from("/from/file")),
            records_path: None,
            storage_enabled: true,
        };

        config.apply_env(env(&[
            (ENV_STATE_DIR, "/from/env"),
            (ENV_RECORDS, "clients.json"),
            (ENV_NO_STORAGE, "true"),
        ]));

        assert_eq!(config.state_dir.as_deref(), Some(Path::new("/from/env")));
        assert_eq!(
            config.records_path.as_deref(),
            Some(Path::new("clients.json"))
        );
        assert!(!config.storage_enabled);
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let mut config = CliConfig::default();
        let before = config.clone();

        config.apply_env(env(&[(ENV_STATE_DIR, " "), (ENV_NO_STORAGE, "")]));

        assert_eq!(config, before);
    }

    #[test]
    fn flags_win_over_env() {
        let mut config = CliConfig::default();
        config.apply_env(env(&[(ENV_STATE_DIR, "/from/env")]));

        config.apply_flags(Some(PathBuf::from("/from/flag")), None, true);

        assert_eq!(config.state_dir.as_deref(), Some(Path::new("/from/flag")));
        assert!(!config.storage_enabled);
    }

    #[test]
    fn default_state_dir_is_the_file_storage_location() {
        let expected = FileStorage::default_location()
            .map(|storage| storage.dir().to_path_buf());

        assert_eq!(CliConfig::default().state_dir, expected);
    }

    #[test]
    fn disabled_storage_yields_unavailable_store() {
        let config = CliConfig {
            storage_enabled: false,
            ..CliConfig::default()
        };

        assert!(!config.criteria_store().is_available());
    }

    #[test]
    fn missing_record_file_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let config = CliConfig {
            records_path: Some(dir.path().join("absent.json")),
            ..CliConfig::default()
        };

        let err = config.record_store().unwrap_err();

        assert!(err.to_string().contains("failed to load client records"));
    }
}
