// Ambient signals read without any network I/O.
// - Stored identifier: one value from a persisted key-value file, under the key
//   the consent manager writes its unique identifier to.
// - Global privacy control: an optional flag resolved once at startup, display-only.
use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

pub const UUID_STORAGE_KEY: &str = "osano_consentmanager_uuid";

pub trait IdentifierStore {
    /// `None` when nothing usable is stored. Never fails.
    fn stored_identifier(&self) -> Option<String>;
}

/// JSON object file of string values, e.g. `{"osano_consentmanager_uuid": "..."}`.
#[derive(Debug, Clone)]
pub struct KeyValueFile {
    path: PathBuf,
}

impl KeyValueFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no key-value store at {}", self.path.display());
                return None;
            }
            Err(err) => {
                log::warn!("failed to read {}: {err}", self.path.display());
                return None;
            }
        };

        let entries = match serde_json::from_str::<BTreeMap<String, serde_json::Value>>(&content) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("ignoring unparsable store {}: {err}", self.path.display());
                return None;
            }
        };

        match entries.get(key) {
            Some(serde_json::Value::String(value)) if !value.is_empty() => Some(value.clone()),
            _ => None,
        }
    }
}

impl IdentifierStore for KeyValueFile {
    fn stored_identifier(&self) -> Option<String> {
        self.get(UUID_STORAGE_KEY)
    }
}

/// Command-line flags win over the settings file; neither means "not signaled".
pub fn resolve_global_privacy_control(
    from_cli: Option<bool>,
    from_settings: Option<bool>,
) -> Option<bool> {
    from_cli.or(from_settings)
}
