// Settings file handling.
// - Loads a JSON settings file, falling back to defaults when the default file is absent.
// - Holds the disclosure endpoint identifiers, storage location and optional widget command.
use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::model::{SectionId, UnknownSection};

pub const DEFAULT_API_BASE: &str = "https://disclosure.api.osano.com";
pub const DEFAULT_CUSTOMER_ID: &str = "6oqitUFyT8GP2H6v";
pub const DEFAULT_CONFIG_ID: &str = "710606b4-96df-4d9d-a998-28a4c478e86e";
pub const DEFAULT_DATA_SUBJECT_FORM_URL: &str = "https://my.datasubject.com/6oqitUFyT8GP2H6v/38386";

const APP_DIR_NAME: &str = "trusthub";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    UnknownSection(#[from] UnknownSection),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentWidgetSettings {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_base: String,
    pub customer_id: String,
    pub config_id: String,
    pub language: String,
    pub request_timeout_secs: u64,
    pub data_subject_form_url: String,
    pub identifier_store: Option<PathBuf>,
    pub initial_section: String,
    pub global_privacy_control: Option<bool>,
    pub consent_widget: Option<ConsentWidgetSettings>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            customer_id: DEFAULT_CUSTOMER_ID.to_string(),
            config_id: DEFAULT_CONFIG_ID.to_string(),
            language: "en".to_string(),
            request_timeout_secs: 10,
            data_subject_form_url: DEFAULT_DATA_SUBJECT_FORM_URL.to_string(),
            identifier_store: None,
            initial_section: SectionId::Cookies.id().to_string(),
            global_privacy_control: None,
            consent_widget: None,
        }
    }
}

impl Settings {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join("settings.json"))
    }

    /// An explicit path must exist; the default path may be missing.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit_path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn initial_section(&self) -> Result<SectionId, ConfigError> {
        Ok(self.initial_section.parse::<SectionId>()?)
    }

    pub fn identifier_store_path(&self) -> PathBuf {
        self.identifier_store
            .clone()
            .unwrap_or_else(|| data_dir().join("storage.json"))
    }
}

pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}
