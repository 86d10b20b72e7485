use crate::core::rule::DriverPolicy;
use crate::errors::{AppError, AppResult};
use crate::models::Person;
use crate::store::google::DEFAULT_API_BASE_URL;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment overrides for values that should not live in a file.
pub const ENV_SHEET_ID: &str = "SHIFTPLAN_SHEET_ID";
pub const ENV_ACCESS_TOKEN: &str = "SHIFTPLAN_ACCESS_TOKEN";
pub const ENV_SERVICE_ACCOUNT_FILE: &str = "SHIFTPLAN_SERVICE_ACCOUNT_FILE";
pub const ENV_SERVICE_ACCOUNT_JSON: &str = "SHIFTPLAN_SERVICE_ACCOUNT_JSON";
pub const ENV_PIN: &str = "SHIFTPLAN_PIN";

/// Where month sheets are read from and written to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Google,
    Csv,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: Backend,
    #[serde(default)]
    pub spreadsheet_id: String,
    /// Pre-minted OAuth bearer token; wins over the service account.
    #[serde(default)]
    pub access_token: String,
    /// Path of a Google service account key (JSON).
    #[serde(default)]
    pub service_account_file: String,
    /// Inline service account key, only ever taken from the environment.
    #[serde(skip)]
    pub service_account_json: Option<String>,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_workbook_dir")]
    pub workbook_dir: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_pin: Option<String>,
    #[serde(default = "default_drivers")]
    pub drivers: Vec<String>,
}

/// Keys reported by `config --check` when absent from the file.
const KNOWN_FIELDS: [&str; 7] = [
    "backend",
    "spreadsheet_id",
    "access_token",
    "service_account_file",
    "api_base_url",
    "workbook_dir",
    "drivers",
];

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}
fn default_workbook_dir() -> String {
    Config::config_dir()
        .join("workbook")
        .to_string_lossy()
        .to_string()
}
fn default_drivers() -> Vec<String> {
    DriverPolicy::default()
        .drivers()
        .iter()
        .map(|p| p.name().to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            spreadsheet_id: String::new(),
            access_token: String::new(),
            service_account_file: String::new(),
            service_account_json: None,
            api_base_url: default_api_base_url(),
            workbook_dir: default_workbook_dir(),
            access_pin: None,
            drivers: default_drivers(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("shiftplan")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftplan.conf")
    }

    /// Load configuration from `path` (or the standard file), falling back
    /// to defaults when the file does not exist, then apply environment
    /// overrides.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)?
        } else {
            Config::default()
        };

        cfg.apply_env();
        Ok(cfg)
    }

    fn apply_env(&mut self) {
        if let Ok(id) = env::var(ENV_SHEET_ID) {
            self.spreadsheet_id = id;
        }
        if let Ok(token) = env::var(ENV_ACCESS_TOKEN) {
            self.access_token = token;
        }
        if let Ok(path) = env::var(ENV_SERVICE_ACCOUNT_FILE) {
            self.service_account_file = path;
        }
        if let Ok(json) = env::var(ENV_SERVICE_ACCOUNT_JSON)
            && !json.trim().is_empty()
        {
            self.service_account_json = Some(json);
        }
        if let Ok(pin) = env::var(ENV_PIN) {
            self.access_pin = Some(pin);
        }
    }

    /// Treat an empty `access_pin` as "no PIN".
    pub fn pin(&self) -> Option<&str> {
        self.access_pin
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// Driver-eligible subset from the `drivers` list.
    pub fn driver_policy(&self) -> AppResult<DriverPolicy> {
        let people = self
            .drivers
            .iter()
            .map(|name| {
                Person::from_name(name).ok_or_else(|| {
                    AppError::Config(format!("driver '{}' is not on the roster", name))
                })
            })
            .collect::<AppResult<Vec<Person>>>()?;

        Ok(DriverPolicy::new(people))
    }

    /// Write this configuration as YAML, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Initialize the configuration file.
    ///
    /// In test mode nothing is written; the returned config is what would
    /// have been saved.
    pub fn init_all(path: &Path, workbook: Option<&str>, is_test: bool) -> AppResult<Config> {
        let mut config = if path.exists() {
            Config::load(Some(path))?
        } else {
            Config::default()
        };

        if let Some(dir) = workbook {
            config.backend = Backend::Csv;
            config.workbook_dir = dir.to_string();
        }

        if !is_test {
            config.save(path)?;
        }

        Ok(config)
    }
}

/// Fields of the config file that are missing and will use defaults.
pub fn missing_fields(content: &str) -> AppResult<Vec<&'static str>> {
    let yaml: Value = serde_yaml::from_str(content)?;
    let Some(map) = yaml.as_mapping() else {
        return Err(AppError::Config(
            "configuration file is not a YAML mapping".into(),
        ));
    };

    Ok(KNOWN_FIELDS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(*k))
        .collect())
}
