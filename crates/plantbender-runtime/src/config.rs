use crate::{Error, Result};
use plantbender_client::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use plantbender_types::{DEFAULT_SCALE_MAX, Normalization};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "config.toml";

const ENV_DATA_DIR: &str = "PLANTBENDER_PATH";
const ENV_BASE_URL: &str = "PLANTBENDER_BASE_URL";
const ENV_RECORDS_CODE: &str = "PLANTBENDER_RECORDS_CODE";
const ENV_ACTIVATION_CODE: &str = "PLANTBENDER_ACTIVATION_CODE";

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. PLANTBENDER_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.plantbender (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(ENV_DATA_DIR) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("plantbender"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".plantbender"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ApiSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub records_code: String,
    #[serde(default)]
    pub activation_code: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            records_code: String::new(),
            activation_code: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for ApiSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Same masking as the client config
        std::fmt::Debug::fmt(&self.to_api_config(), f)
    }
}

impl ApiSection {
    pub fn to_api_config(&self) -> ApiConfig {
        ApiConfig::new(
            self.base_url.clone(),
            self.records_code.clone(),
            self.activation_code.clone(),
        )
        .with_timeout(Duration::from_secs(self.timeout_secs.max(1)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySection {
    /// Sensor full-scale value; `0` shows raw readings.
    #[serde(default = "default_scale_max")]
    pub scale_max: u32,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            scale_max: default_scale_max(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_scale_max() -> u32 {
    DEFAULT_SCALE_MAX
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub display: DisplaySection,
}

impl Config {
    /// Load `config.toml` from `data_dir` and apply environment overrides.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let mut config = Self::load_from(&data_dir.join(CONFIG_FILE))?;
        config.apply_env();
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Overrides non-empty values found through `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = value(ENV_BASE_URL) {
            self.api.base_url = url;
        }
        if let Some(code) = value(ENV_RECORDS_CODE) {
            self.api.records_code = code;
        }
        if let Some(code) = value(ENV_ACTIVATION_CODE) {
            self.api.activation_code = code;
        }
    }

    pub fn api_config(&self) -> ApiConfig {
        self.api.to_api_config()
    }

    pub fn normalization(&self) -> Normalization {
        Normalization::from_scale_max(Some(self.display.scale_max))
    }

    pub fn validate(&self) -> Result<()> {
        self.api_config()
            .validate()
            .map_err(|e| Error::Config(e.reason()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.display.scale_max, 1023);
        assert_eq!(config.normalization(), Normalization::Scaled { max: 1023 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE);

        let mut config = Config::default();
        config.api.records_code = "read".to_string();
        config.api.activation_code = "write".to_string();
        config.display.scale_max = 4095;

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.api.records_code, "read");
        assert_eq!(loaded.api.activation_code, "write");
        assert_eq!(loaded.normalization(), Normalization::Scaled { max: 4095 });
        assert!(loaded.validate().is_ok());

        Ok(())
    }

    #[test]
    fn test_missing_file_is_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let loaded = Config::load_from(&temp_dir.path().join(CONFIG_FILE))?;
        assert!(loaded.api.records_code.is_empty());
        Ok(())
    }

    #[test]
    fn test_partial_file_uses_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[api]\nrecords_code = \"r\"\n\n[display]\nscale_max = 0\n")?;

        let loaded = Config::load_from(&path)?;
        assert_eq!(loaded.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(loaded.api.timeout_secs, 10);
        assert_eq!(loaded.normalization(), Normalization::Raw);
        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[api\nbase_url = ")?;

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
        Ok(())
    }

    #[test]
    fn test_overrides_replace_non_empty_values() {
        let env: HashMap<&str, &str> = [
            ("PLANTBENDER_RECORDS_CODE", "from-env"),
            ("PLANTBENDER_ACTIVATION_CODE", "  "),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.api.activation_code = "from-file".to_string();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.records_code, "from-env");
        assert_eq!(config.api.activation_code, "from-file");
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_debug_does_not_leak_codes() {
        let mut config = Config::default();
        config.api.records_code = "super-secret".to_string();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_explicit_data_dir_wins() -> Result<()> {
        let resolved = resolve_data_dir(Some("/tmp/plantbender-test"))?;
        assert_eq!(resolved, PathBuf::from("/tmp/plantbender-test"));
        Ok(())
    }
}
