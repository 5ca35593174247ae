//! Configuration loading and parsing
//!
//! Parses `quill.toml` (or an override path given on the command line). Every
//! section and field is optional and unknown fields are ignored, so an empty
//! or partial file is valid. Command line flags are applied on top through
//! [`Config::with_store_path`].

use serde::Deserialize;
use std::{fs, path::PathBuf, time::Duration};
use tracing::{info, warn};

use crate::app::app_error::{AppError, AppResult};
use crate::state_holder::DEFAULT_EXTENSION;

const CONFIG_FILE_NAME: &str = "quill.toml";
const STORE_FILE_NAME: &str = "store.json";

#[derive(Debug, Deserialize, Clone)]
pub struct EditorConfig {
    #[serde(default = "EditorConfig::default_extension")]
    pub extension: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            extension: Self::default_extension(),
        }
    }
}

impl EditorConfig {
    fn default_extension() -> String {
        DEFAULT_EXTENSION.to_string()
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct StoreConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    #[serde(default = "UiConfig::default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: Self::default_tick_rate_ms(),
        }
    }
}

impl UiConfig {
    const fn default_tick_rate_ms() -> u64 {
        200
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub file: ConfigFile,
}

/// Config path following platform conventions (XDG / AppData Roaming).
///
/// A `quill.toml` in the working directory wins over the platform one.
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("quill").join(CONFIG_FILE_NAME);
    }
    local
}

/// Loads the config from `path`, or from [`discover`] when `None`
///
/// # Returns
///
/// Returns `AppResult<Config>` which may contain `AppError::Config` if an
/// explicit `path` does not exist. A discovered file that is missing or does
/// not parse yields the defaults.
pub fn load_from(path: Option<PathBuf>) -> AppResult<Config> {
    let explicit = path.is_some();
    let path = path.unwrap_or_else(discover);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if explicit => {
            return Err(AppError::Config(format!(
                "Unable to read {}: {e}",
                path.display()
            )))
        }
        Err(_) => {
            info!(target: "config", path = %path.display(), "config_absent_using_defaults");
            return Ok(Config::default());
        }
    };
    Ok(parse(&content, &path))
}

fn parse(content: &str, path: &std::path::Path) -> Config {
    match toml::from_str::<ConfigFile>(content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Config { file }
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), %e, "config_parse_failed_using_defaults");
            Config::default()
        }
    }
}

impl Config {
    pub fn extension(&self) -> &str {
        &self.file.editor.extension
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.file.ui.tick_rate_ms)
    }

    /// Configured store file, else `<data dir>/quill/store.json`
    pub fn store_path(&self) -> PathBuf {
        if let Some(path) = &self.file.store.path {
            return path.clone();
        }
        match dirs::data_dir() {
            Some(dir) => dir.join("quill").join(STORE_FILE_NAME),
            None => PathBuf::from(STORE_FILE_NAME),
        }
    }

    /// Overrides the store location (command line `--store`)
    pub fn with_store_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.file.store.path = path;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.extension(), "txt");
        assert_eq!(config.tick_rate(), Duration::from_millis(200));
        assert!(config.store_path().ends_with(STORE_FILE_NAME));
    }

    #[test]
    fn test_parse_all_sections() {
        let file = write_config(
            "[editor]\nextension = \"md\"\n[store]\npath = \"/tmp/s.json\"\n[ui]\ntick_rate_ms = 50\n",
        );
        let config = load_from(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.extension(), "md");
        assert_eq!(config.store_path(), PathBuf::from("/tmp/s.json"));
        assert_eq!(config.tick_rate(), Duration::from_millis(50));
    }

    #[test]
    fn test_partial_file_and_unknown_fields() {
        let file = write_config("[ui]\ntick_rate_ms = 10\nfuture = true\n");
        let config = load_from(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.extension(), "txt");
        assert_eq!(config.tick_rate(), Duration::from_millis(10));
    }

    #[test]
    fn test_invalid_toml_falls_back() {
        let file = write_config("[editor\nextension = ");
        let config = load_from(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.extension(), "txt");
        assert_eq!(config.tick_rate(), Duration::from_millis(200));
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from(Some(dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_store_override() {
        let config = Config::default().with_store_path(Some(PathBuf::from("x.json")));
        assert_eq!(config.store_path(), PathBuf::from("x.json"));
        let config = config.with_store_path(None);
        assert_eq!(config.store_path(), PathBuf::from("x.json"));
    }
}
