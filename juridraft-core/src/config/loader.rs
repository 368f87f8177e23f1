use super::api_keys::ApiKeySources;
use super::constants::{export, files, gemini};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Gemini endpoint settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// Model ID, e.g. gemini-2.0-flash
    #[serde(default = "default_model")]
    pub model: String,

    /// API root, without the `models/...` suffix
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Inline API key; environment variables take precedence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Whole-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_model() -> String {
    gemini::DEFAULT_MODEL.to_string()
}
fn default_base_url() -> String {
    gemini::DEFAULT_BASE_URL.to_string()
}
fn default_api_key_env() -> String {
    gemini::API_KEY_ENV.to_string()
}
fn default_request_timeout() -> u64 {
    gemini::REQUEST_TIMEOUT_SECS
}
fn default_connect_timeout() -> u64 {
    gemini::CONNECT_TIMEOUT_SECS
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            api_key: None,
            request_timeout_secs: default_request_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl GeminiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Whether `model` is one of the models JuriDraft is known to work with.
    /// A `models/` prefix is ignored.
    pub fn is_supported_model(&self) -> bool {
        let model = self.model.strip_prefix("models/").unwrap_or(&self.model);
        gemini::SUPPORTED_MODELS.contains(&model)
    }

    pub fn api_key_sources(&self) -> ApiKeySources {
        ApiKeySources::with_env_var(self.api_key_env.clone()).with_config_value(self.api_key.clone())
    }
}

/// How exported documents are named
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportNaming {
    /// Always the same file per feature; each export overwrites the last
    #[default]
    Fixed,
    /// Append a local timestamp so earlier exports are kept
    Timestamped,
}

/// Document export settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Write draft and research results to .docx files
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Directory receiving exported documents
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_draft_filename")]
    pub draft_filename: String,

    #[serde(default = "default_research_filename")]
    pub research_filename: String,

    #[serde(default)]
    pub naming: ExportNaming,
}

fn default_true() -> bool {
    true
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(export::DEFAULT_OUTPUT_DIR)
}
fn default_draft_filename() -> String {
    export::DRAFT_FILENAME.to_string()
}
fn default_research_filename() -> String {
    export::RESEARCH_FILENAME.to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            output_dir: default_output_dir(),
            draft_filename: default_draft_filename(),
            research_filename: default_research_filename(),
            naming: ExportNaming::default(),
        }
    }
}

/// Main configuration structure for JuriDraft
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JuriDraftConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

impl JuriDraftConfig {
    /// Write a default `juridraft.toml` into `workspace`.
    ///
    /// Returns the created path, or `None` when a file already exists and
    /// `force` is not set.
    pub fn bootstrap<P: AsRef<Path>>(workspace: P, force: bool) -> Result<Option<PathBuf>> {
        let config_path = workspace.as_ref().join(files::CONFIG_FILE_NAME);
        if config_path.exists() && !force {
            return Ok(None);
        }

        let content = toml::to_string_pretty(&JuriDraftConfig::default())
            .context("Failed to serialize default configuration")?;
        fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(Some(config_path))
    }
}

/// Configuration manager for locating and loading `juridraft.toml`
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: JuriDraftConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration from the default locations
    pub fn load() -> Result<Self> {
        Self::load_from_workspace(std::env::current_dir()?)
    }

    /// Load configuration from a specific workspace.
    ///
    /// Looks for `juridraft.toml` in the workspace, then
    /// `~/.juridraft/juridraft.toml`, then falls back to defaults.
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self> {
        let workspace_config = workspace.as_ref().join(files::CONFIG_FILE_NAME);
        if workspace_config.exists() {
            return Self::load_from_file(&workspace_config);
        }

        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir
                .join(files::HOME_CONFIG_DIR)
                .join(files::CONFIG_FILE_NAME);
            if home_config.exists() {
                return Self::load_from_file(&home_config);
            }
        }

        Ok(Self {
            config: JuriDraftConfig::default(),
            config_path: None,
        })
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: JuriDraftConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(Self {
            config,
            config_path: Some(path.to_path_buf()),
        })
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &JuriDraftConfig {
        &self.config
    }

    /// Consume the manager, keeping only the configuration
    pub fn into_config(self) -> JuriDraftConfig {
        self.config
    }

    /// Get the configuration file path (if loaded from file)
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_sections_use_defaults() {
        let config: JuriDraftConfig = toml::from_str("[gemini]\nmodel = \"gemini-2.5-pro\"\n").unwrap();
        assert_eq!(config.gemini.model, "gemini-2.5-pro");
        assert_eq!(config.gemini.base_url, gemini::DEFAULT_BASE_URL);
        assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.export.output_dir, PathBuf::from("outputs"));
        assert_eq!(config.export.draft_filename, "court_process_draft.docx");
        assert_eq!(config.export.research_filename, "legal_research.docx");
        assert_eq!(config.export.naming, ExportNaming::Fixed);
        assert!(config.export.enabled);
    }

    #[test]
    fn supported_model_check_accepts_qualified_names() {
        let mut config = GeminiConfig::default();
        assert!(config.is_supported_model());

        config.model = "models/gemini-2.5-pro".to_string();
        assert!(config.is_supported_model());

        config.model = "gemini-1.0-ultra".to_string();
        assert!(!config.is_supported_model());
    }

    #[test]
    fn parses_timestamped_naming() {
        let config: JuriDraftConfig =
            toml::from_str("[export]\nnaming = \"timestamped\"\noutput_dir = \"out\"\n").unwrap();
        assert_eq!(config.export.naming, ExportNaming::Timestamped);
        assert_eq!(config.export.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn bootstrap_writes_loadable_file_once() {
        let dir = TempDir::new().unwrap();
        let created = JuriDraftConfig::bootstrap(dir.path(), false).unwrap();
        assert_eq!(created, Some(dir.path().join("juridraft.toml")));
        assert_eq!(JuriDraftConfig::bootstrap(dir.path(), false).unwrap(), None);
        assert!(JuriDraftConfig::bootstrap(dir.path(), true).unwrap().is_some());

        let manager = ConfigManager::load_from_workspace(dir.path()).unwrap();
        assert_eq!(manager.config_path(), Some(dir.path().join("juridraft.toml").as_path()));
        assert_eq!(manager.config().gemini.model, gemini::DEFAULT_MODEL);
    }

    #[test]
    fn invalid_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("juridraft.toml");
        fs::write(&path, "[gemini\n").unwrap();
        let err = ConfigManager::load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
