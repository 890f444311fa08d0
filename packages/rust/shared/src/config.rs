//! Application configuration for Post Series.
//!
//! User config lives at `~/.postseries/postseries.toml`.
//! CLI flags override config file values, which override defaults.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{PostSeriesError, Result};
use crate::types::DEFAULT_TAXONOMY;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "postseries.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".postseries";

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_-]+$").expect("valid slug regex"));

// ---------------------------------------------------------------------------
// Config structs (matching postseries.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Taxonomy registration settings.
    #[serde(default)]
    pub taxonomy: TaxonomyConfig,

    /// Default (untranslated) strings used in rendered markup.
    #[serde(default)]
    pub labels: LabelsConfig,

    /// Localization catalog: msgid -> translated text.
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
}

/// `[taxonomy]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyConfig {
    /// Taxonomy name the series terms live under.
    #[serde(default = "default_taxonomy_name")]
    pub name: String,

    /// URL slug for series archives.
    #[serde(default = "default_taxonomy_name")]
    pub rewrite_slug: String,

    /// Expose the taxonomy through the host's REST API.
    #[serde(default = "default_true")]
    pub show_in_rest: bool,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            name: default_taxonomy_name(),
            rewrite_slug: default_taxonomy_name(),
            show_in_rest: true,
        }
    }
}

fn default_taxonomy_name() -> String {
    DEFAULT_TAXONOMY.into()
}
fn default_true() -> bool {
    true
}

/// `[labels]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelsConfig {
    /// Lead-in before the series link in the summary block.
    #[serde(default = "default_series_text")]
    pub series_text: String,

    /// Marker appended to the current post's title in the list.
    #[serde(default = "default_current_text")]
    pub current_text: String,

    /// Text of the paragraph introducing the list.
    #[serde(default = "default_list_intro")]
    pub list_intro: String,

    /// Lead-in for the continue-reading link.
    #[serde(default = "default_next_text")]
    pub next_text: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            series_text: default_series_text(),
            current_text: default_current_text(),
            list_intro: default_list_intro(),
            next_text: default_next_text(),
        }
    }
}

fn default_series_text() -> String {
    "This post is part of the series".into()
}
fn default_current_text() -> String {
    "(Current)".into()
}
fn default_list_intro() -> String {
    "Other posts in this series:".into()
}
fn default_next_text() -> String {
    "Continue reading this series:".into()
}

impl AppConfig {
    /// Reject settings the host would refuse to register.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("taxonomy.name", &self.taxonomy.name),
            ("taxonomy.rewrite_slug", &self.taxonomy.rewrite_slug),
        ] {
            if value.is_empty() {
                return Err(PostSeriesError::config(format!("{field} must not be empty")));
            }
            if !SLUG_RE.is_match(value) {
                return Err(PostSeriesError::config(format!(
                    "{field} '{value}' may only contain lowercase letters, digits, '-' and '_'"
                )));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.postseries/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| PostSeriesError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.postseries/postseries.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| PostSeriesError::io(path, e))?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| PostSeriesError::config_file(path, e))?;
    config.validate()?;
    Ok(config)
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| PostSeriesError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let content = toml::to_string_pretty(&AppConfig::default())
        .map_err(|e| PostSeriesError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| PostSeriesError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
