use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for the `reels` recipe (optional `[reels]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReelsConfig {
    /// URL fragment identifying the feed API responses to decode.
    pub api_fragment: String,
}

impl Default for ReelsConfig {
    fn default() -> Self {
        Self {
            api_fragment: "api/v1/feed/".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/harx/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarxConfig {
    /// Directory outputs are written to when `--output-dir` is not given
    /// (None = current directory).
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Recipes run when `--recipe` is not given.
    #[serde(default = "default_recipes")]
    pub recipes: Vec<String>,
    #[serde(default)]
    pub reels: ReelsConfig,
}

fn default_recipes() -> Vec<String> {
    vec!["reels".to_string()]
}

impl Default for HarxConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            recipes: default_recipes(),
            reels: ReelsConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("harx")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HarxConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HarxConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit file (`--config`).
pub fn load_from(path: &Path) -> Result<HarxConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: HarxConfig = toml::from_str(&data)?;
    Ok(cfg)
}
