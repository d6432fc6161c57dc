use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::OutputFormat;
use crate::sprite::SpriteStyle;

/// Optional settings loaded from `~/.config/spritelist/config.toml`.
///
/// Every key is optional; command-line flags take precedence over these and
/// built-in defaults apply when neither is given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpritelistConfig {
    /// Input document path (default `api.json` in the working directory).
    pub input: Option<PathBuf>,
    /// Built-in sprite source.
    pub sprite: Option<SpriteStyle>,
    /// Custom image URL template containing `{id}`; overrides `sprite`.
    pub template: Option<String>,
    /// Output format.
    pub format: Option<OutputFormat>,
    /// Array variable name for the `java` format.
    pub array_name: Option<String>,
}

/// Locates `spritelist/config.toml` in the XDG config directories, if any.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("spritelist")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration from the XDG config directory. A missing file is not
/// an error and yields the defaults; nothing is written to disk.
pub fn load() -> Result<SpritelistConfig> {
    match config_path()? {
        Some(path) => load_from(&path),
        None => {
            tracing::debug!("no config file found, using defaults");
            Ok(SpritelistConfig::default())
        }
    }
}

pub fn load_from(path: &Path) -> Result<SpritelistConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: SpritelistConfig = toml::from_str(&data)
        .with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
