//! Loading the display overrides file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::debug;

use folio_core::DisplayOverrides;

/// Load overrides from an explicit path, or from the default config
/// location if a file exists there. No file means no overrides.
pub async fn load(path: Option<&Path>) -> Result<DisplayOverrides> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(DisplayOverrides::default()),
        },
    };

    debug!(path = %path.display(), "loading display overrides");

    let contents = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read overrides file {}", path.display()))?;

    DisplayOverrides::from_json(&contents)
        .with_context(|| format!("Invalid overrides file {}", path.display()))
}

fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "folio").map(|dirs| dirs.config_dir().join("overrides.json"))
}
