use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Optional TOML config, every field present here overrides the CLI.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub schedule_path: Option<String>,
    pub template_dir: Option<String>,
    pub template_name: Option<String>,
    pub output_path: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
