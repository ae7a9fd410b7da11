mod file_config;

pub use file_config::FileConfig;

use crate::render::DEFAULT_TEMPLATE_NAME;
use anyhow::{bail, Result};
use std::path::PathBuf;

pub const DEFAULT_SCHEDULE_PATH: &str = "data/pentabarf.yaml";
pub const DEFAULT_TEMPLATE_DIR: &str = "templates";
pub const DEFAULT_OUTPUT_PATH: &str = "out/event_ids.md";

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub schedule_path: PathBuf,
    pub template_dir: PathBuf,
    pub template_name: String,
    pub output_path: PathBuf,
    pub check_only: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            schedule_path: PathBuf::from(DEFAULT_SCHEDULE_PATH),
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            template_name: DEFAULT_TEMPLATE_NAME.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            check_only: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub schedule_path: PathBuf,
    pub template_dir: PathBuf,
    pub template_name: String,
    pub output_path: PathBuf,
    /// Load and resolve only, nothing gets rendered or written.
    pub check_only: bool,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let schedule_path = file
            .schedule_path
            .map(PathBuf::from)
            .unwrap_or_else(|| cli.schedule_path.clone());
        let template_dir = file
            .template_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| cli.template_dir.clone());
        let template_name = file
            .template_name
            .unwrap_or_else(|| cli.template_name.clone());
        let output_path = file
            .output_path
            .map(PathBuf::from)
            .unwrap_or_else(|| cli.output_path.clone());

        if template_name.trim().is_empty() {
            bail!("template_name must not be empty");
        }
        if output_path.is_dir() {
            bail!("output_path is a directory: {:?}", output_path);
        }

        Ok(Self {
            schedule_path,
            template_dir,
            template_name,
            output_path,
            check_only: cli.check_only,
        })
    }
}
