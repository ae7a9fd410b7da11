use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use event_room_table::config::{
    AppConfig, CliConfig, FileConfig, DEFAULT_OUTPUT_PATH, DEFAULT_SCHEDULE_PATH,
    DEFAULT_TEMPLATE_DIR,
};
use event_room_table::generate_event_table;
use event_room_table::render::DEFAULT_TEMPLATE_NAME;

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(about = "Renders the table of Matrix rooms for every event in the schedule.")]
struct CliArgs {
    /// Path to the pentabarf schedule export (YAML).
    #[clap(long, value_parser = parse_path, default_value = DEFAULT_SCHEDULE_PATH)]
    pub schedule: PathBuf,

    /// Directory the templates are loaded from.
    #[clap(long, value_parser = parse_path, default_value = DEFAULT_TEMPLATE_DIR)]
    pub template_dir: PathBuf,

    /// Name of the template to render, relative to the template directory.
    #[clap(long, default_value = DEFAULT_TEMPLATE_NAME)]
    pub template: String,

    /// Where the rendered table is written.
    #[clap(short, long, value_parser = parse_path, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Optional TOML config file, its values override the command line.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Only load the schedule and check the template, write nothing.
    #[clap(long)]
    pub check_only: bool,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            schedule_path: self.schedule.clone(),
            template_dir: self.template_dir.clone(),
            template_name: self.template.clone(),
            output_path: self.output.clone(),
            check_only: self.check_only,
        }
    }
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    let summary = generate_event_table(&config)?;

    match &summary.output_path {
        Some(path) => println!(
            "Wrote rooms for {} events ({} stands) to {}",
            summary.events_count,
            summary.stands_count,
            path.display()
        ),
        None => println!(
            "Schedule checked: {} events ({} stands), template {} is usable.",
            summary.events_count, summary.stands_count, config.template_name
        ),
    }
    Ok(())
}
