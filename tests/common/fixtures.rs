//! Test fixture creation for schedule and templates

use anyhow::Result;
use event_room_table::{AppConfig, CliConfig};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// The default template shipped with the crate
const DEFAULT_TEMPLATE: &str = include_str!("../../templates/event_ids.md.j2");

/// Four events covering every track type, in this file order:
/// keynote, devroom, stand, unknown type.
pub const TEST_SCHEDULE: &str = r#"
events:
  keynote:
    event_id: 5
    title: Welcome to FOSDEM
    slug: keynote
    track_name: Keynotes
    type: maintrack
    room: mfosdem
  foo:
    event_id: 101
    title: Foo Talk
    slug: foo
    track_name: Foo Devroom
    type: devroom
    room: dfoo
  expo:
    event_id: 9
    title: Expo | Booths
    slug: expo
    track_name: Stands
    type: standtrack
    room: sexpo
  bof:
    event_id: 77
    title: Birds of a Feather
    slug: bof
    track_name: BOFs
    type: bof
    room: kh3242
"#;

/// A temp workspace with a schedule, the default template and an output path.
pub struct TestWorkspace {
    pub dir: TempDir,
    pub schedule_path: PathBuf,
    pub template_dir: PathBuf,
    pub output_path: PathBuf,
}

impl TestWorkspace {
    pub fn with_schedule(schedule: &str) -> Result<Self> {
        let dir = TempDir::new()?;

        let schedule_path = dir.path().join("data").join("pentabarf.yaml");
        fs::create_dir_all(dir.path().join("data"))?;
        fs::write(&schedule_path, schedule)?;

        let template_dir = dir.path().join("templates");
        fs::create_dir_all(&template_dir)?;
        fs::write(template_dir.join("event_ids.md.j2"), DEFAULT_TEMPLATE)?;

        let output_path = dir.path().join("out").join("event_ids.md");

        Ok(Self {
            dir,
            schedule_path,
            template_dir,
            output_path,
        })
    }

    pub fn cli_config(&self) -> CliConfig {
        CliConfig {
            schedule_path: self.schedule_path.clone(),
            template_dir: self.template_dir.clone(),
            template_name: "event_ids.md.j2".to_string(),
            output_path: self.output_path.clone(),
            check_only: false,
        }
    }

    pub fn app_config(&self) -> AppConfig {
        AppConfig::resolve(&self.cli_config(), None).unwrap()
    }
}
