//! One full run: load the schedule, resolve every event, render and write the table.

use crate::config::AppConfig;
use crate::render::{write_output, TemplateRenderer};
use crate::rooms::{resolve_all, ResolvedEvent};
use crate::schedule::load_events;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTableSummary {
    pub events_count: usize,
    pub stands_count: usize,
    /// `None` when running in check-only mode.
    pub output_path: Option<PathBuf>,
}

impl EventTableSummary {
    fn new(events: &[ResolvedEvent], output_path: Option<PathBuf>) -> Self {
        Self {
            events_count: events.len(),
            stands_count: events
                .iter()
                .filter(|e| e.audience_backstage.is_none())
                .count(),
            output_path,
        }
    }
}

pub fn generate_event_table(config: &AppConfig) -> Result<EventTableSummary> {
    let events = load_events(&config.schedule_path)
        .with_context(|| format!("Could not load schedule {:?}", config.schedule_path))?;
    let resolved = resolve_all(events);
    info!("Resolved rooms for {} events", resolved.len());

    let renderer = TemplateRenderer::from_dir(&config.template_dir, config.template_name.clone());

    if config.check_only {
        renderer.check().with_context(|| {
            format!(
                "Template {} in {:?} is not usable",
                renderer.template_name(),
                config.template_dir
            )
        })?;
        info!("Check only, skipping render.");
        return Ok(EventTableSummary::new(&resolved, None));
    }

    let rendered = renderer
        .render(&resolved)
        .with_context(|| format!("Could not render template {}", renderer.template_name()))?;
    write_output(&config.output_path, &rendered)?;

    Ok(EventTableSummary::new(
        &resolved,
        Some(config.output_path.clone()),
    ))
}
