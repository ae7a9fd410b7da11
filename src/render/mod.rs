//! Rendering of the resolved event table through a Jinja template.

use crate::rooms::ResolvedEvent;
use minijinja::{context, path_loader, Environment};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_TEMPLATE_NAME: &str = "event_ids.md.j2";

/// Errors that can occur while rendering or writing the table.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Renders events through a single named template.
///
/// The template environment is owned by the renderer, so different renderers
/// can load from different directories within the same process.
pub struct TemplateRenderer {
    env: Environment<'static>,
    template_name: String,
}

impl TemplateRenderer {
    /// Templates are looked up lazily in `template_dir`.
    pub fn from_dir(template_dir: impl AsRef<Path>, template_name: impl Into<String>) -> Self {
        let template_dir = template_dir.as_ref().to_path_buf();
        debug!("Loading templates from {}", template_dir.display());

        let mut env = Environment::new();
        env.set_loader(path_loader(template_dir));
        Self {
            env,
            template_name: template_name.into(),
        }
    }

    /// Uses an in-memory template, compiled right away.
    pub fn from_source(
        template_name: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<Self, RenderError> {
        let template_name: String = template_name.into();
        let source: String = source.into();
        let mut env = Environment::new();
        env.add_template_owned(template_name.clone(), source)?;
        Ok(Self { env, template_name })
    }

    pub fn template_name(&self) -> &str {
        &self.template_name
    }

    /// Fails if the template is missing or does not compile.
    pub fn check(&self) -> Result<(), RenderError> {
        self.env.get_template(&self.template_name)?;
        Ok(())
    }

    pub fn render(&self, events: &[ResolvedEvent]) -> Result<String, RenderError> {
        let template = self.env.get_template(&self.template_name)?;
        let rendered = template.render(context! {
            events => events,
            event_count => events.len(),
        })?;
        Ok(rendered)
    }
}

/// Writes the rendered document, creating missing parent directories.
pub fn write_output(path: &Path, text: &str) -> Result<(), RenderError> {
    let write_err = |source: std::io::Error| RenderError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
    }
    std::fs::write(path, text).map_err(write_err)?;

    info!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}
