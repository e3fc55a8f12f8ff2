//! Page template engine for the admin screens, using Jinja2 syntax.
//!
//! Templates live under the configured template directory (`templates/` by
//! default) and are loaded once. Names are paths relative to that directory,
//! e.g. `admin/category/list.html`. Files ending in `.html` are auto-escaped.

use minijinja::{Environment, Value};
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Template directory used when `init` was never called
const DEFAULT_TEMPLATE_DIR: &str = "templates";

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

/// Load every template under `dir` into the global environment.
///
/// Returns the number of templates available. Calling this after the
/// environment has been built is a no-op.
pub fn init(dir: &Path) -> usize {
    TEMPLATE_ENV
        .get_or_init(|| build_environment(dir))
        .templates()
        .count()
}

fn build_environment(dir: &Path) -> Environment<'static> {
    let mut env = Environment::new();

    if dir.exists() {
        load_templates_recursive(&mut env, dir, dir);
    } else {
        tracing::warn!("Template directory {} does not exist", dir.display());
    }

    env
}

/// Recursively load all .html templates from a directory
fn load_templates_recursive(env: &mut Environment<'static>, base_path: &Path, current_path: &Path) {
    let Ok(entries) = std::fs::read_dir(current_path) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            load_templates_recursive(env, base_path, &path);
            continue;
        }
        if !path.extension().is_some_and(|ext| ext == "html") {
            continue;
        }
        let Ok(relative) = path.strip_prefix(base_path) else {
            continue;
        };
        // Template names always use forward slashes
        let template_name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        match std::fs::read_to_string(&path) {
            Ok(content) => {
                // Templates live for the whole process, leaking them gives 'static names
                let static_name: &'static str = Box::leak(template_name.clone().into_boxed_str());
                let static_content: &'static str = Box::leak(content.into_boxed_str());
                if let Err(e) = env.add_template(static_name, static_content) {
                    tracing::warn!("Failed to load template {}: {}", template_name, e);
                } else {
                    tracing::debug!("Loaded template: {}", template_name);
                }
            }
            Err(e) => tracing::warn!("Failed to read template {}: {}", path.display(), e),
        }
    }
}

fn environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(|| build_environment(Path::new(DEFAULT_TEMPLATE_DIR)))
}

/// Render a page template with the given context.
pub fn render(template_name: &str, ctx: Value) -> Result<String, TemplateError> {
    let template = environment()
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    template
        .render(ctx)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}

/// Check if a template exists
#[allow(dead_code)]
pub fn template_exists(template_name: &str) -> bool {
    environment().get_template(template_name).is_ok()
}

/// Point the environment at the crate's own `templates/` directory.
#[cfg(test)]
pub fn init_for_tests() {
    init(&Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_TEMPLATE_DIR));
}
