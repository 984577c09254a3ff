//! Template rendering over the sanitized record.
//!
//! One template file, loaded at runtime from the working directory, rendered
//! once with the sanitized record as the top-level context. Autoescaping is
//! disabled at the call site: sanitization has already been applied, and
//! Tera's autoescaping is HTML-oriented.

use std::path::Path;

use serde_json::Value;
use tera::{Context, Tera};
use tracing::debug;

use crate::errors::AppError;

/// Name under which the single template file is registered.
const TEMPLATE_NAME: &str = "resume";

/// Loads the template file and renders the sanitized record into it.
pub fn render_resume(template_path: &Path, record: &Value) -> Result<String, AppError> {
    let mut tera = Tera::default();
    tera.add_template_file(template_path, Some(TEMPLATE_NAME))?;
    tera.autoescape_on(vec![]);

    let context = Context::from_value(record.clone())?;
    let rendered = tera.render(TEMPLATE_NAME, &context)?;
    debug!(
        "rendered {} bytes from {}",
        rendered.len(),
        template_path.display()
    );
    Ok(rendered)
}

/// Writes the rendered document verbatim as UTF-8, overwriting any existing
/// file at `path`.
pub fn write_document(path: &Path, contents: &str) -> Result<(), AppError> {
    std::fs::write(path, contents)?;
    Ok(())
}
