use anyhow::Result;

/// Application configuration loaded from environment variables.
/// Every knob has a default; the program runs with no setup at all.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the LaTeX template consumed by the renderer.
    pub template_path: String,
    /// Base name for the rendered `.tex`, the compiled `.pdf`, and the
    /// auxiliary files removed during cleanup.
    pub output_basename: String,
    /// The LaTeX compiler executable to invoke.
    pub latex_compiler: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            template_path: env_or("TEMPLATE_PATH", "template.tex"),
            output_basename: env_or("OUTPUT_BASENAME", "resume"),
            latex_compiler: env_or("LATEX_COMPILER", "pdflatex"),
            rust_log: env_or("RUST_LOG", "warn"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
