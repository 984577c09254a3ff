mod collect;
mod config;
mod errors;
mod models;
mod render;
mod sanitize;
mod typeset;

use std::io;
use std::path::Path;

use console::style;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::errors::AppError;

fn main() {
    if let Err(err) = run() {
        eprintln!("\n{}", style(err.report()).red());
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    // Load configuration first; every knob has a default.
    let config = Config::from_env()?;

    // Initialize structured logging; diagnostics go to the log, user-facing
    // prose to stdout/stderr.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting vitae v{}", env!("CARGO_PKG_VERSION"));

    println!("{}", style("Welcome to the resume builder!").cyan().bold());
    println!("Please fill in the details for your resume.");

    // 1. Collect the record from the terminal.
    let stdin = io::stdin();
    let resume = collect::collect_resume(stdin.lock(), io::stdout())?;
    info!("resume collected for '{}'", resume.name);

    // 2. Sanitize once, on the finished record.
    let sanitized = sanitize::sanitize_resume(&resume)?;

    // 3. Render the template and write the .tex source.
    let rendered = render::render_resume(Path::new(&config.template_path), &sanitized)?;
    let cwd = std::env::current_dir()?;
    let tex_file = format!("{}.tex", config.output_basename);
    render::write_document(&cwd.join(&tex_file), &rendered)?;
    println!("\n{} '{tex_file}' has been created.", style("Done:").green());

    // 4. Compile to PDF (two passes), then clean up auxiliary files.
    println!("Compiling to PDF... this may take a moment.");
    typeset::typeset(&config.latex_compiler, &cwd, &config.output_basename)?;

    println!(
        "{} Your resume has been generated as '{}.pdf'.",
        style("Success!").green().bold(),
        config.output_basename
    );
    Ok(())
}
