use thiserror::Error;

/// Application-level error type.
/// Every variant is terminal for the run: this is a leaf interactive
/// program, so errors surface as printed prose, not as a typed API.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input ended before the resume was fully collected")]
    InputClosed,

    #[error("'{0}' command not found")]
    CompilerNotFound(String),

    #[error("LaTeX compiler exited with a non-zero status")]
    CompilerFailed {
        code: Option<i32>,
        stdout: String,
    },

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// The human-readable report printed to the terminal before the program
    /// exits. Diagnostics are prose on stdout/stderr, with no structured codes.
    pub fn report(&self) -> String {
        match self {
            AppError::CompilerNotFound(cmd) => format!(
                "Error: '{cmd}' command not found.\n\
                 Please ensure you have a LaTeX distribution (like MiKTeX, TeX Live, or MacTeX) \
                 installed and in your system's PATH."
            ),
            AppError::CompilerFailed { code, stdout } => {
                let code = match code {
                    Some(c) => c.to_string(),
                    None => "terminated by signal".to_string(),
                };
                format!(
                    "Error during PDF compilation. LaTeX returned a non-zero exit code: {code}\n\
                     Please check the 'resume.log' file for detailed LaTeX errors.\n\
                     \n\
                     --- LaTeX Output ---\n\
                     {stdout}"
                )
            }
            AppError::Template(e) => format!("Error while rendering the resume template: {e}"),
            AppError::InputClosed => {
                "Error: input ended before the resume was fully collected.".to_string()
            }
            AppError::Io(e) => format!("Error: {e}"),
            AppError::Internal(e) => format!("Error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiler_not_found_report_names_the_tool() {
        let report = AppError::CompilerNotFound("pdflatex".to_string()).report();
        assert!(report.contains("'pdflatex' command not found"));
        assert!(report.contains("LaTeX distribution"));
    }

    #[test]
    fn test_compiler_failed_report_includes_code_and_output() {
        let report = AppError::CompilerFailed {
            code: Some(1),
            stdout: "! Undefined control sequence.".to_string(),
        }
        .report();
        assert!(report.contains("non-zero exit code: 1"));
        assert!(report.contains("--- LaTeX Output ---"));
        assert!(report.contains("! Undefined control sequence."));
    }

    #[test]
    fn test_compiler_failed_report_without_code() {
        let report = AppError::CompilerFailed {
            code: None,
            stdout: String::new(),
        }
        .report();
        assert!(report.contains("terminated by signal"));
    }
}
