//! LaTeX compiler invocation and auxiliary-file cleanup.
//!
//! The compiler runs twice so its internal cross-references stabilize; a
//! non-zero first pass aborts before the second. Cleanup of the auxiliary
//! files runs on every exit path from this stage, including compile failure
//! and compiler-not-found.

use std::io;
use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};

use crate::errors::AppError;

/// Auxiliary files sharing the output base name, removed after compilation.
const AUX_EXTENSIONS: &[&str] = &["aux", "log", "out"];

/// Fixed pass count; no convergence check.
const COMPILE_PASSES: u32 = 2;

/// Compiles `<basename>.tex` in `dir` and then removes the auxiliary files,
/// whatever the compile outcome was.
pub fn typeset(compiler: &str, dir: &Path, basename: &str) -> Result<(), AppError> {
    let outcome = compile(compiler, dir, basename);
    clean_aux_files(dir, basename);
    outcome
}

/// Runs the compiler over `<basename>.tex`, twice on success.
fn compile(compiler: &str, dir: &Path, basename: &str) -> Result<(), AppError> {
    let tex_file = format!("{basename}.tex");
    for pass in 1..=COMPILE_PASSES {
        debug!("compile pass {pass}/{COMPILE_PASSES}: {compiler} {tex_file}");
        let output = Command::new(compiler)
            .arg("-interaction=nonstopmode")
            .arg(&tex_file)
            .current_dir(dir)
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => AppError::CompilerNotFound(compiler.to_string()),
                _ => AppError::Io(e),
            })?;

        if !output.status.success() {
            return Err(AppError::CompilerFailed {
                code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            });
        }
    }
    Ok(())
}

/// Removes `<basename>.{aux,log,out}` from `dir` if present.
/// Failures are logged, never fatal.
fn clean_aux_files(dir: &Path, basename: &str) {
    for ext in AUX_EXTENSIONS {
        let path = dir.join(format!("{basename}.{ext}"));
        match std::fs::remove_file(&path) {
            Ok(()) => debug!("removed {}", path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("could not remove {}: {e}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn seed_aux_files(dir: &Path) {
        for ext in AUX_EXTENSIONS {
            fs::write(dir.join(format!("resume.{ext}")), "stale").expect("seed aux file");
        }
    }

    fn aux_files_present(dir: &Path) -> bool {
        AUX_EXTENSIONS
            .iter()
            .any(|ext| dir.join(format!("resume.{ext}")).exists())
    }

    #[test]
    fn test_missing_compiler_reports_not_found_and_still_cleans_up() {
        let dir = tempfile::tempdir().expect("tempdir");
        seed_aux_files(dir.path());

        let result = typeset("vitae-no-such-compiler", dir.path(), "resume");

        match result {
            Err(AppError::CompilerNotFound(cmd)) => {
                assert_eq!(cmd, "vitae-no-such-compiler");
            }
            other => panic!("expected CompilerNotFound, got {other:?}"),
        }
        assert!(
            !aux_files_present(dir.path()),
            "aux files must be removed even when the compiler is missing"
        );
        assert!(!dir.path().join("resume.pdf").exists());
    }

    #[test]
    fn test_clean_aux_files_leaves_other_files_alone() {
        let dir = tempfile::tempdir().expect("tempdir");
        seed_aux_files(dir.path());
        fs::write(dir.path().join("resume.tex"), "source").expect("seed tex");
        fs::write(dir.path().join("resume.pdf"), "pdf").expect("seed pdf");

        clean_aux_files(dir.path(), "resume");

        assert!(!aux_files_present(dir.path()));
        assert!(dir.path().join("resume.tex").exists());
        assert!(dir.path().join("resume.pdf").exists());
    }

    #[test]
    fn test_clean_aux_files_with_nothing_to_remove_is_quiet() {
        let dir = tempfile::tempdir().expect("tempdir");
        clean_aux_files(dir.path(), "resume");
    }

    #[cfg(unix)]
    mod pass_counting {
        use super::*;
        use std::os::unix::fs::PermissionsExt;

        /// Writes a stub compiler that appends one line per invocation and
        /// exits with `exit_code`.
        fn write_stub(dir: &Path, exit_code: i32) -> String {
            let stub = dir.join("stub-latex");
            fs::write(
                &stub,
                format!("#!/bin/sh\necho ran >> \"$PWD/passes.txt\"\nexit {exit_code}\n"),
            )
            .expect("stub written");
            let mut perms = fs::metadata(&stub).expect("stub metadata").permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&stub, perms).expect("stub made executable");
            stub.to_string_lossy().into_owned()
        }

        fn pass_count(dir: &Path) -> usize {
            fs::read_to_string(dir.join("passes.txt"))
                .map(|s| s.lines().count())
                .unwrap_or(0)
        }

        #[test]
        fn test_successful_compile_runs_exactly_two_passes() {
            let dir = tempfile::tempdir().expect("tempdir");
            let stub = write_stub(dir.path(), 0);

            typeset(&stub, dir.path(), "resume").expect("stub compile succeeds");
            assert_eq!(pass_count(dir.path()), 2, "success must run both passes");
        }

        #[test]
        fn test_failing_compile_stops_after_first_pass() {
            let dir = tempfile::tempdir().expect("tempdir");
            seed_aux_files(dir.path());
            let stub = write_stub(dir.path(), 1);

            let result = typeset(&stub, dir.path(), "resume");

            match result {
                Err(AppError::CompilerFailed { code, .. }) => assert_eq!(code, Some(1)),
                other => panic!("expected CompilerFailed, got {other:?}"),
            }
            assert_eq!(
                pass_count(dir.path()),
                1,
                "a failing first pass must abort before the second"
            );
            assert!(
                !aux_files_present(dir.path()),
                "aux files must be removed after a failed compile"
            );
        }

        #[test]
        fn test_compiler_stdout_is_captured_in_the_failure() {
            let dir = tempfile::tempdir().expect("tempdir");
            let stub = dir.path().join("noisy-latex");
            fs::write(&stub, "#!/bin/sh\necho '! Undefined control sequence.'\nexit 2\n")
                .expect("stub written");
            let mut perms = fs::metadata(&stub).expect("stub metadata").permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&stub, perms).expect("stub made executable");

            let result = typeset(&stub.to_string_lossy(), dir.path(), "resume");
            match result {
                Err(AppError::CompilerFailed { code, stdout }) => {
                    assert_eq!(code, Some(2));
                    assert!(stdout.contains("! Undefined control sequence."));
                }
                other => panic!("expected CompilerFailed, got {other:?}"),
            }
        }
    }
}
