//! External Gleam compiler invocation.
//!
//! The compiler is a one-shot collaborator: `gleam build --target
//! javascript` either succeeds or the whole build is dead. Its output
//! is captured for logging only, never parsed. No retries, no
//! timeouts; a hung compiler hangs the build, same as it would hang
//! the host.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::project::Project;
use crate::util::config::BuildOptions;
use crate::util::process::{find_executable, ProcessBuilder};

/// Captured output of a compiler run.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Error invoking the external compiler.
#[derive(Debug, Error)]
pub enum CompilerError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed with exit code {code:?}\n{stderr}")]
    BuildFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

/// Handle on the external Gleam compiler for one project.
#[derive(Debug, Clone)]
pub struct GleamCompiler {
    bin: String,
    root: PathBuf,
}

impl GleamCompiler {
    /// Create a compiler handle for the given binary and project root.
    pub fn new(bin: impl Into<String>, root: impl AsRef<Path>) -> Self {
        GleamCompiler {
            bin: bin.into(),
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Run `gleam build --target javascript` in the project root.
    ///
    /// Diagnostics end up on the compiler's own streams; they are
    /// captured and logged, and the stderr text rides along on the
    /// error when the exit code is non-zero.
    pub async fn build(&self, options: &BuildOptions) -> Result<BuildOutput, CompilerError> {
        let mut cmd = ProcessBuilder::new(&self.bin)
            .args(["build", "--target", "javascript"])
            .cwd(&self.root);

        if options.warnings_as_errors {
            cmd = cmd.arg("--warnings-as-errors");
        }
        if options.no_print_progress {
            cmd = cmd.arg("--no-print-progress");
        }

        let command = cmd.display_command();
        tracing::debug!(root = %self.root.display(), "$ {}", command);

        let output = cmd.exec().await.map_err(|e| CompilerError::Spawn {
            command: command.clone(),
            source: e
                .downcast::<std::io::Error>()
                .unwrap_or_else(|e| std::io::Error::other(e.to_string())),
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(CompilerError::BuildFailed {
                command,
                code: output.status.code(),
                stderr,
            });
        }

        if !stdout.is_empty() || !stderr.is_empty() {
            tracing::debug!("compiler output:\n{}{}", stdout, stderr);
        }

        Ok(BuildOutput { stdout, stderr })
    }
}

/// Run the compiler if the project was configured with `build.force`.
///
/// A disabled force flag is a logged no-op; a failed invocation is
/// propagated untouched and must abort the build.
pub async fn trigger_build_if_forced(
    project: &Project,
) -> Result<Option<BuildOutput>, CompilerError> {
    if !project.build_options().force {
        tracing::debug!("build.force is not set, skipping compiler invocation");
        return Ok(None);
    }

    let compiler = GleamCompiler::new(project.bin(), project.root());
    compiler.build(project.build_options()).await.map(Some)
}

/// Find the Gleam compiler on PATH.
pub fn find_gleam() -> Option<PathBuf> {
    find_executable(crate::core::layout::DEFAULT_BIN)
}
