//! # Compose
//!
//! A small blocking wrapper around `docker compose` for the deployment root.
//!
//! Every invocation is logged as `$ docker compose ...` before it runs, inherits
//! the terminal so container output stays visible, and maps a non-zero exit to
//! [`ComposeError::CommandFailed`].
//!
//! ```rust,no_run
//! use fweb_compose::DockerCompose;
//!
//! let compose = DockerCompose::new("/srv/front-web");
//! compose.up()?;
//! compose.exec("nginx", &["nginx", "-t"])?;
//! # Ok::<(), fweb_compose::ComposeError>(())
//! ```

mod error;

pub use crate::error::{ComposeError, ComposeErrorExt};

use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::info;

const DEFAULT_PROGRAM: &str = "docker";

#[derive(Debug, Clone)]
pub struct DockerCompose {
    project_dir: PathBuf,
    file: Option<PathBuf>,
    program: String,
}

impl DockerCompose {
    /// Runs compose from `project_dir`, letting docker discover the compose file.
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self { project_dir: project_dir.into(), file: None, program: DEFAULT_PROGRAM.to_owned() }
    }

    /// Pins an explicit compose file (`-f`), which must exist at run time.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Replaces the `docker` executable, e.g. with `podman`.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Runs `docker compose [-f file] <args>`.
    pub fn run<S: AsRef<str>>(&self, args: &[S]) -> Result<(), ComposeError> {
        if let Some(file) = self.file.as_ref().filter(|f| !f.exists()) {
            return Err(ComposeError::FileMissing {
                message: file.display().to_string().into(),
                context: None,
            });
        }

        let argv = self.argv(args);
        info!(command = %format!("{} {}", self.program, argv.join(" ")), "$");

        let status = Command::new(&self.program)
            .args(&argv)
            .current_dir(&self.project_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .context(format!("Is `{}` installed and in PATH?", self.program))?;

        if status.success() {
            Ok(())
        } else {
            Err(ComposeError::CommandFailed {
                message: format!("`{} {}` exited with {status}", self.program, argv.join(" "))
                    .into(),
                context: None,
            })
        }
    }

    /// Starts the stack in the background.
    pub fn up(&self) -> Result<(), ComposeError> {
        self.run(&["up", "-d"])
    }

    /// One-off container: `run --rm [--entrypoint e] <service> <args>`.
    pub fn run_service<S: AsRef<str>>(
        &self,
        service: &str,
        entrypoint: Option<&str>,
        args: &[S],
    ) -> Result<(), ComposeError> {
        let mut argv: Vec<&str> = vec!["run", "--rm"];
        if let Some(entrypoint) = entrypoint {
            argv.extend(["--entrypoint", entrypoint]);
        }
        argv.push(service);
        argv.extend(args.iter().map(|a| a.as_ref()));
        self.run(&argv)
    }

    /// Runs a command inside a running service container.
    pub fn exec<S: AsRef<str>>(&self, service: &str, args: &[S]) -> Result<(), ComposeError> {
        let mut argv: Vec<&str> = vec!["exec", "-T", service];
        argv.extend(args.iter().map(|a| a.as_ref()));
        self.run(&argv)
    }

    fn argv<S: AsRef<str>>(&self, args: &[S]) -> Vec<String> {
        let mut argv = vec!["compose".to_owned()];
        if let Some(file) = &self.file {
            argv.push("-f".to_owned());
            argv.push(file.display().to_string());
        }
        argv.extend(args.iter().map(|a| a.as_ref().to_owned()));
        argv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argv_includes_compose_file_when_pinned() {
        let compose = DockerCompose::new(".").with_file("ops/compose.yml");
        assert_eq!(compose.argv(&["up", "-d"]), ["compose", "-f", "ops/compose.yml", "up", "-d"]);
    }

    #[test]
    fn missing_compose_file_is_reported() {
        let compose = DockerCompose::new(".").with_file("non-existent.yml");
        let err = compose.run(&["config"]).unwrap_err();
        assert!(matches!(err, ComposeError::FileMissing { .. }), "got: {err}");
    }
}
