use std::{
    io,
    path::PathBuf,
    process::{Command, Stdio},
};

use crate::domain::{
    self,
    git::{CommandOutput, GitCommand},
};

#[allow(clippy::module_name_repetitions)]
pub struct GitCliConfig {
    program: String,
    work_dir: Option<PathBuf>,
}

impl GitCliConfig {
    #[must_use]
    pub fn new(work_dir: Option<PathBuf>) -> Self {
        Self {
            program: String::from("git"),
            work_dir,
        }
    }

    #[must_use]
    pub fn with_program<S: AsRef<str>>(mut self, program: S) -> Self {
        self.program = String::from(program.as_ref());
        self
    }
}

/// Runs the `git` executable as a child process.
#[allow(clippy::module_name_repetitions)]
pub struct GitCli {
    config: GitCliConfig,
}

impl GitCli {
    #[must_use]
    pub fn new(config: GitCliConfig) -> Self {
        Self { config }
    }
}

impl GitCommand for GitCli {
    fn execute(&self, args: &[&str]) -> domain::Result<CommandOutput> {
        let mut cmd = Command::new(&self.config.program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(work_dir) = &self.config.work_dir {
            cmd.current_dir(work_dir);
        }

        log::debug!("running command: {:?}", cmd);

        match cmd.output() {
            Ok(output) => Ok(CommandOutput::from_streams(
                output.status.success(),
                &String::from_utf8_lossy(&output.stdout),
                &String::from_utf8_lossy(&output.stderr),
            )),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(domain::Error::GitUnavailable {
                    program: self.config.program.clone(),
                    source: err,
                })
            }
            Err(err) => {
                log::debug!("couldn't start {}: {err}", self.config.program);
                Ok(CommandOutput::failure(err.to_string()))
            }
        }
    }
}
