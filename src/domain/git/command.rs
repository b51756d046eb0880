use crate::domain::Result;

/// Outcome of a single git invocation.
///
/// `output` holds the trimmed stdout on success. On failure it holds the trimmed stderr,
/// or stdout when stderr was empty.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CommandOutput {
    pub success: bool,
    pub output: String,
}

impl CommandOutput {
    #[must_use]
    pub fn success<S: AsRef<str>>(output: S) -> Self {
        Self {
            success: true,
            output: String::from(output.as_ref().trim()),
        }
    }

    #[must_use]
    pub fn failure<S: AsRef<str>>(output: S) -> Self {
        Self {
            success: false,
            output: String::from(output.as_ref().trim()),
        }
    }

    #[must_use]
    pub fn from_streams(success: bool, stdout: &str, stderr: &str) -> Self {
        if success {
            Self::success(stdout)
        } else if stderr.trim().is_empty() {
            Self::failure(stdout)
        } else {
            Self::failure(stderr)
        }
    }

    /// The output of a successful command, `None` otherwise.
    #[must_use]
    pub fn ok(self) -> Option<String> {
        if self.success {
            Some(self.output)
        } else {
            None
        }
    }
}

pub trait GitCommand {
    /// Runs git with `args`. An `Err` means git couldn't be invoked at all, a command that ran
    /// and failed is reported through [`CommandOutput::success`].
    fn execute(&self, args: &[&str]) -> Result<CommandOutput>;
}

impl<G: GitCommand> GitCommand for &G {
    fn execute(&self, args: &[&str]) -> Result<CommandOutput> {
        (**self).execute(args)
    }
}
