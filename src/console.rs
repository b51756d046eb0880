use std::io::{self, Write};

use crate::domain;

#[allow(clippy::module_name_repetitions)]
pub struct OsConsole {}

impl domain::console::Console for OsConsole {
    fn println<S: AsRef<str>>(&self, s: S) -> domain::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(s.as_ref().as_bytes())?;
        stdout.write_all(b"\n")?;
        Ok(())
    }

    fn eprintln<S: AsRef<str>>(&self, s: S) -> domain::Result<()> {
        let mut stderr = io::stderr().lock();
        stderr.write_all(s.as_ref().as_bytes())?;
        stderr.write_all(b"\n")?;
        Ok(())
    }
}
