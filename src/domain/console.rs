use crate::domain;

pub trait Console {
    fn println<S: AsRef<str>>(&self, s: S) -> domain::Result<()>;
    fn eprintln<S: AsRef<str>>(&self, s: S) -> domain::Result<()>;
}

#[cfg(test)]
pub(crate) mod fake {
    use std::cell::RefCell;

    use crate::domain;

    use super::Console;

    #[derive(Default)]
    pub(crate) struct FakeConsole {
        pub(crate) stdout: RefCell<Vec<String>>,
        pub(crate) stderr: RefCell<Vec<String>>,
    }

    impl FakeConsole {
        pub(crate) fn stdout(&self) -> Vec<String> {
            self.stdout.borrow().clone()
        }

        pub(crate) fn stderr(&self) -> Vec<String> {
            self.stderr.borrow().clone()
        }
    }

    impl Console for FakeConsole {
        fn println<S: AsRef<str>>(&self, s: S) -> domain::Result<()> {
            self.stdout.borrow_mut().push(String::from(s.as_ref()));
            Ok(())
        }

        fn eprintln<S: AsRef<str>>(&self, s: S) -> domain::Result<()> {
            self.stderr.borrow_mut().push(String::from(s.as_ref()));
            Ok(())
        }
    }
}
