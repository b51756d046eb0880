mod command;
mod history;
mod parent_resolver;

#[cfg(test)]
pub(crate) use command::fake::FakeGit;
pub use command::{CommandOutput, GitCommand};
pub use history::{commits_between, current_branch, LogOptions};
pub use parent_resolver::{ParentResolver, Resolution};

use nova::newtype;
use time::OffsetDateTime;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Commit {
    pub(crate) sha: CommitSha,
    pub(crate) short_sha: String,
    pub(crate) author_name: String,
    pub(crate) author_email: String,
    pub(crate) author_time: OffsetDateTime,
    pub(crate) subject: String,
}

impl Commit {
    #[cfg(test)]
    #[must_use]
    pub fn from_raw(sha: &str, author_time: i64, subject: &str) -> Self {
        Self {
            sha: CommitSha::from(sha),
            short_sha: sha.chars().take(7).collect(),
            author_name: String::from("Jane Doe"),
            author_email: String::from("jane@example.com"),
            author_time: OffsetDateTime::from_unix_timestamp(author_time).unwrap(),
            subject: String::from(subject),
        }
    }
}

#[newtype(new, borrow = "str")]
pub type CommitSha = String;

impl From<&str> for CommitSha {
    fn from(value: &str) -> Self {
        Self::new(String::from(value))
    }
}

#[newtype(new, borrow = "str")]
pub type BranchName = String;

impl From<&str> for BranchName {
    fn from(value: &str) -> Self {
        Self::new(String::from(value))
    }
}
