use time::OffsetDateTime;

use crate::domain::{Error, Result};

use super::{BranchName, Commit, CommitSha, GitCommand};

const RECORD_SEPARATOR: char = '\u{1e}';
const FIELD_SEPARATOR: char = '\u{1f}';
pub(crate) const LOG_FORMAT: &str = "--format=%x1e%H%x1f%h%x1f%an%x1f%ae%x1f%at%x1f%s";

#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct LogOptions {
    pub reverse: bool,
    pub no_merges: bool,
    pub max_count: Option<usize>,
}

pub fn current_branch<G: GitCommand>(git: &G) -> Result<BranchName> {
    let output = git.execute(&["rev-parse", "--abbrev-ref", "HEAD"])?;
    if !output.success {
        return Err(Error::GitCommand {
            command: String::from("rev-parse --abbrev-ref HEAD"),
            message: output.output,
        });
    }

    match output.output.as_str() {
        "HEAD" => Err(Error::DetachedHead),
        "" => Err(Error::MalformedOutput(String::from("empty branch name for HEAD"))),
        name => Ok(BranchName::from(name)),
    }
}

/// Commits reachable from `head` but not from `base`, newest first unless reversed.
pub fn commits_between<G: GitCommand>(
    git: &G,
    base: &BranchName,
    head: &BranchName,
    options: &LogOptions,
) -> Result<Vec<Commit>> {
    let range = format!("{}..{}", &**base, &**head);
    let max_count = options.max_count.map(|n| format!("--max-count={n}"));

    let mut args = vec!["log", LOG_FORMAT];
    if options.no_merges {
        args.push("--no-merges");
    }
    if options.reverse {
        args.push("--reverse");
    }
    if let Some(max_count) = &max_count {
        args.push(max_count);
    }
    args.push(&range);
    args.push("--");

    let output = git.execute(&args)?;
    if !output.success {
        return Err(Error::GitCommand {
            command: format!("log {range}"),
            message: output.output,
        });
    }

    output
        .output
        .split(RECORD_SEPARATOR)
        .map(str::trim)
        .filter(|record| !record.is_empty())
        .map(parse_commit)
        .collect()
}

fn parse_commit(record: &str) -> Result<Commit> {
    let fields = record.split(FIELD_SEPARATOR).collect::<Vec<_>>();
    let [sha, short_sha, author_name, author_email, author_time, subject] = fields.as_slice()
    else {
        return Err(Error::MalformedOutput(format!(
            "expected 6 fields in log record, got {}: {record:?}",
            fields.len()
        )));
    };

    let author_time = author_time
        .parse::<i64>()
        .ok()
        .and_then(|timestamp| OffsetDateTime::from_unix_timestamp(timestamp).ok())
        .ok_or_else(|| Error::MalformedOutput(format!("invalid author time {author_time:?}")))?;

    Ok(Commit {
        sha: CommitSha::from(*sha),
        short_sha: String::from(*short_sha),
        author_name: String::from(*author_name),
        author_email: String::from(*author_email),
        author_time,
        subject: String::from(*subject),
    })
}
