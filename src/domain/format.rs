use comfy_table::{presets::UTF8_BORDERS_ONLY, Cell, Color, Table};
use owo_colors::OwoColorize;
use serde::Serialize;
use time::{format_description, OffsetDateTime};

use crate::domain::{git::Commit, Error, Result};

const DATE_FORMAT: &str = "[year]-[month]-[day] [hour]:[minute]:[second]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Oneline,
    Short,
    Table,
    Json,
}

#[derive(Debug, Serialize)]
struct CommitRecord<'a> {
    sha: &'a str,
    short_sha: &'a str,
    author: &'a str,
    email: &'a str,
    #[serde(with = "time::serde::rfc3339")]
    date: OffsetDateTime,
    subject: &'a str,
}

impl<'a> From<&'a Commit> for CommitRecord<'a> {
    fn from(commit: &'a Commit) -> Self {
        Self {
            sha: &commit.sha,
            short_sha: &commit.short_sha,
            author: &commit.author_name,
            email: &commit.author_email,
            date: commit.author_time,
            subject: &commit.subject,
        }
    }
}

/// Renders `commits` in the given format. Text formats render nothing for an empty list.
pub fn render(commits: &[Commit], format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Oneline => Ok(oneline(commits, color)),
        OutputFormat::Short => short(commits, color),
        OutputFormat::Table => table(commits, color),
        OutputFormat::Json => json(commits),
    }
}

fn oneline(commits: &[Commit], color: bool) -> String {
    commits
        .iter()
        .map(|commit| {
            if color {
                format!("{} {}", commit.short_sha.yellow(), commit.subject)
            } else {
                format!("{} {}", commit.short_sha, commit.subject)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn short(commits: &[Commit], color: bool) -> Result<String> {
    let entries = commits
        .iter()
        .map(|commit| {
            let header = format!("commit {}", &*commit.sha);
            let header = if color {
                header.yellow().to_string()
            } else {
                header
            };

            Ok(format!(
                "{header}\nAuthor: {} <{}>\nDate:   {}\n\n    {}",
                commit.author_name,
                commit.author_email,
                format_date(commit.author_time)?,
                commit.subject
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(entries.join("\n\n"))
}

fn table(commits: &[Commit], color: bool) -> Result<String> {
    if commits.is_empty() {
        return Ok(String::new());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    table.set_header(vec!["commit", "author", "date", "subject"]);

    for commit in commits {
        table.add_row(vec![
            Cell::new(&commit.short_sha).fg(Color::DarkYellow),
            Cell::new(&commit.author_name),
            Cell::new(format_date(commit.author_time)?),
            Cell::new(&commit.subject),
        ]);
    }

    Ok(format!("{table}"))
}

fn json(commits: &[Commit]) -> Result<String> {
    let records = commits.iter().map(CommitRecord::from).collect::<Vec<_>>();

    Ok(serde_json::to_string_pretty(&records)?)
}

fn format_date(date: OffsetDateTime) -> Result<String> {
    let date_format = format_description::parse_borrowed::<2>(DATE_FORMAT)
        .map_err(|err| Error::Format(err.to_string()))?;

    date.format(&date_format)
        .map_err(|err| Error::Format(err.to_string()))
}
