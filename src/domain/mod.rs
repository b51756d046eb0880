pub mod commands;
pub mod console;
pub mod format;
pub mod git;

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("io error")]
    IOError(#[from] io::Error),
    #[error("couldn't run `{program}`: {source}")]
    GitUnavailable { program: String, source: io::Error },
    #[error("git {command} failed: {message}")]
    GitCommand { command: String, message: String },
    #[error("HEAD is detached, check out a branch first")]
    DetachedHead,
    #[error("unexpected git output: {:?}", .0)]
    MalformedOutput(String),
    #[error("format error: {:?}", .0)]
    Format(String),
    #[error("serialization error")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
