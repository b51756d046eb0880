mod new_commits;

pub use new_commits::{new_commits, ListOptions, Outcome};
