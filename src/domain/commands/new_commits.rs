use crate::domain::{
    console::Console,
    format::{self, OutputFormat},
    git::{self, BranchName, GitCommand, LogOptions, ParentResolver, Resolution},
    Result,
};

#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct ListOptions {
    /// Compare against this branch instead of inferring the parent
    pub parent: Option<BranchName>,
    pub format: OutputFormat,
    pub color: bool,
    pub log: LogOptions,
    pub count: bool,
    pub print_parent: bool,
    pub show_parent: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Listed,
    /// No parent could be inferred for the contained branch
    ParentNotFound(BranchName),
}

pub fn new_commits<G: GitCommand, C: Console>(
    git: &G,
    console: &C,
    options: &ListOptions,
) -> Result<Outcome> {
    let current = git::current_branch(git)?;

    let parent = if let Some(parent) = options.parent.clone() {
        log::debug!("using {} as parent", &*parent);
        parent
    } else {
        match ParentResolver::new(git).resolve(&current)? {
            Resolution::Found(parent) => parent,
            Resolution::NotFound => return Ok(Outcome::ParentNotFound(current)),
        }
    };

    if options.print_parent {
        console.println(&*parent)?;
        return Ok(Outcome::Listed);
    }

    if options.show_parent {
        console.eprintln(format!("Comparing {} against {}", &*current, &*parent))?;
    }

    let commits = git::commits_between(git, &parent, &current, &options.log)?;
    log::debug!("{} commit(s) in {}..{}", commits.len(), &*parent, &*current);

    if options.count {
        console.println(commits.len().to_string())?;
        return Ok(Outcome::Listed);
    }

    let rendered = format::render(&commits, options.format, options.color)?;
    if !rendered.is_empty() {
        console.println(rendered)?;
    }

    Ok(Outcome::Listed)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::domain::{
        console::fake::FakeConsole,
        format::OutputFormat,
        git::{BranchName, FakeGit},
        Error,
    };

    use super::{new_commits, ListOptions, Outcome};

    const TWO_COMMITS: &str = "\u{1e}bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb\u{1f}bbbbbbb\u{1f}Jane Doe\u{1f}jane@example.com\u{1f}1717539161\u{1f}Wire up the parser\n\
                               \u{1e}aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa\u{1f}aaaaaaa\u{1f}Jane Doe\u{1f}jane@example.com\u{1f}1717500000\u{1f}Add parser";

    fn on_branch(branch: &str) -> FakeGit {
        FakeGit::new().with_success(&["rev-parse", "--abbrev-ref", "HEAD"], branch)
    }

    #[test]
    fn test_new_commits_should_list_commits_since_inferred_parent() {
        let git = on_branch("feature/x")
            .with_first_parent("feature/x", "abc123")
            .with_branches_containing("abc123", &["main", "develop", "feature/x"])
            .with_distance("main", "feature/x", "5")
            .with_distance("develop", "feature/x", "2")
            .with_log("develop..feature/x", TWO_COMMITS);
        let console = FakeConsole::default();

        let outcome = new_commits(&git, &console, &ListOptions::default()).unwrap();

        assert_eq!(outcome, Outcome::Listed);
        assert_eq!(
            console.stdout(),
            vec![String::from("bbbbbbb Wire up the parser\naaaaaaa Add parser")]
        );
    }

    #[test]
    fn test_new_commits_should_not_infer_when_parent_is_given() {
        let git = on_branch("feature")
            .with_upstream("feature", "origin/feature")
            .with_log("main..feature", TWO_COMMITS);
        let console = FakeConsole::default();

        let options = ListOptions {
            parent: Some(BranchName::from("main")),
            count: true,
            ..ListOptions::default()
        };
        let outcome = new_commits(&git, &console, &options).unwrap();

        assert_eq!(outcome, Outcome::Listed);
        assert_eq!(console.stdout(), vec![String::from("2")]);
        assert!(!git.calls().iter().any(|call| call[0] == "for-each-ref"
            || call.last().is_some_and(|arg| arg.ends_with("@{upstream}"))));
    }

    #[test]
    fn test_new_commits_should_print_only_the_parent() {
        let git = on_branch("feature/y").with_upstream("feature/y", "origin/main");
        let console = FakeConsole::default();

        let options = ListOptions {
            print_parent: true,
            ..ListOptions::default()
        };
        new_commits(&git, &console, &options).unwrap();

        assert_eq!(console.stdout(), vec![String::from("origin/main")]);
        assert!(git.calls().iter().all(|call| call[0] != "log"));
    }

    #[test]
    fn test_new_commits_should_show_compared_branches_on_stderr() {
        let git = on_branch("feature/y")
            .with_upstream("feature/y", "origin/main")
            .with_log("origin/main..feature/y", "");
        let console = FakeConsole::default();

        let options = ListOptions {
            show_parent: true,
            format: OutputFormat::Json,
            ..ListOptions::default()
        };
        new_commits(&git, &console, &options).unwrap();

        assert_eq!(
            console.stderr(),
            vec![String::from("Comparing feature/y against origin/main")]
        );
        assert_eq!(console.stdout(), vec![String::from("[]")]);
    }

    #[test]
    fn test_new_commits_should_print_nothing_when_up_to_date() {
        let git = on_branch("feature")
            .with_upstream("feature", "origin/feature")
            .with_log("origin/feature..feature", "");
        let console = FakeConsole::default();

        new_commits(&git, &console, &ListOptions::default()).unwrap();

        assert!(console.stdout().is_empty());
    }

    #[test]
    fn test_new_commits_should_report_missing_parent() {
        let git = on_branch("main").with_local_branches(&["main"]);
        let console = FakeConsole::default();

        let outcome = new_commits(&git, &console, &ListOptions::default()).unwrap();

        assert_eq!(outcome, Outcome::ParentNotFound(BranchName::from("main")));
        assert!(console.stdout().is_empty());
    }

    #[test]
    fn test_new_commits_should_fail_on_detached_head() {
        let git = on_branch("HEAD");
        let console = FakeConsole::default();

        let result = new_commits(&git, &console, &ListOptions::default());

        assert!(matches!(result, Err(Error::DetachedHead)));
    }
}
