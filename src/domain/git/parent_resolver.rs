use crate::domain::Result;

use super::{BranchName, GitCommand};

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Resolution {
    Found(BranchName),
    NotFound,
}

type Strategy<G> = fn(&ParentResolver<G>, &BranchName) -> Result<Option<BranchName>>;

/// Guesses the branch the current branch was forked from.
///
/// Strategies are tried in order and the first one that names a branch wins:
///
/// 1. the configured upstream of the branch,
/// 2. the closest local branch containing the first parent of the branch tip,
/// 3. the closest local branch that is strictly behind the branch.
///
/// A git query that fails only means "no information" and moves on to the next step. The
/// only error surfaced is git not being runnable at all.
pub struct ParentResolver<G: GitCommand> {
    git: G,
}

impl<G: GitCommand> ParentResolver<G> {
    pub fn new(git: G) -> Self {
        Self { git }
    }

    pub fn resolve(&self, current: &BranchName) -> Result<Resolution> {
        let strategies: [(&str, Strategy<G>); 3] = [
            ("upstream", Self::upstream),
            ("closest_containing", Self::closest_containing),
            ("closest_local", Self::closest_local),
        ];

        for (name, strategy) in strategies {
            if let Some(parent) = strategy(self, current)? {
                log::debug!("{name} resolved {} to {}", &**current, &*parent);
                return Ok(Resolution::Found(parent));
            }
            log::debug!("{name} couldn't resolve {}", &**current);
        }

        Ok(Resolution::NotFound)
    }

    /// The upstream tracking reference of `current`, e.g. `origin/main`.
    pub fn upstream(&self, current: &BranchName) -> Result<Option<BranchName>> {
        let upstream_rev = format!("{}@{{upstream}}", &**current);
        let upstream = self.query(&[
            "rev-parse",
            "--abbrev-ref",
            "--symbolic-full-name",
            &upstream_rev,
        ])?;

        Ok(upstream
            .filter(|name| !name.is_empty())
            .map(BranchName::new))
    }

    /// The local branch containing the first parent of `current`'s tip that is the fewest
    /// commits behind `current`. Ties go to the branch git lists first.
    pub fn closest_containing(&self, current: &BranchName) -> Result<Option<BranchName>> {
        let first_parent_rev = format!("{}^", &**current);
        let first_parent = self.query(&["rev-parse", "--verify", "--quiet", &first_parent_rev])?;
        let Some(first_parent) = first_parent else {
            log::debug!("{} has no parent commit", &**current);
            return Ok(None);
        };

        let Some(branches) = self.local_branches(Some(first_parent.as_str()))? else {
            return Ok(None);
        };

        let candidates = branches
            .into_iter()
            .filter(|branch| branch != current)
            .collect::<Vec<_>>();
        log::debug!(
            "branches containing {first_parent}: {:?}",
            candidates.iter().map(|b| &**b).collect::<Vec<_>>()
        );

        match candidates.as_slice() {
            [] => Ok(None),
            [single] => Ok(Some(single.clone())),
            _ => {
                let mut closest: Option<(&BranchName, u64)> = None;
                for candidate in &candidates {
                    if let Some(distance) = self.distance(candidate, current)? {
                        if closest.map_or(true, |(_, min)| distance < min) {
                            closest = Some((candidate, distance));
                        }
                    }
                }

                Ok(closest.map(|(branch, _)| branch.clone()))
            }
        }
    }

    /// The local branch with the smallest non-zero distance to `current`.
    pub fn closest_local(&self, current: &BranchName) -> Result<Option<BranchName>> {
        let Some(branches) = self.local_branches(None)? else {
            return Ok(None);
        };

        let mut closest: Option<(BranchName, u64)> = None;
        for branch in branches.into_iter().filter(|branch| branch != current) {
            match self.distance(&branch, current)? {
                Some(0) => log::debug!("{} is not behind {}", &*branch, &**current),
                Some(distance) => {
                    if closest.as_ref().map_or(true, |(_, min)| distance < *min) {
                        closest = Some((branch, distance));
                    }
                }
                None => {}
            }
        }

        Ok(closest.map(|(branch, _)| branch))
    }

    /// Local branches in refname order, only those containing `commit` when given.
    ///
    /// `for-each-ref` output has no current branch marker and ignores `column.ui`.
    fn local_branches(&self, commit: Option<&str>) -> Result<Option<Vec<BranchName>>> {
        let mut args = vec!["for-each-ref", "--format=%(refname:short)"];
        if let Some(commit) = commit {
            args.extend(["--contains", commit]);
        }
        args.push("refs/heads/");

        let listing = self.query(&args)?;

        Ok(listing.map(|listing| {
            listing
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(BranchName::from)
                .collect()
        }))
    }

    /// Number of commits in `base..head`, `None` when git can't tell.
    fn distance(&self, base: &BranchName, head: &BranchName) -> Result<Option<u64>> {
        let range = format!("{}..{}", &**base, &**head);
        let Some(count) = self.query(&["rev-list", "--count", &range])? else {
            return Ok(None);
        };

        match count.parse::<u64>() {
            Ok(count) => {
                log::debug!("{range} is {count} commit(s)");
                Ok(Some(count))
            }
            Err(err) => {
                log::debug!("skipping {}, bad count {count:?}: {err}", &**base);
                Ok(None)
            }
        }
    }

    fn query(&self, args: &[&str]) -> Result<Option<String>> {
        let output = self.git.execute(args)?;
        if !output.success {
            log::debug!("git {} failed: {}", args.join(" "), output.output);
        }

        Ok(output.ok())
    }
}
