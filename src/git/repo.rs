// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository access.

use crate::batch::CommitInput;
use crate::error::{CcvError, GitError, Result};
use git2::{Oid, Repository as Git2Repo, Sort};
use std::path::Path;

/// Wrapper around git2::Repository.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            CcvError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository from a path.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                CcvError::Git(GitError::NotARepository)
            } else {
                CcvError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        Ok(Self { inner: repo })
    }

    /// Get a commit by reference (SHA, branch name, etc.).
    pub fn get_commit(&self, reference: &str) -> Result<git2::Commit<'_>> {
        let obj = self.inner.revparse_single(reference).map_err(|e| {
            CcvError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        let commit = obj.peel_to_commit().map_err(|e| {
            CcvError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        Ok(commit)
    }

    /// Get commits in a range, oldest first.
    ///
    /// `A..B` lists the commits reachable from `B` but not from `A`; a single
    /// reference yields just that commit.
    pub fn get_commits_in_range(&self, range: &str) -> Result<Vec<(Oid, String)>> {
        let Some((from, to)) = range.split_once("..") else {
            let commit = self.get_commit(range)?;
            return Ok(vec![(commit.id(), message_text(&commit))]);
        };

        let walk_err = |command: &str, e: git2::Error| {
            CcvError::Git(GitError::CommandFailed {
                command: command.to_string(),
                message: e.message().to_string(),
            })
        };

        let mut revwalk = self.inner.revwalk().map_err(|e| walk_err("revwalk", e))?;
        revwalk
            .set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)
            .map_err(|e| walk_err("revwalk.set_sorting", e))?;

        let to = self.get_commit(if to.is_empty() { "HEAD" } else { to })?;
        revwalk
            .push(to.id())
            .map_err(|e| walk_err("revwalk.push", e))?;

        if !from.is_empty() {
            let from = self.get_commit(from)?;
            revwalk
                .hide(from.id())
                .map_err(|e| walk_err("revwalk.hide", e))?;
        }

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result.map_err(|e| walk_err("revwalk", e))?;
            let commit = self.inner.find_commit(oid).map_err(|e| {
                CcvError::Git(GitError::InvalidReference {
                    reference: format!("{}: {}", oid, e.message()),
                })
            })?;
            commits.push((oid, message_text(&commit)));
        }

        Ok(commits)
    }
}

/// Commit message text, decoding non-UTF-8 bytes lossily.
fn message_text(commit: &git2::Commit<'_>) -> String {
    String::from_utf8_lossy(commit.message_bytes()).into_owned()
}

/// Read the commits of a range in the current repository as batch inputs.
pub fn get_commit_range(range: &str) -> Result<Vec<CommitInput>> {
    let repo = Repository::open_current()?;
    commit_inputs(&repo, range)
}

/// Read the commits of a range as batch inputs.
pub fn commit_inputs(repo: &Repository, range: &str) -> Result<Vec<CommitInput>> {
    let commits = repo.get_commits_in_range(range)?;
    tracing::debug!("Read {} commits from range {}", commits.len(), range);
    Ok(commits
        .into_iter()
        .map(|(oid, msg)| CommitInput::with_id(oid.to_string(), msg))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo(messages: &[&str]) -> (TempDir, Repository) {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();

        {
            let sig = git2::Signature::now("Test", "test@example.com").unwrap();
            let tree_id = {
                let mut index = repo.index().unwrap();
                index.write_tree().unwrap()
            };
            let tree = repo.find_tree(tree_id).unwrap();

            let mut parent: Option<Oid> = None;
            for message in messages {
                let parents: Vec<git2::Commit<'_>> = parent
                    .map(|p| repo.find_commit(p).unwrap())
                    .into_iter()
                    .collect();
                let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();
                let oid = repo
                    .commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
                    .unwrap();
                parent = Some(oid);
            }
        }

        let wrapper = Repository::open(dir.path()).unwrap();
        (dir, wrapper)
    }

    #[test]
    fn test_open_repo() {
        let (dir, _repo) = create_test_repo(&["chore: init"]);
        assert!(Repository::open(dir.path()).is_ok());
    }

    #[test]
    fn test_not_a_repo() {
        let dir = TempDir::new().unwrap();
        let result = Repository::open(dir.path());
        assert!(matches!(
            result,
            Err(CcvError::Git(GitError::NotARepository))
        ));
    }

    #[test]
    fn test_range_is_oldest_first() {
        let (_dir, repo) = create_test_repo(&[
            "chore: init",
            "feat: add login",
            "Update readme",
        ]);

        let inputs = commit_inputs(&repo, "HEAD~2..HEAD").unwrap();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].message, "feat: add login");
        assert_eq!(inputs[1].message, "Update readme");
        assert!(inputs[0].id.as_deref().map(|id| id.len() == 40).unwrap_or(false));
    }

    #[test]
    fn test_single_reference() {
        let (_dir, repo) = create_test_repo(&["chore: init", "fix: patch"]);
        let inputs = commit_inputs(&repo, "HEAD").unwrap();
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].message, "fix: patch");
    }

    #[test]
    fn test_latin1_message_keeps_header() {
        let (_dir, repo) = create_test_repo(&["chore: init"]);
        let git = &repo.inner;
        let tree = git.head().unwrap().peel_to_tree().unwrap().id();

        let mut object = format!(
            "tree {}\nauthor Test <test@example.com> 0 +0000\n\
             committer Test <test@example.com> 0 +0000\nencoding ISO-8859-1\n\n",
            tree
        )
        .into_bytes();
        object.extend_from_slice(b"feat: add caf\xe9 menu\n");
        let oid = git.odb().unwrap().write(git2::ObjectType::Commit, &object).unwrap();
        git.set_head_detached(oid).unwrap();

        let inputs = commit_inputs(&repo, "HEAD").unwrap();
        assert!(inputs[0].message.starts_with("feat: add caf"));
        assert!(inputs[0].message.contains("menu"));

        let parsed = crate::commit::ParsedMessage::parse(&inputs[0].message);
        assert_eq!(parsed.commit_type(), Some("feat"));
        assert!(crate::rules::evaluate(&parsed, &crate::rules::RuleSet::default()).is_empty());
    }

    #[test]
    fn test_invalid_reference() {
        let (_dir, repo) = create_test_repo(&["chore: init"]);
        assert!(matches!(
            commit_inputs(&repo, "nope..HEAD"),
            Err(CcvError::Git(GitError::InvalidReference { .. }))
        ));
    }
}
