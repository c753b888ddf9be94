use std::fmt;
use std::str::FromStr;

use crate::error::IssueError;

/// A GitHub `owner/repo` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub owner: String,
    pub repo: String,
}

impl FromStr for Project {
    type Err = IssueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split('/').collect::<Vec<_>>().as_slice() {
            [owner, repo] if !owner.is_empty() && !repo.is_empty() => Ok(Project {
                owner: owner.to_string(),
                repo: repo.to_string(),
            }),
            _ => Err(IssueError::InvalidInput(format!(
                "invalid project {:?}: must be owner/repo, like golang/go",
                s
            ))),
        }
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
