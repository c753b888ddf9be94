use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Author or committer identity of a git commit.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Signature {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub date: Option<DateTime<Utc>>,
}

/// A git commit, as returned by the git data API.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Commit {
    #[serde(default)]
    pub sha: String,
    #[serde(default)]
    pub author: Signature,
    #[serde(default)]
    pub committer: Signature,
    #[serde(default)]
    pub message: String,
}
