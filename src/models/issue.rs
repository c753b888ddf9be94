use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::comment::Comment;
use super::project::Project;
use super::user::{login_of, optional_login, User};

/// A snapshot of one tracker issue.
///
/// Snapshots are never patched in place: a later fetch replaces the whole
/// value. Comments are only populated when detail was requested.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(from = "IssueRecord")]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub state: String,
    pub assignee: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
    /// Label names, kept sorted.
    pub labels: Vec<String>,
    pub milestone: Option<String>,
    pub html_url: String,
    pub reporter: String,
    pub body: String,
    pub is_pull_request: bool,
    pub comments: Vec<Comment>,
}

impl Issue {
    /// Cross-repository reference, e.g. `golang/go#8786`.
    pub fn reference(&self, project: &Project) -> String {
        format!("{}#{}", project, self.number)
    }
}

/// Parses `123` or `#123` into an issue number. Zero is not a valid number.
pub fn parse_issue_number(text: &str) -> Option<u64> {
    let digits = text.trim().trim_start_matches('#');
    match digits.parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(n),
    }
}

/// Issue as returned by the REST API, with every field optional.
#[derive(Debug, Deserialize)]
pub struct IssueRecord {
    number: Option<u64>,
    title: Option<String>,
    state: Option<String>,
    user: Option<User>,
    assignee: Option<User>,
    created_at: Option<DateTime<Utc>>,
    closed_at: Option<DateTime<Utc>>,
    labels: Option<Vec<LabelRecord>>,
    milestone: Option<MilestoneRef>,
    html_url: Option<String>,
    body: Option<String>,
    pull_request: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct LabelRecord {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MilestoneRef {
    title: Option<String>,
}

impl From<IssueRecord> for Issue {
    fn from(record: IssueRecord) -> Self {
        let mut labels: Vec<String> = record
            .labels
            .unwrap_or_default()
            .into_iter()
            .map(|label| label.name.unwrap_or_default())
            .collect();
        labels.sort();

        Issue {
            number: record.number.unwrap_or(0),
            title: record.title.unwrap_or_default(),
            state: record.state.unwrap_or_default(),
            assignee: optional_login(record.assignee),
            created_at: record.created_at,
            closed_at: record.closed_at,
            labels,
            milestone: record.milestone.and_then(|m| m.title),
            html_url: record.html_url.unwrap_or_default(),
            reporter: login_of(record.user),
            body: record.body.unwrap_or_default(),
            is_pull_request: record.pull_request.is_some(),
            comments: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolves_optional_fields_once() {
        let issue: Issue = serde_json::from_value(json!({
            "number": 8786,
            "title": "time: Duration should implement fmt.Formatter",
            "state": "closed",
            "user": { "login": "dsymonds" },
            "assignee": null,
            "labels": [{ "name": "size-m" }, { "name": "release-none" }],
            "milestone": null,
            "html_url": "https://github.com/golang/go/issues/8786",
            "created_at": "2014-09-21T23:02:50Z"
        }))
        .unwrap();

        assert_eq!(issue.number, 8786);
        assert_eq!(issue.reporter, "dsymonds");
        assert_eq!(issue.assignee, None);
        assert_eq!(issue.labels, vec!["release-none", "size-m"]);
        assert_eq!(issue.milestone, None);
        assert_eq!(issue.body, "");
        assert!(issue.closed_at.is_none());
        assert!(!issue.is_pull_request);
    }

    #[test]
    fn test_pull_request_link_marks_pull_request() {
        let issue: Issue = serde_json::from_value(json!({
            "number": 12,
            "pull_request": { "url": "https://api.github.com/repos/o/r/pulls/12" }
        }))
        .unwrap();
        assert!(issue.is_pull_request);
    }

    #[test]
    fn test_parse_issue_number() {
        assert_eq!(parse_issue_number("9027"), Some(9027));
        assert_eq!(parse_issue_number("#9027"), Some(9027));
        assert_eq!(parse_issue_number("0"), None);
        assert_eq!(parse_issue_number("Go1.5"), None);
    }

    #[test]
    fn test_reference() {
        let project: Project = "golang/go".parse().unwrap();
        let issue = Issue { number: 42, ..Default::default() };
        assert_eq!(issue.reference(&project), "golang/go#42");
    }
}
