use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Comment, Issue, Project};

// Field names are part of the tool's JSON output format.

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IssueJson {
    pub number: u64,
    #[serde(rename = "Ref")]
    pub reference: String,
    pub title: String,
    pub state: String,
    pub assignee: String,
    pub closed: Option<DateTime<Utc>>,
    pub labels: Vec<String>,
    pub milestone: String,
    #[serde(rename = "URL")]
    pub url: String,
    pub reporter: String,
    pub created: Option<DateTime<Utc>>,
    pub text: String,
    pub comments: Vec<CommentJson>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommentJson {
    pub author: String,
    pub time: Option<DateTime<Utc>>,
    pub text: String,
}

impl IssueJson {
    pub fn from_issue(issue: &Issue, project: &Project) -> Self {
        IssueJson {
            number: issue.number,
            reference: issue.reference(project),
            title: issue.title.clone(),
            state: issue.state.clone(),
            assignee: issue.assignee.clone().unwrap_or_default(),
            closed: issue.closed_at,
            labels: issue.labels.clone(),
            milestone: issue.milestone.clone().unwrap_or_default(),
            url: issue.html_url.clone(),
            reporter: issue.reporter.clone(),
            created: issue.created_at,
            text: issue.body.clone(),
            comments: issue.comments.iter().map(CommentJson::from).collect(),
        }
    }
}

impl From<&Comment> for CommentJson {
    fn from(comment: &Comment) -> Self {
        CommentJson {
            author: comment.author.clone(),
            time: comment.created_at,
            text: comment.body.clone(),
        }
    }
}
