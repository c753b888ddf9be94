#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use issue_cli::error::{IssueError, IssueResult};
use issue_cli::filtering::StructuredFilter;
use issue_cli::models::{Comment, Commit, Event, EventKind, Issue, Milestone, Page};
use issue_cli::IssueTracker;

/// Scripted pages of one endpoint; index 0 answers page 1. A page past the
/// end is empty and last.
type Pages<T> = Vec<Result<Page<T>, String>>;

/// In-memory tracker serving scripted responses and recording every call.
#[derive(Default)]
pub struct MockTracker {
    issues: HashMap<u64, Issue>,
    failing_issues: HashMap<u64, String>,
    comments: HashMap<u64, Pages<Comment>>,
    events: HashMap<u64, Pages<Event>>,
    listing: Pages<Issue>,
    search: Pages<Issue>,
    commits: HashMap<String, Commit>,
    milestones: Option<Vec<Milestone>>,
    milestone_error: Option<String>,
    calls: Mutex<Vec<String>>,
    filters: Mutex<Vec<StructuredFilter>>,
    queries: Mutex<Vec<String>>,
}

impl MockTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_issue(mut self, issue: Issue) -> Self {
        self.issues.insert(issue.number, issue);
        self
    }

    /// Answers `get_issue(number)` with `issue`, whatever its own number.
    pub fn with_issue_reply(mut self, number: u64, issue: Issue) -> Self {
        self.issues.insert(number, issue);
        self
    }

    pub fn with_failing_issue(mut self, number: u64, message: &str) -> Self {
        self.failing_issues.insert(number, message.to_string());
        self
    }

    pub fn with_comment_pages(mut self, number: u64, pages: Pages<Comment>) -> Self {
        self.comments.insert(number, pages);
        self
    }

    pub fn with_event_pages(mut self, number: u64, pages: Pages<Event>) -> Self {
        self.events.insert(number, pages);
        self
    }

    pub fn with_listing(mut self, pages: Pages<Issue>) -> Self {
        self.listing = pages;
        self
    }

    pub fn with_search(mut self, pages: Pages<Issue>) -> Self {
        self.search = pages;
        self
    }

    pub fn with_commit(mut self, commit: Commit) -> Self {
        self.commits.insert(commit.sha.clone(), commit);
        self
    }

    pub fn with_milestones(mut self, milestones: Vec<Milestone>) -> Self {
        self.milestones = Some(milestones);
        self
    }

    pub fn with_milestone_error(mut self, message: &str) -> Self {
        self.milestone_error = Some(message.to_string());
        self
    }

    /// Every call so far, as `"<method> <argument>"`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls to `method`.
    pub fn count(&self, method: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.split(' ').next() == Some(method))
            .count()
    }

    pub fn filters(&self) -> Vec<StructuredFilter> {
        self.filters.lock().unwrap().clone()
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    fn record(&self, method: &str, arg: impl std::fmt::Display) {
        self.calls.lock().unwrap().push(format!("{} {}", method, arg));
    }
}

fn serve<T: Clone>(pages: Option<&Pages<T>>, page: u32) -> IssueResult<Page<T>> {
    let scripted = pages.and_then(|pages| pages.get(page as usize - 1));
    match scripted {
        Some(Ok(page)) => Ok(page.clone()),
        Some(Err(message)) => Err(IssueError::ApiError(message.clone())),
        None => Ok(Page::last(Vec::new())),
    }
}

#[async_trait]
impl IssueTracker for MockTracker {
    async fn get_issue(&self, number: u64) -> IssueResult<Issue> {
        self.record("get_issue", number);
        if let Some(message) = self.failing_issues.get(&number) {
            return Err(IssueError::ApiError(message.clone()));
        }
        self.issues
            .get(&number)
            .cloned()
            .ok_or_else(|| IssueError::ApiError("404 Not Found".to_string()))
    }

    async fn list_comments(&self, number: u64, page: u32) -> IssueResult<Page<Comment>> {
        self.record("list_comments", page);
        serve(self.comments.get(&number), page)
    }

    async fn list_events(&self, number: u64, page: u32) -> IssueResult<Page<Event>> {
        self.record("list_events", page);
        serve(self.events.get(&number), page)
    }

    async fn list_issues(&self, filter: &StructuredFilter, page: u32) -> IssueResult<Page<Issue>> {
        self.record("list_issues", page);
        self.filters.lock().unwrap().push(filter.clone());
        serve(Some(&self.listing), page)
    }

    async fn search_issues(&self, query: &str, page: u32) -> IssueResult<Page<Issue>> {
        self.record("search_issues", page);
        self.queries.lock().unwrap().push(query.to_string());
        serve(Some(&self.search), page)
    }

    async fn get_commit(&self, sha: &str) -> IssueResult<Commit> {
        self.record("get_commit", sha);
        self.commits
            .get(sha)
            .cloned()
            .ok_or_else(|| IssueError::ApiError("422 No commit found".to_string()))
    }

    async fn list_open_milestones(&self) -> IssueResult<Vec<Milestone>> {
        self.record("list_open_milestones", "");
        if let Some(message) = &self.milestone_error {
            return Err(IssueError::ApiError(message.clone()));
        }
        Ok(self.milestones.clone().unwrap_or_default())
    }
}

pub fn at(hour: u32, min: u32, sec: u32) -> Option<DateTime<Utc>> {
    Some(Utc.with_ymd_and_hms(2015, 1, 8, hour, min, sec).unwrap())
}

pub fn issue(number: u64, title: &str) -> Issue {
    Issue {
        number,
        title: title.to_string(),
        state: "open".to_string(),
        reporter: "gopherbot".to_string(),
        html_url: format!("https://github.com/golang/go/issues/{}", number),
        ..Default::default()
    }
}

pub fn pull_request(number: u64, title: &str) -> Issue {
    Issue { is_pull_request: true, ..issue(number, title) }
}

pub fn comment(author: &str, created_at: Option<DateTime<Utc>>, body: &str) -> Comment {
    Comment {
        author: author.to_string(),
        created_at,
        body: body.to_string(),
    }
}

pub fn event(actor: &str, kind: &str, created_at: Option<DateTime<Utc>>) -> Event {
    Event {
        actor: actor.to_string(),
        kind: EventKind::from(kind),
        created_at,
        ..Default::default()
    }
}

pub fn milestone(number: u64, title: &str) -> Milestone {
    Milestone {
        number,
        title: title.to_string(),
        ..Default::default()
    }
}
