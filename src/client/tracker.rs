use async_trait::async_trait;

use crate::error::IssueResult;
use crate::filtering::StructuredFilter;
use crate::models::{Comment, Commit, Event, Issue, Milestone, Page};

/// The issue tracker as seen by the rest of the crate.
///
/// Paged calls take the page to request and report the next one in the
/// returned `Page`. Implementations own transport concerns (auth, retries);
/// callers only see `IssueResult`.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    async fn get_issue(&self, number: u64) -> IssueResult<Issue>;

    async fn list_comments(&self, number: u64, page: u32) -> IssueResult<Page<Comment>>;

    async fn list_events(&self, number: u64, page: u32) -> IssueResult<Page<Event>>;

    /// Structured listing of the project's issues. May include pull requests.
    async fn list_issues(&self, filter: &StructuredFilter, page: u32) -> IssueResult<Page<Issue>>;

    /// Free-text search; `query` is passed through unchanged.
    async fn search_issues(&self, query: &str, page: u32) -> IssueResult<Page<Issue>>;

    async fn get_commit(&self, sha: &str) -> IssueResult<Commit>;

    /// Open milestones. Not paged.
    async fn list_open_milestones(&self) -> IssueResult<Vec<Milestone>>;
}
