use crate::cache::IssueCache;
use crate::client::IssueTracker;
use crate::constants::FIRST_PAGE;
use crate::error::IssueResult;
use crate::filtering::{plan_query, IssueQuery};
use crate::models::{Comment, Event, Issue, Project};

use super::pager::paginate;
use super::partial::Partial;

/// Retrieves every issue matching `query` from the endpoint it was planned
/// for. Pull requests are dropped and every issue seen is recorded in
/// `cache`, including those of a listing cut short by an error.
pub async fn fetch_all<T>(tracker: &T, cache: &IssueCache, query: &IssueQuery) -> Partial<Vec<Issue>>
where
    T: IssueTracker + ?Sized,
{
    let fetched = match query {
        IssueQuery::Filter(filter) => {
            paginate(FIRST_PAGE, move |page| tracker.list_issues(filter, page)).await
        }
        IssueQuery::Search(text) => {
            paginate(FIRST_PAGE, move |page| tracker.search_issues(text, page)).await
        }
    };

    let fetched = fetched.map(exclude_pull_requests);
    for issue in &fetched.items {
        cache.record(issue.clone());
    }
    fetched
}

/// Compiles `query` and retrieves its issues.
pub async fn search_issues<T>(
    tracker: &T,
    cache: &IssueCache,
    project: &Project,
    query: &str,
) -> Partial<Vec<Issue>>
where
    T: IssueTracker + ?Sized,
{
    let plan = plan_query(tracker, project, query).await;
    fetch_all(tracker, cache, &plan).await
}

pub fn exclude_pull_requests(issues: Vec<Issue>) -> Vec<Issue> {
    issues.into_iter().filter(|issue| !issue.is_pull_request).collect()
}

pub async fn fetch_comments<T>(tracker: &T, number: u64) -> Partial<Vec<Comment>>
where
    T: IssueTracker + ?Sized,
{
    paginate(FIRST_PAGE, move |page| tracker.list_comments(number, page)).await
}

pub async fn fetch_events<T>(tracker: &T, number: u64) -> Partial<Vec<Event>>
where
    T: IssueTracker + ?Sized,
{
    paginate(FIRST_PAGE, move |page| tracker.list_events(number, page)).await
}

/// Fetches a fresh snapshot of one issue and records it.
pub async fn fetch_issue<T>(tracker: &T, cache: &IssueCache, number: u64) -> IssueResult<Issue>
where
    T: IssueTracker + ?Sized,
{
    let issue = tracker.get_issue(number).await?;
    cache.record(issue.clone());
    Ok(issue)
}

/// Like `fetch_issue`, with all comments attached. Any failure is fatal.
pub async fn fetch_issue_detail<T>(tracker: &T, cache: &IssueCache, number: u64) -> IssueResult<Issue>
where
    T: IssueTracker + ?Sized,
{
    let mut issue = fetch_issue(tracker, cache, number).await?;
    issue.comments = fetch_comments(tracker, number).await.into_result()?;
    Ok(issue)
}
