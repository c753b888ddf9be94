pub mod issues;
pub mod pager;
pub mod partial;

pub use issues::{
    exclude_pull_requests, fetch_all, fetch_comments, fetch_events, fetch_issue, fetch_issue_detail,
    search_issues,
};
pub use pager::paginate;
pub use partial::Partial;
