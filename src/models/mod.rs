pub mod comment;
pub mod commit;
pub mod event;
pub mod issue;
pub mod json;
pub mod milestone;
pub mod project;
pub mod user;

// Re-export commonly used types
pub use comment::Comment;
pub use commit::{Commit, Signature};
pub use event::{Event, EventKind, Rename};
pub use issue::{parse_issue_number, Issue};
pub use json::{CommentJson, IssueJson};
pub use milestone::{sort_by_due_date, Milestone};
pub use project::Project;
pub use user::User;

/// One page of a paginated listing.
///
/// `next_page` is the page the tracker says to request next; a value not
/// greater than the page just requested means the listing is exhausted.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_page: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next_page: u32) -> Self {
        Self { items, next_page }
    }

    pub fn last(items: Vec<T>) -> Self {
        Self { items, next_page: 0 }
    }
}
