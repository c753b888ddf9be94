//! Single-issue view: metadata header, body, and the comments and events of
//! the issue merged into one chronological transcript.

pub mod entry;
pub mod events;

pub use entry::{merge, TimelineEntry};
pub use events::{format_commit_detail, format_event, render_event, style_of, EventStyle};

use crate::cache::IssueCache;
use crate::client::IssueTracker;
use crate::constants::{BODY_INDENT, DEFAULT_WRAP_WIDTH};
use crate::error::IssueResult;
use crate::fetch::{fetch_comments, fetch_events, fetch_issue};
use crate::formatting::{format_issue_header, format_time, sort_key, wrap_indented};
use crate::models::{Comment, Issue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit bodies verbatim, without trimming or wrapping.
    pub raw: bool,
    pub wrap_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            raw: false,
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }
}

/// Body text of an issue or comment, with its leading blank line.
pub fn format_body(body: &str, options: &RenderOptions) -> String {
    if options.raw {
        if body.is_empty() {
            return String::new();
        }
        return format!("\n{}\n\n", body);
    }

    let text = body.trim();
    if text.is_empty() {
        return String::new();
    }
    format!("\n{}\n", wrap_indented(text, BODY_INDENT, options.wrap_width))
}

pub fn comment_entry(comment: &Comment, options: &RenderOptions) -> TimelineEntry {
    let text = format!(
        "\nComment by {} ({})\n{}",
        comment.author,
        format_time(comment.created_at),
        format_body(&comment.body, options)
    );
    TimelineEntry::new(sort_key(comment.created_at), text)
}

/// Builds the transcript of one issue from the tracker.
pub struct TimelineMerger<'a, T: ?Sized> {
    tracker: &'a T,
    options: RenderOptions,
}

impl<'a, T> TimelineMerger<'a, T>
where
    T: IssueTracker + ?Sized,
{
    pub fn new(tracker: &'a T, options: RenderOptions) -> Self {
        Self { tracker, options }
    }

    /// Every comment and visible event of issue `number`, unsorted.
    ///
    /// A failure fetching either stream fails the whole view.
    pub async fn entries(&self, number: u64) -> IssueResult<Vec<TimelineEntry>> {
        let comments = fetch_comments(self.tracker, number).await.into_result()?;
        let events = fetch_events(self.tracker, number).await.into_result()?;

        let mut entries: Vec<TimelineEntry> = comments
            .iter()
            .map(|comment| comment_entry(comment, &self.options))
            .collect();

        for event in &events {
            if let Some(text) = render_event(self.tracker, event, self.options.wrap_width).await {
                entries.push(TimelineEntry::new(sort_key(event.created_at), text));
            }
        }

        Ok(entries)
    }

    /// Comments and events of issue `number` in chronological order.
    pub async fn transcript(&self, number: u64) -> IssueResult<String> {
        Ok(merge(self.entries(number).await?))
    }

    /// Full view of `issue`: header, body, then the transcript.
    pub async fn render(&self, issue: &Issue) -> IssueResult<String> {
        let mut out = format_issue_header(issue);
        out.push_str(&format_body(&issue.body, &self.options));
        out.push_str(&self.transcript(issue.number).await?);
        Ok(out)
    }
}

/// Fetches issue `number` (recording it in `cache`) and renders its full view.
pub async fn render_timeline<T>(
    tracker: &T,
    cache: &IssueCache,
    number: u64,
    options: &RenderOptions,
) -> IssueResult<String>
where
    T: IssueTracker + ?Sized,
{
    let issue = fetch_issue(tracker, cache, number).await?;
    TimelineMerger::new(tracker, options.clone()).render(&issue).await
}
