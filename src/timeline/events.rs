use crate::client::IssueTracker;
use crate::constants::{BODY_INDENT, SHORT_SHA_LEN};
use crate::formatting::{format_time, short_sha, wrap_indented};
use crate::logging::log_debug;
use crate::models::{Commit, Event, EventKind};

/// How an event kind is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStyle {
    /// Not shown at all.
    Hidden,
    /// `* actor kind (time)`.
    Plain,
    /// Like `Plain`, with underscores in the kind shown as spaces.
    Spaced,
    /// `Plain` plus the commit the event points at, if any.
    Commit,
    /// `* actor kind assignee (time)`.
    Assignee,
    /// `* actor kind label (time)`.
    Label,
    /// `* actor <verb> milestone (time)`.
    Milestone(&'static str),
    /// Title change with before and after lines.
    Rename,
}

pub fn style_of(kind: &EventKind) -> EventStyle {
    match kind {
        EventKind::Mentioned | EventKind::Subscribed | EventKind::Unsubscribed => EventStyle::Hidden,
        EventKind::AddedToProject | EventKind::MovedColumnsInProject | EventKind::RemovedFromProject => {
            EventStyle::Spaced
        }
        EventKind::Closed | EventKind::Referenced | EventKind::Merged => EventStyle::Commit,
        EventKind::Assigned | EventKind::Unassigned => EventStyle::Assignee,
        EventKind::Labeled | EventKind::Unlabeled => EventStyle::Label,
        EventKind::Milestoned => EventStyle::Milestone("added to milestone"),
        EventKind::Demilestoned => EventStyle::Milestone("removed from milestone"),
        EventKind::Renamed => EventStyle::Rename,
        EventKind::Other(_) => EventStyle::Plain,
    }
}

/// The event's own lines, without commit detail. `None` for hidden kinds.
pub fn format_event(event: &Event, style: EventStyle) -> Option<String> {
    let actor = &event.actor;
    let kind = event.kind.name();
    let time = format_time(event.created_at);

    let text = match style {
        EventStyle::Hidden => return None,
        EventStyle::Plain => format!("\n* {} {} ({})\n", actor, kind, time),
        EventStyle::Spaced => format!("\n* {} {} ({})\n", actor, kind.replace('_', " "), time),
        EventStyle::Commit => {
            let commit = event
                .commit_id
                .as_deref()
                .map(|id| format!(" in commit {}", short_sha(id, SHORT_SHA_LEN)))
                .unwrap_or_default();
            format!("\n* {} {}{} ({})\n", actor, kind, commit, time)
        }
        EventStyle::Assignee => format!("\n* {} {} {} ({})\n", actor, kind, event.assignee, time),
        EventStyle::Label => format!("\n* {} {} {} ({})\n", actor, kind, event.label, time),
        EventStyle::Milestone(verb) => format!("\n* {} {} {} ({})\n", actor, verb, event.milestone, time),
        EventStyle::Rename => format!(
            "\n* {} changed title ({})\n  - {}\n  + {}\n",
            actor, time, event.rename.from, event.rename.to
        ),
    };

    Some(text)
}

pub fn format_commit_detail(commit: &Commit, wrap_width: usize) -> String {
    format!(
        "\n\tAuthor: {} <{}> {}\n\tCommitter: {} <{}> {}\n\n{}\n",
        commit.author.name,
        commit.author.email,
        format_time(commit.author.date),
        commit.committer.name,
        commit.committer.email,
        format_time(commit.committer.date),
        wrap_indented(&commit.message, BODY_INDENT, wrap_width)
    )
}

/// Renders one event, looking up the referenced commit when there is one.
/// A failed commit lookup only drops the commit detail.
pub async fn render_event<T>(tracker: &T, event: &Event, wrap_width: usize) -> Option<String>
where
    T: IssueTracker + ?Sized,
{
    let style = style_of(&event.kind);
    let mut text = format_event(event, style)?;

    if let (EventStyle::Commit, Some(sha)) = (style, event.commit_id.as_deref()) {
        match tracker.get_commit(sha).await {
            Ok(commit) => text.push_str(&format_commit_detail(&commit, wrap_width)),
            Err(e) => log_debug(&format!("commit {} unavailable: {}", sha, e)),
        }
    }

    Some(text)
}
