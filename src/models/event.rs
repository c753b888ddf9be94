use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::user::{login_of, User};

/// Kind tag of an issue event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Mentioned,
    Subscribed,
    Unsubscribed,
    AddedToProject,
    MovedColumnsInProject,
    RemovedFromProject,
    Closed,
    Referenced,
    Merged,
    Assigned,
    Unassigned,
    Labeled,
    Unlabeled,
    Milestoned,
    Demilestoned,
    Renamed,
    Other(String),
}

impl EventKind {
    /// The tracker's name for this kind, e.g. `added_to_project`.
    pub fn name(&self) -> &str {
        match self {
            EventKind::Mentioned => "mentioned",
            EventKind::Subscribed => "subscribed",
            EventKind::Unsubscribed => "unsubscribed",
            EventKind::AddedToProject => "added_to_project",
            EventKind::MovedColumnsInProject => "moved_columns_in_project",
            EventKind::RemovedFromProject => "removed_from_project",
            EventKind::Closed => "closed",
            EventKind::Referenced => "referenced",
            EventKind::Merged => "merged",
            EventKind::Assigned => "assigned",
            EventKind::Unassigned => "unassigned",
            EventKind::Labeled => "labeled",
            EventKind::Unlabeled => "unlabeled",
            EventKind::Milestoned => "milestoned",
            EventKind::Demilestoned => "demilestoned",
            EventKind::Renamed => "renamed",
            EventKind::Other(name) => name,
        }
    }
}

impl From<&str> for EventKind {
    fn from(name: &str) -> Self {
        match name {
            "mentioned" => EventKind::Mentioned,
            "subscribed" => EventKind::Subscribed,
            "unsubscribed" => EventKind::Unsubscribed,
            "added_to_project" => EventKind::AddedToProject,
            "moved_columns_in_project" => EventKind::MovedColumnsInProject,
            "removed_from_project" => EventKind::RemovedFromProject,
            "closed" => EventKind::Closed,
            "referenced" => EventKind::Referenced,
            "merged" => EventKind::Merged,
            "assigned" => EventKind::Assigned,
            "unassigned" => EventKind::Unassigned,
            "labeled" => EventKind::Labeled,
            "unlabeled" => EventKind::Unlabeled,
            "milestoned" => EventKind::Milestoned,
            "demilestoned" => EventKind::Demilestoned,
            "renamed" => EventKind::Renamed,
            other => EventKind::Other(other.to_string()),
        }
    }
}

impl Default for EventKind {
    fn default() -> Self {
        EventKind::Other(String::new())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rename {
    pub from: String,
    pub to: String,
}

/// One entry of an issue's event stream.
///
/// Payload fields not relevant to `kind` are empty.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(from = "EventRecord")]
pub struct Event {
    pub actor: String,
    pub created_at: Option<DateTime<Utc>>,
    pub kind: EventKind,
    pub commit_id: Option<String>,
    pub assignee: String,
    pub label: String,
    pub milestone: String,
    pub rename: Rename,
}

#[derive(Debug, Deserialize)]
pub struct EventRecord {
    actor: Option<User>,
    created_at: Option<DateTime<Utc>>,
    event: Option<String>,
    commit_id: Option<String>,
    assignee: Option<User>,
    label: Option<NamedRecord>,
    milestone: Option<TitledRecord>,
    rename: Option<RenameRecord>,
}

#[derive(Debug, Deserialize)]
struct NamedRecord {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TitledRecord {
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RenameRecord {
    from: Option<String>,
    to: Option<String>,
}

impl From<EventRecord> for Event {
    fn from(record: EventRecord) -> Self {
        Event {
            actor: login_of(record.actor),
            created_at: record.created_at,
            kind: EventKind::from(record.event.as_deref().unwrap_or_default()),
            commit_id: record.commit_id.filter(|id| !id.is_empty()),
            assignee: login_of(record.assignee),
            label: record.label.and_then(|l| l.name).unwrap_or_default(),
            milestone: record.milestone.and_then(|m| m.title).unwrap_or_default(),
            rename: record
                .rename
                .map(|r| Rename {
                    from: r.from.unwrap_or_default(),
                    to: r.to.unwrap_or_default(),
                })
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_names_round_trip_through_tags() {
        for name in ["closed", "moved_columns_in_project", "demilestoned", "renamed"] {
            assert_eq!(EventKind::from(name).name(), name);
        }
        assert_eq!(EventKind::from("locked"), EventKind::Other("locked".to_string()));
    }

    #[test]
    fn test_event_payload_defaults() {
        let event: Event = serde_json::from_value(json!({
            "actor": { "login": "rsc" },
            "event": "labeled",
            "label": { "name": "NeedsFix" },
            "commit_id": null,
            "created_at": "2015-01-08T05:17:06Z"
        }))
        .unwrap();

        assert_eq!(event.kind, EventKind::Labeled);
        assert_eq!(event.label, "NeedsFix");
        assert_eq!(event.commit_id, None);
        assert_eq!(event.assignee, "");
        assert_eq!(event.rename, Rename::default());
    }
}
