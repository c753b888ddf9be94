/// A rendered comment or event, tagged with its sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    /// Sortable timestamp, see `formatting::sort_key`.
    pub key: String,
    pub text: String,
}

impl TimelineEntry {
    pub fn new(key: String, text: String) -> Self {
        Self { key, text }
    }
}

/// Orders entries by key, keeping arrival order among equal keys, and
/// concatenates their text.
pub fn merge(mut entries: Vec<TimelineEntry>) -> String {
    entries.sort_by(|a, b| a.key.cmp(&b.key));
    entries.into_iter().map(|entry| entry.text).collect()
}
