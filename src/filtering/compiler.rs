use crate::client::IssueTracker;
use crate::logging::log_debug;
use crate::models::Project;

use super::filter::{MilestoneFilter, StructuredFilter};

/// Milestone selection before the name is resolved against the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MilestoneSpec {
    Named(String),
    Unassigned,
}

/// Result of the lexical phase of query compilation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    pub milestone: Option<MilestoneSpec>,
    /// Everything except the milestone, which is filled in on resolution.
    pub filter: StructuredFilter,
}

/// How a search query will be served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueQuery {
    /// Served by the structured listing endpoint.
    Filter(StructuredFilter),
    /// Full text handed to the search endpoint.
    Search(String),
}

/// Tokenizes a query into listing parameters.
///
/// Returns `None` when the query cannot be expressed losslessly as a
/// structured filter: it contains quotes, a token is not `key:value`, a value
/// is empty, a key is unknown, or a key appears twice.
pub fn parse_query(query: &str) -> Option<ParsedQuery> {
    if query.contains(&['"', '\''][..]) {
        return None;
    }

    let mut parsed = ParsedQuery::default();
    for token in query.split_whitespace() {
        let (key, value) = token.split_once(':')?;
        match key {
            "milestone" => {
                let name = non_empty(value)?;
                set_once(&mut parsed.milestone, MilestoneSpec::Named(name))?;
            }
            "state" => set_once(&mut parsed.filter.state, non_empty(value)?)?,
            "assignee" => set_once(&mut parsed.filter.assignee, non_empty(value)?)?,
            "author" => set_once(&mut parsed.filter.creator, non_empty(value)?)?,
            "mentions" => set_once(&mut parsed.filter.mentioned, non_empty(value)?)?,
            "label" => {
                let labels = value.split(',').map(non_empty).collect::<Option<Vec<_>>>()?;
                set_once(&mut parsed.filter.labels, labels)?;
            }
            "sort" => set_once(&mut parsed.filter.sort, non_empty(value)?)?,
            // The listing endpoint only has `since`; date ranges go to search.
            "updated" => return None,
            "no" => match value {
                "milestone" => set_once(&mut parsed.milestone, MilestoneSpec::Unassigned)?,
                _ => return None,
            },
            _ => return None,
        }
    }

    Some(parsed)
}

/// Compiles a query into a structured filter, resolving `milestone:<name>`
/// against the tracker's open milestones.
pub async fn compile_query<T>(tracker: &T, query: &str) -> Option<StructuredFilter>
where
    T: IssueTracker + ?Sized,
{
    let parsed = parse_query(query)?;
    let mut filter = parsed.filter;

    filter.milestone = match parsed.milestone {
        None => None,
        Some(MilestoneSpec::Unassigned) => Some(MilestoneFilter::Unassigned),
        Some(MilestoneSpec::Named(name)) => {
            Some(MilestoneFilter::Number(resolve_milestone(tracker, &name).await?))
        }
    };

    Some(filter)
}

/// Chooses between the listing endpoint and free-text search for `query`.
pub async fn plan_query<T>(tracker: &T, project: &Project, query: &str) -> IssueQuery
where
    T: IssueTracker + ?Sized,
{
    match compile_query(tracker, query).await {
        Some(filter) => IssueQuery::Filter(filter),
        None => {
            log_debug(&format!("query {:?} falls back to search", query));
            IssueQuery::Search(search_text(project, query))
        }
    }
}

/// Full search text for `query`, restricted to the project's open issues.
pub fn search_text(project: &Project, query: &str) -> String {
    format!("type:issue state:open repo:{} {}", project, query)
}

async fn resolve_milestone<T>(tracker: &T, name: &str) -> Option<u64>
where
    T: IssueTracker + ?Sized,
{
    match tracker.list_open_milestones().await {
        Ok(milestones) => {
            let found = milestones.iter().find(|m| m.title == name).map(|m| m.number);
            if found.is_none() {
                log_debug(&format!("no open milestone named {:?}", name));
            }
            found
        }
        Err(e) => {
            log_debug(&format!("listing milestones for {:?}: {}", name, e));
            None
        }
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T) -> Option<()> {
    if slot.is_some() {
        return None;
    }
    *slot = Some(value);
    Some(())
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quotes_are_unrepresentable() {
        assert_eq!(parse_query(r#"author:rsc "hello""#), None);
        assert_eq!(parse_query("label:it's"), None);
    }

    #[test]
    fn test_recognized_keys() {
        let parsed = parse_query("state:closed assignee:rsc author:robpike mentions:adg label:NeedsFix,Go2 sort:updated").unwrap();
        let filter = parsed.filter;

        assert_eq!(parsed.milestone, None);
        assert_eq!(filter.state.as_deref(), Some("closed"));
        assert_eq!(filter.assignee.as_deref(), Some("rsc"));
        assert_eq!(filter.creator.as_deref(), Some("robpike"));
        assert_eq!(filter.mentioned.as_deref(), Some("adg"));
        assert_eq!(filter.labels, Some(vec!["NeedsFix".to_string(), "Go2".to_string()]));
        assert_eq!(filter.sort.as_deref(), Some("updated"));
    }

    #[test]
    fn test_empty_query_lists_everything() {
        assert_eq!(parse_query("   "), Some(ParsedQuery::default()));
    }

    #[test]
    fn test_bare_words_and_unknown_keys() {
        assert_eq!(parse_query("crash"), None);
        assert_eq!(parse_query("is:open"), None);
        assert_eq!(parse_query("no:assignee"), None);
    }

    #[test]
    fn test_empty_values() {
        assert_eq!(parse_query("state:"), None);
        assert_eq!(parse_query("label:"), None);
        assert_eq!(parse_query("label:a,,b"), None);
        assert_eq!(parse_query("milestone:"), None);
    }

    #[test]
    fn test_repeated_keys() {
        assert_eq!(parse_query("state:open state:closed"), None);
        assert_eq!(parse_query("label:a label:b"), None);
        assert_eq!(parse_query("author:rsc author:rsc"), None);
    }

    #[test]
    fn test_updated_is_always_declined() {
        assert_eq!(parse_query("updated:>=2015-01-01"), None);
        assert_eq!(parse_query("state:open updated:2015-01-01"), None);
    }

    #[test]
    fn test_milestone_forms_are_exclusive() {
        assert_eq!(
            parse_query("no:milestone").unwrap().milestone,
            Some(MilestoneSpec::Unassigned)
        );
        assert_eq!(parse_query("no:milestone milestone:Go1.5"), None);
        assert_eq!(parse_query("milestone:Go1.5 no:milestone"), None);
    }

    #[test]
    fn test_search_text() {
        let project: Project = "golang/go".parse().unwrap();
        assert_eq!(
            search_text(&project, r#"author:rsc "hello""#),
            r#"type:issue state:open repo:golang/go author:rsc "hello""#
        );
    }
}
