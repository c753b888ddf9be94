use std::collections::BTreeSet;
use std::fmt::Write;

use crate::models::Issue;
use super::issues::format_issue_lines;

/// Returns the value shared by every issue, or empty if they disagree.
fn shared<'a, F>(issues: &[&'a Issue], field: F) -> &'a str
where
    F: Fn(&'a Issue) -> &'a str,
{
    let mut values = issues.iter().map(|issue| field(*issue));
    match values.next() {
        Some(first) if values.all(|v| v == first) => first,
        _ => "",
    }
}

/// Labels carried by every issue, sorted.
fn common_labels(issues: &[&Issue]) -> Vec<String> {
    let mut iter = issues.iter();
    let mut common: BTreeSet<&str> = match iter.next() {
        Some(first) => first.labels.iter().map(String::as_str).collect(),
        None => return Vec::new(),
    };
    for issue in iter {
        common.retain(|label| issue.labels.iter().any(|l| l == label));
    }
    common.into_iter().map(str::to_string).collect()
}

/// Header showing only the metadata shared by all `issues`.
pub fn format_bulk_header(issues: &[&Issue]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "State: {}", shared(issues, |i| i.state.as_str()));
    let _ = writeln!(out, "Assignee: {}", shared(issues, |i| i.assignee.as_deref().unwrap_or("")));
    let _ = writeln!(out, "Labels: {}", common_labels(issues).join(" "));
    let _ = writeln!(out, "Milestone: {}", shared(issues, |i| i.milestone.as_deref().unwrap_or("")));
    out
}

/// Bulk edit view: the shared header, a blank line, then one line per issue.
pub fn format_bulk(issues: &[&Issue]) -> String {
    format!(
        "{}\n{}",
        format_bulk_header(issues),
        format_issue_lines(issues.iter().copied())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(number: u64, state: &str, labels: &[&str], milestone: Option<&str>) -> Issue {
        Issue {
            number,
            title: format!("issue {}", number),
            state: state.to_string(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
            milestone: milestone.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_header_shows_only_shared_metadata() {
        let a = issue(10219, "open", &["NeedsFix", "release-blocker"], Some("Go1.4.3"));
        let b = Issue {
            assignee: Some("rsc".to_string()),
            ..issue(9711, "open", &["release-blocker"], Some("Go1.4.3"))
        };

        let header = format_bulk_header(&[&a, &b]);
        assert_eq!(
            header,
            "State: open\nAssignee: \nLabels: release-blocker\nMilestone: Go1.4.3\n"
        );
    }

    #[test]
    fn test_bulk_view_lists_issues_after_header() {
        let a = issue(9576, "closed", &[], None);
        let view = format_bulk(&[&a]);
        assert!(view.ends_with("Milestone: \n\n9576\tissue 9576\n"));
    }

    #[test]
    fn test_empty_selection() {
        assert_eq!(format_bulk_header(&[]), "State: \nAssignee: \nLabels: \nMilestone: \n");
    }
}
