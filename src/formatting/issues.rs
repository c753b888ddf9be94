use std::fmt::Write;

use colored::*;

use crate::error::IssueResult;
use crate::models::{Issue, IssueJson, Milestone, Project};
use super::utils::format_time;

/// Order of issue lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueOrder {
    /// By title, then increasing number.
    Title,
    /// By decreasing number.
    Number,
}

impl IssueOrder {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "title" => Some(IssueOrder::Title),
            "number" => Some(IssueOrder::Number),
            _ => None,
        }
    }
}

pub fn sort_issues(issues: &mut [Issue], order: IssueOrder) {
    match order {
        IssueOrder::Title => issues.sort_by(|a, b| a.title.cmp(&b.title).then(a.number.cmp(&b.number))),
        IssueOrder::Number => issues.sort_by(|a, b| b.number.cmp(&a.number)),
    }
}

/// One `number<TAB>title` line per issue.
pub fn format_issue_lines<'a, I>(issues: I) -> String
where
    I: IntoIterator<Item = &'a Issue>,
{
    let mut out = String::new();
    for issue in issues {
        let _ = writeln!(out, "{}\t{}", issue.number, issue.title);
    }
    out
}

/// Metadata header of the single-issue view, through the `Reported by` line.
pub fn format_issue_header(issue: &Issue) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Title: {}", issue.title);
    let _ = writeln!(out, "State: {}", issue.state);
    let _ = writeln!(out, "Assignee: {}", issue.assignee.as_deref().unwrap_or(""));
    if issue.closed_at.is_some() {
        let _ = writeln!(out, "Closed: {}", format_time(issue.closed_at));
    }
    let _ = writeln!(out, "Labels: {}", issue.labels.join(" "));
    let _ = writeln!(out, "Milestone: {}", issue.milestone.as_deref().unwrap_or(""));
    let _ = writeln!(out, "URL: {}", issue.html_url);
    let _ = writeln!(out, "\nReported by {} ({})", issue.reporter, format_time(issue.created_at));
    out
}

/// `due-date<TAB>title<TAB>open-issues` per milestone.
pub fn format_milestones(milestones: &[Milestone]) -> String {
    let mut out = String::new();
    for milestone in milestones {
        let due = milestone
            .due_on
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        let _ = writeln!(out, "{}\t{}\t{}", due, milestone.title, milestone.open_issues);
    }
    out
}

pub fn issues_to_json(issues: &[Issue], project: &Project) -> IssueResult<String> {
    let json: Vec<IssueJson> = issues
        .iter()
        .map(|issue| IssueJson::from_issue(issue, project))
        .collect();
    Ok(serde_json::to_string_pretty(&json)?)
}

pub fn issue_to_json(issue: &Issue, project: &Project) -> IssueResult<String> {
    Ok(serde_json::to_string_pretty(&IssueJson::from_issue(issue, project))?)
}

pub fn print_issues(issues: &[Issue], project: &Project, format: &str) -> IssueResult<()> {
    match format {
        "json" => println!("{}", issues_to_json(issues, project)?),
        _ => {
            if issues.is_empty() {
                eprintln!("{}", "No issues found.".dimmed());
                return Ok(());
            }
            print!("{}", format_issue_lines(issues));
        }
    }
    Ok(())
}
