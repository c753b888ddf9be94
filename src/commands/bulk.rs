use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::error::{IssueError, IssueResult};
use crate::fetch::search_issues;
use crate::formatting::{format_bulk, issues_to_json, sort_issues, IssueOrder};
use crate::logging::log_info;
use crate::models::{parse_issue_number, Issue};

use super::search::joined_query;
use super::warn_partial;

/// Issue numbers named on the command line, split on commas.
///
/// `None` unless every argument is a number, in which case the arguments are
/// a query instead.
fn parse_issue_ids(matches: &ArgMatches) -> Option<Vec<u64>> {
    let mut ids = Vec::new();

    for value in matches.get_many::<String>("items")? {
        for id in value.split(',') {
            let trimmed = id.trim();
            if !trimmed.is_empty() {
                ids.push(parse_issue_number(trimmed)?);
            }
        }
    }

    if ids.is_empty() {
        None
    } else {
        Some(ids)
    }
}

pub async fn handle_bulk(context: &mut CliContext, matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_bulk_impl(context, matches).await.map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_bulk_impl(context: &mut CliContext, matches: &ArgMatches) -> IssueResult<()> {
    let client = context.client()?;
    let cache = context.cache();

    let issues: Vec<Issue> = match parse_issue_ids(matches) {
        Some(ids) => {
            log_info(&format!("bulk read of {} issues", ids.len()));
            let (slots, error) = cache.bulk_read(client.as_ref(), &ids).await.into_parts();
            if let Some(e) = error {
                warn_partial("some issues could not be read", &e);
            }
            slots.into_iter().flatten().map(|issue| (*issue).clone()).collect()
        }
        None => {
            let query = joined_query(matches, "items");
            if query.trim().is_empty() {
                return Err(IssueError::InvalidInput("No issues or query provided".to_string()));
            }
            log_info(&format!("bulk search {:?}", query));
            let (mut issues, error) = search_issues(client.as_ref(), &cache, context.project(), &query)
                .await
                .into_parts();
            if let Some(e) = error {
                warn_partial("search incomplete", &e);
            }
            sort_issues(&mut issues, IssueOrder::Title);
            issues
        }
    };

    if issues.is_empty() {
        return Err(IssueError::InvalidInput("no issues selected".to_string()));
    }

    if context.json() {
        println!("{}", issues_to_json(&issues, context.project())?);
        return Ok(());
    }

    let selected: Vec<&Issue> = issues.iter().collect();
    print!("{}", format_bulk(&selected));
    Ok(())
}
