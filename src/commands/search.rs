use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::error::{IssueError, IssueResult};
use crate::fetch::search_issues;
use crate::formatting::{print_issues, sort_issues, IssueOrder};
use crate::logging::log_info;

pub(crate) fn joined_query(matches: &ArgMatches, name: &str) -> String {
    matches
        .get_many::<String>(name)
        .map(|values| values.map(String::as_str).collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

pub async fn handle_search(context: &mut CliContext, matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_search_impl(context, matches).await.map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_search_impl(context: &mut CliContext, matches: &ArgMatches) -> IssueResult<()> {
    let query = joined_query(matches, "query");
    if query.trim().is_empty() {
        return Err(IssueError::InvalidInput("No search query provided".to_string()));
    }

    let sort = matches.get_one::<String>("sort").map(String::as_str).unwrap_or("title");
    let order = IssueOrder::parse(sort)
        .ok_or_else(|| IssueError::InvalidInput(format!("unknown sort order {:?}", sort)))?;

    let client = context.client()?;
    let cache = context.cache();
    log_info(&format!("search {:?} in {}", query, context.project()));

    let (mut issues, error) = search_issues(client.as_ref(), &cache, context.project(), &query)
        .await
        .into_parts();

    sort_issues(&mut issues, order);
    let format = if context.json() { "json" } else { "table" };
    print_issues(&issues, context.project(), format)?;

    // Whatever was listed before the failure has been printed; the run still fails.
    match error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
